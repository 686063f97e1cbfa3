// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for space data representation
//!
//! This module defines the values a loader hands to the compliance engine.

use crate::{Quantity, QuantityType, SpatialNodeType};
use serde::{Deserialize, Serialize};

/// Name of the base quantity carrying a precomputed floor area
pub const NET_FLOOR_AREA: &str = "NetFloorArea";

/// Triangulated boundary of one space
///
/// Vertex coordinates are flattened `[x, y, z, x, y, z, ...]`; every three
/// consecutive indices form one triangle. Indices refer to vertices of this
/// mesh only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceMesh {
    /// Vertex positions as flattened [x, y, z, x, y, z, ...]
    pub positions: Vec<f64>,
    /// Triangle indices
    #[serde(default)]
    pub indices: Vec<u32>,
}

impl SpaceMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from flattened positions and triangle indices
    pub fn from_parts(positions: Vec<f64>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Number of complete vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of complete triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Coordinates of vertex `index`, or `None` if it is out of range or
    /// truncated
    pub fn vertex(&self, index: usize) -> Option<[f64; 3]> {
        let start = index.checked_mul(3)?;
        let xyz = self.positions.get(start..start.checked_add(3)?)?;
        Some([xyz[0], xyz[1], xyz[2]])
    }

    /// Iterate the Z coordinate of every complete vertex
    pub fn z_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.chunks_exact(3).map(|xyz| xyz[2])
    }
}

/// One spatial zone of a building model
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Stable external identifier (GlobalId), unique within a model
    pub id: String,
    /// Short name (IFC `Name`, often a room number)
    #[serde(default)]
    pub name: Option<String>,
    /// Descriptive name (IFC `LongName`)
    #[serde(default)]
    pub long_name: Option<String>,
    /// Spatial kind, `Space` unless the loader says otherwise
    #[serde(default)]
    pub kind: SpatialNodeType,
    /// Triangulated boundary, absent when the loader produced no geometry
    #[serde(default)]
    pub mesh: Option<SpaceMesh>,
    /// Base quantities attached by the source model
    #[serde(default)]
    pub quantities: Vec<Quantity>,
}

impl Space {
    /// Create a space with an identifier and no names or geometry
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the short name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the descriptive name
    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    /// Set the mesh
    pub fn with_mesh(mut self, mesh: SpaceMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Set the spatial kind
    pub fn with_kind(mut self, kind: SpatialNodeType) -> Self {
        self.kind = kind;
        self
    }

    /// Attach a `NetFloorArea` quantity
    pub fn with_net_floor_area(mut self, area: f64) -> Self {
        self.quantities
            .push(Quantity::area(NET_FLOOR_AREA, area));
        self
    }

    /// Display label: long name, then short name, then identifier
    ///
    /// Blank names are skipped. Falls back to `"Unnamed"` only when the
    /// identifier itself is blank, so the result is never empty.
    pub fn label(&self) -> &str {
        [self.long_name.as_deref(), self.name.as_deref(), Some(self.id.as_str())]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or("Unnamed")
    }

    /// Precomputed floor area, when the model carries a positive one
    pub fn authoritative_area(&self) -> Option<f64> {
        self.quantities
            .iter()
            .find(|q| q.name == NET_FLOOR_AREA && q.quantity_type == QuantityType::Area)
            .map(|q| q.value)
            .filter(|area| area.is_finite() && *area > 0.0)
    }
}

/// Model metadata reported by the loader
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// IFC schema version (e.g., "IFC2X3", "IFC4")
    #[serde(default)]
    pub schema_version: String,
    /// Originating system (CAD application)
    #[serde(default)]
    pub originating_system: Option<String>,
    /// File name from header
    #[serde(default)]
    pub file_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_fallback_chain() {
        let space = Space::new("2O2Fr$t4X7Zf8NOew3FLOH")
            .with_name("B.01")
            .with_long_name("Bedroom");
        assert_eq!(space.label(), "Bedroom");

        let space = Space::new("2O2Fr$t4X7Zf8NOew3FLOH").with_name("B.01");
        assert_eq!(space.label(), "B.01");

        let space = Space::new("2O2Fr$t4X7Zf8NOew3FLOH").with_long_name("  ");
        assert_eq!(space.label(), "2O2Fr$t4X7Zf8NOew3FLOH");

        assert_eq!(Space::new("").label(), "Unnamed");
    }

    #[test]
    fn test_authoritative_area() {
        let space = Space::new("a").with_net_floor_area(12.5);
        assert_eq!(space.authoritative_area(), Some(12.5));

        // Zero is treated as missing
        let space = Space::new("a").with_net_floor_area(0.0);
        assert_eq!(space.authoritative_area(), None);

        let mut space = Space::new("a");
        space.quantities.push(Quantity {
            quantity_type: QuantityType::Volume,
            ..Quantity::area(NET_FLOOR_AREA, 9.0)
        });
        assert_eq!(space.authoritative_area(), None);
    }

    #[test]
    fn test_mesh_vertex_access() {
        let mesh = SpaceMesh::from_parts(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![0, 1, 2]);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex(1), Some([3.0, 4.0, 5.0]));
        // Third vertex is truncated
        assert_eq!(mesh.vertex(2), None);
        assert_eq!(mesh.vertex(usize::MAX), None);
        assert_eq!(mesh.z_values().collect::<Vec<_>>(), vec![2.0, 5.0]);
    }
}
