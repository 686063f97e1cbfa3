// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scalar measurements of a triangulated mesh
//!
//! Both measurements are engineering approximations:
//!
//! - **Area** is the total surface area of the mesh (Heron's formula per
//!   triangle), not a legal floor area.
//! - **Clear height** is the vertical extent of the mesh bounding box, not a
//!   ceiling-to-floor distance at a given plan location.

use crate::{Error, Result};
use ifc_compliance_model::SpaceMesh;
use nalgebra::{distance, Point3};

/// Area of one triangle from its three corners (Heron's formula)
///
/// The radicand is clamped at zero so that degenerate or numerically
/// collapsed triangles contribute 0.0 instead of NaN.
#[inline]
pub fn triangle_area(p0: &Point3<f64>, p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    let a = distance(p0, p1);
    let b = distance(p1, p2);
    let c = distance(p2, p0);
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

fn point(mesh: &SpaceMesh, index: u32) -> Result<Point3<f64>> {
    let [x, y, z] = mesh
        .vertex(index as usize)
        .ok_or_else(|| Error::index_out_of_range(index, mesh.vertex_count()))?;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(Error::NonFiniteVertex(index));
    }
    Ok(Point3::new(x, y, z))
}

/// Total surface area of a mesh, failing on malformed indices or vertices
pub fn try_surface_area(mesh: &SpaceMesh) -> Result<f64> {
    if mesh.indices.len() % 3 != 0 {
        return Err(Error::IncompleteTriangle(mesh.indices.len()));
    }

    let mut area = 0.0;
    for tri in mesh.indices.chunks_exact(3) {
        let p0 = point(mesh, tri[0])?;
        let p1 = point(mesh, tri[1])?;
        let p2 = point(mesh, tri[2])?;
        area += triangle_area(&p0, &p1, &p2);
    }
    Ok(area)
}

/// Total surface area of a mesh
///
/// Malformed meshes measure 0.0; the failure is logged and not propagated.
pub fn surface_area(mesh: &SpaceMesh) -> f64 {
    try_surface_area(mesh).unwrap_or_else(|err| {
        log::debug!("surface area fallback to 0.0: {}", err);
        0.0
    })
}

/// Vertical extent (max Z − min Z) of a mesh, failing on non-finite Z values
pub fn try_clear_height(mesh: &SpaceMesh) -> Result<f64> {
    let mut bounds: Option<(f64, f64)> = None;
    for (i, z) in mesh.z_values().enumerate() {
        if !z.is_finite() {
            return Err(Error::NonFiniteVertex(i as u32));
        }
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(z), max.max(z)),
            None => (z, z),
        });
    }
    Ok(bounds.map_or(0.0, |(min, max)| max - min))
}

/// Vertical extent (max Z − min Z) of a mesh
///
/// A mesh without vertices measures 0.0, as does a malformed one.
pub fn clear_height(mesh: &SpaceMesh) -> f64 {
    try_clear_height(mesh).unwrap_or_else(|err| {
        log::debug!("clear height fallback to 0.0: {}", err);
        0.0
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Closed axis-aligned box with one corner at `origin`
    pub(crate) fn box_mesh(origin: [f64; 3], size: [f64; 3]) -> SpaceMesh {
        let [x0, y0, z0] = origin;
        let [x1, y1, z1] = [x0 + size[0], y0 + size[1], z0 + size[2]];
        let positions = vec![
            x0, y0, z0, x1, y0, z0, x1, y1, z0, x0, y1, z0, // bottom
            x0, y0, z1, x1, y0, z1, x1, y1, z1, x0, y1, z1, // top
        ];
        let indices = vec![
            0, 2, 1, 0, 3, 2, // bottom
            4, 5, 6, 4, 6, 7, // top
            0, 1, 5, 0, 5, 4, // front
            2, 3, 7, 2, 7, 6, // back
            1, 2, 6, 1, 6, 5, // right
            3, 0, 4, 3, 4, 7, // left
        ];
        SpaceMesh::from_parts(positions, indices)
    }

    #[test]
    fn test_triangle_area() {
        let area = triangle_area(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(4.0, 0.0, 0.0),
            &Point3::new(0.0, 3.0, 0.0),
        );
        assert_relative_eq!(area, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_triangle_is_zero() {
        let area = triangle_area(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(2.0, 2.0, 2.0),
        );
        assert!(area >= 0.0);
        assert!(area < 1e-6);
        assert!(!area.is_nan());
    }

    #[test]
    fn test_box_surface_area() {
        let mesh = box_mesh([0.0, 0.0, 0.0], [2.0, 3.0, 2.5]);
        // 2 * (2*3 + 2*2.5 + 3*2.5)
        assert_relative_eq!(surface_area(&mesh), 37.0, epsilon = 1e-9);
    }

    #[test]
    fn test_surface_area_invariant_under_triangle_reordering() {
        let mesh = box_mesh([1.0, -2.0, 0.5], [4.0, 2.5, 2.7]);
        let mut triangles: Vec<&[u32]> = mesh.indices.chunks_exact(3).collect();
        triangles.reverse();
        triangles.swap(0, 5);
        let reordered = SpaceMesh::from_parts(mesh.positions.clone(), triangles.concat());

        assert_relative_eq!(
            surface_area(&mesh),
            surface_area(&reordered),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_triangles_is_zero_area() {
        let mesh = SpaceMesh::from_parts(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0], vec![]);
        assert_eq!(surface_area(&mesh), 0.0);
        assert_eq!(surface_area(&SpaceMesh::new()), 0.0);
    }

    #[test]
    fn test_malformed_mesh_is_zero_area() {
        let mut mesh = box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        mesh.indices.push(99);
        mesh.indices.push(0);
        mesh.indices.push(1);
        assert_eq!(
            try_surface_area(&mesh),
            Err(Error::index_out_of_range(99, 8))
        );
        assert_eq!(surface_area(&mesh), 0.0);

        let mut mesh = box_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        mesh.indices.pop();
        assert_eq!(try_surface_area(&mesh), Err(Error::IncompleteTriangle(35)));
        assert_eq!(surface_area(&mesh), 0.0);
    }

    #[test]
    fn test_clear_height() {
        let mesh = box_mesh([0.0, 0.0, 3.0], [4.0, 3.0, 2.7]);
        assert_relative_eq!(clear_height(&mesh), 2.7, epsilon = 1e-9);
    }

    #[test]
    fn test_clear_height_without_vertices() {
        assert_eq!(clear_height(&SpaceMesh::new()), 0.0);
    }

    #[test]
    fn test_clear_height_invariant_under_horizontal_translation() {
        let base = box_mesh([0.0, 0.0, 0.0], [4.0, 3.0, 2.5]);
        let moved = box_mesh([120.5, -37.25, 0.0], [4.0, 3.0, 2.5]);
        assert_relative_eq!(clear_height(&base), clear_height(&moved), epsilon = 1e-9);
    }

    #[test]
    fn test_clear_height_invariant_under_vertex_reordering() {
        let mesh = box_mesh([0.0, 0.0, 1.0], [4.0, 3.0, 2.5]);
        let mut vertices: Vec<&[f64]> = mesh.positions.chunks_exact(3).collect();
        vertices.reverse();
        let reordered = SpaceMesh::from_parts(vertices.concat(), vec![]);
        assert_relative_eq!(clear_height(&mesh), clear_height(&reordered), epsilon = 1e-9);
    }

    #[test]
    fn test_clear_height_non_finite_is_zero() {
        let mesh = SpaceMesh::from_parts(vec![0.0, 0.0, 0.0, 0.0, 0.0, f64::NAN], vec![]);
        assert_eq!(try_clear_height(&mesh), Err(Error::NonFiniteVertex(1)));
        assert_eq!(clear_height(&mesh), 0.0);
    }
}
