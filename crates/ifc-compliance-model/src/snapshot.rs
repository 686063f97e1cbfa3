// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON space snapshots
//!
//! A snapshot is the output of an upstream geometry pass: every space already
//! triangulated, with names and base quantities resolved.
//!
//! ```json
//! {
//!   "metadata": { "schema_version": "IFC4" },
//!   "spaces": [
//!     {
//!       "id": "0BTBFw6f90Nfh9rP1dlXr2",
//!       "name": "B.01",
//!       "long_name": "Bedroom",
//!       "mesh": { "positions": [0.0, 0.0, 0.0, ...], "indices": [0, 1, 2, ...] },
//!       "quantities": [
//!         { "name": "NetFloorArea", "value": 9.5, "quantity_type": "Area" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::{BuildingModel, ModelError, ModelLoader, ModelMetadata, Result, Space};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// In-memory model backed by a list of spaces
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotModel {
    /// File metadata
    #[serde(default)]
    pub metadata: ModelMetadata,
    /// Spaces in native order
    #[serde(default)]
    pub spaces: Vec<Space>,
}

impl SnapshotModel {
    /// Build a model from spaces, rejecting blank or duplicate identifiers
    pub fn new(spaces: Vec<Space>) -> Result<Self> {
        Self::with_metadata(ModelMetadata::default(), spaces)
    }

    /// Build a model with explicit metadata
    pub fn with_metadata(metadata: ModelMetadata, spaces: Vec<Space>) -> Result<Self> {
        let model = Self { metadata, spaces };
        model.validate()?;
        Ok(model)
    }

    /// Parse snapshot JSON
    pub fn from_json(content: &str) -> Result<Self> {
        let model: SnapshotModel = serde_json::from_str(content)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.spaces.len());
        for space in &self.spaces {
            if space.id.trim().is_empty() {
                return Err(ModelError::format("space without id"));
            }
            if !seen.insert(space.id.as_str()) {
                return Err(ModelError::duplicate_id(&space.id));
            }
        }
        Ok(())
    }
}

impl BuildingModel for SnapshotModel {
    fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

/// Loader for JSON space snapshots implementing [`ModelLoader`]
#[derive(Clone, Copy, Debug, Default)]
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }
}

impl ModelLoader for SnapshotLoader {
    fn load_str(&self, content: &str) -> Result<Arc<dyn BuildingModel>> {
        SnapshotModel::from_json(content).map(|m| Arc::new(m) as Arc<dyn BuildingModel>)
    }
}
