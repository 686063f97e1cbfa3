// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits for model loading
//!
//! These traits define the boundary between the compliance engine and the
//! collaborator that parses and triangulates building models.

use crate::{ModelMetadata, Result, Space, SpatialNodeType};
use std::path::Path;
use std::sync::Arc;

/// Loading interface - entry point for opening a building model
///
/// # Example
///
/// ```ignore
/// use ifc_compliance_model::{ModelLoader, BuildingModel};
///
/// let loader: Box<dyn ModelLoader> = get_loader();
/// let model = loader.open("arc.json".as_ref())?;
/// println!("{} spaces", model.spaces().len());
/// ```
pub trait ModelLoader: Send + Sync {
    /// Load a model from already-read content
    fn load_str(&self, content: &str) -> Result<Arc<dyn BuildingModel>>;

    /// Open a model from the filesystem
    fn open(&self, path: &Path) -> Result<Arc<dyn BuildingModel>> {
        let content = std::fs::read_to_string(path)?;
        self.load_str(&content)
    }
}

/// Read-only access to a loaded building model
///
/// The model is treated as an immutable snapshot for the duration of an
/// evaluation pass. It is `Send + Sync` so measurements can run on worker
/// threads.
pub trait BuildingModel: Send + Sync {
    /// All spatial zones in the model's native order
    fn spaces(&self) -> &[Space];

    /// Zones of one spatial kind, in native order
    fn spaces_of_kind(&self, kind: SpatialNodeType) -> Vec<&Space> {
        self.spaces().iter().filter(|s| s.kind == kind).collect()
    }

    /// File metadata (schema version, originating system, etc.)
    fn metadata(&self) -> &ModelMetadata;
}
