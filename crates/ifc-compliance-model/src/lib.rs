// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC Compliance Model - Space abstractions shared by the compliance engine
//!
//! This crate defines the contract between the compliance engine and whatever
//! loads a building model. A loader turns a file into a [`BuildingModel`];
//! the model exposes its spatial zones as [`Space`] values, each carrying an
//! identifier, names, a triangulated [`SpaceMesh`] and optional base
//! quantities.
//!
//! # Architecture
//!
//! - [`ModelLoader`] - Entry point for opening a model from disk or a string
//! - [`BuildingModel`] - Read-only access to the spaces of a loaded model
//! - [`SnapshotLoader`] - Loader for pre-triangulated JSON space snapshots
//!
//! # Example
//!
//! ```ignore
//! use ifc_compliance_model::{ModelLoader, SnapshotLoader, SpatialNodeType};
//!
//! let model = SnapshotLoader::new().open("duplex.json".as_ref())?;
//! for space in model.spaces_of_kind(SpatialNodeType::Space) {
//!     println!("{} -> {}", space.id, space.label());
//! }
//! ```

pub mod error;
pub mod properties;
pub mod snapshot;
pub mod spatial;
pub mod traits;
pub mod types;

pub use error::*;
pub use properties::*;
pub use snapshot::*;
pub use spatial::*;
pub use traits::*;
pub use types::*;
