// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC Compliance Rules
//!
//! Residential building-code checks over the spaces of a building model.
//!
//! ## Overview
//!
//! - **Dwelling area**: total useful area against a minimum
//! - **Living-area height**: living rooms, bedrooms and hallways
//! - **Service-space height**: bathrooms, kitchens and hallways (strict and lenient)
//! - **Living-room compliance**: minimum area and a 2.40 m square clearance
//! - **Bedroom occupancy**: occupants per bedroom, with a studio fallback
//!
//! Each rule renders two report shapes from one assessment: per-space
//! [`CheckResult`] records and a single [`ToolSummary`]. Rules are selected
//! by name through the [`CheckRegistry`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ifc_compliance_model::SnapshotLoader;
//! use ifc_compliance_rules::{CheckParams, CheckRegistry};
//!
//! let registry = CheckRegistry::with_default_checks();
//! let params = CheckParams::new().with("min_height", 2.2);
//! let results = registry.evaluate_path(
//!     &SnapshotLoader::new(),
//!     "duplex.json".as_ref(),
//!     "service_spaces_min_height",
//!     &params,
//! )?;
//! for r in &results {
//!     println!("[{}] {}: {}", r.check_status, r.element_name, r.actual_value);
//! }
//! ```

pub mod classify;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod registry;
pub mod report;
pub mod rules;

pub use classify::{classify, roles, KeywordSet, SpaceRole};
pub use config::{RunConfig, DEFAULT_CHECKS};
pub use descriptor::{CheckParams, ParameterKind, ParameterSpec, RuleDescriptor, MODEL_PATH_PARAM};
pub use error::{Result, RuleError};
pub use registry::{CheckRegistry, ComplianceCheck, RuleRun, RunReport};
pub use report::{CheckResult, CheckStatus, LabelMap, Tally, ToolSummary};
pub use rules::*;
