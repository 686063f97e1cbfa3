// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch run configuration
//!
//! ```json
//! {
//!   "checks": ["dwelling_area", "service_spaces_min_height_strict"],
//!   "parameters": { "dwelling_area": { "min_area": 40.0 } },
//!   "measurement": { "parallel": false }
//! }
//! ```
//!
//! Every field is optional.

use crate::descriptor::CheckParams;
use crate::registry::CheckRegistry;
use crate::rules::{dwelling, living_height, living_room, occupancy, service_height};
use crate::{Result, RuleError};
use ifc_compliance_geometry::MeasurementOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Canonical catalogue, in reporting order
pub const DEFAULT_CHECKS: [&str; 5] = [
    dwelling::NAME,
    living_height::NAME,
    service_height::NAME,
    living_room::NAME,
    occupancy::NAME,
];

/// Which checks a batch run executes and with what parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Rule names in execution order
    pub checks: Vec<String>,
    /// Per-rule parameters, keyed by rule name
    pub parameters: BTreeMap<String, CheckParams>,
    pub measurement: MeasurementOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            checks: DEFAULT_CHECKS.iter().map(|s| s.to_string()).collect(),
            parameters: BTreeMap::new(),
            measurement: MeasurementOptions::default(),
        }
    }
}

impl RunConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| RuleError::config(e.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RuleError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Parameters configured for a rule, empty if none
    pub fn params_for(&self, name: &str) -> CheckParams {
        self.parameters.get(name).cloned().unwrap_or_default()
    }

    /// Default catalogue built with the configured measurement options
    pub fn registry(&self) -> CheckRegistry {
        CheckRegistry::with_default_checks_and_options(self.measurement)
    }
}
