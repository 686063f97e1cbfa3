// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report records
//!
//! Every rule renders its assessment in two shapes:
//!
//! - a list of [`CheckResult`] records, one per evaluated space (the
//!   "checker" convention consumed by result aggregators)
//! - a single [`ToolSummary`] with an overall verdict, a reason and
//!   label-keyed measurement maps (the "tool" convention used by external
//!   callers)

use ifc_compliance_model::{Space, SpatialNodeType};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Verdict of a check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    /// `Pass` when `ok` holds
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }

    /// Lowercase name as used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one evaluated element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub element_id: String,
    pub element_type: String,
    pub element_name: String,
    /// Element name followed by the rule context, e.g. `"Bathroom (service space)"`
    pub element_name_long: String,
    pub check_status: CheckStatus,
    pub actual_value: String,
    pub required_value: String,
    pub comment: Option<String>,
    /// Reserved
    pub log: Option<String>,
}

impl CheckResult {
    /// Record for one space
    pub fn space(
        space: &Space,
        context: &str,
        status: CheckStatus,
        actual_value: impl Into<String>,
        required_value: impl Into<String>,
    ) -> Self {
        let label = space.label();
        Self {
            element_id: space.id.clone(),
            element_type: SpatialNodeType::Space.display_name().to_string(),
            element_name: label.to_string(),
            element_name_long: format!("{} ({})", label, context),
            check_status: status,
            actual_value: actual_value.into(),
            required_value: required_value.into(),
            comment: None,
            log: None,
        }
    }

    /// Record standing for a rule that found nothing it could evaluate
    pub fn aggregate_failure(
        context: &str,
        required_value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let name = "No matching spaces";
        Self {
            element_id: String::new(),
            element_type: SpatialNodeType::Space.display_name().to_string(),
            element_name: name.to_string(),
            element_name_long: format!("{} ({})", name, context),
            check_status: CheckStatus::Fail,
            actual_value: "0 spaces".to_string(),
            required_value: required_value.into(),
            comment: Some(reason.into()),
            log: None,
        }
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// Check if this record passed
    pub fn is_pass(&self) -> bool {
        self.check_status == CheckStatus::Pass
    }
}

/// Pass/fail counts over a set of records
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    /// Count the records
    pub fn of(results: &[CheckResult]) -> Self {
        let passed = results.iter().filter(|r| r.is_pass()).count();
        Self {
            passed,
            failed: results.len() - passed,
        }
    }
}

/// Insertion-ordered map keyed by space label
///
/// Mirrors a dictionary filled in model order: inserting an existing label
/// keeps its position and replaces the value.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> LabelMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the value for `label`
    pub fn insert(&mut self, label: impl Into<String>, value: V) {
        let label = label.into();
        match self.entries.iter_mut().find(|(k, _)| *k == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    /// Value stored for `label`
    pub fn get(&self, label: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> Default for LabelMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for LabelMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Single-object verdict of a rule
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolSummary {
    pub result: CheckStatus,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_allowed_people: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_areas: Option<LabelMap<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_heights: Option<LabelMap<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<LabelMap<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_spaces: Option<Vec<String>>,
}

impl ToolSummary {
    /// Summary with a verdict and reason only
    pub fn new(result: CheckStatus, reason: impl Into<String>) -> Self {
        Self {
            result,
            reason: reason.into(),
            total_area: None,
            total_allowed_people: None,
            room_areas: None,
            room_heights: None,
            occupancy: None,
            checked_spaces: None,
        }
    }

    /// Set the dwelling total area in m²
    pub fn with_total_area(mut self, total: f64) -> Self {
        self.total_area = Some(total);
        self
    }

    /// Set the total number of occupants allowed
    pub fn with_total_allowed_people(mut self, total: u32) -> Self {
        self.total_allowed_people = Some(total);
        self
    }

    /// Set the per-room areas
    pub fn with_room_areas(mut self, areas: LabelMap<f64>) -> Self {
        self.room_areas = Some(areas);
        self
    }

    /// Set the per-room heights
    pub fn with_room_heights(mut self, heights: LabelMap<f64>) -> Self {
        self.room_heights = Some(heights);
        self
    }

    /// Set the per-room occupancy
    pub fn with_occupancy(mut self, occupancy: LabelMap<u32>) -> Self {
        self.occupancy = Some(occupancy);
        self
    }

    /// Set the labels of the spaces that were checked
    pub fn with_checked_spaces(mut self, labels: Vec<String>) -> Self {
        self.checked_spaces = Some(labels);
        self
    }

    /// Check if the summary passed
    pub fn is_pass(&self) -> bool {
        self.result == CheckStatus::Pass
    }
}

/// `"2.50 m"`
pub(crate) fn meters(value: f64) -> String {
    format!("{:.2} m", value)
}

/// `"12.00 m²"`
pub(crate) fn square_meters(value: f64) -> String {
    format!("{:.2} m²", value)
}
