// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimum clear height of bathrooms, kitchens and hallways
//!
//! Two variants differ only in what an empty selection means:
//! [`ServiceMode::Lenient`] reports nothing, [`ServiceMode::Strict`] reports
//! an explicit failure.

use super::{height_below, height_comment, spaces_matching};
use crate::classify::KeywordSet;
use crate::descriptor::{CheckParams, ParameterSpec, RuleDescriptor};
use crate::registry::ComplianceCheck;
use crate::report::{meters, CheckResult, CheckStatus, LabelMap, ToolSummary};
use crate::Result;
use ifc_compliance_geometry::MeasuredSpace;
use ifc_compliance_model::BuildingModel;
use serde::{Deserialize, Serialize};

/// Registry name of the lenient variant
pub const NAME: &str = "service_spaces_min_height";
/// Registry name of the strict variant
pub const STRICT_NAME: &str = "service_spaces_min_height_strict";
/// Parameter holding the minimum clear height in meters
pub const MIN_HEIGHT: &str = "min_height";
pub const DEFAULT_MIN_HEIGHT: f64 = 2.20;
const CONTEXT: &str = "service space";
const NO_MATCH_REASON: &str =
    "no service spaces matched (bathrooms/kitchens/hallways), nothing checked";

/// Bathrooms, kitchens and hallways, in English and Spanish
pub const SERVICE_KEYWORDS: KeywordSet = KeywordSet::new(
    "service",
    &[
        "bath", "bathroom", "baño", "bano", "wc", "toilet", "kitchen", "cocina", "hall",
        "hallway", "corridor", "pasillo",
    ],
);

/// Meaning of an empty selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceMode {
    /// No matching spaces is an explicit failure
    Strict,
    /// No matching spaces yields no records
    #[default]
    Lenient,
}

/// Selected service spaces
#[derive(Debug)]
pub struct ServiceHeightAssessment<'a> {
    pub rooms: Vec<MeasuredSpace<'a>>,
    pub min_height: f64,
    pub mode: ServiceMode,
}

impl<'a> ServiceHeightAssessment<'a> {
    /// Select bathrooms, kitchens and hallways in model order
    pub fn assess(model: &'a dyn BuildingModel, min_height: f64, mode: ServiceMode) -> Self {
        let rooms = spaces_matching(model, &SERVICE_KEYWORDS)
            .into_iter()
            .map(MeasuredSpace::new)
            .collect();
        Self {
            rooms,
            min_height,
            mode,
        }
    }

    /// One record per selected space
    ///
    /// With nothing selected, strict mode emits a single failing record and
    /// lenient mode emits none.
    pub fn check_results(&self) -> Vec<CheckResult> {
        if self.rooms.is_empty() {
            return match self.mode {
                ServiceMode::Strict => vec![CheckResult::aggregate_failure(
                    CONTEXT,
                    meters(self.min_height),
                    NO_MATCH_REASON,
                )],
                ServiceMode::Lenient => Vec::new(),
            };
        }

        self.rooms
            .iter()
            .map(|room| {
                let height = room.height();
                let ok = height >= self.min_height;
                log::debug!("{}: height {:.2} m, ok={}", room.label(), height, ok);
                CheckResult::space(
                    room.space(),
                    CONTEXT,
                    CheckStatus::from_bool(ok),
                    meters(height),
                    meters(self.min_height),
                )
                .with_comment((!ok).then(|| height_comment(height, self.min_height)))
            })
            .collect()
    }

    /// Walks the rooms in order and stops at the first one below the minimum
    pub fn summary(&self) -> ToolSummary {
        let mut room_heights = LabelMap::new();
        let mut checked = Vec::new();

        if self.rooms.is_empty() {
            let summary = match self.mode {
                ServiceMode::Strict => ToolSummary::new(CheckStatus::Fail, NO_MATCH_REASON),
                ServiceMode::Lenient => ToolSummary::new(CheckStatus::Pass, "nothing to check"),
            };
            return summary
                .with_room_heights(room_heights)
                .with_checked_spaces(checked);
        }

        for room in &self.rooms {
            let height = room.height();
            room_heights.insert(room.label(), height);
            checked.push(room.label().to_string());
            if height < self.min_height {
                return ToolSummary::new(
                    CheckStatus::Fail,
                    height_below(room.label(), self.min_height),
                )
                .with_room_heights(room_heights)
                .with_checked_spaces(checked);
            }
        }

        ToolSummary::new(
            CheckStatus::Pass,
            format!(
                "All checked bathrooms/kitchens/hallways meet minimum height {:.2}m",
                self.min_height
            ),
        )
        .with_room_heights(room_heights)
        .with_checked_spaces(checked)
    }
}

/// Service-space height rule
#[derive(Clone, Copy, Debug, Default)]
pub struct ServiceSpaceHeight {
    mode: ServiceMode,
}

impl ServiceSpaceHeight {
    pub fn new(mode: ServiceMode) -> Self {
        Self { mode }
    }

    /// Variant that fails when no service space is found
    pub fn strict() -> Self {
        Self::new(ServiceMode::Strict)
    }

    /// Variant that reports nothing when no service space is found
    pub fn lenient() -> Self {
        Self::new(ServiceMode::Lenient)
    }

    /// Empty-selection behavior of this rule
    pub fn mode(&self) -> ServiceMode {
        self.mode
    }

    fn assess<'a>(
        &self,
        model: &'a dyn BuildingModel,
        params: &CheckParams,
    ) -> Result<ServiceHeightAssessment<'a>> {
        let min_height = params.number(&self.descriptor(), MIN_HEIGHT)?;
        Ok(ServiceHeightAssessment::assess(model, min_height, self.mode))
    }
}

impl ComplianceCheck for ServiceSpaceHeight {
    fn descriptor(&self) -> RuleDescriptor {
        let (name, description) = match self.mode {
            ServiceMode::Lenient => (
                NAME,
                "Checks that bathrooms, kitchens and hallways reach a minimum clear height. \
                 Passes when no such spaces exist.",
            ),
            ServiceMode::Strict => (
                STRICT_NAME,
                "Checks that bathrooms, kitchens and hallways reach a minimum clear height. \
                 Fails when no such spaces exist.",
            ),
        };
        RuleDescriptor::new(name, description).with_parameter(ParameterSpec::threshold(
            MIN_HEIGHT,
            "Minimum clear height in meters.",
            DEFAULT_MIN_HEIGHT,
        ))
    }

    fn check(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<Vec<CheckResult>> {
        Ok(self.assess(model, params)?.check_results())
    }

    fn summarize(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<ToolSummary> {
        Ok(self.assess(model, params)?.summary())
    }
}

/// Per-space records; no matching spaces yields no records
pub fn check_service_spaces_min_height(
    model: &dyn BuildingModel,
    min_height: f64,
) -> Vec<CheckResult> {
    ServiceHeightAssessment::assess(model, min_height, ServiceMode::Lenient).check_results()
}

/// Summary; no matching spaces is a failure
pub fn service_spaces_min_height_check(model: &dyn BuildingModel, min_height: f64) -> ToolSummary {
    ServiceHeightAssessment::assess(model, min_height, ServiceMode::Strict).summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{model, tall};

    #[test]
    fn test_low_bathroom_fails() {
        let m = model(vec![tall("b", "Bathroom", 2.0)]);
        let results = check_service_spaces_min_height(&m, 2.20);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].check_status, CheckStatus::Fail);
        assert_eq!(
            results[0].comment.as_deref(),
            Some("Height 2.00m below required 2.20m")
        );
        assert_eq!(results[0].element_name_long, "Bathroom (service space)");
    }

    #[test]
    fn test_bathroom_passes() {
        let m = model(vec![tall("b", "Bathroom", 2.3)]);
        let results = check_service_spaces_min_height(&m, 2.20);
        assert!(results[0].is_pass());
        assert!(results[0].comment.is_none());
        assert_eq!(results[0].actual_value, "2.30 m");
    }

    #[test]
    fn test_spanish_labels() {
        let m = model(vec![
            tall("1", "Baño", 2.4),
            tall("2", "Cocina", 2.4),
            tall("3", "Pasillo", 2.4),
            tall("4", "Dormitorio", 2.4),
        ]);
        assert_eq!(check_service_spaces_min_height(&m, 2.2).len(), 3);
    }

    #[test]
    fn test_no_matches_lenient_vs_strict() {
        let m = model(vec![tall("1", "Bedroom", 2.5)]);
        assert!(check_service_spaces_min_height(&m, 2.2).is_empty());

        let strict = ServiceHeightAssessment::assess(&m, 2.2, ServiceMode::Strict);
        let records = strict.check_results();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].element_id, "");
        assert_eq!(records[0].element_name, "No matching spaces");
        assert_eq!(records[0].actual_value, "0 spaces");
        assert_eq!(records[0].comment.as_deref(), Some(NO_MATCH_REASON));

        let summary = service_spaces_min_height_check(&m, 2.2);
        assert!(!summary.is_pass());
        assert_eq!(summary.reason, NO_MATCH_REASON);
        assert_eq!(summary.checked_spaces, Some(vec![]));

        let lenient = ServiceHeightAssessment::assess(&m, 2.2, ServiceMode::Lenient).summary();
        assert!(lenient.is_pass());
        assert_eq!(lenient.reason, "nothing to check");
    }

    #[test]
    fn test_summary_stops_at_first_failure() {
        let m = model(vec![
            tall("1", "Kitchen", 2.5),
            tall("2", "WC", 2.1),
            tall("3", "Corridor", 2.0),
        ]);
        let summary = service_spaces_min_height_check(&m, 2.2);
        assert_eq!(summary.reason, "WC height below 2.20m");
        assert_eq!(
            summary.checked_spaces,
            Some(vec!["Kitchen".to_string(), "WC".to_string()])
        );
        assert_eq!(summary.room_heights.unwrap().len(), 2);
    }

    #[test]
    fn test_summary_pass() {
        let m = model(vec![tall("1", "Kitchen", 2.5), tall("2", "Bathroom", 2.3)]);
        let summary = service_spaces_min_height_check(&m, 2.2);
        assert!(summary.is_pass());
        assert_eq!(
            summary.reason,
            "All checked bathrooms/kitchens/hallways meet minimum height 2.20m"
        );
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(ServiceSpaceHeight::lenient().descriptor().name, NAME);
        assert_eq!(ServiceSpaceHeight::strict().descriptor().name, STRICT_NAME);
        assert_eq!(ServiceSpaceHeight::default().mode(), ServiceMode::Lenient);
    }

    #[test]
    fn test_idempotent() {
        let m = model(vec![tall("1", "Bathroom", 2.0), tall("2", "Hall", 2.4)]);
        assert_eq!(
            check_service_spaces_min_height(&m, 2.2),
            check_service_spaces_min_height(&m, 2.2)
        );
    }
}
