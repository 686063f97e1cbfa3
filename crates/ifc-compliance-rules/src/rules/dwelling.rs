// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimum total dwelling area
//!
//! Every space counts toward the dwelling total; there is no label filter.
//! The verdict is a single aggregate one: every per-space record carries the
//! status of the total, and on failure the same comment.

use crate::descriptor::{CheckParams, ParameterSpec, RuleDescriptor};
use crate::registry::ComplianceCheck;
use crate::report::{square_meters, CheckResult, CheckStatus, LabelMap, ToolSummary};
use crate::Result;
use ifc_compliance_geometry::{measure_areas, MeasuredSpace, MeasurementOptions};
use ifc_compliance_model::{BuildingModel, SpatialNodeType};

/// Registry name of the rule
pub const NAME: &str = "dwelling_area";
/// Parameter holding the minimum total area
pub const MIN_AREA: &str = "min_area";
pub const DEFAULT_MIN_AREA: f64 = 36.0;
const CONTEXT: &str = "dwelling area check";

/// Measured spaces and their total
#[derive(Debug)]
pub struct DwellingAreaAssessment<'a> {
    /// Spaces with their batch-measured areas, in model order
    pub rooms: Vec<MeasuredSpace<'a>>,
    pub total_area: f64,
    pub min_area: f64,
}

impl<'a> DwellingAreaAssessment<'a> {
    /// Measure every space, then fold the total
    pub fn assess(
        model: &'a dyn BuildingModel,
        min_area: f64,
        options: MeasurementOptions,
    ) -> Self {
        let spaces = model.spaces_of_kind(SpatialNodeType::Space);
        let areas = measure_areas(&spaces, options);
        let total_area = areas.iter().sum();
        log::debug!(
            "dwelling area: {} spaces, total {:.2} m² (min {:.2} m²)",
            spaces.len(),
            total_area,
            min_area
        );
        Self {
            rooms: spaces
                .into_iter()
                .zip(areas)
                .map(|(space, area)| MeasuredSpace::with_area(space, area))
                .collect(),
            total_area,
            min_area,
        }
    }

    /// Aggregate verdict shared by every record
    pub fn status(&self) -> CheckStatus {
        CheckStatus::from_bool(self.total_area >= self.min_area)
    }

    /// One record per space, all carrying the aggregate verdict
    ///
    /// An empty model yields no records.
    pub fn check_results(&self) -> Vec<CheckResult> {
        let status = self.status();
        let comment = (status == CheckStatus::Fail).then(|| {
            format!(
                "Total dwelling area {:.2} m² is below required {:.2} m²",
                self.total_area, self.min_area
            )
        });
        self.rooms
            .iter()
            .map(|room| {
                CheckResult::space(
                    room.space(),
                    CONTEXT,
                    status,
                    square_meters(room.area()),
                    square_meters(self.min_area),
                )
                .with_comment(comment.clone())
            })
            .collect()
    }

    /// Verdict with the total and a per-room area breakdown
    pub fn summary(&self) -> ToolSummary {
        let status = self.status();
        let op = if status == CheckStatus::Pass { ">=" } else { "<" };
        let mut room_areas = LabelMap::new();
        for room in &self.rooms {
            room_areas.insert(room.label(), room.area());
        }
        ToolSummary::new(
            status,
            format!(
                "Total useful area {:.2} m² {} {:.2} m²",
                self.total_area, op, self.min_area
            ),
        )
        .with_total_area(self.total_area)
        .with_room_areas(room_areas)
    }
}

/// Dwelling area rule
#[derive(Clone, Copy, Debug, Default)]
pub struct DwellingArea {
    options: MeasurementOptions,
}

impl DwellingArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule measuring with explicit batch options
    pub fn with_options(options: MeasurementOptions) -> Self {
        Self { options }
    }

    fn assess<'a>(
        &self,
        model: &'a dyn BuildingModel,
        params: &CheckParams,
    ) -> Result<DwellingAreaAssessment<'a>> {
        let min_area = params.number(&self.descriptor(), MIN_AREA)?;
        Ok(DwellingAreaAssessment::assess(model, min_area, self.options))
    }
}

impl ComplianceCheck for DwellingArea {
    fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor::new(
            NAME,
            "Checks whether the total useful area of all spaces in the dwelling reaches a minimum.",
        )
        .with_parameter(ParameterSpec::threshold(
            MIN_AREA,
            "Minimum total dwelling area in m².",
            DEFAULT_MIN_AREA,
        ))
    }

    fn check(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<Vec<CheckResult>> {
        Ok(self.assess(model, params)?.check_results())
    }

    fn summarize(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<ToolSummary> {
        Ok(self.assess(model, params)?.summary())
    }
}

/// Per-space records for the dwelling area rule
pub fn check_dwelling_area(model: &dyn BuildingModel, min_area: f64) -> Vec<CheckResult> {
    DwellingAreaAssessment::assess(model, min_area, MeasurementOptions::default()).check_results()
}

/// Summary for the dwelling area rule
pub fn dwelling_area_check(model: &dyn BuildingModel, min_area: f64) -> ToolSummary {
    DwellingAreaAssessment::assess(model, min_area, MeasurementOptions::default()).summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{model, room};
    use ifc_compliance_model::{Space, SpatialNodeType};

    fn two_rooms() -> ifc_compliance_model::SnapshotModel {
        model(vec![
            room("a", "Living Room", 20.0, 2.6),
            room("b", "Bedroom", 20.0, 2.6),
        ])
    }

    #[test]
    fn test_total_meets_minimum() {
        let results = check_dwelling_area(&two_rooms(), 36.0);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.check_status == CheckStatus::Pass));
        assert!(results.iter().all(|r| r.comment.is_none()));
        assert_eq!(results[0].actual_value, "20.00 m²");
        assert_eq!(results[0].required_value, "36.00 m²");
        assert_eq!(results[0].element_name_long, "Living Room (dwelling area check)");
    }

    #[test]
    fn test_total_below_minimum_fails_every_record() {
        let results = check_dwelling_area(&two_rooms(), 45.0);
        assert_eq!(results.len(), 2);
        let expected = "Total dwelling area 40.00 m² is below required 45.00 m²";
        for r in &results {
            assert_eq!(r.check_status, CheckStatus::Fail);
            assert_eq!(r.comment.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_empty_model_has_no_records() {
        assert!(check_dwelling_area(&model(vec![]), 36.0).is_empty());
    }

    #[test]
    fn test_spaces_without_geometry_count_as_zero() {
        let m = model(vec![room("a", "Studio", 30.0, 2.5), Space::new("b")]);
        let summary = dwelling_area_check(&m, 36.0);
        assert_eq!(summary.result, CheckStatus::Fail);
        assert_eq!(summary.total_area, Some(30.0));
        assert_eq!(summary.reason, "Total useful area 30.00 m² < 36.00 m²");
        let areas = summary.room_areas.unwrap();
        assert_eq!(areas.get("b"), Some(&0.0));
    }

    #[test]
    fn test_only_spaces_count() {
        let m = model(vec![
            room("a", "Living Room", 20.0, 2.6),
            room("level", "Level 1", 500.0, 3.0).with_kind(SpatialNodeType::Storey),
            room("zone", "Apartment A", 80.0, 3.0).with_kind(SpatialNodeType::Zone),
        ]);
        let results = check_dwelling_area(&m, 36.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].element_id, "a");
        assert!(!results[0].is_pass());
        assert_eq!(dwelling_area_check(&m, 36.0).total_area, Some(20.0));
    }

    #[test]
    fn test_summary_and_records_agree() {
        let m = two_rooms();
        let assessment = DwellingAreaAssessment::assess(&m, 36.0, MeasurementOptions::sequential());
        let summary = assessment.summary();
        assert_eq!(summary.result, CheckStatus::Pass);
        assert_eq!(summary.reason, "Total useful area 40.00 m² >= 36.00 m²");
        assert!(assessment
            .check_results()
            .iter()
            .all(|r| r.check_status == summary.result));
    }

    #[test]
    fn test_min_area_parameter() {
        let rule = DwellingArea::new();
        let params = CheckParams::new().with(MIN_AREA, 45.0);
        let results = rule.check(&two_rooms(), &params).unwrap();
        assert!(results.iter().all(|r| !r.is_pass()));

        let err = rule
            .check(&two_rooms(), &CheckParams::new().with("min_height", 2.0))
            .unwrap_err();
        assert!(err.to_string().contains("min_height"));
    }

    #[test]
    fn test_idempotent() {
        let m = two_rooms();
        assert_eq!(check_dwelling_area(&m, 45.0), check_dwelling_area(&m, 45.0));
    }
}
