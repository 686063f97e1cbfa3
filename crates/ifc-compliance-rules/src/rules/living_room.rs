// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Living-room minimum area and clearance
//!
//! A living room needs 10 m², or 14 m² when it doubles as a kitchen, and
//! must fit a 2.40 m × 2.40 m square. The square test is approximated by
//! comparing the floor area with the square's area; no shape analysis is
//! done.

use crate::classify::KeywordSet;
use crate::descriptor::{CheckParams, RuleDescriptor};
use crate::registry::ComplianceCheck;
use crate::report::{square_meters, CheckResult, CheckStatus, LabelMap, ToolSummary};
use crate::Result;
use ifc_compliance_geometry::MeasuredSpace;
use ifc_compliance_model::BuildingModel;

use super::spaces_matching;

/// Registry name of the rule
pub const NAME: &str = "living_room_compliance";
/// Minimum area of a living room, in m²
pub const MIN_AREA_LIVING: f64 = 10.0;
/// Minimum area of a combined living room and kitchen, in m²
pub const MIN_AREA_LIVING_KITCHEN: f64 = 14.0;
/// Side of the clearance square, in meters
pub const SQUARE_WIDTH: f64 = 2.4;
pub const SQUARE_DEPTH: f64 = 2.4;
const CONTEXT: &str = "living room zone";

pub const LIVING_KEYWORDS: KeywordSet = KeywordSet::new("living", &["living"]);
pub const KITCHEN_KEYWORDS: KeywordSet = KeywordSet::new("kitchen", &["kitchen"]);

/// Area-only proxy for "a `width × depth` square fits in the room"
pub fn can_fit_square(area: f64, width: f64, depth: f64) -> bool {
    area >= width * depth
}

/// Verdict for one living room
#[derive(Clone, Debug, PartialEq)]
pub struct LivingRoomVerdict {
    pub area: f64,
    pub required_area: f64,
    pub fits_square: bool,
}

impl LivingRoomVerdict {
    pub fn evaluate(label: &str, area: f64) -> Self {
        let required_area = if KITCHEN_KEYWORDS.matches(label) {
            MIN_AREA_LIVING_KITCHEN
        } else {
            MIN_AREA_LIVING
        };
        Self {
            area,
            required_area,
            fits_square: can_fit_square(area, SQUARE_WIDTH, SQUARE_DEPTH),
        }
    }

    /// Area reaches the minimum for the room type
    pub fn meets_area(&self) -> bool {
        self.area >= self.required_area
    }

    pub fn is_pass(&self) -> bool {
        self.meets_area() && self.fits_square
    }

    /// Violated conditions, or `None` when compliant
    pub fn violations(&self) -> Option<String> {
        let mut reasons = Vec::new();
        if !self.meets_area() {
            reasons.push(format!(
                "Area {:.2} m² < required {:.2} m²",
                self.area, self.required_area
            ));
        }
        if !self.fits_square {
            reasons.push(format!(
                "Does not allow {:.2} m x {:.2} m square (approx)",
                SQUARE_WIDTH, SQUARE_DEPTH
            ));
        }
        (!reasons.is_empty()).then(|| reasons.join("; "))
    }
}

/// Living rooms with a computable area
#[derive(Debug)]
pub struct LivingRoomAssessment<'a> {
    pub rooms: Vec<(MeasuredSpace<'a>, LivingRoomVerdict)>,
}

impl<'a> LivingRoomAssessment<'a> {
    /// Select living rooms; spaces with no positive area are skipped
    pub fn assess(model: &'a dyn BuildingModel) -> Self {
        let rooms = spaces_matching(model, &LIVING_KEYWORDS)
            .into_iter()
            .map(MeasuredSpace::new)
            .filter(|room| room.area() > 0.0)
            .map(|room| {
                let verdict = LivingRoomVerdict::evaluate(room.label(), room.area());
                (room, verdict)
            })
            .collect();
        Self { rooms }
    }

    pub fn check_results(&self) -> Vec<CheckResult> {
        self.rooms
            .iter()
            .map(|(room, verdict)| {
                log::debug!(
                    "{}: area {:.2} m², required {:.2} m², square={}",
                    room.label(),
                    verdict.area,
                    verdict.required_area,
                    verdict.fits_square
                );
                CheckResult::space(
                    room.space(),
                    CONTEXT,
                    CheckStatus::from_bool(verdict.is_pass()),
                    square_meters(verdict.area),
                    square_meters(verdict.required_area),
                )
                .with_comment(verdict.violations())
            })
            .collect()
    }

    /// Fails if any room fails; the reason cites the first failing room
    pub fn summary(&self) -> ToolSummary {
        let mut room_areas = LabelMap::new();
        for (room, verdict) in &self.rooms {
            room_areas.insert(room.label(), verdict.area);
        }

        if self.rooms.is_empty() {
            return ToolSummary::new(
                CheckStatus::Pass,
                "no living room spaces matched (keyword 'living') or no computable areas",
            )
            .with_room_areas(room_areas);
        }

        let failing = self
            .rooms
            .iter()
            .find_map(|(room, verdict)| Some((room.label(), verdict.violations()?)));
        let summary = match failing {
            Some((label, reasons)) => ToolSummary::new(
                CheckStatus::Fail,
                format!("{}: {}", label, reasons),
            ),
            None => ToolSummary::new(
                CheckStatus::Pass,
                "All living rooms meet minimum area and clearance",
            ),
        };
        summary.with_room_areas(room_areas)
    }
}

/// Living-room compliance rule
#[derive(Clone, Copy, Debug, Default)]
pub struct LivingRoomCompliance;

impl LivingRoomCompliance {
    pub fn new() -> Self {
        Self
    }
}

impl ComplianceCheck for LivingRoomCompliance {
    fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor::new(
            NAME,
            "Checks that living rooms reach 10 m² (14 m² with a kitchen) and fit a 2.40 m x 2.40 m square.",
        )
    }

    fn check(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<Vec<CheckResult>> {
        params.validate(&self.descriptor())?;
        Ok(LivingRoomAssessment::assess(model).check_results())
    }

    fn summarize(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<ToolSummary> {
        params.validate(&self.descriptor())?;
        Ok(LivingRoomAssessment::assess(model).summary())
    }
}

/// Per-space records for the living-room rule
pub fn check_living_room_compliance(model: &dyn BuildingModel) -> Vec<CheckResult> {
    LivingRoomAssessment::assess(model).check_results()
}

/// Summary for the living-room rule
pub fn living_room_compliance_check(model: &dyn BuildingModel) -> ToolSummary {
    LivingRoomAssessment::assess(model).summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{model, room};
    use ifc_compliance_model::Space;

    #[test]
    fn test_living_room_passes() {
        let m = model(vec![room("1", "Living Room", 12.0, 2.5)]);
        let results = check_living_room_compliance(&m);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_pass());
        assert_eq!(results[0].actual_value, "12.00 m²");
        assert_eq!(results[0].required_value, "10.00 m²");
        assert_eq!(results[0].element_name_long, "Living Room (living room zone)");
    }

    #[test]
    fn test_small_living_room() {
        let m = model(vec![room("1", "Living Room", 9.0, 2.5)]);
        let results = check_living_room_compliance(&m);
        assert_eq!(results[0].check_status, CheckStatus::Fail);
        assert_eq!(
            results[0].comment.as_deref(),
            Some("Area 9.00 m² < required 10.00 m²")
        );
    }

    #[test]
    fn test_living_kitchen_needs_more_area() {
        let m = model(vec![room("1", "Living/Kitchen", 12.0, 2.5)]);
        let results = check_living_room_compliance(&m);
        assert_eq!(results[0].check_status, CheckStatus::Fail);
        assert_eq!(results[0].required_value, "14.00 m²");
    }

    #[test]
    fn test_both_violations_joined() {
        let m = model(vec![room("1", "living", 5.0, 2.5)]);
        let results = check_living_room_compliance(&m);
        assert_eq!(
            results[0].comment.as_deref(),
            Some("Area 5.00 m² < required 10.00 m²; Does not allow 2.40 m x 2.40 m square (approx)")
        );
    }

    #[test]
    fn test_square_proxy() {
        assert!(can_fit_square(5.8, 2.4, 2.4));
        assert!(!can_fit_square(5.7, 2.4, 2.4));
    }

    #[test]
    fn test_zero_area_skipped() {
        let m = model(vec![
            Space::new("1").with_long_name("Living"),
            room("2", "Bedroom", 12.0, 2.5),
        ]);
        assert!(check_living_room_compliance(&m).is_empty());
        let summary = living_room_compliance_check(&m);
        assert!(summary.is_pass());
        assert!(summary.reason.starts_with("no living room spaces matched"));
    }

    #[test]
    fn test_summary_fails_if_any_room_fails() {
        let m = model(vec![
            room("1", "Living Room", 12.0, 2.5),
            room("2", "Living/Kitchen", 12.0, 2.5),
        ]);
        let summary = living_room_compliance_check(&m);
        assert_eq!(summary.result, CheckStatus::Fail);
        assert_eq!(
            summary.reason,
            "Living/Kitchen: Area 12.00 m² < required 14.00 m²"
        );
        assert_eq!(summary.room_areas.unwrap().len(), 2);
    }

    #[test]
    fn test_rejects_parameters() {
        let m = model(vec![room("1", "Living Room", 12.0, 2.5)]);
        let params = CheckParams::new().with("min_area", 5.0);
        assert!(LivingRoomCompliance::new().check(&m, &params).is_err());
    }
}
