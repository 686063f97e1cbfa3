// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bedroom occupancy
//!
//! Each bedroom's floor area maps to a number of occupants through a step
//! function. A dwelling without bedrooms is treated as a studio: its first
//! living-type space decides, capped at two occupants. A dwelling with
//! neither fails outright.
//!
//! [`OccupancyMode::PerSpace`] evaluates every bedroom. With
//! [`OccupancyMode::Aggregating`] the running total stops at the first
//! bedroom too small to sleep anyone.

use super::spaces_matching;
use crate::classify::KeywordSet;
use crate::descriptor::{CheckParams, RuleDescriptor};
use crate::registry::ComplianceCheck;
use crate::report::{CheckResult, CheckStatus, LabelMap, ToolSummary};
use crate::Result;
use ifc_compliance_geometry::MeasuredSpace;
use ifc_compliance_model::BuildingModel;
use serde::{Deserialize, Serialize};

/// Registry name of the per-space variant
pub const NAME: &str = "bedroom_occupancy";
/// Registry name of the aggregating variant
pub const AGGREGATE_NAME: &str = "bedroom_occupancy_aggregate";
/// Occupant cap for a dwelling without bedrooms
pub const STUDIO_MAX_OCCUPANTS: u32 = 2;
const BEDROOM_CONTEXT: &str = "bedroom occupancy";
const STUDIO_CONTEXT: &str = "studio dwelling";
const BEDROOM_REQUIRED: &str = "≥5 m² (min 1 occupant)";
const STUDIO_REQUIRED: &str = "Studio max 2 occupants";
const STUDIO_REASON: &str = "Studio dwelling limited to maximum 2 occupants";
const NO_HABITABLE_REASON: &str = "no habitable space identified";

pub const BEDROOM_KEYWORDS: KeywordSet = KeywordSet::new(
    "bedroom",
    &["bedroom", "habitacion", "habitación", "dormitorio"],
);

/// Spaces that make a dwelling without bedrooms a studio
pub const STUDIO_KEYWORDS: KeywordSet = KeywordSet::new(
    "studio",
    &["living", "salon", "salón", "studio", "estudio", "common"],
);

/// Occupants allowed by a bedroom floor area
///
/// `< 5 m²` sleeps nobody, `< 8 m²` one, `< 12 m²` two, anything larger three.
pub fn area_to_occupancy(area: f64) -> u32 {
    if area < 5.0 {
        0
    } else if area < 8.0 {
        1
    } else if area < 12.0 {
        2
    } else {
        3
    }
}

/// How bedrooms are walked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyMode {
    /// Every bedroom is evaluated
    #[default]
    PerSpace,
    /// Stop at the first bedroom with no occupancy
    Aggregating,
}

/// Area and occupancy of one bedroom
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BedroomVerdict {
    pub area: f64,
    pub occupancy: u32,
}

impl BedroomVerdict {
    pub fn evaluate(area: f64) -> Self {
        Self {
            area,
            occupancy: area_to_occupancy(area),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.occupancy > 0
    }
}

/// Which branch of the rule applies to the dwelling
#[derive(Debug)]
pub enum OccupancyAssessment<'a> {
    /// Bedrooms in model order; in aggregating mode, up to and including
    /// the first one with no occupancy
    Bedrooms {
        rooms: Vec<(MeasuredSpace<'a>, BedroomVerdict)>,
        mode: OccupancyMode,
    },
    /// No bedrooms; the first living-type space
    Studio {
        room: MeasuredSpace<'a>,
        occupancy: u32,
    },
    NoHabitableSpace,
}

impl<'a> OccupancyAssessment<'a> {
    pub fn assess(model: &'a dyn BuildingModel, mode: OccupancyMode) -> Self {
        let bedrooms = spaces_matching(model, &BEDROOM_KEYWORDS);
        if bedrooms.is_empty() {
            let Some(&first) = spaces_matching(model, &STUDIO_KEYWORDS).first() else {
                log::debug!("no bedrooms and no living spaces");
                return OccupancyAssessment::NoHabitableSpace;
            };
            let room = MeasuredSpace::new(first);
            let occupancy = area_to_occupancy(room.area()).min(STUDIO_MAX_OCCUPANTS);
            log::debug!("studio dwelling '{}': {} occupant(s)", room.label(), occupancy);
            return OccupancyAssessment::Studio { room, occupancy };
        }

        let mut rooms = Vec::with_capacity(bedrooms.len());
        for space in bedrooms {
            let room = MeasuredSpace::new(space);
            let verdict = BedroomVerdict::evaluate(room.area());
            log::debug!(
                "{}: {:.2} m² -> {} occupant(s)",
                room.label(),
                verdict.area,
                verdict.occupancy
            );
            rooms.push((room, verdict));
            if mode == OccupancyMode::Aggregating && !verdict.is_pass() {
                break;
            }
        }
        OccupancyAssessment::Bedrooms { rooms, mode }
    }

    pub fn check_results(&self) -> Vec<CheckResult> {
        match self {
            OccupancyAssessment::Bedrooms { rooms, .. } => rooms
                .iter()
                .map(|(room, verdict)| {
                    CheckResult::space(
                        room.space(),
                        BEDROOM_CONTEXT,
                        CheckStatus::from_bool(verdict.is_pass()),
                        format!("{:.2} m² → {} occupant(s)", verdict.area, verdict.occupancy),
                        BEDROOM_REQUIRED,
                    )
                    .with_comment((!verdict.is_pass()).then(|| {
                        format!("Area {:.2} m² below minimum 5 m² for bedroom", verdict.area)
                    }))
                })
                .collect(),
            OccupancyAssessment::Studio { room, occupancy } => {
                let passed = *occupancy > 0;
                let comment = if passed {
                    STUDIO_REASON.to_string()
                } else {
                    studio_too_small(room.area())
                };
                vec![CheckResult::space(
                    room.space(),
                    STUDIO_CONTEXT,
                    CheckStatus::from_bool(passed),
                    format!("{:.2} m² → {} occupant(s) max", room.area(), occupancy),
                    STUDIO_REQUIRED,
                )
                .with_comment(Some(comment))]
            }
            OccupancyAssessment::NoHabitableSpace => vec![CheckResult::aggregate_failure(
                BEDROOM_CONTEXT,
                BEDROOM_REQUIRED,
                NO_HABITABLE_REASON,
            )],
        }
    }

    /// Verdict with per-room areas, occupancies and the dwelling total
    ///
    /// A failing bedroom is reported in the reason but left out of the maps
    /// and the total.
    pub fn summary(&self) -> ToolSummary {
        let mut room_areas = LabelMap::new();
        let mut occupancy_map = LabelMap::new();
        let mut total = 0;

        let summary = match self {
            OccupancyAssessment::Bedrooms { rooms, .. } => {
                let mut first_failure = None;
                for (room, verdict) in rooms {
                    if !verdict.is_pass() {
                        first_failure.get_or_insert_with(|| {
                            format!(
                                "{} area {:.2} m² is below minimum 5 m²",
                                room.label(),
                                verdict.area
                            )
                        });
                        continue;
                    }
                    room_areas.insert(room.label(), verdict.area);
                    occupancy_map.insert(room.label(), verdict.occupancy);
                    total += verdict.occupancy;
                }
                let (status, reason) = match first_failure {
                    Some(reason) => (CheckStatus::Fail, reason),
                    None => (
                        CheckStatus::Pass,
                        "Bedroom areas satisfy occupancy requirements".to_string(),
                    ),
                };
                ToolSummary::new(status, reason)
            }
            OccupancyAssessment::Studio { room, occupancy } => {
                room_areas.insert(room.label(), room.area());
                occupancy_map.insert(room.label(), *occupancy);
                total = *occupancy;
                if *occupancy > 0 {
                    ToolSummary::new(CheckStatus::Pass, STUDIO_REASON)
                } else {
                    ToolSummary::new(CheckStatus::Fail, studio_too_small(room.area()))
                }
            }
            OccupancyAssessment::NoHabitableSpace => {
                ToolSummary::new(CheckStatus::Fail, NO_HABITABLE_REASON)
            }
        };
        summary
            .with_room_areas(room_areas)
            .with_occupancy(occupancy_map)
            .with_total_allowed_people(total)
    }
}

fn studio_too_small(area: f64) -> String {
    format!("Area {:.2} m² too small for studio", area)
}

/// Bedroom occupancy rule
#[derive(Clone, Copy, Debug, Default)]
pub struct BedroomOccupancy {
    mode: OccupancyMode,
}

impl BedroomOccupancy {
    pub fn new(mode: OccupancyMode) -> Self {
        Self { mode }
    }

    /// Variant that evaluates every bedroom
    pub fn per_space() -> Self {
        Self::new(OccupancyMode::PerSpace)
    }

    /// Variant that stops at the first undersized bedroom
    pub fn aggregating() -> Self {
        Self::new(OccupancyMode::Aggregating)
    }

    pub fn mode(&self) -> OccupancyMode {
        self.mode
    }
}

impl ComplianceCheck for BedroomOccupancy {
    fn descriptor(&self) -> RuleDescriptor {
        match self.mode {
            OccupancyMode::PerSpace => RuleDescriptor::new(
                NAME,
                "Evaluates every bedroom area in the model to determine the allowed number of occupants.",
            ),
            OccupancyMode::Aggregating => RuleDescriptor::new(
                AGGREGATE_NAME,
                "Totals the allowed number of occupants over the bedrooms, stopping at the first undersized bedroom.",
            ),
        }
    }

    fn check(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<Vec<CheckResult>> {
        params.validate(&self.descriptor())?;
        Ok(OccupancyAssessment::assess(model, self.mode).check_results())
    }

    fn summarize(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<ToolSummary> {
        params.validate(&self.descriptor())?;
        Ok(OccupancyAssessment::assess(model, self.mode).summary())
    }
}

/// Per-bedroom records; every bedroom is evaluated
pub fn check_bedroom_occupancy(model: &dyn BuildingModel) -> Vec<CheckResult> {
    OccupancyAssessment::assess(model, OccupancyMode::PerSpace).check_results()
}

/// Dwelling occupancy summary; stops at the first undersized bedroom
pub fn bedroom_occupancy_check(model: &dyn BuildingModel) -> ToolSummary {
    OccupancyAssessment::assess(model, OccupancyMode::Aggregating).summary()
}
