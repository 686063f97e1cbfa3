// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimum clear height of the main living areas

use super::{height_below, height_comment, spaces_matching};
use crate::classify::KeywordSet;
use crate::descriptor::{CheckParams, ParameterSpec, RuleDescriptor};
use crate::registry::ComplianceCheck;
use crate::report::{meters, CheckResult, CheckStatus, LabelMap, ToolSummary};
use crate::Result;
use ifc_compliance_geometry::MeasuredSpace;
use ifc_compliance_model::BuildingModel;

/// Registry name of the rule
pub const NAME: &str = "living_area_height";
/// Parameter holding the minimum clear height in meters
pub const MIN_HEIGHT: &str = "min_height";
pub const DEFAULT_MIN_HEIGHT: f64 = 2.50;
const CONTEXT: &str = "living area";

/// Labels subject to the living-area height rule
pub const MAIN_LIVING_KEYWORDS: KeywordSet =
    KeywordSet::new("main living", &["living", "bedroom", "hall"]);

/// Selected main living spaces
#[derive(Debug)]
pub struct LivingHeightAssessment<'a> {
    pub rooms: Vec<MeasuredSpace<'a>>,
    pub min_height: f64,
}

impl<'a> LivingHeightAssessment<'a> {
    /// Select the main living spaces; heights are measured on first use
    pub fn assess(model: &'a dyn BuildingModel, min_height: f64) -> Self {
        let rooms = spaces_matching(model, &MAIN_LIVING_KEYWORDS)
            .into_iter()
            .map(MeasuredSpace::new)
            .collect();
        Self { rooms, min_height }
    }

    /// One record per selected space
    pub fn check_results(&self) -> Vec<CheckResult> {
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
        for room in &self.rooms {
            let height = room.height();
            room_heights.insert(room.label(), height);
            if height < self.min_height {
                return ToolSummary::new(
                    CheckStatus::Fail,
                    height_below(room.label(), self.min_height),
                )
                .with_room_heights(room_heights);
            }
        }
        ToolSummary::new(
            CheckStatus::Pass,
            format!(
                "All main living areas meet minimum height {:.2}m",
                self.min_height
            ),
        )
        .with_room_heights(room_heights)
    }
}

/// Living-area height rule
#[derive(Clone, Copy, Debug, Default)]
pub struct LivingAreaHeight;

impl LivingAreaHeight {
    pub fn new() -> Self {
        Self
    }

    fn assess<'a>(
        &self,
        model: &'a dyn BuildingModel,
        params: &CheckParams,
    ) -> Result<LivingHeightAssessment<'a>> {
        let min_height = params.number(&self.descriptor(), MIN_HEIGHT)?;
        Ok(LivingHeightAssessment::assess(model, min_height))
    }
}

impl ComplianceCheck for LivingAreaHeight {
    fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor::new(
            NAME,
            "Checks that living rooms, bedrooms and hallways reach a minimum clear height.",
        )
        .with_parameter(ParameterSpec::threshold(
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

/// Per-space records for the living-area height rule
pub fn check_living_area_height(model: &dyn BuildingModel, min_height: f64) -> Vec<CheckResult> {
    LivingHeightAssessment::assess(model, min_height).check_results()
}

/// Summary for the living-area height rule
pub fn living_area_height_check(model: &dyn BuildingModel, min_height: f64) -> ToolSummary {
    LivingHeightAssessment::assess(model, min_height).summary()
}
