// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rule catalogue
//!
//! Each rule is split in two steps: `assess` walks the model once (in native
//! space order) and produces an assessment; the assessment then renders both
//! report shapes, so the checker records and the tool summary always come
//! from the same computation.

pub mod dwelling;
pub mod living_height;
pub mod living_room;
pub mod occupancy;
pub mod service_height;

pub use dwelling::{check_dwelling_area, dwelling_area_check, DwellingArea, DwellingAreaAssessment};
pub use living_height::{
    check_living_area_height, living_area_height_check, LivingAreaHeight, LivingHeightAssessment,
};
pub use living_room::{
    check_living_room_compliance, living_room_compliance_check, LivingRoomAssessment,
    LivingRoomCompliance, LivingRoomVerdict,
};
pub use occupancy::{
    area_to_occupancy, bedroom_occupancy_check, check_bedroom_occupancy, BedroomOccupancy,
    BedroomVerdict, OccupancyAssessment, OccupancyMode,
};
pub use service_height::{
    check_service_spaces_min_height, service_spaces_min_height_check, ServiceHeightAssessment,
    ServiceMode, ServiceSpaceHeight,
};

use crate::classify::KeywordSet;
use ifc_compliance_model::{BuildingModel, Space, SpatialNodeType};

/// Spaces of kind `Space` whose label matches `set`, in model order
pub(crate) fn spaces_matching<'a>(model: &'a dyn BuildingModel, set: &KeywordSet) -> Vec<&'a Space> {
    let matched: Vec<&Space> = model
        .spaces_of_kind(SpatialNodeType::Space)
        .into_iter()
        .filter(|s| set.matches(s.label()))
        .collect();
    log::debug!("{} spaces matched '{}'", matched.len(), set.name);
    matched
}

/// `"{label} height below {min:.2}m"`, shared by the height summaries
pub(crate) fn height_below(label: &str, min_height: f64) -> String {
    format!("{} height below {:.2}m", label, min_height)
}

/// `"Height {h:.2}m below required {min:.2}m"`, shared by the height records
pub(crate) fn height_comment(height: f64, min_height: f64) -> String {
    format!("Height {:.2}m below required {:.2}m", height, min_height)
}
