// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial kinds of the zones a loader may expose

use serde::{Deserialize, Serialize};

/// Type of spatial zone
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpatialNodeType {
    /// IfcSpace - a room or area
    #[default]
    Space,
    /// IfcBuildingStorey - a floor/level
    Storey,
    /// IfcZone - a grouping of spaces
    Zone,
}

impl SpatialNodeType {
    /// Get display name, also used as the `element_type` of check results
    pub fn display_name(&self) -> &'static str {
        match self {
            SpatialNodeType::Space => "Space",
            SpatialNodeType::Storey => "Storey",
            SpatialNodeType::Zone => "Zone",
        }
    }

}
