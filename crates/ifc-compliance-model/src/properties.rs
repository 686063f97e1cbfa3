// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Base quantities attached to spaces

use serde::{Deserialize, Serialize};

/// Quantity types supported in IFC
///
/// Only `Area` quantities are ever read as measurements; the other kinds are
/// accepted so that snapshots exported with full base quantity sets load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityType {
    /// Linear measurement (IfcQuantityLength)
    Length,
    /// Area measurement (IfcQuantityArea)
    Area,
    /// Volume measurement (IfcQuantityVolume)
    Volume,
    /// Count (IfcQuantityCount)
    Count,
}

/// A quantity value with type and unit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Quantity name (e.g., "NetFloorArea")
    pub name: String,
    /// Numeric value
    pub value: f64,
    /// Unit of measurement
    #[serde(default)]
    pub unit: String,
    /// Type of quantity
    pub quantity_type: QuantityType,
}

impl Quantity {
    /// Create an area quantity in square meters
    pub fn area(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            unit: "m²".to_string(),
            quantity_type: QuantityType::Area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_quantity() {
        let area = Quantity::area("NetFloorArea", 12.5);
        assert_eq!(area.unit, "m²");
        assert_eq!(area.quantity_type, QuantityType::Area);
    }

    #[test]
    fn test_quantity_from_json() {
        let q: Quantity = serde_json::from_str(
            r#"{ "name": "GrossVolume", "value": 30.0, "quantity_type": "Volume" }"#,
        )
        .unwrap();
        assert_eq!(q.quantity_type, QuantityType::Volume);
        assert_eq!(q.unit, "");
    }
}
