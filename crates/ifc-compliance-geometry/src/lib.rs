// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC Compliance Geometry
//!
//! Scalar measurements of triangulated spaces for compliance rules.
//!
//! ## Overview
//!
//! - **Surface area**: Heron's formula summed over every mesh triangle
//! - **Clear height**: vertical extent of the mesh vertices
//! - **Area precedence**: a `NetFloorArea` quantity replaces mesh area
//! - **Lazy measurement**: [`MeasuredSpace`] measures on first access
//! - **Batch measurement**: rayon-parallel, order-preserving
//!
//! Measurement never fails: malformed or missing geometry measures 0.0.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ifc_compliance_geometry::{space_area, space_height};
//!
//! let area = space_area(&space);
//! let height = space_height(&space);
//! println!("{:.2} m², {:.2} m", area, height);
//! ```

pub mod error;
pub mod measure;
pub mod space;

// Re-export nalgebra point type for convenience
pub use nalgebra::Point3;

pub use error::{Error, Result};
pub use measure::{clear_height, surface_area, triangle_area, try_clear_height, try_surface_area};
pub use space::{
    measure_areas, space_area, space_height, MeasuredSpace, MeasurementOptions,
};
