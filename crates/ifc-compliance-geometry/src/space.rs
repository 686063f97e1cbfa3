// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-space measurement
//!
//! Area precedence: a positive `NetFloorArea` quantity on the space is the
//! measurement and the mesh is never triangulated. Otherwise the area is the
//! mesh surface area. Spaces without a mesh measure 0.0 for both area and
//! height.

use crate::measure::{clear_height, surface_area};
use ifc_compliance_model::Space;
use once_cell::unsync::OnceCell;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Floor area of a space
pub fn space_area(space: &Space) -> f64 {
    if let Some(area) = space.authoritative_area() {
        return area;
    }
    space.mesh.as_ref().map_or(0.0, surface_area)
}

/// Clear height of a space
pub fn space_height(space: &Space) -> f64 {
    space.mesh.as_ref().map_or(0.0, clear_height)
}

/// Space with lazily computed, cached measurements
///
/// Rules wrap only the spaces they select, so geometry work is never spent
/// on irrelevant spaces, and a measurement read twice is computed once.
#[derive(Debug)]
pub struct MeasuredSpace<'a> {
    space: &'a Space,
    area: OnceCell<f64>,
    height: OnceCell<f64>,
}

impl<'a> MeasuredSpace<'a> {
    /// Wrap a space without measuring anything yet
    pub fn new(space: &'a Space) -> Self {
        Self {
            space,
            area: OnceCell::new(),
            height: OnceCell::new(),
        }
    }

    /// Wrap a space whose area is already known
    pub fn with_area(space: &'a Space, area: f64) -> Self {
        Self {
            space,
            area: OnceCell::with_value(area),
            height: OnceCell::new(),
        }
    }

    /// The underlying space
    pub fn space(&self) -> &'a Space {
        self.space
    }

    /// Display label of the underlying space
    pub fn label(&self) -> &'a str {
        self.space.label()
    }

    /// Floor area, computed on first access
    pub fn area(&self) -> f64 {
        *self.area.get_or_init(|| space_area(self.space))
    }

    /// Clear height, computed on first access
    pub fn height(&self) -> f64 {
        *self.height.get_or_init(|| space_height(self.space))
    }
}

/// Options for batch measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeasurementOptions {
    /// Whether batch measurement may use the rayon thread pool
    pub parallel: bool,
    /// Batches of at least this many spaces go parallel
    pub parallel_threshold: usize,
}

impl MeasurementOptions {
    /// Always measure on the calling thread
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            parallel_threshold: usize::MAX,
        }
    }

    /// Always measure in parallel
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 0,
        }
    }

    fn use_parallel(&self, count: usize) -> bool {
        self.parallel && count >= self.parallel_threshold
    }
}

impl Default for MeasurementOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

/// Area of every space, in input order
///
/// Runs on the rayon pool when `options` allow it; indexed collection keeps
/// the output aligned with `spaces`.
pub fn measure_areas(spaces: &[&Space], options: MeasurementOptions) -> Vec<f64> {
    if options.use_parallel(spaces.len()) {
        spaces.par_iter().map(|s| space_area(s)).collect()
    } else {
        spaces.iter().map(|s| space_area(s)).collect()
    }
}
