// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for mesh measurement

use thiserror::Error;

/// Measurement result type
pub type Result<T> = std::result::Result<T, Error>;

/// Mesh measurement errors
///
/// These never reach rule evaluation: the infallible measurement functions
/// turn them into zero measurements.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Triangle refers to a vertex the mesh does not have
    #[error("Vertex index {index} out of range ({vertex_count} vertices)")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// Index list does not split into whole triangles
    #[error("Incomplete triangle: {0} indices is not a multiple of 3")]
    IncompleteTriangle(usize),

    /// Non-finite coordinate in a vertex used by a triangle
    #[error("Non-finite coordinate in vertex {0}")]
    NonFiniteVertex(u32),
}

impl Error {
    /// Create an index out of range error
    pub fn index_out_of_range(index: u32, vertex_count: usize) -> Self {
        Error::IndexOutOfRange {
            index,
            vertex_count,
        }
    }
}
