// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model loading

use thiserror::Error;

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while opening a building model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Content is structurally not a model
    #[error("Invalid model format: {0}")]
    InvalidFormat(String),

    /// Two spaces share the same identifier
    #[error("Duplicate space id: {0}")]
    DuplicateSpaceId(String),

    /// Snapshot JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Create a new format error
    pub fn format(msg: impl Into<String>) -> Self {
        ModelError::InvalidFormat(msg.into())
    }

    /// Create a duplicate id error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        ModelError::DuplicateSpaceId(id.into())
    }
}
