// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for rule lookup and evaluation

use ifc_compliance_model::ModelError;
use thiserror::Error;

/// Rule evaluation result type
pub type Result<T> = std::result::Result<T, RuleError>;

/// Errors surfaced to callers of the rule catalogue
///
/// Rules themselves never fail on a well-formed model; these cover caller
/// mistakes and model loading.
#[derive(Error, Debug)]
pub enum RuleError {
    /// No rule registered under the requested name
    #[error("Unknown rule '{name}' (known rules: {known})")]
    UnknownRule { name: String, known: String },

    /// Parameter not declared by the rule's descriptor
    #[error("Rule '{rule}' has no parameter '{parameter}'")]
    UnknownParameter { rule: String, parameter: String },

    /// Parameter value outside its valid domain
    #[error("Invalid value {value} for parameter '{parameter}' of rule '{rule}': {message}")]
    InvalidParameter {
        rule: String,
        parameter: String,
        value: f64,
        message: String,
    },

    /// Run configuration could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Model could not be opened
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl RuleError {
    /// Create an unknown rule error listing the known names
    pub fn unknown_rule<'a>(name: impl Into<String>, known: impl IntoIterator<Item = &'a str>) -> Self {
        RuleError::UnknownRule {
            name: name.into(),
            known: known.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Create an unknown parameter error
    pub fn unknown_parameter(rule: impl Into<String>, parameter: impl Into<String>) -> Self {
        RuleError::UnknownParameter {
            rule: rule.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(
        rule: impl Into<String>,
        parameter: impl Into<String>,
        value: f64,
        message: impl Into<String>,
    ) -> Self {
        RuleError::InvalidParameter {
            rule: rule.into(),
            parameter: parameter.into(),
            value,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        RuleError::Config(msg.into())
    }
}
