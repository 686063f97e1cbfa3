// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rule descriptors and named parameters
//!
//! A descriptor is discovery metadata for an external caller or router: the
//! rule name, a prose description and the parameter schema. It carries no
//! behavior.

use crate::{Result, RuleError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Name of the implicit model-path argument of every tool schema
pub const MODEL_PATH_PARAM: &str = "ifc_model_path";

/// Value type of a declared parameter
///
/// Rule parameters are numeric thresholds; the model path is the only string
/// argument and is emitted by the schema itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Number,
}

/// One declared parameter of a rule
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub description: &'static str,
    pub default: Option<f64>,
    pub required: bool,
}

impl ParameterSpec {
    /// Optional numeric threshold with a default
    pub const fn threshold(name: &'static str, description: &'static str, default: f64) -> Self {
        Self {
            name,
            kind: ParameterKind::Number,
            description,
            default: Some(default),
            required: false,
        }
    }
}

/// Discovery metadata for a rule
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParameterSpec>,
}

impl RuleDescriptor {
    /// Create a descriptor
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            parameters: Vec::new(),
        }
    }

    /// Declare a parameter
    pub fn with_parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Look up a declared parameter
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// JSON-schema-like tool description
    ///
    /// The model path is always the first, required property.
    pub fn to_schema(&self) -> Value {
        let mut properties = Map::new();
        properties.insert(
            MODEL_PATH_PARAM.to_string(),
            json!({
                "type": "string",
                "description": "Filesystem path to the IFC model."
            }),
        );

        let mut required = vec![Value::from(MODEL_PATH_PARAM)];
        for p in &self.parameters {
            let description = match p.default {
                Some(default) => format!("{} Default is {:.2}.", p.description, default),
                None => p.description.to_string(),
            };
            let mut property = json!({ "type": p.kind, "description": description });
            if let Some(default) = p.default {
                property["default"] = json!(default);
            }
            properties.insert(p.name.to_string(), property);
            if p.required {
                required.push(Value::from(p.name));
            }
        }

        json!({
            "name": self.name,
            "description": self.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}

/// Named numeric parameters passed to a rule
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckParams(BTreeMap<String, f64>);

impl CheckParams {
    /// No parameters; every rule falls back to its defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Raw value of a parameter
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Check if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject parameters the rule does not declare and values that are not
    /// finite and non-negative
    pub fn validate(&self, descriptor: &RuleDescriptor) -> Result<()> {
        for (name, &value) in &self.0 {
            if descriptor.parameter(name).is_none() {
                return Err(RuleError::unknown_parameter(descriptor.name, name.as_str()));
            }
            if !value.is_finite() || value < 0.0 {
                return Err(RuleError::invalid_parameter(
                    descriptor.name,
                    name.as_str(),
                    value,
                    "expected a finite, non-negative number",
                ));
            }
        }
        Ok(())
    }

    /// Validated value of a declared parameter, or its default
    pub fn number(&self, descriptor: &RuleDescriptor, name: &str) -> Result<f64> {
        self.validate(descriptor)?;
        let spec = descriptor
            .parameter(name)
            .ok_or_else(|| RuleError::unknown_parameter(descriptor.name, name))?;
        self.get(name)
            .or(spec.default)
            .ok_or_else(|| RuleError::invalid_parameter(descriptor.name, name, f64::NAN, "missing"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> RuleDescriptor {
        RuleDescriptor::new("demo", "Demo rule.")
            .with_parameter(ParameterSpec::threshold("min_height", "Minimum height in meters.", 2.5))
    }

    #[test]
    fn test_defaults_and_overrides() {
        let d = descriptor();
        assert_eq!(CheckParams::new().number(&d, "min_height").unwrap(), 2.5);
        let params = CheckParams::new().with("min_height", 2.7);
        assert_eq!(params.number(&d, "min_height").unwrap(), 2.7);
    }

    #[test]
    fn test_unknown_parameter() {
        let err = CheckParams::new()
            .with("min_area", 30.0)
            .validate(&descriptor())
            .unwrap_err();
        assert!(matches!(err, RuleError::UnknownParameter { ref parameter, .. } if parameter == "min_area"));
    }

    #[test]
    fn test_invalid_values() {
        let d = descriptor();
        for value in [f64::NAN, f64::INFINITY, -1.0] {
            let err = CheckParams::new().with("min_height", value).validate(&d).unwrap_err();
            assert!(matches!(err, RuleError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_schema_shape() {
        let schema = descriptor().to_schema();
        assert_eq!(schema["name"], "demo");
        assert_eq!(schema["parameters"]["type"], "object");
        assert_eq!(schema["parameters"]["required"], json!(["ifc_model_path"]));
        let prop = &schema["parameters"]["properties"]["min_height"];
        assert_eq!(prop["type"], "number");
        assert_eq!(prop["default"], 2.5);
        assert_eq!(prop["description"], "Minimum height in meters. Default is 2.50.");
        assert_eq!(
            schema["parameters"]["properties"]["ifc_model_path"]["type"],
            "string"
        );
    }

    #[test]
    fn test_params_from_json() {
        let params: CheckParams = serde_json::from_str(r#"{ "min_height": 2.2 }"#).unwrap();
        assert_eq!(params.get("min_height"), Some(2.2));
    }
}
