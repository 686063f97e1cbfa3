// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Check Registry - Dispatch by rule name
//!
//! Routes a rule name to its [`ComplianceCheck`] implementation. External
//! callers discover the available rules through [`CheckRegistry::descriptors`]
//! and invoke them by name.

use crate::config::RunConfig;
use crate::descriptor::{CheckParams, RuleDescriptor};
use crate::report::{CheckResult, Tally, ToolSummary};
use crate::rules::{
    BedroomOccupancy, DwellingArea, LivingAreaHeight, LivingRoomCompliance, ServiceSpaceHeight,
};
use crate::{Result, RuleError};
use ifc_compliance_geometry::MeasurementOptions;
use ifc_compliance_model::{BuildingModel, ModelLoader};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Compliance check trait
///
/// A check is a pure function of the model and its parameters. Both output
/// shapes are rendered from the same assessment.
pub trait ComplianceCheck: Send + Sync {
    /// Name, description and parameter schema
    fn descriptor(&self) -> RuleDescriptor;

    /// One record per evaluated space
    ///
    /// # Errors
    /// Fails only on undeclared or invalid parameters.
    fn check(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<Vec<CheckResult>>;

    /// Single overall verdict
    fn summarize(&self, model: &dyn BuildingModel, params: &CheckParams) -> Result<ToolSummary>;
}

/// Check registry - routes rule names to checks
pub struct CheckRegistry {
    checks: FxHashMap<&'static str, Arc<dyn ComplianceCheck>>,
}

impl CheckRegistry {
    /// Create a registry without any checks registered
    pub fn new() -> Self {
        Self {
            checks: FxHashMap::default(),
        }
    }

    /// Create a registry with the default catalogue registered
    ///
    /// Registers:
    /// - `dwelling_area`
    /// - `living_area_height`
    /// - `service_spaces_min_height` (no matches pass)
    /// - `service_spaces_min_height_strict` (no matches fail)
    /// - `living_room_compliance`
    /// - `bedroom_occupancy` (every bedroom evaluated)
    /// - `bedroom_occupancy_aggregate` (stops at the first undersized bedroom)
    pub fn with_default_checks() -> Self {
        Self::with_default_checks_and_options(MeasurementOptions::default())
    }

    /// Create a registry with the default catalogue and batch measurement options
    pub fn with_default_checks_and_options(options: MeasurementOptions) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DwellingArea::with_options(options)));
        registry.register(Arc::new(LivingAreaHeight::new()));
        registry.register(Arc::new(ServiceSpaceHeight::lenient()));
        registry.register(Arc::new(ServiceSpaceHeight::strict()));
        registry.register(Arc::new(LivingRoomCompliance::new()));
        registry.register(Arc::new(BedroomOccupancy::per_space()));
        registry.register(Arc::new(BedroomOccupancy::aggregating()));
        registry
    }

    /// Register a check under its descriptor name, replacing any previous one
    pub fn register(&mut self, check: Arc<dyn ComplianceCheck>) {
        let name = check.descriptor().name;
        self.checks.insert(name, check);
    }

    /// Check if a rule is registered
    pub fn has_check(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.checks.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Look up a check
    ///
    /// # Errors
    /// [`RuleError::UnknownRule`] listing every registered name.
    pub fn get(&self, name: &str) -> Result<&Arc<dyn ComplianceCheck>> {
        self.checks
            .get(name)
            .ok_or_else(|| RuleError::unknown_rule(name, self.names()))
    }

    /// Descriptors of every registered check, sorted by name
    pub fn descriptors(&self) -> Vec<RuleDescriptor> {
        self.names()
            .into_iter()
            .filter_map(|name| self.checks.get(name))
            .map(|check| check.descriptor())
            .collect()
    }

    /// Run a check by name
    pub fn evaluate(
        &self,
        name: &str,
        model: &dyn BuildingModel,
        params: &CheckParams,
    ) -> Result<Vec<CheckResult>> {
        self.get(name)?.check(model, params)
    }

    /// Summarize a check by name
    pub fn summarize(
        &self,
        name: &str,
        model: &dyn BuildingModel,
        params: &CheckParams,
    ) -> Result<ToolSummary> {
        self.get(name)?.summarize(model, params)
    }

    /// Open a model and run a check on it
    ///
    /// The rule is resolved before the model is opened.
    pub fn evaluate_path(
        &self,
        loader: &dyn ModelLoader,
        path: &Path,
        name: &str,
        params: &CheckParams,
    ) -> Result<Vec<CheckResult>> {
        let check = self.get(name)?;
        let model = loader.open(path)?;
        check.check(model.as_ref(), params)
    }

    /// Open a model and summarize a check on it
    pub fn summarize_path(
        &self,
        loader: &dyn ModelLoader,
        path: &Path,
        name: &str,
        params: &CheckParams,
    ) -> Result<ToolSummary> {
        let check = self.get(name)?;
        let model = loader.open(path)?;
        check.summarize(model.as_ref(), params)
    }

    /// Run every configured check
    ///
    /// A failing check does not abort the run; it is recorded with its error.
    pub fn run_all(&self, model: &dyn BuildingModel, config: &RunConfig) -> RunReport {
        let runs = config
            .checks
            .iter()
            .map(|name| {
                let params = config.params_for(name);
                match self.evaluate(name, model, &params) {
                    Ok(results) => {
                        let tally = Tally::of(&results);
                        log::info!("{}: {} passed, {} failed", name, tally.passed, tally.failed);
                        RuleRun {
                            name: name.clone(),
                            tally,
                            results,
                            error: None,
                        }
                    }
                    Err(e) => {
                        log::warn!("{}: {}", name, e);
                        RuleRun {
                            name: name.clone(),
                            tally: Tally::default(),
                            results: Vec::new(),
                            error: Some(e.to_string()),
                        }
                    }
                }
            })
            .collect();
        RunReport { runs }
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::with_default_checks()
    }
}

/// Outcome of one check in a batch run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleRun {
    pub name: String,
    pub tally: Tally,
    pub results: Vec<CheckResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RuleRun {
    /// Whether the check ran and every record passed
    pub fn is_pass(&self) -> bool {
        self.error.is_none() && self.tally.failed == 0
    }
}

/// Outcome of a batch run, in configured order
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub runs: Vec<RuleRun>,
}

impl RunReport {
    /// Record counts over every check
    pub fn tally(&self) -> Tally {
        self.runs.iter().fold(Tally::default(), |acc, run| Tally {
            passed: acc.passed + run.tally.passed,
            failed: acc.failed + run.tally.failed,
        })
    }

    /// Checks that could not run
    pub fn errors(&self) -> impl Iterator<Item = &RuleRun> {
        self.runs.iter().filter(|run| run.error.is_some())
    }

    /// Look up the run of a check
    pub fn run(&self, name: &str) -> Option<&RuleRun> {
        self.runs.iter().find(|run| run.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{model, room, tall};

    #[test]
    fn test_default_checks() {
        let registry = CheckRegistry::with_default_checks();
        assert_eq!(
            registry.names(),
            vec![
                "bedroom_occupancy",
                "bedroom_occupancy_aggregate",
                "dwelling_area",
                "living_area_height",
                "living_room_compliance",
                "service_spaces_min_height",
                "service_spaces_min_height_strict",
            ]
        );
        assert!(registry.has_check("dwelling_area"));
        assert!(!registry.has_check("fire_exits"));
    }

    #[test]
    fn test_unknown_rule_lists_known() {
        let registry = CheckRegistry::with_default_checks();
        let err = registry
            .evaluate("fire_exits", &model(vec![]), &CheckParams::new())
            .unwrap_err();
        match err {
            RuleError::UnknownRule { name, known } => {
                assert_eq!(name, "fire_exits");
                assert!(known.contains("dwelling_area"));
                assert!(known.contains("bedroom_occupancy"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_evaluate_by_name() {
        let registry = CheckRegistry::with_default_checks();
        let m = model(vec![tall("1", "Bathroom", 2.0)]);
        let params = CheckParams::new().with("min_height", 2.2);
        let results = registry
            .evaluate("service_spaces_min_height", &m, &params)
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(!results[0].is_pass());
    }

    #[test]
    fn test_descriptors_schemas() {
        let registry = CheckRegistry::with_default_checks();
        let descriptors = registry.descriptors();
        assert_eq!(descriptors.len(), 7);
        for d in &descriptors {
            let schema = d.to_schema();
            assert_eq!(schema["parameters"]["required"][0], "ifc_model_path");
        }
    }

    #[test]
    fn test_run_all_records_errors() {
        let registry = CheckRegistry::with_default_checks();
        let m = model(vec![
            room("1", "Living Room", 20.0, 2.6),
            room("2", "Bedroom", 20.0, 2.6),
        ]);
        let mut config = RunConfig::default();
        config.checks.push("fire_exits".to_string());

        let report = registry.run_all(&m, &config);
        assert_eq!(report.runs.len(), 6);
        assert!(report.run("dwelling_area").unwrap().is_pass());
        let errors: Vec<_> = report.errors().map(|r| r.name.as_str()).collect();
        assert_eq!(errors, ["fire_exits"]);
        assert!(report.tally().passed > 0);
    }
}
