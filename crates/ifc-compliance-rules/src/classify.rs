// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Label-based space classification
//!
//! Spaces are classified from their free-text label by case-insensitive
//! substring match against a [`KeywordSet`]. Each rule owns its keyword sets
//! and tunes them independently; there is no global taxonomy, and a space
//! may match the sets of several rules at once.

use crate::rules::{living_height, living_room, occupancy, service_height};
use serde::Serialize;

/// Named list of lower-case keywords
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordSet {
    /// Set name, for logs
    pub name: &'static str,
    /// Lower-case keywords matched as substrings
    pub keywords: &'static [&'static str],
}

impl KeywordSet {
    /// Create a keyword set
    pub const fn new(name: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { name, keywords }
    }

    /// Whether any keyword occurs in the lower-cased label
    pub fn matches(&self, label: &str) -> bool {
        let lower = label.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k))
    }
}

/// Whether `label` belongs to `set`
pub fn classify(label: &str, set: &KeywordSet) -> bool {
    set.matches(label)
}

/// Semantic role a space may play
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceRole {
    Bedroom,
    Living,
    Service,
    Kitchen,
    StudioCandidate,
    /// Main habitable area subject to the living-area height rule
    MainLiving,
}

impl SpaceRole {
    /// All roles in reporting order
    pub const ALL: [SpaceRole; 6] = [
        SpaceRole::Bedroom,
        SpaceRole::Living,
        SpaceRole::Service,
        SpaceRole::Kitchen,
        SpaceRole::StudioCandidate,
        SpaceRole::MainLiving,
    ];

    /// Keyword set of the rule that owns this role
    pub fn keyword_set(&self) -> &'static KeywordSet {
        match self {
            SpaceRole::Bedroom => &occupancy::BEDROOM_KEYWORDS,
            SpaceRole::Living => &living_room::LIVING_KEYWORDS,
            SpaceRole::Service => &service_height::SERVICE_KEYWORDS,
            SpaceRole::Kitchen => &living_room::KITCHEN_KEYWORDS,
            SpaceRole::StudioCandidate => &occupancy::STUDIO_KEYWORDS,
            SpaceRole::MainLiving => &living_height::MAIN_LIVING_KEYWORDS,
        }
    }
}

/// Every role whose rule-owned keyword set matches `label`
///
/// Reporting helper only: rules filter with their own sets directly.
pub fn roles(label: &str) -> Vec<SpaceRole> {
    SpaceRole::ALL
        .into_iter()
        .filter(|role| role.keyword_set().matches(label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_substring() {
        let set = KeywordSet::new("test", &["bath", "wc"]);
        assert!(set.matches("Master BATHROOM"));
        assert!(set.matches("WC 2"));
        assert!(!set.matches("Kitchen"));
        assert!(classify("guest bath", &set));
    }

    #[test]
    fn test_non_ascii_keywords() {
        assert!(service_height::SERVICE_KEYWORDS.matches("Baño principal"));
        assert!(occupancy::STUDIO_KEYWORDS.matches("SALÓN"));
        assert!(occupancy::BEDROOM_KEYWORDS.matches("Habitación 1"));
    }

    #[test]
    fn test_multiple_roles() {
        let r = roles("Living/Kitchen");
        assert!(r.contains(&SpaceRole::Living));
        assert!(r.contains(&SpaceRole::Kitchen));
        assert!(r.contains(&SpaceRole::Service));
        assert!(r.contains(&SpaceRole::StudioCandidate));
        assert!(r.contains(&SpaceRole::MainLiving));
        assert!(!r.contains(&SpaceRole::Bedroom));
    }

    #[test]
    fn test_no_roles() {
        assert!(roles("Storage").is_empty());
        assert!(roles("").is_empty());
    }

    #[test]
    fn test_hallway_matches_two_rule_families() {
        let r = roles("Hallway");
        assert_eq!(r, vec![SpaceRole::Service, SpaceRole::MainLiving]);
    }
}
