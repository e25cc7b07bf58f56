//! Match configuration.
//!
//! A match is configured at startup with the rules in play, a seed for the
//! setup RNG and the hand size. Configs deserialize from JSON with defaults
//! for every field:
//!
//! ```
//! use rust_triad::core::MatchConfig;
//! use rust_triad::rules::RuleKind;
//!
//! let config = MatchConfig::from_json(r#"{ "rules": ["Plus"], "seed": 9 }"#).unwrap();
//! assert_eq!(config.rules, vec![RuleKind::Plus]);
//! assert_eq!(config.hand_size, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::game::MAX_CARDS_IN_HAND;
use crate::rules::{RuleKind, RuleSet};

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Active capture rules, in evaluation order.
    pub rules: Vec<RuleKind>,

    /// Seed for the setup RNG (coin flip, random hands).
    pub seed: u64,

    /// Cards dealt per hand (1..=5).
    pub hand_size: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rules: vec![RuleKind::GreaterThan],
            seed: 0,
            hand_size: MAX_CARDS_IN_HAND,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with no capture rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: RuleKind) -> Self {
        self.rules.push(rule);
        self
    }

    /// Replace the rule list.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = RuleKind>) -> Self {
        self.rules = rules.into_iter().collect();
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Validate the rule list into an activatable rule set.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        Ok(RuleSet::new(self.rules.iter().copied())?)
    }

    /// Check every field.
    pub fn validate(&self) -> Result<RuleSet, ConfigError> {
        if !(1..=MAX_CARDS_IN_HAND).contains(&self.hand_size) {
            return Err(ConfigError::HandSize(self.hand_size));
        }
        self.rule_set()
    }
}
