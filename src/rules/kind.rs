//! Rule identifiers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::RuleError;

/// A capture rule a match can be configured with.
///
/// `None` and `Same` are valid configuration values but have no handler;
/// activating either is rejected when the rule set is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Placeholder for "no rule".
    None,
    /// Capture a neighbour whose touching face is lower.
    GreaterThan,
    /// Capture every neighbour in a group of two or more equal face sums.
    Plus,
    /// Declared but not implemented.
    Same,
}

impl RuleKind {
    /// Every rule kind, registered or not.
    pub const ALL: [RuleKind; 4] = [
        RuleKind::None,
        RuleKind::GreaterThan,
        RuleKind::Plus,
        RuleKind::Same,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuleKind::None => "None",
            RuleKind::GreaterThan => "Greater Than",
            RuleKind::Plus => "Plus",
            RuleKind::Same => "Same",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = RuleError;

    /// Parse a rule name, ignoring case, spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "none" => Ok(RuleKind::None),
            "greaterthan" => Ok(RuleKind::GreaterThan),
            "plus" => Ok(RuleKind::Plus),
            "same" => Ok(RuleKind::Same),
            _ => Err(RuleError::UnknownName(s.to_string())),
        }
    }
}
