//! Rule registry and validated rule sets.
//!
//! The registry is a static table from `RuleKind` to handler metadata. Only
//! kinds listed in the table can be activated; `RuleSet::new` enforces this
//! when a match is configured, so the board never meets an unregistered rule.

use smallvec::SmallVec;

use super::greater_than::GreaterThanRule;
use super::handler::RuleHandler;
use super::kind::RuleKind;
use super::plus::PlusRule;
use crate::core::RuleError;

/// Metadata for one registered rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleEntry {
    /// The rule identifier.
    pub kind: RuleKind,
    /// Name shown to players.
    pub display_name: &'static str,
    /// Whether captures by this rule chain.
    pub propagates_side_effects: bool,
    /// Builds a fresh handler.
    pub construct: fn() -> RuleHandler,
}

fn greater_than() -> RuleHandler {
    RuleHandler::GreaterThan(GreaterThanRule::new())
}

fn plus() -> RuleHandler {
    RuleHandler::Plus(PlusRule::new())
}

static RULE_TABLE: [RuleEntry; 2] = [
    RuleEntry {
        kind: RuleKind::GreaterThan,
        display_name: "Greater Than",
        propagates_side_effects: false,
        construct: greater_than,
    },
    RuleEntry {
        kind: RuleKind::Plus,
        display_name: "Plus",
        propagates_side_effects: true,
        construct: plus,
    },
];

/// Lookup over the static rule table.
///
/// ## Example
///
/// ```
/// use rust_triad::rules::{RuleKind, RuleRegistry};
///
/// assert!(RuleRegistry::get_handler(RuleKind::Plus).is_ok());
/// assert!(RuleRegistry::get_handler(RuleKind::Same).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleRegistry;

impl RuleRegistry {
    /// Find the entry for a rule kind.
    #[must_use]
    pub fn lookup(kind: RuleKind) -> Option<&'static RuleEntry> {
        RULE_TABLE.iter().find(|entry| entry.kind == kind)
    }

    /// Build a brand-new handler for a rule kind.
    pub fn get_handler(kind: RuleKind) -> Result<RuleHandler, RuleError> {
        Self::lookup(kind)
            .map(|entry| (entry.construct)())
            .ok_or(RuleError::Unregistered(kind))
    }

    /// Check if a rule kind has a handler.
    #[must_use]
    pub fn is_registered(kind: RuleKind) -> bool {
        Self::lookup(kind).is_some()
    }

    /// Iterate over all registered rules.
    pub fn registered() -> impl Iterator<Item = &'static RuleEntry> {
        RULE_TABLE.iter()
    }
}

/// Ordered, duplicate-free list of active rules.
///
/// Only constructed through `new` (or `empty`/`default`), so every kind in
/// the set is registered.
///
/// ```
/// use rust_triad::rules::{RuleKind, RuleSet};
///
/// let rules = RuleSet::new([RuleKind::Plus, RuleKind::GreaterThan]).unwrap();
/// assert_eq!(rules.handlers().len(), 2);
/// assert!(RuleSet::new([RuleKind::Same]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    kinds: SmallVec<[RuleKind; 4]>,
}

impl RuleSet {
    /// Validate a list of rule kinds.
    ///
    /// Rejects unregistered kinds (`None`, `Same`) and duplicates.
    pub fn new(kinds: impl IntoIterator<Item = RuleKind>) -> Result<Self, RuleError> {
        let mut validated: SmallVec<[RuleKind; 4]> = SmallVec::new();
        for kind in kinds {
            if !RuleRegistry::is_registered(kind) {
                return Err(RuleError::Unregistered(kind));
            }
            if validated.contains(&kind) {
                return Err(RuleError::Duplicate(kind));
            }
            validated.push(kind);
        }
        Ok(Self { kinds: validated })
    }

    /// A rule set with no rules; placements never capture.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kinds: SmallVec::new(),
        }
    }

    /// Active rule kinds in evaluation order.
    #[must_use]
    pub fn kinds(&self) -> &[RuleKind] {
        &self.kinds
    }

    /// Active rule entries in evaluation order.
    pub fn entries(&self) -> impl Iterator<Item = &'static RuleEntry> + '_ {
        self.kinds.iter().filter_map(|&kind| RuleRegistry::lookup(kind))
    }

    /// Check if a rule is active.
    #[must_use]
    pub fn contains(&self, kind: RuleKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Number of active rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if no rule is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// One fresh handler per active rule, in evaluation order.
    #[must_use]
    pub fn handlers(&self) -> SmallVec<[RuleHandler; 4]> {
        self.entries().map(|entry| (entry.construct)()).collect()
    }
}

impl Default for RuleSet {
    /// The classic game: "Greater Than" only.
    fn default() -> Self {
        Self {
            kinds: SmallVec::from_slice(&[RuleKind::GreaterThan]),
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kinds.is_empty() {
            return f.write_str("(no rules)");
        }
        for (i, entry) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(entry.display_name)?;
        }
        Ok(())
    }
}
