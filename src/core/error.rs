//! Error types for recoverable failures.
//!
//! Only configuration and lookup problems are errors. Placement on an
//! occupied cell or a full board is an expected outcome reported as `false`,
//! and broken preconditions (coordinates off the grid, duplicate seats) panic.

use thiserror::Error;

use crate::rules::RuleKind;

/// A rule that cannot be activated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// No handler exists for this rule kind.
    #[error("rule {0} has no registered handler")]
    Unregistered(RuleKind),

    /// The same rule was listed twice.
    #[error("rule {0} is listed more than once")]
    Duplicate(RuleKind),

    /// A rule name that matches no rule kind.
    #[error("unknown rule name: {0:?}")]
    UnknownName(String),
}

/// Card construction or catalog lookup failure.
#[derive(Debug, Error)]
pub enum CardError {
    /// A card needs exactly four face values.
    #[error("card {name:?} has {found} face values, expected 4")]
    FaceCount { name: String, found: usize },

    /// A printed face value outside `CARD_MIN_FACE_VALUE..=CARD_MAX_FACE_VALUE`.
    #[error("card {name:?} has face value {value}, expected 1..=10")]
    FaceRange { name: String, value: i32 },

    /// No catalog entry with this name.
    #[error("unknown card: {0:?}")]
    UnknownCard(String),

    /// Two catalog entries share a name.
    #[error("card {0:?} is defined more than once")]
    Duplicate(String),

    /// Catalog JSON could not be parsed.
    #[error("invalid card catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Hand bookkeeping failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    /// The hand already holds the maximum number of cards.
    #[error("hand is full ({max} cards)")]
    Full { max: usize },

    /// The slot was never filled or its card was already played.
    #[error("hand slot {0} is empty")]
    EmptySlot(usize),

    /// No hand is registered for this seat.
    #[error("{0} has not joined the match")]
    UnknownPlayer(crate::core::Ownership),

    /// A card name missing from the catalog.
    #[error("unknown card: {0:?}")]
    UnknownCard(String),
}

/// Invalid match configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The rule list cannot be activated.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Hand size outside `1..=MAX_CARDS_IN_HAND`.
    #[error("hand size {0} is out of range")]
    HandSize(usize),

    /// Configuration JSON could not be parsed.
    #[error("invalid match configuration: {0}")]
    Json(#[from] serde_json::Error),
}
