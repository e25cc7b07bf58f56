//! # rust-triad
//!
//! Rules engine for Triple Triad: two seats take turns placing four-sided
//! cards on a 3×3 board, and each placement can capture neighbouring cards
//! under the active rules.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Data**: Matches pick their rules at startup from a static
//!    registry. Adding a rule means one handler and one registry entry.
//!
//! 2. **Additive Capture**: Every active rule sees every neighbour; a cell
//!    captured by any rule flips. Rules never veto each other.
//!
//! 3. **Chained Captures**: A capture made by a chaining rule ("Plus")
//!    re-runs the rules from the captured card.
//!
//! ## Modules
//!
//! - `core`: Directions, ownership, RNG, configuration, errors
//! - `cards`: Cards, families, the card catalog
//! - `rules`: Rule kinds, capture handlers, registry, rule sets
//! - `board`: The grid, placement and capture propagation
//! - `game`: Hands, seats, match flow and outcome

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CardError, ConfigError, Direction, GameRng, HandError, MatchConfig, Ownership, RuleError,
};

pub use crate::cards::{
    Card, CardCatalog, CardDefinition, Category, CARD_FACE_COUNT, CARD_MAX_FACE_VALUE,
    CARD_MIN_FACE_VALUE,
};

pub use crate::rules::{
    CaptureRule, GreaterThanRule, PlusRule, RuleHandler, RuleKind, RuleRegistry, RuleSet,
};

pub use crate::board::{Board, Capture, Coordinate, FIELD_CAPACITY, FIELD_HEIGHT, FIELD_WIDTH};

pub use crate::game::{Hand, Match, MatchOutcome, PlacementRecord, MAX_CARDS_IN_HAND};
