//! Capture rule handlers.
//!
//! A handler decides which neighbours of a just-placed card are captured.
//! The board creates one fresh handler per active rule for every
//! propagation step, feeds it every qualifying neighbour, then reads the
//! captured directions once. Handlers are never reused, so accumulated state
//! from one step cannot leak into another.
//!
//! ## Protocol
//!
//! 1. `per_face_step` once per occupied, opposing neighbour, in
//!    `Direction::ALL` order.
//! 2. `affected_directions` once, after every neighbour has been fed.

use smallvec::SmallVec;

use super::greater_than::GreaterThanRule;
use super::kind::RuleKind;
use super::plus::PlusRule;
use crate::cards::Card;
use crate::core::Direction;

/// Captured directions around a placed card, in `Direction::ALL` order.
pub type Directions = SmallVec<[Direction; 4]>;

/// Capture rule behaviour.
///
/// ## Implementation Notes
///
/// - `per_face_step`: `direction` is the placed card's face; the neighbour
///   touches it with `direction.opposite()`
/// - `affected_directions`: must be sorted in `Direction::ALL` order
/// - `propagates_side_effects`: constant per rule
pub trait CaptureRule {
    /// Record one comparison between the placed card and a neighbour.
    fn per_face_step(&mut self, direction: Direction, existing: &Card, placed: &Card);

    /// Directions captured after every neighbour has been fed.
    fn affected_directions(&self) -> Directions;

    /// Whether a capture by this rule re-runs propagation from the captured cell.
    fn propagates_side_effects(&self) -> bool;
}

/// A handler for one registered rule.
///
/// Closed over the implemented rules; dispatch is a `match`.
#[derive(Clone, Debug)]
pub enum RuleHandler {
    GreaterThan(GreaterThanRule),
    Plus(PlusRule),
}

impl RuleHandler {
    /// The rule this handler evaluates.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleHandler::GreaterThan(_) => RuleKind::GreaterThan,
            RuleHandler::Plus(_) => RuleKind::Plus,
        }
    }
}

impl CaptureRule for RuleHandler {
    fn per_face_step(&mut self, direction: Direction, existing: &Card, placed: &Card) {
        match self {
            RuleHandler::GreaterThan(rule) => rule.per_face_step(direction, existing, placed),
            RuleHandler::Plus(rule) => rule.per_face_step(direction, existing, placed),
        }
    }

    fn affected_directions(&self) -> Directions {
        match self {
            RuleHandler::GreaterThan(rule) => rule.affected_directions(),
            RuleHandler::Plus(rule) => rule.affected_directions(),
        }
    }

    fn propagates_side_effects(&self) -> bool {
        match self {
            RuleHandler::GreaterThan(rule) => rule.propagates_side_effects(),
            RuleHandler::Plus(rule) => rule.propagates_side_effects(),
        }
    }
}
