//! The "Plus" capture rule.
//!
//! For each opposing neighbour, add the placed card's face to the
//! neighbour's touching face. Neighbours whose sums match at least one other
//! neighbour's sum are captured. A sum seen only once captures nothing.
//!
//! Plus captures chain: each captured card re-runs propagation from its own
//! cell.

use rustc_hash::FxHashMap;

use super::handler::{CaptureRule, Directions};
use crate::cards::Card;
use crate::core::Direction;

/// Smallest group of equal sums that captures.
const MIN_GROUP_SIZE: usize = 2;

/// Accumulator for the "Plus" rule: directions grouped by face sum.
#[derive(Clone, Debug, Default)]
pub struct PlusRule {
    /// Sums are widened so extreme face values cannot overflow.
    groups: FxHashMap<i64, Directions>,
}

impl PlusRule {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaptureRule for PlusRule {
    fn per_face_step(&mut self, direction: Direction, existing: &Card, placed: &Card) {
        let sum =
            i64::from(existing.value(direction.opposite())) + i64::from(placed.value(direction));
        tracing::trace!(%direction, sum, "plus comparison");

        let group = self.groups.entry(sum).or_default();
        if !group.contains(&direction) {
            group.push(direction);
        }
    }

    fn affected_directions(&self) -> Directions {
        let mut captured: Directions = self
            .groups
            .values()
            .filter(|group| group.len() >= MIN_GROUP_SIZE)
            .flat_map(|group| group.iter().copied())
            .collect();
        captured.sort_unstable();
        captured
    }

    fn propagates_side_effects(&self) -> bool {
        true
    }
}
