//! Placement history entries.

use serde::{Deserialize, Serialize};

use crate::board::{Capture, Coordinate};
use crate::core::Ownership;

/// One accepted placement and everything it captured.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Position in the match, starting at 0.
    pub sequence: u32,

    /// Owner of the placed card.
    pub owner: Ownership,

    /// Name of the placed card.
    pub card: String,

    /// Where it was placed.
    pub at: Coordinate,

    /// Captures it caused, in flip order.
    pub captures: Vec<Capture>,
}

impl PlacementRecord {
    /// Number of cards that changed owner.
    #[must_use]
    pub fn flips(&self) -> usize {
        self.captures.len()
    }
}
