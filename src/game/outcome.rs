//! How a finished match ended.

use serde::{Deserialize, Serialize};

use crate::core::Ownership;

/// Result of a match on a full board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// One seat owns more cards.
    Winner(Ownership),
    /// Both seats own the same number of cards.
    Draw,
}

impl MatchOutcome {
    /// Decide the outcome from each seat's card count.
    #[must_use]
    pub fn from_counts(player: usize, npc: usize) -> Self {
        match player.cmp(&npc) {
            std::cmp::Ordering::Greater => MatchOutcome::Winner(Ownership::Player),
            std::cmp::Ordering::Less => MatchOutcome::Winner(Ownership::Npc),
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Ownership) -> bool {
        matches!(self, MatchOutcome::Winner(w) if *w == seat)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Winner(seat) => write!(f, "{seat} wins"),
            MatchOutcome::Draw => f.write_str("draw"),
        }
    }
}
