//! Card ownership.
//!
//! A match has two seats, `Player` and `Npc`. `Ownership::None` marks a
//! card that has not been dealt to anyone yet; it never owns a seat.

use serde::{Deserialize, Serialize};

/// Who currently owns a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ownership {
    /// Unowned.
    #[default]
    None,
    /// The human seat.
    Player,
    /// The computer seat.
    Npc,
}

impl Ownership {
    /// The two seats that can register for a match.
    pub const PLAYERS: [Ownership; 2] = [Ownership::Player, Ownership::Npc];

    /// The opposing seat. `None` has no opponent.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Ownership::Player => Ownership::Npc,
            Ownership::Npc => Ownership::Player,
            Ownership::None => Ownership::None,
        }
    }

    /// Check if this is one of the two seats.
    #[must_use]
    pub const fn is_seat(self) -> bool {
        !matches!(self, Ownership::None)
    }

    /// Single-letter tag used by the text renderer.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Ownership::None => '-',
            Ownership::Player => 'P',
            Ownership::Npc => 'N',
        }
    }
}

impl std::fmt::Display for Ownership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ownership::None => "nobody",
            Ownership::Player => "Player",
            Ownership::Npc => "NPC",
        };
        f.write_str(name)
    }
}
