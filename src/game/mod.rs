//! Match flow: hands, seats, placement history, outcome.
//!
//! ## Key Types
//!
//! - `Hand`: Up to five cards held by a seat
//! - `Match`: Board plus hands; routes every placement
//! - `PlacementRecord`: One accepted placement and its captures
//! - `MatchOutcome`: Winner or draw on a full board

pub mod controller;
pub mod hand;
pub mod outcome;
pub mod record;

pub use controller::Match;
pub use hand::{Hand, MAX_CARDS_IN_HAND};
pub use outcome::MatchOutcome;
pub use record::PlacementRecord;
