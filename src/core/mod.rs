//! Core types: directions, ownership, RNG, configuration, errors.
//!
//! These are shared by every other module and carry no game rules of their own.

pub mod config;
pub mod direction;
pub mod error;
pub mod player;
pub mod rng;

pub use config::MatchConfig;
pub use direction::Direction;
pub use error::{CardError, ConfigError, HandError, RuleError};
pub use player::Ownership;
pub use rng::GameRng;
