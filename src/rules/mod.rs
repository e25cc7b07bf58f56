//! Capture rules.
//!
//! A rule decides which neighbours of a just-placed card change owner.
//! Rules are composed additively: a neighbour captured by any active rule
//! flips, and no rule can veto another.
//!
//! - `RuleKind`: configuration identifier
//! - `CaptureRule`: per-placement accumulator protocol
//! - `GreaterThanRule`, `PlusRule`: the implemented rules
//! - `RuleRegistry`: static kind → handler table
//! - `RuleSet`: validated list of active rules

pub mod greater_than;
pub mod handler;
pub mod kind;
pub mod plus;
pub mod registry;

pub use greater_than::GreaterThanRule;
pub use handler::{CaptureRule, Directions, RuleHandler};
pub use kind::RuleKind;
pub use plus::PlusRule;
pub use registry::{RuleEntry, RuleRegistry, RuleSet};
