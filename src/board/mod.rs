//! The playing field: grid, placement, capture propagation, rendering.
//!
//! ## Key Types
//!
//! - `Coordinate`: Zero-based `(x, y)` cell address
//! - `Board`: 3×3 grid of cards, owner counts, capture propagation
//! - `Capture`: One ownership change reported by `Board::place`

pub mod coord;
pub mod grid;
mod render;

pub use coord::{Coordinate, FIELD_CAPACITY, FIELD_HEIGHT, FIELD_WIDTH};
pub use grid::{Board, Capture};
