//! Card faces and the neighbour each face touches.
//!
//! A card exposes four faces. The same `Direction` both indexes a card's
//! own faces and addresses the grid cell touching that face:
//!
//! ```text
//!         Up
//!   Left [  ] Right
//!        Down
//! ```
//!
//! ## Usage
//!
//! ```
//! use rust_triad::core::Direction;
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::Up.offset(), (0, -1));
//! ```

use serde::{Deserialize, Serialize};

/// One of the four orthogonal sides of a card.
///
/// Discriminants match the face order of a card definition
/// (`[left, up, right, down]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// West face.
    Left = 0,
    /// North face.
    Up = 1,
    /// East face.
    Right = 2,
    /// South face.
    Down = 3,
}

impl Direction {
    /// All directions in evaluation order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// The face touching this one on an adjacent card.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// Index into a `[i32; 4]` face array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Grid offset `(dx, dy)` of the neighbour touching this face.
    ///
    /// `y` grows downwards, so `Up` is `(0, -1)`.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}
