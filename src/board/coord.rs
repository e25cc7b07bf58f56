//! Grid coordinates.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// Board width in cells.
pub const FIELD_WIDTH: usize = 3;

/// Board height in cells.
pub const FIELD_HEIGHT: usize = 3;

/// Number of cells on the board.
pub const FIELD_CAPACITY: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// Zero-based cell coordinate; `(0, 0)` is the top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column, `0..FIELD_WIDTH`.
    pub x: usize,
    /// Row, `0..FIELD_HEIGHT`.
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate. Does not check bounds.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on the board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x < FIELD_WIDTH && self.y < FIELD_HEIGHT
    }

    /// The cell touching the given face, if it is on the board.
    ///
    /// ```
    /// use rust_triad::board::Coordinate;
    /// use rust_triad::core::Direction;
    ///
    /// let corner = Coordinate::new(0, 0);
    /// assert_eq!(corner.neighbor(Direction::Right), Some(Coordinate::new(1, 0)));
    /// assert_eq!(corner.neighbor(Direction::Up), None);
    /// ```
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let next = Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        };
        next.is_on_board().then_some(next)
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..FIELD_HEIGHT).flat_map(|y| (0..FIELD_WIDTH).map(move |x| Coordinate { x, y }))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
