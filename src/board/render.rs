//! Plain-text rendering of the board.
//!
//! Each card is drawn as a 3×3 block with its effective face values in hex
//! and its owner's tag in the middle:
//!
//! ```text
//! +---+---+---+
//! | 4 |   |   |
//! |4P2|   |   |
//! | 3 |   |   |
//! +---+---+---+
//! ```

use std::fmt::{self, Write};

use super::coord::{Coordinate, FIELD_HEIGHT, FIELD_WIDTH};
use super::grid::Board;
use crate::cards::Card;
use crate::core::Direction;

const CELL_ROWS: usize = 3;

/// Single hex digit for a face value; `?` outside `0..=15`.
fn face_char(value: i32) -> char {
    u32::try_from(value)
        .ok()
        .and_then(|v| char::from_digit(v, 16))
        .map_or('?', |c| c.to_ascii_uppercase())
}

fn draw_cell_row(f: &mut fmt::Formatter<'_>, card: Option<&Card>, row: usize) -> fmt::Result {
    let Some(card) = card else {
        return f.write_str("   ");
    };
    match row {
        0 => write!(f, " {} ", face_char(card.value(Direction::Up))),
        1 => write!(
            f,
            "{}{}{}",
            face_char(card.value(Direction::Left)),
            card.owner().tag(),
            face_char(card.value(Direction::Right)),
        ),
        _ => write!(f, " {} ", face_char(card.value(Direction::Down))),
    }
}

fn draw_separator(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for _ in 0..FIELD_WIDTH {
        f.write_str("+---")?;
    }
    f.write_str("+\n")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw_separator(f)?;
        for y in 0..FIELD_HEIGHT {
            for row in 0..CELL_ROWS {
                for x in 0..FIELD_WIDTH {
                    f.write_char('|')?;
                    draw_cell_row(f, self.card_at(Coordinate::new(x, y)), row)?;
                }
                f.write_str("|\n")?;
            }
            draw_separator(f)?;
        }
        Ok(())
    }
}
