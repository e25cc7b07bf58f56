//! The basic capture rule.
//!
//! A neighbour is captured when the placed card's face is strictly greater
//! than the neighbour's touching face. Each neighbour is judged on its own.

use super::handler::{CaptureRule, Directions};
use crate::cards::Card;
use crate::core::Direction;

/// Accumulator for the "Greater Than" rule.
#[derive(Clone, Debug, Default)]
pub struct GreaterThanRule {
    captured: Directions,
}

impl GreaterThanRule {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaptureRule for GreaterThanRule {
    fn per_face_step(&mut self, direction: Direction, existing: &Card, placed: &Card) {
        let attack = placed.value(direction);
        let defence = existing.value(direction.opposite());
        tracing::trace!(%direction, attack, defence, "greater-than comparison");

        if defence < attack && !self.captured.contains(&direction) {
            self.captured.push(direction);
        }
    }

    fn affected_directions(&self) -> Directions {
        let mut captured = self.captured.clone();
        captured.sort_unstable();
        captured
    }

    fn propagates_side_effects(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    fn card(faces: [i32; 4]) -> Card {
        Card::new("Test", faces, Category::None)
    }

    #[test]
    fn test_strictly_greater_captures() {
        let mut rule = GreaterThanRule::new();
        // placed right face 2 vs existing left face 1
        rule.per_face_step(Direction::Right, &card([1, 0, 0, 0]), &card([0, 0, 2, 0]));
        assert_eq!(rule.affected_directions().as_slice(), &[Direction::Right]);
    }

    #[test]
    fn test_equal_or_lower_does_not_capture() {
        let mut rule = GreaterThanRule::new();
        rule.per_face_step(Direction::Right, &card([2, 0, 0, 0]), &card([0, 0, 2, 0]));
        rule.per_face_step(Direction::Down, &card([0, 9, 0, 0]), &card([0, 0, 0, 2]));
        assert!(rule.affected_directions().is_empty());
    }

    #[test]
    fn test_uses_touching_faces_only() {
        let mut rule = GreaterThanRule::new();
        // Existing card is strong everywhere except its down face.
        let existing = card([9, 9, 9, 1]);
        let placed = card([0, 2, 0, 0]);
        rule.per_face_step(Direction::Up, &existing, &placed);
        assert_eq!(rule.affected_directions().as_slice(), &[Direction::Up]);
    }

    #[test]
    fn test_modifier_counts() {
        let mut rule = GreaterThanRule::new();
        let existing = card([3, 3, 3, 3]);
        let placed = card([3, 3, 3, 3]).with_modifier(1);
        rule.per_face_step(Direction::Left, &existing, &placed);
        assert_eq!(rule.affected_directions().as_slice(), &[Direction::Left]);
    }

    #[test]
    fn test_result_is_in_canonical_order() {
        let mut rule = GreaterThanRule::new();
        let weak = card([0, 0, 0, 0]);
        let placed = card([5, 5, 5, 5]);
        for dir in [Direction::Down, Direction::Left, Direction::Up] {
            rule.per_face_step(dir, &weak, &placed);
        }
        assert_eq!(
            rule.affected_directions().as_slice(),
            &[Direction::Left, Direction::Up, Direction::Down]
        );
        assert!(!rule.propagates_side_effects());
    }
}
