//! The 3×3 board and capture propagation.
//!
//! ## Placement
//!
//! `try_place` stores a card in an empty cell and then propagates captures
//! from it:
//!
//! 1. One fresh handler is built per active rule.
//! 2. Every occupied neighbour owned by someone else is fed to every handler.
//! 3. Handlers are read in rule order; each captured neighbour flips to the
//!    placed card's owner.
//! 4. A capture by a chaining rule ("Plus") re-runs propagation from the
//!    captured cell with a new set of handlers.
//!
//! Every flip in one placement goes to the same owner, and only a cell that
//! actually changes owner can chain, so a placement flips at most eight
//! cards and always terminates.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

use super::coord::{Coordinate, FIELD_CAPACITY, FIELD_HEIGHT, FIELD_WIDTH};
use crate::cards::Card;
use crate::core::{Direction, Ownership};
use crate::rules::{CaptureRule, RuleKind, RuleSet};

/// One ownership change caused by a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The captured cell.
    pub at: Coordinate,
    /// Owner before the capture.
    pub from: Ownership,
    /// Owner after the capture.
    pub to: Ownership,
    /// Rule that captured it.
    pub rule: RuleKind,
    /// 0 for captures by the placed card, +1 per chain step.
    pub depth: usize,
}

/// The playing field.
///
/// Owns every card placed on it. Card counts per owner are cached and
/// recomputed on the first query after any change.
///
/// ## Example
///
/// ```
/// use rust_triad::board::Board;
/// use rust_triad::cards::{Card, Category};
/// use rust_triad::core::Ownership;
/// use rust_triad::rules::RuleSet;
///
/// let mut board = Board::new(RuleSet::default());
/// let weak = Card::new("Weak", [1, 1, 1, 1], Category::None).with_owner(Ownership::Npc);
/// let strong = Card::new("Strong", [1, 1, 2, 1], Category::None).with_owner(Ownership::Player);
///
/// assert!(board.try_place(1, 0, weak));
/// assert!(board.try_place(0, 0, strong));
/// assert_eq!(board.owner_count(Ownership::Player), 2);
/// assert!(!board.try_place(0, 0, Card::uniform(9, Category::None)));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    /// Cells indexed `[y][x]`.
    cells: [[Option<Card>; FIELD_WIDTH]; FIELD_HEIGHT],

    cards_on_field: usize,

    /// Empty means stale.
    owner_counts: OnceCell<FxHashMap<Ownership, usize>>,

    rules: RuleSet,
}

impl Board {
    /// Create an empty board playing by `rules`.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            cells: Default::default(),
            cards_on_field: 0,
            owner_counts: OnceCell::new(),
            rules,
        }
    }

    /// The active rules.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Place a card at `(x, y)`.
    ///
    /// Returns false, leaving the board untouched, if the board is full or
    /// the cell is occupied.
    ///
    /// Panics if `(x, y)` is off the board.
    pub fn try_place(&mut self, x: usize, y: usize, card: Card) -> bool {
        self.place(Coordinate::new(x, y), card).is_some()
    }

    /// Place a card and report every capture it caused, in flip order.
    ///
    /// Returns `None` under the same conditions `try_place` returns false.
    pub fn place(&mut self, at: Coordinate, card: Card) -> Option<Vec<Capture>> {
        assert_on_board(at);

        if self.is_full() {
            tracing::debug!(%at, "board is full");
            return None;
        }
        if self.cells[at.y][at.x].is_some() {
            tracing::debug!(%at, "cell is occupied");
            return None;
        }

        tracing::debug!(%at, card = %card, owner = %card.owner(), "placing card");
        self.cells[at.y][at.x] = Some(card);
        self.cards_on_field += 1;
        self.owner_counts.take();

        let mut captures = Vec::new();
        self.propagate(at, 0, &mut captures);
        Some(captures)
    }

    /// Resolve captures around the card at `at`.
    fn propagate(&mut self, at: Coordinate, depth: usize, captures: &mut Vec<Capture>) {
        let Some(placed) = self.card_at(at) else {
            return;
        };
        let owner = placed.owner();
        let mut handlers = self.rules.handlers();

        for direction in Direction::ALL {
            let Some(existing) = at.neighbor(direction).and_then(|n| self.card_at(n)) else {
                continue;
            };
            // `Match` only places cards of joined seats, so any other owner is the opponent.
            if existing.owner() == owner {
                continue;
            }
            for handler in &mut handlers {
                handler.per_face_step(direction, existing, placed);
            }
        }

        for handler in handlers {
            let rule = handler.kind();
            let chains = handler.propagates_side_effects();

            for direction in handler.affected_directions() {
                let Some(target_at) = at.neighbor(direction) else {
                    continue;
                };
                let Some(target) = self.card_mut(target_at) else {
                    continue;
                };
                let previous = target.owner();
                if previous == owner {
                    // Already taken by an earlier rule or chain step.
                    continue;
                }
                target.set_owner(owner);
                self.owner_counts.take();

                tracing::debug!(at = %target_at, from = %previous, to = %owner, %rule, depth, "captured");
                captures.push(Capture {
                    at: target_at,
                    from: previous,
                    to: owner,
                    rule,
                    depth,
                });

                if chains {
                    self.propagate(target_at, depth + 1, captures);
                }
            }
        }
    }

    /// Number of cards owned by `ownership` (0 if none).
    #[must_use]
    pub fn owner_count(&self, ownership: Ownership) -> usize {
        self.owner_counts()
            .get(&ownership)
            .copied()
            .unwrap_or(0)
    }

    /// Card counts per owner; owners with no cards are absent.
    #[must_use]
    pub fn owner_counts(&self) -> &FxHashMap<Ownership, usize> {
        self.owner_counts.get_or_init(|| {
            let mut counts = FxHashMap::default();
            for (_, card) in self.cells() {
                *counts.entry(card.owner()).or_insert(0) += 1;
            }
            counts
        })
    }

    /// Clear every cell for a new match. Rules are kept.
    pub fn reset(&mut self) {
        self.cells = Default::default();
        self.cards_on_field = 0;
        self.owner_counts.take();
    }

    /// The card at `(x, y)`, if any.
    ///
    /// Panics if `(x, y)` is off the board.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&Card> {
        let at = Coordinate::new(x, y);
        assert_on_board(at);
        self.card_at(at)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn cards_on_field(&self) -> usize {
        self.cards_on_field
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards_on_field == FIELD_CAPACITY
    }

    /// Check if a cell is free. Off-board cells are never free.
    #[must_use]
    pub fn is_empty_at(&self, at: Coordinate) -> bool {
        at.is_on_board() && self.cells[at.y][at.x].is_none()
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &Card)> {
        Coordinate::all().filter_map(move |at| self.card_at(at).map(|card| (at, card)))
    }

    /// Free cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |&at| self.is_empty_at(at))
    }

    /// The card at `at`; `None` for empty or off-board cells.
    #[must_use]
    pub fn card_at(&self, at: Coordinate) -> Option<&Card> {
        self.cells.get(at.y)?.get(at.x)?.as_ref()
    }

    fn card_mut(&mut self, at: Coordinate) -> Option<&mut Card> {
        self.cells.get_mut(at.y)?.get_mut(at.x)?.as_mut()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.cards_on_field == other.cards_on_field
            && self.rules == other.rules
    }
}

impl Eq for Board {}

fn assert_on_board(at: Coordinate) {
    assert!(at.x < FIELD_WIDTH, "x coordinate {} is off the board", at.x);
    assert!(at.y < FIELD_HEIGHT, "y coordinate {} is off the board", at.y);
}
