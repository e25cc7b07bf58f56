//! The match controller.
//!
//! A `Match` owns the board, one hand per seat and the placement history.
//! It is the only entry point that plays cards in a full game: every
//! placement goes through `play_card`, which updates the per-category counts
//! and records what was captured.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::hand::Hand;
use super::outcome::MatchOutcome;
use super::record::PlacementRecord;
use crate::board::{Board, Coordinate};
use crate::cards::{Card, CardCatalog, Category};
use crate::core::{CardError, ConfigError, GameRng, HandError, MatchConfig, Ownership};
use crate::rules::RuleSet;

/// A single match between the two seats.
///
/// ## Example
///
/// ```
/// use rust_triad::core::{MatchConfig, Ownership};
/// use rust_triad::game::Match;
///
/// let mut game = Match::new(&MatchConfig::default()).unwrap();
/// game.add_player(Ownership::Player);
/// game.add_player(Ownership::Npc);
///
/// assert!(game.play_named(Ownership::Player, "Dodo", 0, 0).unwrap());
/// assert_eq!(game.card_count_for_owner(Ownership::Player), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Match {
    board: Board,
    catalog: CardCatalog,
    hand_size: usize,

    /// Seats in join order.
    players: SmallVec<[Ownership; 2]>,
    hands: FxHashMap<Ownership, Hand>,

    category_counts: FxHashMap<Category, usize>,
    history: Vector<PlacementRecord>,

    deal_rng: GameRng,
    flip_rng: GameRng,
}

impl Match {
    /// Create a match from a validated configuration, using the standard
    /// card catalog.
    pub fn new(config: &MatchConfig) -> Result<Self, ConfigError> {
        let rules = config.validate()?;
        let rng = GameRng::new(config.seed);
        info!(rules = %rules, seed = config.seed, "new match");

        Ok(Self {
            board: Board::new(rules),
            catalog: CardCatalog::standard(),
            hand_size: config.hand_size,
            players: SmallVec::new(),
            hands: FxHashMap::default(),
            category_counts: FxHashMap::default(),
            history: Vector::new(),
            deal_rng: rng.for_context("deal"),
            flip_rng: rng.for_context("coin_flip"),
        })
    }

    /// Replace the card catalog used by `play_named` and dealing.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Register a seat and give it an empty hand.
    ///
    /// Panics if `ownership` is `None` or already joined.
    pub fn add_player(&mut self, ownership: Ownership) {
        assert!(ownership.is_seat(), "{ownership} cannot join a match");
        assert!(
            !self.hands.contains_key(&ownership),
            "{ownership} has already joined"
        );

        self.players.push(ownership);
        self.hands.insert(ownership, Hand::new(ownership));
        info!(seat = %ownership, "player joined");
    }

    /// Seats in join order.
    #[must_use]
    pub fn players(&self) -> &[Ownership] {
        &self.players
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, ownership: Ownership) -> Option<&Hand> {
        self.hands.get(&ownership)
    }

    /// Mutable access to a seat's hand.
    pub fn hand_mut(&mut self, ownership: Ownership) -> Option<&mut Hand> {
        self.hands.get_mut(&ownership)
    }

    /// The active rules.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        self.board.rules()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The catalog used for named cards and dealing.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Every accepted placement, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlacementRecord> {
        &self.history
    }

    /// Place a card owned by whoever `card.owner()` says.
    ///
    /// Returns false if the board is full or the cell is occupied.
    /// Panics if `(x, y)` is off the board or the owner has not joined.
    pub fn play_card(&mut self, card: Card, x: usize, y: usize) -> bool {
        let at = Coordinate::new(x, y);
        let owner = card.owner();
        assert!(
            self.hands.contains_key(&owner),
            "{owner} has not joined the match"
        );
        let family = card.family();
        let name = card.name().to_string();

        let Some(captures) = self.board.place(at, card) else {
            warn!(%at, card = %name, "placement rejected");
            return false;
        };

        *self.category_counts.entry(family).or_insert(0) += 1;
        debug!(%at, card = %name, flips = captures.len(), "card played");

        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push_back(PlacementRecord {
            sequence,
            owner,
            card: name,
            at,
            captures,
        });
        true
    }

    /// Play the card in a hand slot.
    ///
    /// The slot is emptied only if the placement is accepted; a rejected
    /// placement returns `Ok(false)` and leaves the hand untouched.
    pub fn play_from_hand(
        &mut self,
        owner: Ownership,
        index: usize,
        x: usize,
        y: usize,
    ) -> Result<bool, HandError> {
        let at = Coordinate::new(x, y);
        assert!(at.is_on_board(), "{at} is off the board");

        let hand = self
            .hands
            .get_mut(&owner)
            .ok_or(HandError::UnknownPlayer(owner))?;
        if hand.get(index).is_none() {
            return Err(HandError::EmptySlot(index));
        }
        if self.board.is_full() || !self.board.is_empty_at(at) {
            warn!(%at, seat = %owner, slot = index, "placement rejected");
            return Ok(false);
        }

        let card = hand.take(index)?;
        Ok(self.play_card(card, x, y))
    }

    /// Play a fresh copy of a catalog card for `owner`.
    ///
    /// Panics like `play_card` if `owner` has not joined.
    pub fn play_named(
        &mut self,
        owner: Ownership,
        name: &str,
        x: usize,
        y: usize,
    ) -> Result<bool, CardError> {
        let card = self.catalog.instantiate(name, owner)?;
        Ok(self.play_card(card, x, y))
    }

    /// Cards on the board currently owned by `ownership`.
    #[must_use]
    pub fn card_count_for_owner(&self, ownership: Ownership) -> usize {
        self.board.owner_count(ownership)
    }

    /// Cards of a family played this game.
    #[must_use]
    pub fn card_count_for_category(&self, category: Category) -> usize {
        self.category_counts.get(&category).copied().unwrap_or(0)
    }

    /// Deal random catalog cards until the seat holds the configured hand
    /// size. Cards are drawn with replacement.
    pub fn deal_random_hand(&mut self, owner: Ownership) -> Result<(), HandError> {
        let hand = self
            .hands
            .get_mut(&owner)
            .ok_or(HandError::UnknownPlayer(owner))?;
        let names = self.catalog.names();

        while hand.dealt() < self.hand_size {
            let Some(name) = self.deal_rng.choose(&names) else {
                warn!(seat = %owner, "card catalog is empty");
                break;
            };
            let card = self
                .catalog
                .instantiate(name, owner)
                .map_err(|_| HandError::UnknownCard((*name).to_string()))?;
            hand.add_card(card)?;
        }

        debug!(seat = %owner, cards = hand.len(), "dealt hand");
        Ok(())
    }

    /// Pick which joined seat moves first. `None` if nobody has joined.
    pub fn choose_starting_player(&mut self) -> Option<Ownership> {
        let first = self.flip_rng.choose(&self.players).copied();
        if let Some(seat) = first {
            info!(seat = %seat, "won the coin flip");
        }
        first
    }

    /// The outcome once the board is full; `None` while the game is running.
    #[must_use]
    pub fn result(&self) -> Option<MatchOutcome> {
        if !self.board.is_full() {
            return None;
        }
        Some(MatchOutcome::from_counts(
            self.board.owner_count(Ownership::Player),
            self.board.owner_count(Ownership::Npc),
        ))
    }

    /// Clear the board, category counts and history for another game.
    ///
    /// Seats, hands and rules are kept.
    pub fn reset_for_new_game(&mut self) {
        self.board.reset();
        self.category_counts.clear();
        self.history = Vector::new();
        info!("board reset for new game");
    }
}
