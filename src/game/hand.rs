//! Cards a seat still holds.
//!
//! A hand has up to five slots filled in order. Playing a card empties its
//! slot without shifting the others, so slot indices stay valid for the
//! whole match.

use smallvec::SmallVec;

use crate::cards::{Card, CardCatalog};
use crate::core::{HandError, Ownership};

/// Most cards a hand can be dealt.
pub const MAX_CARDS_IN_HAND: usize = 5;

/// One seat's hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    owner: Ownership,
    slots: SmallVec<[Option<Card>; MAX_CARDS_IN_HAND]>,
}

impl Hand {
    /// Create an empty hand for `owner`.
    #[must_use]
    pub fn new(owner: Ownership) -> Self {
        Self {
            owner,
            slots: SmallVec::new(),
        }
    }

    /// The seat holding this hand.
    #[must_use]
    pub fn owner(&self) -> Ownership {
        self.owner
    }

    /// Deal a card into the next slot, handing it to this hand's owner.
    ///
    /// Returns the slot index.
    pub fn add_card(&mut self, mut card: Card) -> Result<usize, HandError> {
        if self.is_full() {
            return Err(HandError::Full {
                max: MAX_CARDS_IN_HAND,
            });
        }
        card.set_owner(self.owner);
        self.slots.push(Some(card));
        Ok(self.slots.len() - 1)
    }

    /// Deal several catalog cards by name.
    ///
    /// Stops at the first unknown name or when the hand fills up.
    pub fn add_many<S: AsRef<str>>(
        &mut self,
        catalog: &CardCatalog,
        names: &[S],
    ) -> Result<(), HandError> {
        for name in names {
            let name = name.as_ref();
            let card = catalog
                .instantiate(name, self.owner)
                .map_err(|_| HandError::UnknownCard(name.to_string()))?;
            self.add_card(card)?;
        }
        Ok(())
    }

    /// The card in a slot, if it has not been played.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots.get(index)?.as_ref()
    }

    /// Find the first unplayed slot holding a card with this name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.cards().find(|(_, card)| card.name() == name).map(|(i, _)| i)
    }

    /// Remove a card from its slot.
    pub fn take(&mut self, index: usize) -> Result<Card, HandError> {
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(HandError::EmptySlot(index))
    }

    /// Unplayed cards with their slot indices.
    pub fn cards(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|card| (i, card)))
    }

    /// Number of unplayed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards().count()
    }

    /// Check if every dealt card has been played (or none were dealt).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if all five slots have been dealt.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() == MAX_CARDS_IN_HAND
    }

    /// Number of slots dealt so far, played or not.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.slots.len()
    }

    /// Discard every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
