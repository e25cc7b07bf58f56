//! Card catalog for name lookup.
//!
//! The `CardCatalog` stores every card definition available to a match and
//! deals fresh `Card`s by name.

use rustc_hash::FxHashMap;

use super::card::Card;
use super::category::Category;
use super::definition::CardDefinition;
use crate::core::{CardError, Ownership};

/// Catalog of card definitions keyed by name.
///
/// ## Example
///
/// ```
/// use rust_triad::cards::CardCatalog;
/// use rust_triad::core::Ownership;
///
/// let catalog = CardCatalog::standard();
/// let card = catalog.instantiate("Tonberry", Ownership::Npc).unwrap();
/// assert_eq!(card.name(), "Tonberry");
/// assert!(catalog.instantiate("Chocobo", Ownership::Npc).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardDefinition>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock card list.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (name, values) in [
            ("Dodo", [4, 4, 2, 3]),
            ("Tonberry", [2, 2, 2, 7]),
            ("Sabotender", [3, 4, 3, 3]),
            ("Spriggan", [4, 2, 3, 4]),
            ("Pudding", [5, 2, 4, 3]),
            ("Bomb", [3, 3, 4, 3]),
            ("Mandragora", [3, 4, 2, 5]),
            ("Coblyn", [4, 3, 3, 3]),
        ] {
            catalog.register(CardDefinition::new(name, values, Category::None));
        }
        catalog
    }

    /// Load a catalog from a JSON list of definitions.
    ///
    /// Rejects duplicate names and face values outside `1..=10`.
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        let definitions: Vec<CardDefinition> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for def in definitions {
            def.validate()?;
            if catalog.contains(&def.name) {
                return Err(CardError::Duplicate(def.name));
            }
            catalog.register(def);
        }
        Ok(catalog)
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.name) {
            panic!("Card {:?} already registered", card.name);
        }
        self.cards.insert(card.name.clone(), card);
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name)
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Deal a fresh card by name.
    pub fn instantiate(&self, name: &str, owner: Ownership) -> Result<Card, CardError> {
        self.get(name)
            .map(|def| def.instantiate(owner))
            .ok_or_else(|| CardError::UnknownCard(name.to_string()))
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Card names in sorted order.
    ///
    /// Sorted so that seeded random deals are reproducible.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.cards.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
