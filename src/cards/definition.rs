//! Card definitions - static card data.
//!
//! `CardDefinition` holds the printed properties of a named card. Every
//! `Card` dealt from the catalog is a fresh copy of a definition, so
//! capturing one never affects the catalog.

use serde::{Deserialize, Serialize};

use super::card::{check_faces, Card, CARD_FACE_COUNT};
use super::category::Category;
use crate::core::{CardError, Ownership};

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_triad::cards::{Category, CardDefinition};
/// use rust_triad::core::{Direction, Ownership};
///
/// let dodo = CardDefinition::new("Dodo", [4, 4, 2, 3], Category::None);
/// let card = dodo.instantiate(Ownership::Player);
///
/// assert_eq!(card.value(Direction::Right), 2);
/// assert_eq!(card.owner(), Ownership::Player);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name, unique within a catalog.
    pub name: String,

    /// Face values in `[left, up, right, down]` order.
    pub values: [i32; CARD_FACE_COUNT],

    /// Card family.
    #[serde(default)]
    pub family: Category,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(name: impl Into<String>, values: [i32; CARD_FACE_COUNT], family: Category) -> Self {
        Self {
            name: name.into(),
            values,
            family,
        }
    }

    /// Check that every printed face is in range.
    pub fn validate(&self) -> Result<(), CardError> {
        check_faces(&self.name, &self.values)
    }

    /// Build a playable card owned by `owner`.
    #[must_use]
    pub fn instantiate(&self, owner: Ownership) -> Card {
        Card::new(self.name.clone(), self.values, self.family).with_owner(owner)
    }
}
