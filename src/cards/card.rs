//! Playable cards.
//!
//! A `Card` carries four face values, a modifier applied to every face, a
//! family and an owner. Face values are always read through
//! [`Card::value`], which adds the modifier.
//!
//! ## Identity
//!
//! Once placed, a card stays the same value in the same cell for the rest of
//! the match. Capturing it only rewrites its `owner`, and only the board's
//! capture logic does that.

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::core::{CardError, Direction, Ownership};

/// Number of faces on a card.
pub const CARD_FACE_COUNT: usize = 4;

/// Lowest printed face value.
pub const CARD_MIN_FACE_VALUE: i32 = 1;

/// Highest printed face value ("A" on the card).
pub const CARD_MAX_FACE_VALUE: i32 = 10;

/// Check that every printed face is in range.
pub fn check_faces(name: &str, faces: &[i32; CARD_FACE_COUNT]) -> Result<(), CardError> {
    match faces
        .iter()
        .find(|v| !(CARD_MIN_FACE_VALUE..=CARD_MAX_FACE_VALUE).contains(*v))
    {
        Some(&value) => Err(CardError::FaceRange {
            name: name.to_string(),
            value,
        }),
        None => Ok(()),
    }
}

/// A card that can be held in hand and placed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    name: String,

    /// Face values in `[left, up, right, down]` order.
    faces: [i32; CARD_FACE_COUNT],

    /// Added to every face when queried.
    #[serde(default)]
    modifier: i32,

    family: Category,

    #[serde(default)]
    owner: Ownership,
}

impl Card {
    /// Create an unowned card.
    #[must_use]
    pub fn new(name: impl Into<String>, faces: [i32; CARD_FACE_COUNT], family: Category) -> Self {
        Self {
            name: name.into(),
            faces,
            modifier: 0,
            family,
            owner: Ownership::None,
        }
    }

    /// Create a card from a slice of face values.
    ///
    /// Rejects anything other than exactly four values, each in
    /// `CARD_MIN_FACE_VALUE..=CARD_MAX_FACE_VALUE`.
    pub fn from_values(
        name: impl Into<String>,
        values: &[i32],
        family: Category,
    ) -> Result<Self, CardError> {
        let name = name.into();
        let faces: [i32; CARD_FACE_COUNT] =
            values.try_into().map_err(|_| CardError::FaceCount {
                name: name.clone(),
                found: values.len(),
            })?;
        check_faces(&name, &faces)?;
        Ok(Self::new(name, faces, family))
    }

    /// A card with the same value on every face.
    #[must_use]
    pub fn uniform(value: i32, family: Category) -> Self {
        Self::new(format!("Uniform {value}"), [value; CARD_FACE_COUNT], family)
    }

    /// Set the owner (builder pattern).
    #[must_use]
    pub fn with_owner(mut self, owner: Ownership) -> Self {
        self.owner = owner;
        self
    }

    /// Set the modifier (builder pattern).
    #[must_use]
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Face value in a direction, modifier included. Saturates at the
    /// `i32` bounds.
    #[must_use]
    pub fn value(&self, direction: Direction) -> i32 {
        self.faces[direction.index()].saturating_add(self.modifier)
    }

    /// Printed face value, without the modifier.
    #[must_use]
    pub fn base_value(&self, direction: Direction) -> i32 {
        self.faces[direction.index()]
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Card family.
    #[must_use]
    pub fn family(&self) -> Category {
        self.family
    }

    /// Current owner.
    #[must_use]
    pub fn owner(&self) -> Ownership {
        self.owner
    }

    /// Current modifier.
    #[must_use]
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Change the modifier applied to every face.
    pub fn set_modifier(&mut self, modifier: i32) {
        self.modifier = modifier;
    }

    /// Hand the card to a new owner.
    ///
    /// Crate-visible so that only dealing and capture can change ownership.
    pub(crate) fn set_owner(&mut self, owner: Ownership) {
        self.owner = owner;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{} {} {} {}]",
            self.name,
            self.value(Direction::Left),
            self.value(Direction::Up),
            self.value(Direction::Right),
            self.value(Direction::Down),
        )
    }
}
