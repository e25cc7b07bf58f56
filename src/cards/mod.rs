//! Card system: playable cards, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Four face values plus modifier, family and owner
//! - `Category`: Card family
//! - `CardDefinition`: Printed data for a named card
//! - `CardCatalog`: Name lookup that deals fresh cards

pub mod card;
pub mod catalog;
pub mod category;
pub mod definition;

pub use card::{check_faces, Card, CARD_FACE_COUNT, CARD_MAX_FACE_VALUE, CARD_MIN_FACE_VALUE};
pub use catalog::CardCatalog;
pub use category::Category;
pub use definition::CardDefinition;
