//! Card families.
//!
//! Every card belongs to one family. The capture rules ignore it; the match
//! controller keeps per-family counts for family-scoped effects.

use serde::{Deserialize, Serialize};

/// The family a card belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// No family.
    #[default]
    None,
    Beastman,
    Primal,
    Garlean,
    Scion,
}

impl Category {
    /// Every family, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::None,
        Category::Beastman,
        Category::Primal,
        Category::Garlean,
        Category::Scion,
    ];
}
