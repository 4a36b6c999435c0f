//! Card definitions - static card data.
//!
//! A `Card` is immutable. Decks in the game state hold `CardId`s, which
//! index into the static card list of their deck.

use serde::{Deserialize, Serialize};

use crate::board::SpaceId;

/// Position of a card within its deck's static list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card does when drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CardEffect {
    /// Bank pays the drawer.
    Collect { amount: i64 },
    /// Drawer pays the bank (debt-capable).
    Pay { amount: i64 },
    /// Teleport to `position`. Collects the GO salary only when `pass_go`
    /// is set and the target is numerically below the start.
    #[serde(rename_all = "camelCase")]
    Advance { position: SpaceId, pass_go: bool },
    /// Relative move, possibly backwards. Never collects the GO salary.
    MoveSpaces { spaces: i32 },
    /// Advance to the next utility; rent is a fresh roll times ten.
    AdvanceNearestUtility,
    /// Advance to the next railroad; rent is doubled.
    AdvanceNearestRailroad,
    GoToJail,
    /// Every other active player pays the drawer.
    CollectEachPlayer { amount: i64 },
    /// The drawer pays every other active player.
    PayEachPlayer { amount: i64 },
    /// Repairs: pay per house and per hotel owned.
    #[serde(rename_all = "camelCase")]
    PropertyExpense { per_house: i64, per_hotel: i64 },
    /// Collect per house and per hotel owned.
    #[serde(rename_all = "camelCase")]
    PropertyCollect { per_house: i64, per_hotel: i64 },
    /// Kept by the drawer until used or forfeited.
    GetOutOfJail,
    AdvanceToGo,
}

/// Static card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Stable slug, unique across both decks.
    pub slug: &'static str,
    pub description: &'static str,
    pub effect: CardEffect,
}

impl Card {
    pub(crate) const fn new(slug: &'static str, description: &'static str, effect: CardEffect) -> Self {
        Self {
            slug,
            description,
            effect,
        }
    }

    /// Whether this card is kept by the drawer instead of returning to the deck.
    #[must_use]
    pub const fn is_get_out_of_jail(&self) -> bool {
        matches!(self.effect, CardEffect::GetOutOfJail)
    }
}
