//! Player intents.
//!
//! An `Action` is the only way a caller changes the game. The engine decides
//! whether it is legal; illegal actions are no-ops.
//!
//! The serialized form is internally tagged with the wire names the
//! presentation layer uses:
//!
//! ```
//! use monopoly_engine::core::Action;
//!
//! let action: Action = serde_json::from_str(r#"{"type":"ROLL","values":[3,4]}"#).unwrap();
//! assert_eq!(action, Action::Roll { values: [3, 4] });
//!
//! let unknown: Action = serde_json::from_str(r#"{"type":"TRADE"}"#).unwrap();
//! assert_eq!(unknown, Action::Unrecognized);
//! ```

use serde::{Deserialize, Serialize};

use crate::board::SpaceId;

/// One of the two card decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckKind {
    Chance,
    Community,
}

impl DeckKind {
    /// Both decks, chance first.
    pub const ALL: [DeckKind; 2] = [DeckKind::Chance, DeckKind::Community];
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::Chance => write!(f, "Chance"),
            DeckKind::Community => write!(f, "Community Chest"),
        }
    }
}

/// A discrete player intent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Roll with caller-supplied dice values (each 1..=6).
    Roll { values: [u8; 2] },

    /// Accept or decline the outstanding purchase offer.
    #[serde(rename_all = "camelCase")]
    ResolvePurchase { space_id: SpaceId, buy: bool },

    /// Pass the turn to the next active player.
    EndTurn,

    /// Add one house (or the hotel) to an owned property.
    #[serde(rename_all = "camelCase")]
    Build { space_id: SpaceId },

    /// Sell one house (or the hotel) back to the bank at half price.
    #[serde(rename_all = "camelCase")]
    Sell { space_id: SpaceId },

    /// Pay the pending debt now that funds suffice.
    ResolveDebt,

    /// Give up: the current player goes bankrupt.
    DeclareBankruptcy,

    /// Leave jail using a held card from `deck`.
    UseGetOutOfJailCard { deck: DeckKind },

    /// Leave jail by paying bail.
    PayBail,

    /// Any tag the engine does not know. Dispatches as a no-op.
    #[serde(other)]
    Unrecognized,
}

/// The kind of an action, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Roll,
    ResolvePurchase,
    EndTurn,
    Build,
    Sell,
    ResolveDebt,
    DeclareBankruptcy,
    UseGetOutOfJailCard,
    PayBail,
}

impl Action {
    /// The kind of this action, `None` for `Unrecognized`.
    #[must_use]
    pub fn kind(&self) -> Option<ActionKind> {
        Some(match self {
            Action::Roll { .. } => ActionKind::Roll,
            Action::ResolvePurchase { .. } => ActionKind::ResolvePurchase,
            Action::EndTurn => ActionKind::EndTurn,
            Action::Build { .. } => ActionKind::Build,
            Action::Sell { .. } => ActionKind::Sell,
            Action::ResolveDebt => ActionKind::ResolveDebt,
            Action::DeclareBankruptcy => ActionKind::DeclareBankruptcy,
            Action::UseGetOutOfJailCard { .. } => ActionKind::UseGetOutOfJailCard,
            Action::PayBail => ActionKind::PayBail,
            Action::Unrecognized => return None,
        })
    }
}
