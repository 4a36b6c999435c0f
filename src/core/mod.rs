//! Core engine types: players, state, actions, RNG, configuration.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, DeckKind};
pub use config::{ConfigError, GameConfig, Seat};
pub use player::{JailCards, Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{
    ActiveCard, AfterPayment, Dice, GameLog, GameState, PendingDebt, PendingPurchase, PerDeck, RentContext,
};
