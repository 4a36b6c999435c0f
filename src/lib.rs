//! # monopoly-engine
//!
//! A deterministic rules engine for a four-player property trading board
//! game.
//!
//! ## Design Principles
//!
//! 1. **State In, State Out**: `dispatch(&state, &action)` returns a new
//!    state and never mutates its input. Illegal actions are no-ops.
//!
//! 2. **Presentation Agnostic**: callers read the public fields of
//!    `GameState` and issue `Action`s. No rule lives outside this crate.
//!
//! 3. **Seeded Randomness**: shuffles and card-driven rolls come from the
//!    `GameRng` stored in the state, so a seed plus an action sequence
//!    replays exactly. Turn dice are supplied by the caller.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: decks, log and ownership use `im`, so
//!   the per-action clone is O(1).
//!
//! - **Static Catalog**: the board and both decks are `'static` data;
//!   only ownership, houses and deck order live in the state.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, RNG, configuration
//! - `board`: the 40-space catalog
//! - `cards`: card definitions and the two decks
//! - `rules`: RulesEngine trait, rent, ownership, constants
//! - `engine`: the state machine
//!
//! ## Example
//!
//! ```
//! use monopoly_engine::{dispatch, Action, GameState};
//!
//! let state = GameState::standard(42);
//! let next = dispatch(&state, &Action::Roll { values: [1, 2] });
//!
//! assert_eq!(next.current_player().position.index(), 3);
//! assert_eq!(state.current_player().position.index(), 0);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActiveCard, AfterPayment, ConfigError, DeckKind, Dice, GameConfig, GameLog, GameRng,
    GameRngState, GameState, PendingDebt, PendingPurchase, Player, PlayerId, PlayerMap, RentContext, Seat,
};

pub use crate::board::{ColorGroup, Space, SpaceId, SpaceKind, SpaceType};

pub use crate::cards::{Card, CardEffect, CardId};

pub use crate::rules::{calculate_rent, format_money, has_monopoly, Ownership, RentOptions, RulesEngine};

pub use crate::engine::{can_afford_build, can_build, can_sell, dispatch, Engine};
