//! Rules engine trait.
//!
//! The presentation layer talks to the game only through this seam:
//! - what the current player may do
//! - how an action transforms the state
//! - whether the game is over

use crate::core::{Action, ActionKind, GameState, PlayerId};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: never mutates the input; returns the next state
/// - `legal_templates`: empty once the game is over
/// - `legal_actions_for`: concrete payloads for one kind
/// - `is_terminal`: `Some(winner)` once a single player remains
pub trait RulesEngine {
    /// Apply an action, producing the next state.
    fn apply_action(&self, state: &GameState, action: &Action) -> GameState;

    /// Action kinds the current player may issue now.
    fn legal_templates(&self, state: &GameState) -> Vec<ActionKind>;

    /// Concrete legal actions of one kind.
    fn legal_actions_for(&self, state: &GameState, kind: ActionKind) -> Vec<Action>;

    /// The winner, if the game has ended.
    fn is_terminal(&self, state: &GameState) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for the current player.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        self.legal_templates(state)
            .into_iter()
            .flat_map(|kind| self.legal_actions_for(state, kind))
            .collect()
    }
}
