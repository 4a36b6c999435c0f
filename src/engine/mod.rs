//! The state machine.
//!
//! `dispatch` is the single entry point: it clones the state, applies one
//! action to the clone and returns it. Rejected actions return a
//! value-equal copy. Every action, recognized or not, ends with the win
//! check.
//!
//! Submodules split the rules by concern:
//! - `turn`: rolling, ending the turn, gates, win detection
//! - `movement`: moving tokens, landing resolution, purchase offers
//! - `payment`: charges, pending debts, bankruptcy
//! - `card_effects`: drawing and applying cards
//! - `building`: even-build and even-sell rules
//! - `jail`: cards and bail

mod building;
mod card_effects;
mod jail;
mod movement;
mod payment;
mod turn;

pub use building::{can_afford_build, can_build, can_sell};

use crate::board::{spaces, SpaceId};
use crate::core::{Action, ActionKind, DeckKind, GameState, PlayerId};
use crate::rules::constants::BAIL;
use crate::rules::RulesEngine;

/// Apply one action, returning the next state. The input is untouched.
#[must_use]
pub fn dispatch(state: &GameState, action: &Action) -> GameState {
    let mut next = state.clone();
    if next.is_over() {
        tracing::trace!(?action, "game over; action ignored");
        return next;
    }
    tracing::debug!(?action, player = %next.current, "dispatch");

    match *action {
        Action::Roll { values } => turn::roll(&mut next, values),
        Action::ResolvePurchase { space_id, buy } => movement::resolve_purchase(&mut next, space_id, buy),
        Action::EndTurn => turn::end_turn(&mut next),
        Action::Build { space_id } => building::build(&mut next, space_id),
        Action::Sell { space_id } => building::sell(&mut next, space_id),
        Action::ResolveDebt => payment::resolve_debt(&mut next),
        Action::DeclareBankruptcy => payment::declare_current_bankrupt(&mut next),
        Action::UseGetOutOfJailCard { deck } => jail::use_jail_card(&mut next, deck),
        Action::PayBail => jail::pay_bail(&mut next),
        Action::Unrecognized => tracing::trace!("unrecognized action ignored"),
    }

    turn::check_for_winner(&mut next);
    next
}

/// All 36 ordered dice outcomes.
fn all_rolls() -> impl Iterator<Item = [u8; 2]> {
    (1..=6).flat_map(|a| (1..=6).map(move |b| [a, b]))
}

/// Ownable spaces of the current player.
fn own_spaces(state: &GameState) -> impl Iterator<Item = SpaceId> + '_ {
    spaces()
        .iter()
        .map(|s| s.id)
        .filter(move |id| state.owner_of(*id) == Some(state.current))
}

/// The standard rules engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }
}

impl RulesEngine for Engine {
    fn apply_action(&self, state: &GameState, action: &Action) -> GameState {
        dispatch(state, action)
    }

    fn legal_templates(&self, state: &GameState) -> Vec<ActionKind> {
        if state.is_over() {
            return vec![];
        }
        [
            ActionKind::Roll,
            ActionKind::ResolvePurchase,
            ActionKind::EndTurn,
            ActionKind::Build,
            ActionKind::Sell,
            ActionKind::ResolveDebt,
            ActionKind::DeclareBankruptcy,
            ActionKind::UseGetOutOfJailCard,
            ActionKind::PayBail,
        ]
        .into_iter()
        .filter(|kind| !self.legal_actions_for(state, *kind).is_empty())
        .collect()
    }

    fn legal_actions_for(&self, state: &GameState, kind: ActionKind) -> Vec<Action> {
        if state.is_over() {
            return vec![];
        }
        let player = state.current;

        match kind {
            ActionKind::Roll => {
                if state.can_roll && !state.has_pending() {
                    all_rolls().map(|values| Action::Roll { values }).collect()
                } else {
                    vec![]
                }
            }
            ActionKind::ResolvePurchase => match state.pending_purchase {
                Some(offer) => [true, false]
                    .into_iter()
                    .map(|buy| Action::ResolvePurchase {
                        space_id: offer.space_id,
                        buy,
                    })
                    .collect(),
                None => vec![],
            },
            ActionKind::EndTurn => {
                if state.can_end_turn && !state.has_pending() {
                    vec![Action::EndTurn]
                } else {
                    vec![]
                }
            }
            ActionKind::Build => own_spaces(state)
                .filter(|id| can_afford_build(state, player, *id))
                .map(|space_id| Action::Build { space_id })
                .collect(),
            ActionKind::Sell => own_spaces(state)
                .filter(|id| can_sell(state, player, *id))
                .map(|space_id| Action::Sell { space_id })
                .collect(),
            ActionKind::ResolveDebt => match &state.pending_debt {
                Some(debt) if state.players[debt.debtor].money >= debt.amount => vec![Action::ResolveDebt],
                _ => vec![],
            },
            ActionKind::DeclareBankruptcy => {
                if payment::can_declare_bankruptcy(state) {
                    vec![Action::DeclareBankruptcy]
                } else {
                    vec![]
                }
            }
            ActionKind::UseGetOutOfJailCard => {
                if !jail::can_leave_early(state) {
                    return vec![];
                }
                DeckKind::ALL
                    .into_iter()
                    .filter(|deck| state.current_player().get_out_of_jail.holds(*deck))
                    .map(|deck| Action::UseGetOutOfJailCard { deck })
                    .collect()
            }
            ActionKind::PayBail => {
                if jail::can_leave_early(state) && state.current_player().money >= BAIL {
                    vec![Action::PayBail]
                } else {
                    vec![]
                }
            }
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<PlayerId> {
        state.winner
    }
}
