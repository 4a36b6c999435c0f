//! Leaving jail early: cards and bail.

use crate::core::{DeckKind, GameState, PlayerId};
use crate::rules::constants::BAIL;
use crate::rules::format_money;

use super::card_effects::return_jail_card;

/// Clear jail status.
pub(crate) fn release_from_jail(state: &mut GameState, player: PlayerId) {
    let released = &mut state.players[player];
    released.in_jail = false;
    released.jail_turns = 0;
}

/// Rolling reopens after an early release; the turn cannot end first.
fn reopen_rolling(state: &mut GameState) {
    state.can_roll = true;
    state.can_end_turn = false;
    state.extra_roll_available = false;
}

/// Whether the current player may leave jail by card or bail right now.
pub(crate) fn can_leave_early(state: &GameState) -> bool {
    state.current_player().in_jail && !state.has_pending() && !state.is_over()
}

/// Handle `USE_GET_OUT_OF_JAIL_CARD`.
pub(crate) fn use_jail_card(state: &mut GameState, deck: DeckKind) {
    let player = state.current;
    if !can_leave_early(state) || !state.players[player].get_out_of_jail.holds(deck) {
        tracing::trace!(%deck, "jail card rejected");
        return;
    }

    state.players[player].get_out_of_jail.set(deck, false);
    state.held_jail_cards[deck] = None;
    return_jail_card(state, deck);
    release_from_jail(state, player);

    let line = format!("{} used a Get Out of Jail Free card.", state.players[player].name);
    state.log.push(line);
    reopen_rolling(state);
}

/// Handle `PAY_BAIL`.
pub(crate) fn pay_bail(state: &mut GameState) {
    let player = state.current;
    if !can_leave_early(state) {
        tracing::trace!("bail rejected");
        return;
    }

    let name = state.players[player].name.clone();
    if state.players[player].money < BAIL {
        state.log.push(format!("{name} does not have enough cash to pay bail."));
        return;
    }

    state.players[player].money -= BAIL;
    state.log.push(format!("{name} paid {} for bail.", format_money(BAIL)));
    release_from_jail(state, player);
    reopen_rolling(state);
}
