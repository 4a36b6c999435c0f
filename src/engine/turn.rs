//! Turn flow: rolling, ending the turn, gates and the win check.

use crate::core::{AfterPayment, Dice, GameState, PlayerId, RentContext};
use crate::rules::constants::{BAIL, DOUBLES_TO_JAIL, MAX_JAIL_ATTEMPTS};

use super::jail::release_from_jail;
use super::movement::{move_player, send_to_jail};
use super::payment::{attempt_payment, PaymentTerms};

/// Handle `ROLL` with caller-supplied dice.
pub(crate) fn roll(state: &mut GameState, values: [u8; 2]) {
    if !state.can_roll || state.has_pending() || state.is_over() {
        tracing::trace!(?values, "roll rejected: rolling is closed");
        return;
    }
    if !Dice::is_valid(values) {
        tracing::trace!(?values, "roll rejected: invalid die value");
        return;
    }

    let dice = Dice::new(values);
    let total = dice.total;
    let player = state.current;
    state.dice = Some(dice);
    state.can_roll = false;
    let name = state.players[player].name.clone();
    state.log.push(format!("{name} rolled {} and {}.", values[0], values[1]));

    if state.players[player].in_jail {
        roll_in_jail(state, player, dice);
        return;
    }

    if dice.is_double {
        state.consecutive_doubles += 1;
    } else {
        state.consecutive_doubles = 0;
    }

    if dice.is_double && state.consecutive_doubles >= DOUBLES_TO_JAIL {
        state.log.push(format!("{name} rolled three doubles in a row and is sent to Jail."));
        send_to_jail(state, player);
        return;
    }

    state.extra_roll_available = dice.is_double;
    move_player(state, player, i32::from(total), RentContext::with_dice(i64::from(total)));
}

fn roll_in_jail(state: &mut GameState, player: PlayerId, dice: Dice) {
    let name = state.players[player].name.clone();
    state.extra_roll_available = false;

    if dice.is_double {
        state.log.push(format!("{name} rolled doubles to leave Jail."));
        release_from_jail(state, player);
        state.consecutive_doubles = 0;
        move_player(state, player, i32::from(dice.total), RentContext::with_dice(i64::from(dice.total)));
        return;
    }

    let attempts = {
        let jailed = &mut state.players[player];
        jailed.jail_turns += 1;
        jailed.jail_turns
    };

    if attempts >= MAX_JAIL_ATTEMPTS {
        state.log.push(format!("{name} must pay $50 bail after three failed attempts."));
        let terms = PaymentTerms::debt().then(AfterPayment::MoveFromJail {
            steps: dice.total,
            dice_total: i64::from(dice.total),
        });
        attempt_payment(state, player, BAIL, None, "pay bail", terms);
    } else {
        state.log.push(format!("{name} remains in Jail."));
        state.can_end_turn = true;
    }
}

/// Handle `END_TURN`.
pub(crate) fn end_turn(state: &mut GameState) {
    if !state.can_end_turn || state.has_pending() {
        tracing::trace!("end turn rejected");
        return;
    }
    advance_to_next_player(state);
}

/// Next non-bankrupt seat after `from`, wrapping. `from` itself if none.
pub(crate) fn next_active_player(state: &GameState, from: PlayerId) -> PlayerId {
    let total = state.player_count();
    (1..=total)
        .map(|step| PlayerId::new(((from.index() + step) % total) as u8))
        .find(|id| state.players[*id].is_active())
        .unwrap_or(from)
}

/// Pass the turn and reset per-turn fields.
pub(crate) fn advance_to_next_player(state: &mut GameState) {
    let next = next_active_player(state, state.current);
    if next != state.current {
        state.turn_number += 1;
    }
    state.current = next;
    state.consecutive_doubles = 0;
    state.extra_roll_available = false;
    state.can_roll = true;
    state.can_end_turn = false;
    state.dice = None;
    state.pending_purchase = None;
    state.active_card = None;
}

/// Re-open the turn after a resolution step: roll again on doubles,
/// otherwise allow ending the turn. Does nothing while a debt is pending
/// or after the game is won.
pub(crate) fn finalize_post_action(state: &mut GameState) {
    if state.pending_debt.is_some() || state.is_over() {
        return;
    }
    state.pending_purchase = None;
    if state.extra_roll_available {
        state.can_roll = true;
        state.can_end_turn = false;
    } else {
        state.can_roll = false;
        state.can_end_turn = true;
    }
}

/// Set the winner once a single active player remains.
pub(crate) fn check_for_winner(state: &mut GameState) {
    if state.winner.is_some() {
        return;
    }
    let active = state.active_players();
    if let [winner] = active.as_slice() {
        let winner = *winner;
        state.winner = Some(winner);
        state.can_roll = false;
        state.can_end_turn = false;
        let name = state.players[winner].name.clone();
        tracing::info!(winner = %winner, turn = state.turn_number, "game won");
        state.log.push(format!("{name} wins the game!"));
    }
}
