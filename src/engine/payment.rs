//! Payments, pending debts and bankruptcy.
//!
//! A charge the payer cannot cover either suspends the turn as a
//! `PendingDebt` or, when debt is not allowed, bankrupts the payer on the
//! spot. At most one debt is open at a time.

use crate::core::{AfterPayment, DeckKind, GameState, PendingDebt, PlayerId, RentContext};
use crate::rules::format_money;

use super::card_effects::return_jail_card;
use super::jail::release_from_jail;
use super::movement::move_player;
use super::turn::{advance_to_next_player, check_for_winner, finalize_post_action};

/// How an unaffordable charge is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PaymentTerms {
    /// Suspend as a pending debt instead of bankrupting immediately.
    pub allow_debt: bool,
    pub after_payment: Option<AfterPayment>,
}

impl PaymentTerms {
    /// Unaffordable charges become a pending debt.
    pub(crate) fn debt() -> Self {
        Self {
            allow_debt: true,
            after_payment: None,
        }
    }

    /// Unaffordable charges bankrupt the payer.
    pub(crate) fn immediate() -> Self {
        Self::default()
    }

    /// Run `after` once the charge is settled.
    pub(crate) fn then(mut self, after: AfterPayment) -> Self {
        self.after_payment = Some(after);
        self
    }
}

fn creditor_name(state: &GameState, creditor: Option<PlayerId>) -> String {
    creditor.map_or_else(|| "the bank".to_string(), |id| state.players[id].name.clone())
}

/// Charge `payer` `amount`, crediting `creditor` (`None` = bank).
///
/// Returns whether the charge was settled now. Bankrupt payers and
/// non-positive amounts settle trivially.
pub(crate) fn attempt_payment(
    state: &mut GameState,
    payer: PlayerId,
    amount: i64,
    creditor: Option<PlayerId>,
    description: &str,
    terms: PaymentTerms,
) -> bool {
    if state.players[payer].bankrupt || amount <= 0 {
        return true;
    }

    if state.players[payer].money >= amount {
        transfer(state, payer, creditor, amount);
        let line = format!(
            "{} paid {} to {}.",
            state.players[payer].name,
            format_money(amount),
            creditor_name(state, creditor)
        );
        state.log.push(line);
        if let Some(after) = terms.after_payment {
            execute_after_payment(state, payer, after);
        }
        return true;
    }

    if terms.allow_debt {
        let line = format!(
            "{} needs {} to {}.",
            state.players[payer].name,
            format_money(amount),
            description
        );
        state.log.push(line);
        tracing::debug!(debtor = %payer, amount, description, "debt opened");
        state.pending_debt = Some(PendingDebt {
            debtor: payer,
            amount,
            creditor,
            description: description.to_string(),
            allow_bankruptcy: true,
            after_payment: terms.after_payment,
        });
        state.can_roll = false;
        state.can_end_turn = false;
        return false;
    }

    declare_bankruptcy(state, payer, creditor);
    false
}

fn transfer(state: &mut GameState, payer: PlayerId, creditor: Option<PlayerId>, amount: i64) {
    state.players[payer].money -= amount;
    if let Some(creditor) = creditor {
        state.players[creditor].money += amount;
    }
}

fn execute_after_payment(state: &mut GameState, player: PlayerId, after: AfterPayment) {
    match after {
        AfterPayment::MoveFromJail { steps, dice_total } => {
            release_from_jail(state, player);
            move_player(state, player, i32::from(steps), RentContext::with_dice(dice_total));
        }
    }
}

/// Handle `RESOLVE_DEBT`: settle the open debt if the debtor can now pay.
pub(crate) fn resolve_debt(state: &mut GameState) {
    let Some(debt) = state.pending_debt.clone() else {
        tracing::trace!("resolve debt rejected: nothing owed");
        return;
    };

    let debtor = debt.debtor;
    if state.players[debtor].bankrupt {
        state.pending_debt = None;
        return;
    }

    let name = state.players[debtor].name.clone();
    if state.players[debtor].money < debt.amount {
        state.log.push(format!(
            "{name} still needs {} to {}.",
            format_money(debt.amount),
            debt.description
        ));
        return;
    }

    transfer(state, debtor, debt.creditor, debt.amount);
    let line = format!(
        "{name} paid {} to {}.",
        format_money(debt.amount),
        creditor_name(state, debt.creditor)
    );
    state.log.push(line);
    state.pending_debt = None;

    match debt.after_payment {
        Some(after) => execute_after_payment(state, debtor, after),
        None => finalize_post_action(state),
    }
}

/// Whether `DECLARE_BANKRUPTCY` would take effect.
pub(crate) fn can_declare_bankruptcy(state: &GameState) -> bool {
    !state.is_over()
        && !state.current_player().bankrupt
        && state.pending_debt.as_ref().map_or(true, |debt| debt.allow_bankruptcy)
}

/// Handle `DECLARE_BANKRUPTCY` for the current player.
///
/// Assets go to the open debt's creditor; without an open debt the bank
/// is the creditor. Refused when the open debt forbids it.
pub(crate) fn declare_current_bankrupt(state: &mut GameState) {
    if !can_declare_bankruptcy(state) {
        tracing::trace!("bankruptcy rejected");
        return;
    }
    let creditor = state.pending_debt.as_ref().and_then(|debt| debt.creditor);
    let player = state.current;
    declare_bankruptcy(state, player, creditor);
}

/// Remove `player` from the game, handing assets to `creditor`.
///
/// A creditor that is the debtor or is already bankrupt counts as the bank.
/// The bank receives properties unbuilt; a player creditor keeps the
/// houses.
pub(crate) fn declare_bankruptcy(state: &mut GameState, player: PlayerId, creditor: Option<PlayerId>) {
    if state.players[player].bankrupt {
        return;
    }
    let creditor = creditor.filter(|c| *c != player && !state.players[*c].bankrupt);

    let name = {
        let bankrupt = &mut state.players[player];
        bankrupt.bankrupt = true;
        bankrupt.money = 0;
        bankrupt.name.clone()
    };
    state.log.push(format!("{name} declared bankruptcy."));
    tracing::info!(player = %player, creditor = ?creditor, "bankruptcy");

    let holdings: Vec<_> = state.ownership.owned_by(player).collect();
    for id in holdings {
        // Clearing the owner also clears the houses.
        state.ownership.set_owner(id, creditor);
    }

    for deck in DeckKind::ALL {
        if state.held_jail_cards[deck] == Some(player) {
            state.held_jail_cards[deck] = None;
            state.players[player].get_out_of_jail.set(deck, false);
            return_jail_card(state, deck);
        }
    }

    if state.pending_debt.as_ref().is_some_and(|d| d.debtor == player) {
        state.pending_debt = None;
    }

    if state.current == player {
        advance_to_next_player(state);
    }
    check_for_winner(state);
}
