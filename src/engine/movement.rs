//! Token movement and landing resolution.

use crate::board::{space, Space, SpaceId, SpaceKind};
use crate::core::{DeckKind, GameState, PendingPurchase, PlayerId, RentContext};
use crate::rules::constants::{GO_SALARY, JAIL_POSITION};
use crate::rules::{calculate_rent, format_money, RentOptions};

use super::card_effects::draw_card;
use super::payment::{attempt_payment, PaymentTerms};
use super::turn::finalize_post_action;

/// Move `steps` spaces (negative = backwards) and resolve the landing.
///
/// A forward move that ends numerically below its start passed GO and
/// collects the salary once.
pub(crate) fn move_player(state: &mut GameState, player: PlayerId, steps: i32, context: RentContext) {
    let start = state.players[player].position;
    let target = start.offset(steps);
    state.players[player].position = target;

    if steps >= 0 && target < start {
        collect_go_salary(state, player);
    }
    resolve_landing(state, player, context);
}

/// Credit the GO salary with a log line.
pub(crate) fn collect_go_salary(state: &mut GameState, player: PlayerId) {
    let mover = &mut state.players[player];
    mover.money += GO_SALARY;
    let line = format!("{} collected {} for passing GO.", mover.name, format_money(GO_SALARY));
    state.log.push(line);
}

/// Send a player straight to jail. Ends any doubles streak and the turn.
pub(crate) fn send_to_jail(state: &mut GameState, player: PlayerId) {
    let jailed = &mut state.players[player];
    jailed.position = JAIL_POSITION;
    jailed.in_jail = true;
    jailed.jail_turns = 0;
    let line = format!("{} was sent to Jail.", jailed.name);

    state.consecutive_doubles = 0;
    state.extra_roll_available = false;
    state.can_roll = false;
    state.can_end_turn = true;
    state.pending_purchase = None;
    state.log.push(line);
}

/// Apply the effect of the space the player stands on.
pub(crate) fn resolve_landing(state: &mut GameState, player: PlayerId, context: RentContext) {
    let landed = space(state.players[player].position);
    let name = state.players[player].name.clone();

    match landed.kind {
        SpaceKind::Go => {
            state.log.push(format!("{name} landed on GO."));
            finalize_post_action(state);
        }
        SpaceKind::FreeParking => {
            state.log.push(format!("{name} is taking a break at Free Parking."));
            finalize_post_action(state);
        }
        SpaceKind::Jail => {
            state.log.push(format!("{name} is just visiting Jail."));
            finalize_post_action(state);
        }
        SpaceKind::GoToJail => send_to_jail(state, player),
        SpaceKind::Tax { amount } => {
            let reason = format!("pay {}", landed.name);
            attempt_payment(state, player, amount, None, &reason, PaymentTerms::debt());
            finalize_post_action(state);
        }
        SpaceKind::Chance => draw_card(state, DeckKind::Chance, player),
        SpaceKind::CommunityChest => draw_card(state, DeckKind::Community, player),
        SpaceKind::Property { .. } | SpaceKind::Railroad { .. } | SpaceKind::Utility { .. } => {
            resolve_ownable_landing(state, player, landed, context);
        }
    }
}

fn resolve_ownable_landing(state: &mut GameState, player: PlayerId, landed: &'static Space, context: RentContext) {
    let Some(owner) = state.ownership.owner_of(landed.id) else {
        offer_purchase(state, player, landed, context);
        return;
    };

    let name = state.players[player].name.clone();
    if owner == player {
        state.log.push(format!("{name} landed on their own property."));
        finalize_post_action(state);
        return;
    }

    if state.players[owner].bankrupt {
        state.ownership.set_owner(landed.id, None);
        offer_purchase(state, player, landed, context);
        return;
    }

    let dice_total = context
        .dice_total
        .or_else(|| state.dice.map(|d| i64::from(d.total)))
        .unwrap_or(0);
    let options = RentOptions {
        dice_total,
        rent_multiplier: context.rent_multiplier,
        forced_utility_multiplier: context.forced_utility_multiplier,
    };
    let rent = calculate_rent(landed, &state.ownership, owner, options);
    if rent <= 0 {
        finalize_post_action(state);
        return;
    }

    let owner_name = state.players[owner].name.clone();
    state.log.push(format!("{name} owes {} to {owner_name}.", format_money(rent)));
    let reason = format!("pay rent for {}", landed.name);
    if attempt_payment(state, player, rent, Some(owner), &reason, PaymentTerms::debt()) {
        finalize_post_action(state);
    }
}

/// Open a purchase offer and suspend the turn until it is answered.
fn offer_purchase(state: &mut GameState, player: PlayerId, landed: &'static Space, context: RentContext) {
    let cost = landed.cost().unwrap_or(0);
    let name = &state.players[player].name;
    let line = format!("{name} can purchase {} for {}.", landed.name, format_money(cost));
    state.log.push(line);
    state.pending_purchase = Some(PendingPurchase {
        space_id: landed.id,
        rent_context: context,
    });
    state.can_roll = false;
    state.can_end_turn = false;
}

/// Handle `RESOLVE_PURCHASE`. Only answers the outstanding offer.
pub(crate) fn resolve_purchase(state: &mut GameState, space_id: SpaceId, buy: bool) {
    match state.pending_purchase {
        Some(offer) if offer.space_id == space_id => {}
        _ => {
            tracing::trace!(%space_id, "purchase rejected: no matching offer");
            return;
        }
    }

    let player = state.current;
    let landed = space(space_id);
    let name = state.players[player].name.clone();

    if !buy {
        state.log.push(format!("{name} declined to buy {}.", landed.name));
        state.pending_purchase = None;
        finalize_post_action(state);
        return;
    }

    let cost = landed.cost().unwrap_or(0);
    if state.players[player].money < cost {
        state.log.push(format!("{name} cannot afford {}.", landed.name));
        state.pending_purchase = None;
        finalize_post_action(state);
        return;
    }

    state.players[player].money -= cost;
    state.ownership.set_owner(space_id, Some(player));
    state
        .log
        .push(format!("{name} purchased {} for {}.", landed.name, format_money(cost)));
    state.pending_purchase = None;
    finalize_post_action(state);
}
