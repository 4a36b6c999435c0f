//! Building and selling houses under the even-build rule.

use crate::board::{group_ids, space, SpaceId, SpaceKind};
use crate::core::{GameState, PlayerId};
use crate::rules::constants::HOTEL_HOUSES;
use crate::rules::{format_money, has_monopoly};

/// The color group of `id` when `player` owns all of it.
fn monopoly_group(state: &GameState, player: PlayerId, id: SpaceId) -> Option<&'static [SpaceId]> {
    if !id.is_valid() || state.owner_of(id) != Some(player) {
        return None;
    }
    match space(id).kind {
        SpaceKind::Property { color, .. } if has_monopoly(player, color, &state.ownership) => Some(group_ids(color)),
        _ => None,
    }
}

/// Whether `player` may add a house to `id`, ignoring cash.
///
/// Requires the whole color group and that `id` is among the least
/// developed in it.
#[must_use]
pub fn can_build(state: &GameState, player: PlayerId, id: SpaceId) -> bool {
    let Some(group) = monopoly_group(state, player, id) else {
        return false;
    };
    let houses = state.houses_on(id);
    let lowest = group.iter().map(|g| state.houses_on(*g)).min().unwrap_or(0);
    houses < HOTEL_HOUSES && houses == lowest
}

/// Whether `player` may remove a house from `id`.
///
/// `id` must be among the most developed in its group.
#[must_use]
pub fn can_sell(state: &GameState, player: PlayerId, id: SpaceId) -> bool {
    if !id.is_valid() || state.owner_of(id) != Some(player) {
        return false;
    }
    let SpaceKind::Property { color, .. } = space(id).kind else {
        return false;
    };
    let houses = state.houses_on(id);
    let highest = group_ids(color).iter().map(|g| state.houses_on(*g)).max().unwrap_or(0);
    houses > 0 && houses == highest
}

/// `can_build` plus enough cash for one house.
#[must_use]
pub fn can_afford_build(state: &GameState, player: PlayerId, id: SpaceId) -> bool {
    can_build(state, player, id)
        && space(id)
            .house_cost()
            .is_some_and(|cost| state.players[player].money >= cost)
}

/// Handle `BUILD` for the current player.
pub(crate) fn build(state: &mut GameState, id: SpaceId) {
    let player = state.current;
    if !can_afford_build(state, player, id) {
        tracing::trace!(%id, "build rejected");
        return;
    }
    let target = space(id);
    let cost = target.house_cost().unwrap_or(0);
    let houses = state.houses_on(id) + 1;

    state.players[player].money -= cost;
    state.ownership.set_houses(id, houses);

    let name = &state.players[player].name;
    let line = if houses == HOTEL_HOUSES {
        format!("{name} built a hotel on {}.", target.name)
    } else {
        format!("{name} built house #{houses} on {}.", target.name)
    };
    state.log.push(line);
}

/// Handle `SELL` for the current player. Refunds half the house cost.
pub(crate) fn sell(state: &mut GameState, id: SpaceId) {
    let player = state.current;
    if !can_sell(state, player, id) {
        tracing::trace!(%id, "sell rejected");
        return;
    }
    let target = space(id);
    let refund = target.house_cost().unwrap_or(0) / 2;
    let houses = state.houses_on(id);

    state.players[player].money += refund;
    state.ownership.set_houses(id, houses - 1);

    let name = &state.players[player].name;
    let building = if houses == HOTEL_HOUSES { "hotel" } else { "house" };
    let line = format!("{name} sold a {building} on {} for {}.", target.name, format_money(refund));
    state.log.push(line);
}
