//! Drawing cards and applying their effects.

use im::Vector;

use crate::board::{nearest_of, SpaceId, SpaceType};
use crate::cards::{self, Card, CardEffect, CardId};
use crate::core::{ActiveCard, DeckKind, GameState, PlayerId, RentContext};
use crate::rules::constants::{HOTEL_HOUSES, NEAREST_RAILROAD_MULTIPLIER, NEAREST_UTILITY_MULTIPLIER};
use crate::rules::format_money;

use super::movement::{collect_go_salary, move_player, resolve_landing, send_to_jail};
use super::payment::{attempt_payment, PaymentTerms};
use super::turn::finalize_post_action;

/// Refill an empty deck with a fresh shuffle, leaving out a held jail card.
fn replenish_deck(state: &mut GameState, deck: DeckKind) {
    let held = state.held_jail_cards[deck].is_some();
    let mut ids: Vec<CardId> = cards::card_ids(deck)
        .filter(|id| !(held && cards::card(deck, *id).is_get_out_of_jail()))
        .collect();
    state.rng.shuffle(&mut ids);
    tracing::debug!(%deck, cards = ids.len(), "deck replenished");
    state.decks[deck] = ids.into_iter().collect::<Vector<_>>();
}

/// Put a deck's jail card back at the bottom unless it is already there.
pub(crate) fn return_jail_card(state: &mut GameState, deck: DeckKind) {
    let Some(id) = cards::jail_card_id(deck) else {
        return;
    };
    if !state.decks[deck].contains(&id) {
        state.decks[deck].push_back(id);
    }
}

/// Draw the top card of `deck` for `player` and resolve it.
///
/// The card goes to the bottom afterwards unless the drawer keeps it.
pub(crate) fn draw_card(state: &mut GameState, deck: DeckKind, player: PlayerId) {
    if state.decks[deck].is_empty() {
        replenish_deck(state, deck);
    }
    let Some(id) = state.decks[deck].pop_front() else {
        finalize_post_action(state);
        return;
    };

    state.active_card = Some(ActiveCard { deck, card: id });
    let card = cards::card(deck, id);
    apply_card(state, deck, player, card);

    if !card.is_get_out_of_jail() {
        state.decks[deck].push_back(id);
    }
}

/// Total owed (or earned) for the buildings `player` holds: a hotel
/// counts at `per_hotel`, otherwise each house at `per_house`.
pub(crate) fn building_charge(state: &GameState, player: PlayerId, per_house: i64, per_hotel: i64) -> i64 {
    state
        .ownership
        .owned_by(player)
        .map(|id| match state.ownership.houses_on(id) {
            0 => 0,
            HOTEL_HOUSES => per_hotel,
            houses => i64::from(houses) * per_house,
        })
        .sum()
}

fn apply_card(state: &mut GameState, deck: DeckKind, player: PlayerId, card: &Card) {
    let name = state.players[player].name.clone();
    state.log.push(format!("{name} drew a card: {}", card.description));
    tracing::debug!(%deck, card = card.slug, player = %player, "card drawn");

    match card.effect {
        CardEffect::AdvanceToGo => {
            state.players[player].position = SpaceId::GO;
            collect_go_salary(state, player);
            resolve_landing(state, player, RentContext::with_dice(0));
        }
        CardEffect::Collect { amount } => {
            state.players[player].money += amount;
            state.log.push(format!("{name} received {}.", format_money(amount)));
            finalize_post_action(state);
        }
        CardEffect::Pay { amount } => {
            attempt_payment(state, player, amount, None, card.description, PaymentTerms::debt());
            finalize_post_action(state);
        }
        CardEffect::Advance { position, pass_go } => {
            let start = state.players[player].position;
            state.players[player].position = position;
            if pass_go && position < start {
                collect_go_salary(state, player);
            }
            resolve_landing(state, player, RentContext::default());
        }
        CardEffect::MoveSpaces { spaces } => {
            move_player(state, player, spaces, RentContext::default());
        }
        CardEffect::AdvanceNearestUtility => {
            let target = nearest_of(state.players[player].position, SpaceType::Utility);
            state.players[player].position = target;
            let [a, b] = state.rng.roll_dice();
            let roll = i64::from(a + b);
            state.log.push(format!("{name} rolled {roll} for utility rent."));
            let context = RentContext {
                forced_utility_multiplier: Some(NEAREST_UTILITY_MULTIPLIER),
                dice_total: Some(roll),
                ..RentContext::default()
            };
            resolve_landing(state, player, context);
        }
        CardEffect::AdvanceNearestRailroad => {
            let target = nearest_of(state.players[player].position, SpaceType::Railroad);
            state.players[player].position = target;
            let context = RentContext {
                rent_multiplier: NEAREST_RAILROAD_MULTIPLIER,
                ..RentContext::default()
            };
            resolve_landing(state, player, context);
        }
        CardEffect::GoToJail => send_to_jail(state, player),
        CardEffect::CollectEachPlayer { amount } => {
            let others: Vec<PlayerId> = state.active_players().into_iter().filter(|id| *id != player).collect();
            for other in others {
                let reason = format!("pay {name}");
                if !attempt_payment(state, other, amount, Some(player), &reason, PaymentTerms::immediate()) {
                    let line = format!("{} could not pay and went bankrupt.", state.players[other].name);
                    state.log.push(line);
                }
            }
            finalize_post_action(state);
        }
        CardEffect::PayEachPlayer { amount } => {
            let others: Vec<PlayerId> = state.active_players().into_iter().filter(|id| *id != player).collect();
            for other in others {
                let reason = format!("pay {}", state.players[other].name);
                if !attempt_payment(state, player, amount, Some(other), &reason, PaymentTerms::debt()) {
                    break;
                }
            }
            finalize_post_action(state);
        }
        CardEffect::PropertyExpense { per_house, per_hotel } => {
            let cost = building_charge(state, player, per_house, per_hotel);
            if cost > 0 {
                attempt_payment(state, player, cost, None, "pay for repairs", PaymentTerms::debt());
            }
            finalize_post_action(state);
        }
        CardEffect::PropertyCollect { per_house, per_hotel } => {
            let gain = building_charge(state, player, per_house, per_hotel);
            if gain > 0 {
                state.players[player].money += gain;
                state
                    .log
                    .push(format!("{name} collected {} from the bank.", format_money(gain)));
            }
            finalize_post_action(state);
        }
        CardEffect::GetOutOfJail => {
            state.held_jail_cards[deck] = Some(player);
            state.players[player].get_out_of_jail.set(deck, true);
            finalize_post_action(state);
        }
    }
}
