//! Turn flow tests: rolling, doubles, jail and ending the turn.
//!
//! Scenarios are arranged by editing the public fields of a fresh
//! `GameState`, then driven only through `dispatch`.

use monopoly_engine::cards::find_by_slug;
use monopoly_engine::{dispatch, Action, DeckKind, GameState, PlayerId, SpaceId};

fn roll(state: &GameState, a: u8, b: u8) -> GameState {
    dispatch(state, &Action::Roll { values: [a, b] })
}

fn stack_chance(state: &mut GameState, slug: &str) {
    let id = find_by_slug(DeckKind::Chance, slug).unwrap();
    state.decks.chance.retain(|c| *c != id);
    state.decks.chance.push_front(id);
}

fn jailed(seed: u64) -> GameState {
    let mut state = GameState::standard(seed);
    let p = state.current;
    state.players[p].position = SpaceId::JAIL;
    state.players[p].in_jail = true;
    state
}

/// New game, roll (3,4), land on Chance, draw "advance to GO".
#[test]
fn test_roll_to_chance_then_advance_to_go() {
    let mut state = GameState::standard(42);
    stack_chance(&mut state, "chance-advance-go");

    let next = roll(&state, 3, 4);
    let p0 = next.player(PlayerId::new(0));

    assert_eq!(p0.position, SpaceId::GO);
    assert_eq!(p0.money, 1700);
    assert!(next.can_end_turn);
    assert!(!next.can_roll);
    let drawn = next.active_card.unwrap();
    assert_eq!(drawn.deck, DeckKind::Chance);
    assert_eq!(drawn.definition().slug, "chance-advance-go");
}

/// Rolling is closed after a non-double; ending the turn passes it on.
#[test]
fn test_end_turn_rotates_players() {
    let state = GameState::standard(1);

    let rolled = roll(&state, 1, 2);
    assert!(!rolled.can_roll);
    assert_eq!(roll(&rolled, 2, 3), rolled);

    // Baltic is unowned, so an offer is open; decline it first.
    let declined = dispatch(
        &rolled,
        &Action::ResolvePurchase {
            space_id: SpaceId::new(3),
            buy: false,
        },
    );
    assert!(declined.can_end_turn);

    let passed = dispatch(&declined, &Action::EndTurn);
    assert_eq!(passed.current, PlayerId::new(1));
    assert!(passed.can_roll);
    assert_eq!(passed.dice, None);
    assert_eq!(passed.turn_number, 2);
}

/// Ending the turn is refused while rolling is still open.
#[test]
fn test_end_turn_before_rolling_is_noop() {
    let state = GameState::standard(1);
    assert_eq!(dispatch(&state, &Action::EndTurn), state);
}

/// Doubles grant one more roll.
#[test]
fn test_doubles_grant_extra_roll() {
    let state = GameState::standard(1);

    let next = roll(&state, 5, 5);

    assert_eq!(next.current_player().position, SpaceId::JAIL);
    assert!(!next.current_player().in_jail);
    assert!(next.extra_roll_available);
    assert!(next.can_roll);
    assert!(!next.can_end_turn);
    assert_eq!(next.consecutive_doubles, 1);
}

/// Three doubles in a row go straight to jail without the third move.
#[test]
fn test_three_doubles_send_to_jail() {
    let state = GameState::standard(1);

    let first = roll(&state, 5, 5);
    let second = roll(&first, 5, 5);
    assert_eq!(second.current_player().position, SpaceId::new(20));

    let third = roll(&second, 5, 5);
    let p0 = third.current_player();
    assert_eq!(p0.position, SpaceId::JAIL);
    assert!(p0.in_jail);
    assert!(!third.can_roll);
    assert!(third.can_end_turn);
    assert!(!third.extra_roll_available);
    assert_eq!(third.consecutive_doubles, 0);
}

/// Doubles in jail release and move, with no extra roll.
#[test]
fn test_jail_doubles_release_and_move() {
    let state = jailed(1);

    let next = roll(&state, 2, 2);
    let p0 = next.current_player();

    assert!(!p0.in_jail);
    assert_eq!(p0.jail_turns, 0);
    assert_eq!(p0.position, SpaceId::new(14));
    assert!(!next.extra_roll_available);
    assert_eq!(next.pending_purchase.map(|o| o.space_id), Some(SpaceId::new(14)));
}

/// A failed jail roll ends the turn and counts the attempt.
#[test]
fn test_failed_jail_roll_stays() {
    let state = jailed(1);

    let next = roll(&state, 1, 2);
    let p0 = next.current_player();

    assert!(p0.in_jail);
    assert_eq!(p0.jail_turns, 1);
    assert_eq!(p0.position, SpaceId::JAIL);
    assert!(next.can_end_turn);
    assert!(!next.can_roll);
}

/// The third failed attempt forces bail and then moves by that roll.
#[test]
fn test_third_failed_attempt_forces_bail() {
    let mut state = jailed(1);
    state.players[state.current].jail_turns = 2;

    let next = roll(&state, 1, 2);
    let p0 = next.current_player();

    assert!(!p0.in_jail);
    assert_eq!(p0.money, 1450);
    assert_eq!(p0.position, SpaceId::new(13));
    assert_eq!(next.pending_purchase.map(|o| o.space_id), Some(SpaceId::new(13)));
}

/// Forced bail the player cannot cover waits as a debt, then moves once paid.
#[test]
fn test_forced_bail_debt_defers_move() {
    let mut state = jailed(1);
    let p = state.current;
    state.players[p].jail_turns = 2;
    state.players[p].money = 30;

    let owing = roll(&state, 1, 2);
    let debt = owing.pending_debt.clone().unwrap();
    assert_eq!(debt.amount, 50);
    assert_eq!(debt.creditor, None);
    assert!(debt.after_payment.is_some());
    assert_eq!(owing.current_player().position, SpaceId::JAIL);
    assert!(!owing.can_roll);
    assert!(!owing.can_end_turn);

    // Still short: stays pending.
    let still = dispatch(&owing, &Action::ResolveDebt);
    assert!(still.pending_debt.is_some());

    let mut funded = owing.clone();
    funded.players[p].money = 100;
    let paid = dispatch(&funded, &Action::ResolveDebt);
    let p0 = paid.current_player();
    assert!(paid.pending_debt.is_none());
    assert!(!p0.in_jail);
    assert_eq!(p0.money, 50);
    assert_eq!(p0.position, SpaceId::new(13));
    assert!(paid.pending_purchase.is_some());
}

/// Paying bail reopens rolling.
#[test]
fn test_pay_bail() {
    let state = jailed(1);

    let next = dispatch(&state, &Action::PayBail);

    assert!(!next.current_player().in_jail);
    assert_eq!(next.current_player().money, 1450);
    assert!(next.can_roll);

    let moved = roll(&next, 1, 2);
    assert_eq!(moved.current_player().position, SpaceId::new(13));
}

/// Using a held card returns it to the bottom of its deck.
#[test]
fn test_use_jail_card() {
    let mut state = jailed(1);
    let p = state.current;
    let card = find_by_slug(DeckKind::Community, "cc-get-out-of-jail").unwrap();
    state.decks.community.retain(|c| *c != card);
    state.held_jail_cards.community = Some(p);
    state.players[p].get_out_of_jail.community = true;

    let wrong_deck = dispatch(&state, &Action::UseGetOutOfJailCard { deck: DeckKind::Chance });
    assert_eq!(wrong_deck, state);

    let next = dispatch(&state, &Action::UseGetOutOfJailCard { deck: DeckKind::Community });
    assert!(!next.current_player().in_jail);
    assert!(!next.current_player().get_out_of_jail.community);
    assert_eq!(next.jail_card_holder(DeckKind::Community), None);
    assert_eq!(next.decks.community.back(), Some(&card));
    assert_eq!(next.decks.community.len(), 17);
    assert!(next.can_roll);
}

/// Landing on Go To Jail.
#[test]
fn test_go_to_jail_space() {
    let mut state = GameState::standard(1);
    let p = state.current;
    state.players[p].position = SpaceId::new(25);

    let next = roll(&state, 2, 3);

    assert_eq!(next.current_player().position, SpaceId::JAIL);
    assert!(next.current_player().in_jail);
    assert!(next.can_end_turn);
}

/// Passing GO pays exactly once.
#[test]
fn test_passing_go_pays_salary() {
    let mut state = GameState::standard(1);
    let p = state.current;
    state.players[p].position = SpaceId::new(35);

    let next = roll(&state, 2, 3);

    assert_eq!(next.current_player().position, SpaceId::GO);
    assert_eq!(next.current_player().money, 1700);
}
