//! Building, bankruptcy and winner detection.

use monopoly_engine::{
    can_build, can_sell, dispatch, Action, ActionKind, Engine, GameConfig, GameState, PlayerId, RulesEngine, Seat,
    SpaceId,
};

const MEDITERRANEAN: SpaceId = SpaceId(1);
const BALTIC: SpaceId = SpaceId(3);

fn brown_monopoly() -> GameState {
    let mut state = GameState::standard(3);
    let p = state.current;
    state.ownership.set_owner(MEDITERRANEAN, Some(p));
    state.ownership.set_owner(BALTIC, Some(p));
    state
}

/// Build both to hotels evenly, then sell everything back.
#[test]
fn test_build_and_sell_round_trip() {
    let mut state = brown_monopoly();
    let p = state.current;

    for _ in 0..5 {
        for id in [MEDITERRANEAN, BALTIC] {
            assert!(can_build(&state, p, id));
            state = dispatch(&state, &Action::Build { space_id: id });
        }
    }
    assert_eq!(state.houses_on(MEDITERRANEAN), 5);
    assert_eq!(state.houses_on(BALTIC), 5);
    assert_eq!(state.player(p).money, 1500 - 10 * 50);
    assert!(!can_build(&state, p, BALTIC));

    for _ in 0..5 {
        for id in [BALTIC, MEDITERRANEAN] {
            assert!(can_sell(&state, p, id));
            state = dispatch(&state, &Action::Sell { space_id: id });
        }
    }
    assert_eq!(state.houses_on(MEDITERRANEAN), 0);
    assert_eq!(state.houses_on(BALTIC), 0);
    assert_eq!(state.player(p).money, 1500 - 10 * 50 + 10 * 25);
    assert!(!can_sell(&state, p, BALTIC));
}

/// Building out of order is a no-op.
#[test]
fn test_uneven_build_rejected() {
    let state = brown_monopoly();

    let once = dispatch(&state, &Action::Build { space_id: BALTIC });
    let twice = dispatch(&once, &Action::Build { space_id: BALTIC });

    assert_eq!(twice.houses_on(BALTIC), 1);
    assert_eq!(twice.player(PlayerId::new(0)).money, 1450);
}

/// Only the current player's own spaces can be built on.
#[test]
fn test_build_on_another_players_group_rejected() {
    let mut state = GameState::standard(3);
    let other = PlayerId::new(2);
    state.ownership.set_owner(MEDITERRANEAN, Some(other));
    state.ownership.set_owner(BALTIC, Some(other));

    assert!(can_build(&state, other, BALTIC));
    assert_eq!(dispatch(&state, &Action::Build { space_id: BALTIC }), state);
}

/// Legal actions list exactly the buildable spaces.
#[test]
fn test_build_actions_follow_even_rule() {
    let state = brown_monopoly();
    let builds = Engine.legal_actions_for(&state, ActionKind::Build);
    assert_eq!(
        builds,
        vec![Action::Build { space_id: MEDITERRANEAN }, Action::Build { space_id: BALTIC }]
    );

    let next = dispatch(&state, &Action::Build { space_id: MEDITERRANEAN });
    assert_eq!(
        Engine.legal_actions_for(&next, ActionKind::Build),
        vec![Action::Build { space_id: BALTIC }]
    );
    assert_eq!(
        Engine.legal_actions_for(&next, ActionKind::Sell),
        vec![Action::Sell { space_id: MEDITERRANEAN }]
    );
}

/// Bankruptcy to a creditor hands over properties with houses intact.
#[test]
fn test_bankruptcy_to_creditor() {
    let mut state = GameState::standard(3);
    let owner = PlayerId::new(0);
    let debtor = PlayerId::new(1);
    state.current = debtor;
    state.players[debtor].position = SpaceId::new(35);
    state.players[debtor].money = 10;
    state.ownership.set_owner(SpaceId::new(39), Some(owner));
    state.ownership.set_owner(MEDITERRANEAN, Some(debtor));
    state.ownership.set_owner(BALTIC, Some(debtor));
    state.ownership.set_houses(MEDITERRANEAN, 2);
    state.ownership.set_houses(BALTIC, 2);

    let owing = dispatch(&state, &Action::Roll { values: [1, 3] });
    let actions = Engine.legal_actions(&owing);
    assert!(actions.contains(&Action::DeclareBankruptcy));
    assert!(!actions.contains(&Action::ResolveDebt));
    assert!(!actions.contains(&Action::EndTurn));
    assert!(!actions.iter().any(|a| matches!(a, Action::Roll { .. })));

    let next = dispatch(&owing, &Action::DeclareBankruptcy);

    assert!(next.player(debtor).bankrupt);
    assert_eq!(next.player(debtor).money, 0);
    assert_eq!(next.owner_of(MEDITERRANEAN), Some(owner));
    assert_eq!(next.houses_on(MEDITERRANEAN), 2);
    assert_eq!(next.owner_of(BALTIC), Some(owner));
    assert_eq!(next.houses_on(BALTIC), 2);
    assert!(next.pending_debt.is_none());
    assert_eq!(next.current, PlayerId::new(2));
    assert!(next.can_roll);
    assert_eq!(next.winner, None);
}

/// Bankruptcy to the bank clears ownership and houses.
#[test]
fn test_bankruptcy_to_bank() {
    let mut state = GameState::standard(3);
    let debtor = PlayerId::new(1);
    state.current = debtor;
    state.players[debtor].position = SpaceId::new(36);
    state.players[debtor].money = 40;
    state.ownership.set_owner(MEDITERRANEAN, Some(debtor));
    state.ownership.set_owner(BALTIC, Some(debtor));
    state.ownership.set_houses(BALTIC, 1);

    // Luxury tax at 38.
    let owing = dispatch(&state, &Action::Roll { values: [1, 1] });
    let debt = owing.pending_debt.clone().unwrap();
    assert_eq!(debt.creditor, None);
    assert_eq!(debt.amount, 100);

    let next = dispatch(&owing, &Action::DeclareBankruptcy);

    assert!(next.player(debtor).bankrupt);
    assert_eq!(next.owner_of(MEDITERRANEAN), None);
    assert_eq!(next.owner_of(BALTIC), None);
    assert_eq!(next.houses_on(BALTIC), 0);
    assert!(!next.extra_roll_available);
    assert_eq!(next.current, PlayerId::new(2));
}

/// Selling houses raises cash to settle a debt.
#[test]
fn test_sell_to_pay_debt() {
    let mut state = GameState::standard(3);
    let p = state.current;
    state.players[p].position = SpaceId::new(35);
    state.players[p].money = 80;
    state.ownership.set_owner(MEDITERRANEAN, Some(p));
    state.ownership.set_owner(BALTIC, Some(p));
    state.ownership.set_houses(MEDITERRANEAN, 1);
    state.ownership.set_houses(BALTIC, 1);

    // Luxury tax: $100.
    let owing = dispatch(&state, &Action::Roll { values: [1, 2] });
    assert!(owing.pending_debt.is_some());

    let sold = dispatch(&owing, &Action::Sell { space_id: BALTIC });
    assert_eq!(sold.player(p).money, 105);
    assert!(Engine.legal_actions(&sold).contains(&Action::ResolveDebt));

    let paid = dispatch(&sold, &Action::ResolveDebt);
    assert!(paid.pending_debt.is_none());
    assert_eq!(paid.player(p).money, 5);
    assert!(paid.can_end_turn);
}

/// The last active player wins and the state freezes.
#[test]
fn test_last_player_standing_wins() {
    let config = GameConfig::empty()
        .with_seat(Seat::new("Ada", "#111111"))
        .with_seat(Seat::new("Bo", "#222222"))
        .with_seed(5);
    let state = GameState::new(&config).unwrap();

    let next = dispatch(&state, &Action::DeclareBankruptcy);

    assert_eq!(next.winner, Some(PlayerId::new(1)));
    assert_eq!(Engine.is_terminal(&next), Some(PlayerId::new(1)));
    assert!(!next.can_roll);
    assert!(!next.can_end_turn);
    assert_eq!(next.log.latest(), Some("Bo wins the game!"));
    assert!(Engine.legal_actions(&next).is_empty());
    assert_eq!(dispatch(&next, &Action::Roll { values: [1, 2] }), next);
}
