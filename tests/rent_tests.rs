//! Rent, purchase offers and card rent modifiers, driven through dispatch.

use monopoly_engine::cards::find_by_slug;
use monopoly_engine::{dispatch, Action, DeckKind, GameState, PlayerId, SpaceId};

const OWNER: PlayerId = PlayerId(0);
const VISITOR: PlayerId = PlayerId(1);

/// A game where it is the visitor's turn, standing on `position`.
fn visitor_at(position: u8) -> GameState {
    let mut state = GameState::standard(11);
    state.current = VISITOR;
    state.players[VISITOR].position = SpaceId::new(position);
    state
}

fn own(state: &mut GameState, ids: &[u8]) {
    for id in ids {
        state.ownership.set_owner(SpaceId::new(*id), Some(OWNER));
    }
}

/// Owning both railroads 5 and 15 does not turn 25 into rent; it is offered.
#[test]
fn test_unowned_railroad_is_offered() {
    let mut state = visitor_at(20);
    own(&mut state, &[5, 15]);

    let next = dispatch(&state, &Action::Roll { values: [2, 3] });

    let offer = next.pending_purchase.unwrap();
    assert_eq!(offer.space_id, SpaceId::new(25));
    assert_eq!(next.player(VISITOR).money, 1500);
    assert!(next.log.contains("can purchase B. & O. Railroad for $200."));

    let bought = dispatch(
        &next,
        &Action::ResolvePurchase {
            space_id: SpaceId::new(25),
            buy: true,
        },
    );
    assert_eq!(bought.owner_of(SpaceId::new(25)), Some(VISITOR));
    assert_eq!(bought.player(VISITOR).money, 1300);
    assert!(bought.can_end_turn);
}

/// An unbuilt monopoly doubles base rent.
#[test]
fn test_monopoly_doubles_rent() {
    let mut state = visitor_at(0);
    own(&mut state, &[6, 8, 9]);

    let next = dispatch(&state, &Action::Roll { values: [2, 4] });

    assert_eq!(next.player(VISITOR).money, 1488);
    assert_eq!(next.player(OWNER).money, 1512);
    assert!(next.can_end_turn);
}

/// Without the full group the base rent applies.
#[test]
fn test_partial_group_pays_base_rent() {
    let mut state = visitor_at(0);
    own(&mut state, &[6, 8]);

    let next = dispatch(&state, &Action::Roll { values: [2, 4] });

    assert_eq!(next.player(VISITOR).money, 1494);
}

/// Railroad rent depends only on how many the owner holds.
#[test]
fn test_railroad_rent_scales_with_count() {
    let railroads = [5, 15, 25, 35];
    for (count, expected) in [(1, 25), (2, 50), (3, 100), (4, 200)] {
        let mut state = visitor_at(0);
        own(&mut state, &railroads[..count]);

        let next = dispatch(&state, &Action::Roll { values: [1, 4] });

        assert_eq!(next.player(VISITOR).money, 1500 - expected, "{count} railroads");
        assert_eq!(next.player(OWNER).money, 1500 + expected);
    }
}

/// Utility rent is the roll times 4, or 10 with both utilities.
#[test]
fn test_utility_rent() {
    let mut single = visitor_at(5);
    own(&mut single, &[12]);
    let next = dispatch(&single, &Action::Roll { values: [3, 4] });
    assert_eq!(next.player(VISITOR).money, 1500 - 28);

    let mut both = visitor_at(5);
    own(&mut both, &[12, 28]);
    let next = dispatch(&both, &Action::Roll { values: [3, 4] });
    assert_eq!(next.player(VISITOR).money, 1500 - 70);
}

/// The nearest-utility card forces x10 on a fresh engine roll.
#[test]
fn test_nearest_utility_card_forces_ten() {
    let mut state = visitor_at(0);
    own(&mut state, &[12]);
    let card = find_by_slug(DeckKind::Chance, "chance-nearest-utility").unwrap();
    state.decks.chance.retain(|c| *c != card);
    state.decks.chance.push_front(card);

    let [a, b] = state.rng.clone().roll_dice();
    let expected = i64::from(a + b) * 10;

    let next = dispatch(&state, &Action::Roll { values: [3, 4] });

    assert_eq!(next.player(VISITOR).position, SpaceId::new(12));
    assert_eq!(next.player(VISITOR).money, 1500 - expected);
    assert_eq!(next.player(OWNER).money, 1500 + expected);
}

/// An unaffordable rent opens a debt to the owner.
#[test]
fn test_unaffordable_rent_opens_debt() {
    let mut state = visitor_at(35);
    own(&mut state, &[39]);
    state.players[VISITOR].money = 10;

    let next = dispatch(&state, &Action::Roll { values: [1, 3] });

    let debt = next.pending_debt.clone().unwrap();
    assert_eq!(debt.debtor, VISITOR);
    assert_eq!(debt.amount, 50);
    assert_eq!(debt.creditor, Some(OWNER));
    assert_eq!(debt.description, "pay rent for Boardwalk");
    assert!(!next.can_roll);
    assert!(!next.can_end_turn);
    assert_eq!(next.player(VISITOR).money, 10);
}

/// Landing on your own property costs nothing.
#[test]
fn test_own_property_is_free() {
    let mut state = visitor_at(0);
    state.ownership.set_owner(SpaceId::new(6), Some(VISITOR));

    let next = dispatch(&state, &Action::Roll { values: [2, 4] });

    assert_eq!(next.player(VISITOR).money, 1500);
    assert!(next.pending_purchase.is_none());
    assert!(next.can_end_turn);
}

/// Houses replace the monopoly doubling with the schedule.
#[test]
fn test_houses_use_schedule() {
    let mut state = visitor_at(0);
    own(&mut state, &[6, 8, 9]);
    for id in [6, 8, 9] {
        state.ownership.set_houses(SpaceId::new(id), 2);
    }

    let next = dispatch(&state, &Action::Roll { values: [2, 4] });

    assert_eq!(next.player(VISITOR).money, 1500 - 90);
}
