//! The two fixed decks.
//!
//! Deck order here is the unshuffled order; `CardId(i)` is the `i`-th entry
//! of its deck.

use super::definition::{Card, CardEffect, CardId};
use crate::board::SpaceId;
use crate::core::DeckKind;

static CHANCE_CARDS: [Card; 16] = [
    Card::new("chance-advance-go", "Advance to GO (Collect $200)", CardEffect::AdvanceToGo),
    Card::new(
        "chance-advance-illinois",
        "Advance to Illinois Avenue",
        CardEffect::Advance { position: SpaceId(24), pass_go: true },
    ),
    Card::new(
        "chance-advance-boardwalk",
        "Advance to Boardwalk",
        CardEffect::Advance { position: SpaceId(39), pass_go: false },
    ),
    Card::new(
        "chance-advance-stcharles",
        "Advance to St. Charles Place – If you pass GO collect $200",
        CardEffect::Advance { position: SpaceId(11), pass_go: true },
    ),
    Card::new(
        "chance-nearest-utility",
        "Advance token to nearest Utility. If unowned you may buy it from the Bank. If owned throw dice and pay owner ten times the amount thrown.",
        CardEffect::AdvanceNearestUtility,
    ),
    Card::new(
        "chance-nearest-railroad-1",
        "Advance token to the nearest Railroad and pay owner twice the rental to which they are otherwise entitled. If Railroad is unowned, you may buy it from the Bank.",
        CardEffect::AdvanceNearestRailroad,
    ),
    Card::new(
        "chance-nearest-railroad-2",
        "Advance token to the nearest Railroad and pay owner twice the rental to which they are otherwise entitled. If Railroad is unowned, you may buy it from the Bank.",
        CardEffect::AdvanceNearestRailroad,
    ),
    Card::new("chance-dividend", "Bank pays you dividend of $50", CardEffect::Collect { amount: 50 }),
    Card::new(
        "chance-get-out-of-jail",
        "Get out of Jail Free – This card may be kept until needed, or traded.",
        CardEffect::GetOutOfJail,
    ),
    Card::new("chance-go-back-three", "Go Back 3 Spaces", CardEffect::MoveSpaces { spaces: -3 }),
    Card::new(
        "chance-go-to-jail",
        "Go directly to Jail – Do not pass GO, do not collect $200",
        CardEffect::GoToJail,
    ),
    Card::new(
        "chance-general-repairs",
        "Make general repairs on all your property – For each house pay $25 – For each hotel pay $100",
        CardEffect::PropertyExpense { per_house: 25, per_hotel: 100 },
    ),
    Card::new("chance-poor-tax", "Pay poor tax of $15", CardEffect::Pay { amount: 15 }),
    Card::new(
        "chance-building-loan",
        "Your building loan matures – Receive $150",
        CardEffect::Collect { amount: 150 },
    ),
    Card::new(
        "chance-chairman",
        "You have been elected Chairman of the Board – Pay each player $50",
        CardEffect::PayEachPlayer { amount: 50 },
    ),
    Card::new(
        "chance-crossword",
        "You have won a crossword competition – Collect $100",
        CardEffect::Collect { amount: 100 },
    ),
];

static COMMUNITY_CARDS: [Card; 17] = [
    Card::new("cc-advance-go", "Advance to GO (Collect $200)", CardEffect::AdvanceToGo),
    Card::new("cc-bank-error", "Bank error in your favor – Collect $200", CardEffect::Collect { amount: 200 }),
    Card::new("cc-doctors-fee", "Doctor's fees – Pay $50", CardEffect::Pay { amount: 50 }),
    Card::new("cc-stock-sale", "From sale of stock you get $50", CardEffect::Collect { amount: 50 }),
    Card::new(
        "cc-get-out-of-jail",
        "Get out of Jail Free – This card may be kept until needed, or traded.",
        CardEffect::GetOutOfJail,
    ),
    Card::new(
        "cc-go-to-jail",
        "Go directly to Jail – Do not pass GO, do not collect $200",
        CardEffect::GoToJail,
    ),
    Card::new(
        "cc-grand-opera",
        "Grand Opera Night – Collect $50 from every player for opening night seats",
        CardEffect::Collect { amount: 50 },
    ),
    Card::new("cc-holiday-fund", "Holiday Fund matures – Receive $100", CardEffect::Collect { amount: 100 }),
    Card::new("cc-income-tax-refund", "Income tax refund – Collect $20", CardEffect::Collect { amount: 20 }),
    Card::new(
        "cc-birthday",
        "It is your birthday – Collect $10 from every player",
        CardEffect::CollectEachPlayer { amount: 10 },
    ),
    Card::new("cc-life-insurance", "Life insurance matures – Collect $100", CardEffect::Collect { amount: 100 }),
    Card::new("cc-hospital-fees", "Pay hospital fees of $100", CardEffect::Pay { amount: 100 }),
    Card::new("cc-school-fees", "Pay school fees of $50", CardEffect::Pay { amount: 50 }),
    Card::new("cc-consultant", "Receive $25 consultancy fee", CardEffect::Collect { amount: 25 }),
    Card::new(
        "cc-street-repairs",
        "You are assessed for street repairs – $40 per house, $115 per hotel",
        CardEffect::PropertyExpense { per_house: 40, per_hotel: 115 },
    ),
    Card::new(
        "cc-beauty",
        "You have won second prize in a beauty contest – Collect $10",
        CardEffect::Collect { amount: 10 },
    ),
    Card::new("cc-inherit", "You inherit $100", CardEffect::Collect { amount: 100 }),
];

/// All cards of a deck, in unshuffled order.
#[must_use]
pub fn cards(deck: DeckKind) -> &'static [Card] {
    match deck {
        DeckKind::Chance => &CHANCE_CARDS,
        DeckKind::Community => &COMMUNITY_CARDS,
    }
}

/// Look up a card. Out-of-range ids wrap.
#[must_use]
pub fn card(deck: DeckKind, id: CardId) -> &'static Card {
    let all = cards(deck);
    &all[id.index() % all.len()]
}

/// Ids of every card in a deck.
pub fn card_ids(deck: DeckKind) -> impl Iterator<Item = CardId> {
    (0..cards(deck).len() as u8).map(CardId)
}

/// Id of the deck's get-out-of-jail card, if it has one.
#[must_use]
pub fn jail_card_id(deck: DeckKind) -> Option<CardId> {
    cards(deck)
        .iter()
        .position(Card::is_get_out_of_jail)
        .map(|i| CardId(i as u8))
}

/// Find a card by slug.
#[must_use]
pub fn find_by_slug(deck: DeckKind, slug: &str) -> Option<CardId> {
    cards(deck)
        .iter()
        .position(|c| c.slug == slug)
        .map(|i| CardId(i as u8))
}
