//! Game state.
//!
//! ## GameState
//!
//! The single root of a game. The engine never mutates a state it was
//! handed: `dispatch` clones, applies, and returns the clone. Growing
//! collections (decks, log, ownership) are `im` persistent structures,
//! so a clone shares structure with its parent and costs O(1).
//!
//! Fields are public so a presentation layer can read them and tests can
//! arrange scenarios; changing a live game is the engine's job.
//!
//! ## Read model
//!
//! - `Dice`: last roll
//! - `PendingPurchase`: the open purchase offer, with its rent context
//! - `PendingDebt`: an unpaid charge blocking the turn
//! - `ActiveCard`: the card most recently drawn, for display
//! - `GameLog`: capped activity log, most recent first

use im::Vector;
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::action::DeckKind;
use super::config::{ConfigError, GameConfig};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::SpaceId;
use crate::cards::{self, Card, CardId};
use crate::rules::Ownership;

/// One value per deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDeck<T> {
    pub chance: T,
    pub community: T,
}

impl<T> Index<DeckKind> for PerDeck<T> {
    type Output = T;

    fn index(&self, deck: DeckKind) -> &Self::Output {
        match deck {
            DeckKind::Chance => &self.chance,
            DeckKind::Community => &self.community,
        }
    }
}

impl<T> IndexMut<DeckKind> for PerDeck<T> {
    fn index_mut(&mut self, deck: DeckKind) -> &mut Self::Output {
        match deck {
            DeckKind::Chance => &mut self.chance,
            DeckKind::Community => &mut self.community,
        }
    }
}

/// A resolved dice roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dice {
    pub values: [u8; 2],
    pub total: u8,
    pub is_double: bool,
}

impl Dice {
    /// Build from two die values.
    #[must_use]
    pub fn new(values: [u8; 2]) -> Self {
        Self {
            values,
            total: values[0] + values[1],
            is_double: values[0] == values[1],
        }
    }

    /// Both values are legal die faces.
    #[must_use]
    pub fn is_valid(values: [u8; 2]) -> bool {
        values.iter().all(|v| (1..=6).contains(v))
    }
}

/// Rent modifiers attached to a move by a card effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentContext {
    /// Applied to the computed rent.
    pub rent_multiplier: i64,
    /// Replaces the ownership-based utility multiplier.
    pub forced_utility_multiplier: Option<i64>,
    /// Dice total for utility rent; falls back to the last roll.
    pub dice_total: Option<i64>,
}

impl Default for RentContext {
    fn default() -> Self {
        Self {
            rent_multiplier: 1,
            forced_utility_multiplier: None,
            dice_total: None,
        }
    }
}

impl RentContext {
    /// Context carrying only a dice total.
    #[must_use]
    pub fn with_dice(total: i64) -> Self {
        Self {
            dice_total: Some(total),
            ..Self::default()
        }
    }
}

/// The open purchase offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPurchase {
    pub space_id: SpaceId,
    pub rent_context: RentContext,
}

/// Work deferred until a debt is paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AfterPayment {
    /// Leave jail and move by the roll that forced bail.
    #[serde(rename_all = "camelCase")]
    MoveFromJail { steps: u8, dice_total: i64 },
}

/// An unpaid charge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDebt {
    pub debtor: PlayerId,
    pub amount: i64,
    /// `None` means the bank.
    pub creditor: Option<PlayerId>,
    /// What the money is for, e.g. "pay rent for Boardwalk".
    pub description: String,
    pub allow_bankruptcy: bool,
    pub after_payment: Option<AfterPayment>,
}

/// The card most recently drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCard {
    pub deck: DeckKind,
    pub card: CardId,
}

impl ActiveCard {
    /// The card definition.
    #[must_use]
    pub fn definition(&self) -> &'static Card {
        cards::card(self.deck, self.card)
    }
}

/// Capped activity log, most recent entry first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<String>,
    capacity: usize,
}

impl GameLog {
    /// Create an empty log.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: capacity.max(1),
        }
    }

    /// Prepend a line, dropping the oldest beyond capacity.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(target: "monopoly_engine::log", "{message}");
        self.entries.push_front(message);
        if self.entries.len() > self.capacity {
            self.entries.truncate(self.capacity);
        }
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether any entry contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.iter().any(|line| line.contains(needle))
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub players: PlayerMap<Player>,
    /// Whose turn it is.
    pub current: PlayerId,
    pub ownership: Ownership,
    /// Draw piles; the front is the next card.
    pub decks: PerDeck<Vector<CardId>>,
    /// Holder of each deck's get-out-of-jail card, if someone keeps it.
    pub held_jail_cards: PerDeck<Option<PlayerId>>,
    pub dice: Option<Dice>,
    pub pending_purchase: Option<PendingPurchase>,
    pub pending_debt: Option<PendingDebt>,
    pub active_card: Option<ActiveCard>,
    pub log: GameLog,
    pub consecutive_doubles: u8,
    pub extra_roll_available: bool,
    pub can_roll: bool,
    pub can_end_turn: bool,
    pub winner: Option<PlayerId>,
    /// Starts at 1; increments whenever the turn passes.
    pub turn_number: u32,
    /// Source of shuffles and card-driven dice rolls.
    pub rng: GameRng,
}

impl GameState {
    /// Create a new game from a configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// The standard four-player game with a fixed seed.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::build(&GameConfig::default().with_seed(seed))
    }

    /// The standard four-player game seeded from the thread RNG.
    #[must_use]
    pub fn with_random_seed() -> Self {
        Self::standard(rand::thread_rng().gen())
    }

    fn build(config: &GameConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let players = PlayerMap::new(config.player_count(), |id| {
            let seat = &config.seats[id.index()];
            Player::new(id, seat.name.clone(), seat.color.clone(), config.starting_money)
        });

        let mut shuffled = |deck: DeckKind| -> Vector<CardId> {
            let mut ids: Vec<CardId> = cards::card_ids(deck).collect();
            rng.shuffle(&mut ids);
            ids.into_iter().collect()
        };
        let decks = PerDeck {
            chance: shuffled(DeckKind::Chance),
            community: shuffled(DeckKind::Community),
        };

        let mut log = GameLog::new(config.log_capacity);
        log.push("Welcome to Monopoly!");

        Self {
            players,
            current: PlayerId::new(0),
            ownership: Ownership::initial(),
            decks,
            held_jail_cards: PerDeck::default(),
            dice: None,
            pending_purchase: None,
            pending_debt: None,
            active_card: None,
            log,
            consecutive_doubles: 0,
            extra_roll_available: false,
            can_roll: true,
            can_end_turn: false,
            winner: None,
            turn_number: 1,
            rng,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// A player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Players still in the game, in seat order.
    #[must_use]
    pub fn active_players(&self) -> SmallVec<[PlayerId; 4]> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(id, _)| id)
            .collect()
    }

    /// Owner of a space.
    #[must_use]
    pub fn owner_of(&self, space: SpaceId) -> Option<PlayerId> {
        self.ownership.owner_of(space)
    }

    /// Houses on a space.
    #[must_use]
    pub fn houses_on(&self, space: SpaceId) -> u8 {
        self.ownership.houses_on(space)
    }

    /// Spaces owned by a player, in board order.
    #[must_use]
    pub fn properties_of(&self, player: PlayerId) -> Vec<SpaceId> {
        self.ownership.owned_by(player).collect()
    }

    /// Holder of a deck's get-out-of-jail card.
    #[must_use]
    pub fn jail_card_holder(&self, deck: DeckKind) -> Option<PlayerId> {
        self.held_jail_cards[deck]
    }

    /// Either suspension point is open.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_purchase.is_some() || self.pending_debt.is_some()
    }

    /// The game has a winner.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
