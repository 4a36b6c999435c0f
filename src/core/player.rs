//! Player identification, per-player storage and the player record.
//!
//! ## PlayerId
//!
//! Stable seat index. Players are never removed from the game, so an id
//! stays valid for the whole game, bankrupt or not.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::action::DeckKind;
use crate::board::SpaceId;

/// Player identifier (seat index, 0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Get-out-of-jail cards held by one player, one flag per deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JailCards {
    pub chance: bool,
    pub community: bool,
}

impl JailCards {
    /// Whether a card from `deck` is held.
    #[must_use]
    pub fn holds(&self, deck: DeckKind) -> bool {
        match deck {
            DeckKind::Chance => self.chance,
            DeckKind::Community => self.community,
        }
    }

    /// Set the flag for `deck`.
    pub fn set(&mut self, deck: DeckKind, held: bool) {
        match deck {
            DeckKind::Chance => self.chance = held,
            DeckKind::Community => self.community = held,
        }
    }
}

/// A seated player.
///
/// `money` is kept non-negative in every state returned by the engine:
/// charges that cannot be met become a pending debt or a bankruptcy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Display color (CSS-style hex string).
    pub color: String,
    pub position: SpaceId,
    pub money: i64,
    pub in_jail: bool,
    /// Failed doubles attempts while jailed (0..=3).
    pub jail_turns: u8,
    pub get_out_of_jail: JailCards,
    /// Monotonic: once set, never cleared.
    pub bankrupt: bool,
}

impl Player {
    /// Create a player at GO with the given starting money.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>, money: i64) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            position: SpaceId::GO,
            money,
            in_jail: false,
            jail_turns: 0,
            get_out_of_jail: JailCards::default(),
            bankrupt: false,
        }
    }

    /// Still taking turns.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.bankrupt
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ```
/// use monopoly_engine::core::{PlayerId, PlayerMap};
///
/// let mut money: PlayerMap<i64> = PlayerMap::new(4, |_| 1500);
/// money[PlayerId::new(1)] -= 200;
/// assert_eq!(money[PlayerId::new(1)], 1300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
