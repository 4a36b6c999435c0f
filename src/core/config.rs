//! Game configuration.
//!
//! The defaults describe the standard table: four seats, $1500 each,
//! a 120-line activity log. Games built for tests or tooling override
//! pieces through the builder methods.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Starting cash for every seat in the standard game.
pub const DEFAULT_STARTING_MONEY: i64 = 1500;

/// Activity log capacity in the standard game.
pub const DEFAULT_LOG_CAPACITY: usize = 120;

/// Minimum number of seats.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of seats.
pub const MAX_PLAYERS: usize = 8;

/// A seat at the table: display name and token color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub color: String,
}

impl Seat {
    /// Create a new seat.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Rejected configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("too few players (got={got}, min={min})")]
    TooFewPlayers { got: usize, min: usize },
    #[error("too many players (got={got}, max={max})")]
    TooManyPlayers { got: usize, max: usize },
    #[error("starting money must be positive (got={0})")]
    NonPositiveStartingMoney(i64),
    #[error("log capacity must be positive")]
    ZeroLogCapacity,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats in turn order; seat `i` becomes `PlayerId(i)`.
    pub seats: Vec<Seat>,

    /// Cash each player starts with.
    pub starting_money: i64,

    /// Maximum activity log lines kept (most recent first).
    pub log_capacity: usize,

    /// Seed for deck shuffles and card-driven dice rolls.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: vec![
                Seat::new("Dog", "#ef4444"),
                Seat::new("Car", "#3b82f6"),
                Seat::new("Hat", "#22c55e"),
                Seat::new("Ship", "#f59e0b"),
            ],
            starting_money: DEFAULT_STARTING_MONEY,
            log_capacity: DEFAULT_LOG_CAPACITY,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Standard four-seat configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with no seats; add them with `with_seat`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seats: Vec::new(),
            ..Self::default()
        }
    }

    /// Add a seat.
    #[must_use]
    pub fn with_seat(mut self, seat: Seat) -> Self {
        self.seats.push(seat);
        self
    }

    /// Set the starting money.
    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the activity log capacity.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.seats.len();
        if count < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers { got: count, min: MIN_PLAYERS });
        }
        if count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers { got: count, max: MAX_PLAYERS });
        }
        if self.starting_money <= 0 {
            return Err(ConfigError::NonPositiveStartingMoney(self.starting_money));
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::ZeroLogCapacity);
        }
        Ok(())
    }
}
