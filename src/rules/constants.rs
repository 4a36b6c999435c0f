//! Fixed rule numbers.

use crate::board::SpaceId;

/// Paid for passing or landing on GO.
pub const GO_SALARY: i64 = 200;

/// Price of leaving jail early, and of the forced exit after the last attempt.
pub const BAIL: i64 = 50;

/// Failed doubles attempts before bail is forced.
pub const MAX_JAIL_ATTEMPTS: u8 = 3;

/// Consecutive doubles that send the roller to jail.
pub const DOUBLES_TO_JAIL: u8 = 3;

/// House count that represents a hotel.
pub const HOTEL_HOUSES: u8 = 5;

/// Where jailed players sit.
pub const JAIL_POSITION: SpaceId = SpaceId::JAIL;

/// Utility rent multiplier with one utility owned.
pub const UTILITY_MULTIPLIER_SINGLE: i64 = 4;

/// Utility rent multiplier with both utilities owned.
pub const UTILITY_MULTIPLIER_BOTH: i64 = 10;

/// Forced multiplier for the "nearest utility" card.
pub const NEAREST_UTILITY_MULTIPLIER: i64 = 10;

/// Rent multiplier for the "nearest railroad" card.
pub const NEAREST_RAILROAD_MULTIPLIER: i64 = 2;
