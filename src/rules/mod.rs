//! Game rules that do not depend on turn flow.
//!
//! - `RulesEngine`: the trait the state machine implements
//! - `rent`: rent, monopoly and holding counts
//! - `ownership`: the ownership table
//! - `constants`: fixed rule numbers
//! - `money`: log formatting for amounts

pub mod constants;
pub mod engine;
pub mod money;
pub mod ownership;
pub mod rent;

pub use engine::RulesEngine;
pub use money::format_money;
pub use ownership::{OwnedSpace, Ownership};
pub use rent::{calculate_rent, count_owned_railroads, count_owned_utilities, has_monopoly, RentOptions};
