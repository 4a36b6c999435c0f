//! Card system: static definitions and the two decks.
//!
//! - `CardId`: index of a card within its deck
//! - `Card`: immutable description + effect
//! - `registry`: chance and community chest card lists

pub mod definition;
pub mod registry;

pub use definition::{Card, CardEffect, CardId};
pub use registry::{card, card_ids, cards, find_by_slug, jail_card_id};
