//! Static board data: the 40-space track and its color groups.
//!
//! Nothing here changes at runtime. Ownership and houses live in
//! `rules::Ownership`, inside the game state.

pub mod catalog;
pub mod space;

pub use catalog::{group_ids, ids_of_type, nearest_of, space, spaces};
pub use space::{ColorGroup, Space, SpaceId, SpaceKind, SpaceType, BOARD_SIZE};
