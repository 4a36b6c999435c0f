//! Rent and monopoly rules. Pure functions over the catalog and the
//! ownership table.

use crate::board::{group_ids, ColorGroup, Space, SpaceKind, SpaceType};
use crate::core::PlayerId;

use super::constants::{HOTEL_HOUSES, UTILITY_MULTIPLIER_BOTH, UTILITY_MULTIPLIER_SINGLE};
use super::ownership::Ownership;

/// Inputs to a rent computation beyond the board itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RentOptions {
    /// Dice total used for utility rent.
    pub dice_total: i64,
    /// Applied to the final rent of any space type.
    pub rent_multiplier: i64,
    /// Replaces the 4x/10x utility multiplier when set.
    pub forced_utility_multiplier: Option<i64>,
}

impl Default for RentOptions {
    fn default() -> Self {
        Self {
            dice_total: 0,
            rent_multiplier: 1,
            forced_utility_multiplier: None,
        }
    }
}

impl RentOptions {
    /// Options with only a dice total.
    #[must_use]
    pub fn with_dice(dice_total: i64) -> Self {
        Self {
            dice_total,
            ..Self::default()
        }
    }
}

/// True iff `owner` owns every property of `color`.
#[must_use]
pub fn has_monopoly(owner: PlayerId, color: ColorGroup, ownership: &Ownership) -> bool {
    let ids = group_ids(color);
    !ids.is_empty() && ids.iter().all(|id| ownership.owner_of(*id) == Some(owner))
}

/// Railroads held by `owner`.
#[must_use]
pub fn count_owned_railroads(owner: PlayerId, ownership: &Ownership) -> usize {
    ownership.count_owned(owner, SpaceType::Railroad)
}

/// Utilities held by `owner`.
#[must_use]
pub fn count_owned_utilities(owner: PlayerId, ownership: &Ownership) -> usize {
    ownership.count_owned(owner, SpaceType::Utility)
}

/// Rent owed to `owner` for landing on `space`.
///
/// - Property: schedule by house count; doubled on an unbuilt monopoly.
/// - Railroad: schedule by railroads held (1..=4).
/// - Utility: dice total times 4, or 10 with both utilities, unless forced.
/// - Anything else: 0.
///
/// `rent_multiplier` applies to the final amount in every case.
#[must_use]
pub fn calculate_rent(space: &Space, ownership: &Ownership, owner: PlayerId, options: RentOptions) -> i64 {
    let multiplier = options.rent_multiplier;
    match space.kind {
        SpaceKind::Property { color, rent, .. } => {
            let houses = ownership.houses_on(space.id);
            let base = rent[usize::from(houses.min(HOTEL_HOUSES))];
            if houses == 0 && has_monopoly(owner, color, ownership) {
                base * 2 * multiplier
            } else {
                base * multiplier
            }
        }
        SpaceKind::Railroad { rent, .. } => {
            let owned = count_owned_railroads(owner, ownership);
            let index = owned.saturating_sub(1).min(rent.len() - 1);
            rent[index] * multiplier
        }
        SpaceKind::Utility { .. } => {
            let utility_multiplier = options.forced_utility_multiplier.unwrap_or(
                if count_owned_utilities(owner, ownership) == 2 {
                    UTILITY_MULTIPLIER_BOTH
                } else {
                    UTILITY_MULTIPLIER_SINGLE
                },
            );
            options.dice_total * utility_multiplier * multiplier
        }
        _ => 0,
    }
}
