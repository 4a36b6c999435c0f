//! Ownership table: who owns each ownable space, and how many houses it has.
//!
//! Backed by `im::OrdMap` so cloning the game state is O(1) and iteration
//! runs in board order.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::board::{space, spaces, SpaceId, SpaceType};
use crate::core::PlayerId;

/// Ownership record for one ownable space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedSpace {
    pub owner: Option<PlayerId>,
    /// 0..=5, where 5 is a hotel. Only ever non-zero on properties.
    pub houses: u8,
}

/// Ownership of every property, railroad and utility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    spaces: OrdMap<SpaceId, OwnedSpace>,
}

impl Default for Ownership {
    fn default() -> Self {
        Self::initial()
    }
}

impl Ownership {
    /// Every ownable space, unowned and unbuilt.
    #[must_use]
    pub fn initial() -> Self {
        let spaces = spaces()
            .iter()
            .filter(|s| s.is_ownable())
            .map(|s| (s.id, OwnedSpace::default()))
            .collect();
        Self { spaces }
    }

    /// Record for a space; `None` for spaces that cannot be owned.
    #[must_use]
    pub fn get(&self, id: SpaceId) -> Option<&OwnedSpace> {
        self.spaces.get(&id)
    }

    /// Current owner of a space.
    #[must_use]
    pub fn owner_of(&self, id: SpaceId) -> Option<PlayerId> {
        self.get(id).and_then(|o| o.owner)
    }

    /// Houses on a space (0 for anything unbuilt or unownable).
    #[must_use]
    pub fn houses_on(&self, id: SpaceId) -> u8 {
        self.get(id).map_or(0, |o| o.houses)
    }

    /// Assign an owner. Clearing the owner also clears the houses.
    ///
    /// Ignored for spaces that cannot be owned.
    pub fn set_owner(&mut self, id: SpaceId, owner: Option<PlayerId>) {
        if let Some(entry) = self.spaces.get_mut(&id) {
            entry.owner = owner;
            if owner.is_none() {
                entry.houses = 0;
            }
        }
    }

    /// Set the house count. Ignored for anything but properties.
    pub fn set_houses(&mut self, id: SpaceId, houses: u8) {
        if space(id).space_type() != SpaceType::Property {
            return;
        }
        if let Some(entry) = self.spaces.get_mut(&id) {
            entry.houses = houses;
        }
    }

    /// Iterate over all records in board order.
    pub fn iter(&self) -> impl Iterator<Item = (SpaceId, OwnedSpace)> + '_ {
        self.spaces.iter().map(|(id, owned)| (*id, *owned))
    }

    /// Spaces owned by `player`, in board order.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = SpaceId> + '_ {
        self.iter()
            .filter(move |(_, owned)| owned.owner == Some(player))
            .map(|(id, _)| id)
    }

    /// Number of spaces of `space_type` owned by `player`.
    #[must_use]
    pub fn count_owned(&self, player: PlayerId, space_type: SpaceType) -> usize {
        self.owned_by(player)
            .filter(|id| space(*id).space_type() == space_type)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_covers_ownable_spaces() {
        let ownership = Ownership::initial();

        assert_eq!(ownership.iter().count(), 28);
        assert!(ownership.get(SpaceId::new(1)).is_some());
        assert!(ownership.get(SpaceId::new(5)).is_some());
        assert!(ownership.get(SpaceId::new(12)).is_some());
        assert!(ownership.get(SpaceId::GO).is_none());
        assert!(ownership.get(SpaceId::new(4)).is_none());
        assert!(ownership.iter().all(|(_, o)| o.owner.is_none() && o.houses == 0));
    }

    #[test]
    fn test_clearing_owner_resets_houses() {
        let mut ownership = Ownership::initial();
        let id = SpaceId::new(39);

        ownership.set_owner(id, Some(PlayerId::new(1)));
        ownership.set_houses(id, 3);
        assert_eq!(ownership.houses_on(id), 3);

        ownership.set_owner(id, Some(PlayerId::new(2)));
        assert_eq!(ownership.houses_on(id), 3);

        ownership.set_owner(id, None);
        assert_eq!(ownership.owner_of(id), None);
        assert_eq!(ownership.houses_on(id), 0);
    }

    #[test]
    fn test_houses_only_on_properties() {
        let mut ownership = Ownership::initial();
        ownership.set_owner(SpaceId::new(5), Some(PlayerId::new(0)));
        ownership.set_houses(SpaceId::new(5), 2);

        assert_eq!(ownership.houses_on(SpaceId::new(5)), 0);
    }

    #[test]
    fn test_unownable_space_is_ignored() {
        let mut ownership = Ownership::initial();
        ownership.set_owner(SpaceId::new(7), Some(PlayerId::new(0)));

        assert_eq!(ownership.owner_of(SpaceId::new(7)), None);
        assert_eq!(ownership.iter().count(), 28);
    }

    #[test]
    fn test_owned_by_and_count() {
        let mut ownership = Ownership::initial();
        let p = PlayerId::new(3);
        for id in [5, 15, 12, 39] {
            ownership.set_owner(SpaceId::new(id), Some(p));
        }

        let owned: Vec<_> = ownership.owned_by(p).collect();
        assert_eq!(owned, vec![SpaceId::new(5), SpaceId::new(12), SpaceId::new(15), SpaceId::new(39)]);
        assert_eq!(ownership.count_owned(p, SpaceType::Railroad), 2);
        assert_eq!(ownership.count_owned(p, SpaceType::Utility), 1);
        assert_eq!(ownership.count_owned(PlayerId::new(0), SpaceType::Railroad), 0);
    }
}
