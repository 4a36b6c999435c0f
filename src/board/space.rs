//! Board spaces.
//!
//! A `Space` is static catalog data: it never changes during a game.
//! Mutable facts about a space (owner, houses) live in the ownership table.

use serde::{Deserialize, Serialize};

/// Number of spaces on the track.
pub const BOARD_SIZE: u8 = 40;

/// Index of a space on the track (0 = GO, 39 = Boardwalk).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub u8);

impl SpaceId {
    pub const GO: SpaceId = SpaceId(0);
    pub const JAIL: SpaceId = SpaceId(10);

    /// Create a new space ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this id names a space on the board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < BOARD_SIZE
    }

    /// Move `steps` spaces (negative = backwards), wrapping around the track.
    #[must_use]
    pub fn offset(self, steps: i32) -> SpaceId {
        let raw = (i32::from(self.0) + steps).rem_euclid(i32::from(BOARD_SIZE));
        SpaceId(raw as u8)
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space({})", self.0)
    }
}

/// Property color groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Magenta,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 8] = [
        ColorGroup::Brown,
        ColorGroup::LightBlue,
        ColorGroup::Magenta,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::DarkBlue,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ColorGroup::Brown => "Brown",
            ColorGroup::LightBlue => "Light Blue",
            ColorGroup::Magenta => "Magenta",
            ColorGroup::Orange => "Orange",
            ColorGroup::Red => "Red",
            ColorGroup::Yellow => "Yellow",
            ColorGroup::Green => "Green",
            ColorGroup::DarkBlue => "Dark Blue",
        }
    }

    /// Display color (hex).
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            ColorGroup::Brown => "#955436",
            ColorGroup::LightBlue => "#9ad8f7",
            ColorGroup::Magenta => "#d94fa6",
            ColorGroup::Orange => "#f89736",
            ColorGroup::Red => "#e63946",
            ColorGroup::Yellow => "#f9c74f",
            ColorGroup::Green => "#2a9d8f",
            ColorGroup::DarkBlue => "#264653",
        }
    }
}

/// Coarse space type, for "nearest space of type" scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceType {
    Go,
    Property,
    Railroad,
    Utility,
    Tax,
    Chance,
    CommunityChest,
    Jail,
    FreeParking,
    GoToJail,
}

/// Type-specific catalog data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SpaceKind {
    Go,
    #[serde(rename_all = "camelCase")]
    Property {
        color: ColorGroup,
        cost: i64,
        /// Rent by house count; index 5 is the hotel.
        rent: [i64; 6],
        house_cost: i64,
        mortgage: i64,
    },
    Railroad {
        cost: i64,
        /// Rent by number of railroads held by the owner (1..=4).
        rent: [i64; 4],
        mortgage: i64,
    },
    Utility {
        cost: i64,
        mortgage: i64,
    },
    Tax {
        amount: i64,
    },
    Chance,
    CommunityChest,
    Jail,
    FreeParking,
    GoToJail,
}

/// A catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: SpaceId,
    pub name: &'static str,
    pub short_name: Option<&'static str>,
    pub kind: SpaceKind,
}

impl Space {
    /// Coarse type of this space.
    #[must_use]
    pub const fn space_type(&self) -> SpaceType {
        match self.kind {
            SpaceKind::Go => SpaceType::Go,
            SpaceKind::Property { .. } => SpaceType::Property,
            SpaceKind::Railroad { .. } => SpaceType::Railroad,
            SpaceKind::Utility { .. } => SpaceType::Utility,
            SpaceKind::Tax { .. } => SpaceType::Tax,
            SpaceKind::Chance => SpaceType::Chance,
            SpaceKind::CommunityChest => SpaceType::CommunityChest,
            SpaceKind::Jail => SpaceType::Jail,
            SpaceKind::FreeParking => SpaceType::FreeParking,
            SpaceKind::GoToJail => SpaceType::GoToJail,
        }
    }

    /// Properties, railroads and utilities can be owned.
    #[must_use]
    pub const fn is_ownable(&self) -> bool {
        matches!(
            self.kind,
            SpaceKind::Property { .. } | SpaceKind::Railroad { .. } | SpaceKind::Utility { .. }
        )
    }

    /// Purchase price, for ownable spaces.
    #[must_use]
    pub const fn cost(&self) -> Option<i64> {
        match self.kind {
            SpaceKind::Property { cost, .. }
            | SpaceKind::Railroad { cost, .. }
            | SpaceKind::Utility { cost, .. } => Some(cost),
            _ => None,
        }
    }

    /// Mortgage value, for ownable spaces.
    #[must_use]
    pub const fn mortgage(&self) -> Option<i64> {
        match self.kind {
            SpaceKind::Property { mortgage, .. }
            | SpaceKind::Railroad { mortgage, .. }
            | SpaceKind::Utility { mortgage, .. } => Some(mortgage),
            _ => None,
        }
    }

    /// Color group, for properties.
    #[must_use]
    pub const fn color(&self) -> Option<ColorGroup> {
        match self.kind {
            SpaceKind::Property { color, .. } => Some(color),
            _ => None,
        }
    }

    /// Price of one house, for properties.
    #[must_use]
    pub const fn house_cost(&self) -> Option<i64> {
        match self.kind {
            SpaceKind::Property { house_cost, .. } => Some(house_cost),
            _ => None,
        }
    }

    /// Short label for tight layouts.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.short_name.unwrap_or(self.name)
    }
}
