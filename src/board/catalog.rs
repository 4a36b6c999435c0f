//! The fixed 40-space track.

use super::space::{ColorGroup, Space, SpaceId, SpaceKind, SpaceType, BOARD_SIZE};

const fn property(
    id: u8,
    name: &'static str,
    short_name: &'static str,
    color: ColorGroup,
    cost: i64,
    rent: [i64; 6],
    house_cost: i64,
) -> Space {
    Space {
        id: SpaceId(id),
        name,
        short_name: Some(short_name),
        kind: SpaceKind::Property {
            color,
            cost,
            rent,
            house_cost,
            mortgage: cost / 2,
        },
    }
}

const fn railroad(id: u8, name: &'static str) -> Space {
    Space {
        id: SpaceId(id),
        name,
        short_name: None,
        kind: SpaceKind::Railroad {
            cost: 200,
            rent: [25, 50, 100, 200],
            mortgage: 100,
        },
    }
}

const fn utility(id: u8, name: &'static str) -> Space {
    Space {
        id: SpaceId(id),
        name,
        short_name: None,
        kind: SpaceKind::Utility {
            cost: 150,
            mortgage: 75,
        },
    }
}

const fn simple(id: u8, name: &'static str, kind: SpaceKind) -> Space {
    Space {
        id: SpaceId(id),
        name,
        short_name: None,
        kind,
    }
}

use ColorGroup::*;

static SPACES: [Space; BOARD_SIZE as usize] = [
    simple(0, "GO", SpaceKind::Go),
    property(1, "Mediterranean Avenue", "Mediterranean", Brown, 60, [2, 10, 30, 90, 160, 250], 50),
    simple(2, "Community Chest", SpaceKind::CommunityChest),
    property(3, "Baltic Avenue", "Baltic", Brown, 60, [4, 20, 60, 180, 320, 450], 50),
    simple(4, "Income Tax", SpaceKind::Tax { amount: 200 }),
    railroad(5, "Reading Railroad"),
    property(6, "Oriental Avenue", "Oriental", LightBlue, 100, [6, 30, 90, 270, 400, 550], 50),
    simple(7, "Chance", SpaceKind::Chance),
    property(8, "Vermont Avenue", "Vermont", LightBlue, 100, [6, 30, 90, 270, 400, 550], 50),
    property(9, "Connecticut Avenue", "Connecticut", LightBlue, 120, [8, 40, 100, 300, 450, 600], 50),
    simple(10, "Just Visiting / In Jail", SpaceKind::Jail),
    property(11, "St. Charles Place", "St. Charles", Magenta, 140, [10, 50, 150, 450, 625, 750], 100),
    utility(12, "Electric Company"),
    property(13, "States Avenue", "States", Magenta, 140, [10, 50, 150, 450, 625, 750], 100),
    property(14, "Virginia Avenue", "Virginia", Magenta, 160, [12, 60, 180, 500, 700, 900], 100),
    railroad(15, "Pennsylvania Railroad"),
    property(16, "St. James Place", "St. James", Orange, 180, [14, 70, 200, 550, 750, 950], 100),
    simple(17, "Community Chest", SpaceKind::CommunityChest),
    property(18, "Tennessee Avenue", "Tennessee", Orange, 180, [14, 70, 200, 550, 750, 950], 100),
    property(19, "New York Avenue", "New York", Orange, 200, [16, 80, 220, 600, 800, 1000], 100),
    simple(20, "Free Parking", SpaceKind::FreeParking),
    property(21, "Kentucky Avenue", "Kentucky", Red, 220, [18, 90, 250, 700, 875, 1050], 150),
    simple(22, "Chance", SpaceKind::Chance),
    property(23, "Indiana Avenue", "Indiana", Red, 220, [18, 90, 250, 700, 875, 1050], 150),
    property(24, "Illinois Avenue", "Illinois", Red, 240, [20, 100, 300, 750, 925, 1100], 150),
    railroad(25, "B. & O. Railroad"),
    property(26, "Atlantic Avenue", "Atlantic", Yellow, 260, [22, 110, 330, 800, 975, 1150], 150),
    property(27, "Ventnor Avenue", "Ventnor", Yellow, 260, [22, 110, 330, 800, 975, 1150], 150),
    utility(28, "Water Works"),
    property(29, "Marvin Gardens", "Marvin Gardens", Yellow, 280, [24, 120, 360, 850, 1025, 1200], 150),
    simple(30, "Go to Jail", SpaceKind::GoToJail),
    property(31, "Pacific Avenue", "Pacific", Green, 300, [26, 130, 390, 900, 1100, 1275], 200),
    property(32, "North Carolina Avenue", "North Carolina", Green, 300, [26, 130, 390, 900, 1100, 1275], 200),
    simple(33, "Community Chest", SpaceKind::CommunityChest),
    property(34, "Pennsylvania Avenue", "Pennsylvania", Green, 320, [28, 150, 450, 1000, 1200, 1400], 200),
    railroad(35, "Short Line"),
    simple(36, "Chance", SpaceKind::Chance),
    property(37, "Park Place", "Park Place", DarkBlue, 350, [35, 175, 500, 1100, 1300, 1500], 200),
    simple(38, "Luxury Tax", SpaceKind::Tax { amount: 100 }),
    property(39, "Boardwalk", "Boardwalk", DarkBlue, 400, [50, 200, 600, 1400, 1700, 2000], 200),
];

const BROWN_IDS: [SpaceId; 2] = [SpaceId(1), SpaceId(3)];
const LIGHT_BLUE_IDS: [SpaceId; 3] = [SpaceId(6), SpaceId(8), SpaceId(9)];
const MAGENTA_IDS: [SpaceId; 3] = [SpaceId(11), SpaceId(13), SpaceId(14)];
const ORANGE_IDS: [SpaceId; 3] = [SpaceId(16), SpaceId(18), SpaceId(19)];
const RED_IDS: [SpaceId; 3] = [SpaceId(21), SpaceId(23), SpaceId(24)];
const YELLOW_IDS: [SpaceId; 3] = [SpaceId(26), SpaceId(27), SpaceId(29)];
const GREEN_IDS: [SpaceId; 3] = [SpaceId(31), SpaceId(32), SpaceId(34)];
const DARK_BLUE_IDS: [SpaceId; 2] = [SpaceId(37), SpaceId(39)];

/// The full catalog, indexed by `SpaceId`.
#[must_use]
pub fn spaces() -> &'static [Space] {
    &SPACES
}

/// Look up a space. Ids wrap modulo the board size.
#[must_use]
pub fn space(id: SpaceId) -> &'static Space {
    &SPACES[id.index() % SPACES.len()]
}

/// Property ids of a color group, in board order.
#[must_use]
pub fn group_ids(color: ColorGroup) -> &'static [SpaceId] {
    match color {
        ColorGroup::Brown => &BROWN_IDS,
        ColorGroup::LightBlue => &LIGHT_BLUE_IDS,
        ColorGroup::Magenta => &MAGENTA_IDS,
        ColorGroup::Orange => &ORANGE_IDS,
        ColorGroup::Red => &RED_IDS,
        ColorGroup::Yellow => &YELLOW_IDS,
        ColorGroup::Green => &GREEN_IDS,
        ColorGroup::DarkBlue => &DARK_BLUE_IDS,
    }
}

/// Ids of every space of the given type, in board order.
pub fn ids_of_type(space_type: SpaceType) -> impl Iterator<Item = SpaceId> {
    SPACES
        .iter()
        .filter(move |s| s.space_type() == space_type)
        .map(|s| s.id)
}

/// First space of `space_type` strictly after `start`, scanning forward and
/// wrapping. Returns `start` if no other space has that type.
#[must_use]
pub fn nearest_of(start: SpaceId, space_type: SpaceType) -> SpaceId {
    (1..i32::from(BOARD_SIZE))
        .map(|step| start.offset(step))
        .find(|&id| space(id).space_type() == space_type)
        .unwrap_or(start)
}
