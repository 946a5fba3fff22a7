use super::Position;
use crate::error::UnknownDirection;

/// Compass direction on the tile grid.
///
/// Discriminants are the protocol's wire values and are also accepted as
/// names by [`str::parse`], so `"6"`, `"nw"`, `"north-west"` and
/// `"northwest"` all resolve to [`Direction::NorthWest`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Direction {
    #[strum(to_string = "north", serialize = "n", serialize = "0")]
    North = 0,
    #[strum(to_string = "east", serialize = "e", serialize = "1")]
    East = 1,
    #[strum(to_string = "south", serialize = "s", serialize = "2")]
    South = 2,
    #[strum(to_string = "west", serialize = "w", serialize = "3")]
    West = 3,
    #[strum(
        to_string = "southwest",
        serialize = "south west",
        serialize = "south-west",
        serialize = "sw",
        serialize = "4"
    )]
    SouthWest = 4,
    #[strum(
        to_string = "southeast",
        serialize = "south east",
        serialize = "south-east",
        serialize = "se",
        serialize = "5"
    )]
    SouthEast = 5,
    #[strum(
        to_string = "northwest",
        serialize = "north west",
        serialize = "north-west",
        serialize = "nw",
        serialize = "6"
    )]
    NorthWest = 6,
    #[strum(
        to_string = "northeast",
        serialize = "north east",
        serialize = "north-east",
        serialize = "ne",
        serialize = "7"
    )]
    NorthEast = 7,
}

impl Direction {
    /// All directions in wire order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::SouthWest,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    /// Tile displacement `(dx, dy)` of a single step. North is `-y`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::SouthWest
                | Direction::SouthEast
                | Direction::NorthWest
                | Direction::NorthEast
        )
    }

    /// Wire value of this direction.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Lenient name lookup used by scripts and map data.
    ///
    /// Unrecognized names resolve to [`Direction::North`].
    pub fn from_name_or_north(name: &str) -> Self {
        name.parse().unwrap_or(Direction::North)
    }
}

impl TryFrom<u8> for Direction {
    type Error = UnknownDirection;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Direction::from_repr(raw).ok_or(UnknownDirection(raw))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.as_u8()
    }
}

/// Resolves the compass direction from `from` towards `to`.
///
/// The horizontal component is East when `from.x - to.x` is negative and
/// West otherwise; a strictly larger vertical offset overrides it with North
/// or South, and an equal one combines both into a diagonal. Coincident
/// positions therefore resolve to [`Direction::NorthWest`].
pub fn direction_to(from: Position, to: Position) -> Direction {
    let x_offset = from.offset_x(to);
    let horizontal = if x_offset < 0 {
        Direction::East
    } else {
        Direction::West
    };
    let abs_x = x_offset.abs();

    let y_offset = from.offset_y(to);
    if y_offset >= 0 {
        if y_offset > abs_x {
            Direction::North
        } else if y_offset == abs_x {
            match horizontal {
                Direction::East => Direction::NorthEast,
                _ => Direction::NorthWest,
            }
        } else {
            horizontal
        }
    } else {
        let abs_y = y_offset.abs();
        if abs_y > abs_x {
            Direction::South
        } else if abs_y == abs_x {
            match horizontal {
                Direction::East => Direction::SouthEast,
                _ => Direction::SouthWest,
            }
        } else {
            horizontal
        }
    }
}

/// Position one tile away from `position` along `direction`.
pub fn step(position: Position, direction: Direction) -> Position {
    let (dx, dy) = direction.delta();
    position.translated(dx, dy)
}

/// Like [`step`], for a direction still in wire form.
///
/// Unknown wire values leave the position unchanged.
pub fn step_raw(position: Position, raw: u8) -> Position {
    match Direction::from_repr(raw) {
        Some(direction) => step(position, direction),
        None => position,
    }
}
