use std::fmt;

/// Tile coordinate on the world map.
///
/// `y` grows southward and `x` grows eastward. `z` is the floor index and
/// never participates in direction math.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: u8,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Signed horizontal offset `self.x - other.x`.
    ///
    /// Widened to `i64` so offsets between extreme coordinates stay exact.
    #[inline]
    pub const fn offset_x(self, other: Position) -> i64 {
        self.x as i64 - other.x as i64
    }

    /// Signed vertical offset `self.y - other.y`.
    #[inline]
    pub const fn offset_y(self, other: Position) -> i64 {
        self.y as i64 - other.y as i64
    }

    /// Returns a copy displaced by `(dx, dy)` on the same floor.
    ///
    /// Coordinates wrap at the `i32` boundary rather than panicking.
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
