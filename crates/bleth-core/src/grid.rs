//! Grid coordinates and movement deltas.
//!
//! Rows grow downward: `Direction::Up` decrements the row, so an agent at
//! row 0 is on the top edge.  Coordinates are signed so that an
//! out-of-bounds neighbor (row -1) is representable and can be rejected by
//! the board rather than wrapping.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// An immutable `(row, col)` cell coordinate.
///
/// Ordering is row-major, which is also the order boards report occupancy in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent cell one step in `direction`.  No bounds check.
    #[inline]
    pub fn neighbor(self, direction: Direction) -> Location {
        let (dr, dc) = direction.delta();
        Location::new(self.row + dr, self.col + dc)
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Location) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four axis-aligned movement directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order random walks sample them.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(row delta, col delta)`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (-1, 0),
            Direction::Down  => (1, 0),
            Direction::Left  => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up"    => Ok(Direction::Up),
            "down"  => Ok(Direction::Down),
            "left"  => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _       => Err(CoreError::UnknownDirection(s.to_owned())),
        }
    }
}
