//! Grid coordinates and the four orthogonal moves.

use std::fmt;

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A cell position as `(row, col)`.
///
/// Components are signed so that stepping off the edge of the grid yields a
/// representable (out-of-bounds) coordinate; the grid is responsible for the
/// bounds check.  Only equality is meaningful; no ordering is implied.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring coordinate one step in `dir`.  May be out of bounds.
    #[inline]
    pub fn step(self, dir: Direction) -> Coord {
        let (dr, dc) = dir.delta();
        Coord { row: self.row + dr, col: self.col + dc }
    }

    /// `true` if `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One orthogonal move on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Column + 1.
    Right,
    /// Column − 1.
    Left,
    /// Row + 1.
    Down,
    /// Row − 1.
    Up,
}

impl Direction {
    /// Neighbour exploration order used by route search.  Changing it changes
    /// which route is found first.
    pub const SEARCH_ORDER: [Direction; 4] =
        [Direction::Right, Direction::Left, Direction::Down, Direction::Up];

    /// `(row delta, col delta)`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left  => (0, -1),
            Direction::Down  => (1, 0),
            Direction::Up    => (-1, 0),
        }
    }
}
