use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// A cell on the unbounded integer lattice the board lives on.
///
/// There is no fixed origin; the playable area is wherever the pieces are,
/// bounded only by the 4x4 extent limit enforced in `bounds`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    #[inline]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Chebyshev (L∞) distance to another cell.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> i16 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// The 8 surrounding cells.
    #[inline]
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_STEPS.iter().map(move |&s| self + s)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unit steps along the 4 orthogonal directions.
pub const ORTHOGONAL_STEPS: [Coord; 4] = [
    Coord::new(0, -1),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(-1, 0),
];

/// Unit steps along the 4 diagonal directions.
pub const DIAGONAL_STEPS: [Coord; 4] = [
    Coord::new(-1, -1),
    Coord::new(1, -1),
    Coord::new(1, 1),
    Coord::new(-1, 1),
];

/// Unit steps to all 8 surrounding cells.
pub const NEIGHBOR_STEPS: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(-1, 1),
    Coord::new(0, 1),
    Coord::new(1, 1),
];
