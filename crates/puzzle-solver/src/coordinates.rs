//! Integer grid locations and the eight compass directions.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A (row, column) pair. Rows grow downwards, columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    pub row: i32,
    pub col: i32,
}

impl Coordinates {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The vector that takes `self` to `other`, so `self + self.difference(other) == other`.
    pub fn difference(self, other: Coordinates) -> Coordinates {
        other - self
    }

    /// Move `distance` cells in `direction`.
    pub fn step(self, direction: Direction, distance: i32) -> Coordinates {
        self + direction.delta() * distance
    }
}

impl Add for Coordinates {
    type Output = Coordinates;

    fn add(self, rhs: Coordinates) -> Coordinates {
        Coordinates::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coordinates {
    type Output = Coordinates;

    fn sub(self, rhs: Coordinates) -> Coordinates {
        Coordinates::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for Coordinates {
    type Output = Coordinates;

    fn mul(self, factor: i32) -> Coordinates {
        Coordinates::new(self.row * factor, self.col * factor)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Compass direction, each with a unit delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The four principal directions, in clockwise order from north.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonal directions.
    pub const INTERCARDINAL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    pub fn delta(self) -> Coordinates {
        match self {
            Direction::North => Coordinates::new(-1, 0),
            Direction::NorthEast => Coordinates::new(-1, 1),
            Direction::East => Coordinates::new(0, 1),
            Direction::SouthEast => Coordinates::new(1, 1),
            Direction::South => Coordinates::new(1, 0),
            Direction::SouthWest => Coordinates::new(1, -1),
            Direction::West => Coordinates::new(0, -1),
            Direction::NorthWest => Coordinates::new(-1, -1),
        }
    }

    pub fn is_cardinal(self) -> bool {
        Self::CARDINAL.contains(&self)
    }
}
