use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::direction::Direction;

/// An integer coordinate on the square lattice.
///
/// Also used as a unit heading vector during walk reconstruction. All operations
/// return new values, so a point can be shared freely between computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
}

impl LatticePoint {
    pub const ORIGIN: LatticePoint = LatticePoint { x: 0, y: 0 };
    pub const UP: LatticePoint = LatticePoint { x: 0, y: 1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// 90 degrees counter-clockwise: `(dx, dy) -> (-dy, dx)`.
    #[inline]
    pub fn rotate_left(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// 90 degrees clockwise: `(dx, dy) -> (dy, -dx)`.
    #[inline]
    pub fn rotate_right(self) -> Self {
        Self::new(self.y, -self.x)
    }

    #[inline]
    pub fn turn(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => self.rotate_left(),
            Direction::Straight => self,
            Direction::Right => self.rotate_right(),
        }
    }

    #[inline]
    pub fn translate(self, delta: LatticePoint) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    #[inline]
    pub fn squared_distance(self, other: LatticePoint) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// True for the four lattice neighbours (Euclidean distance exactly 1).
    /// Diagonal cells and the point itself are not adjacent.
    #[inline]
    pub fn is_adjacent(self, other: LatticePoint) -> bool {
        self.squared_distance(other) == 1
    }

    pub fn component_min(self, other: LatticePoint) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn component_max(self, other: LatticePoint) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for LatticePoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.translate(rhs)
    }
}

impl fmt::Display for LatticePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
