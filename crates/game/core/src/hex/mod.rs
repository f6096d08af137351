//! Axial hex coordinates and the grid queries built on them.
//!
//! Cells are addressed by `(q, r)`. The six neighbours of a cell are reached by
//! the [`HexDirection`] deltas, always enumerated in [`HexDirection::ALL`]
//! order; both range expansion and straight projection rely on that order.
mod grid;
mod route;

pub use grid::{ReachQuery, ReachableSet, reachable, straight_projection};
pub use route::{RouteError, RouteSteps, quantize, route, route_cells};

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Discrete hex cell expressed in axial coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn is_origin(self) -> bool {
        self.q == 0 && self.r == 0
    }

    /// Derived cube coordinate.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Number of unit hex steps between two cells on an unobstructed grid.
    pub fn hex_distance(self, other: Self) -> u32 {
        let dq = (self.q - other.q).unsigned_abs();
        let dr = (self.r - other.r).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        (dq + dr + ds) / 2
    }

    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.delta()
    }

    /// All six neighbours in [`HexDirection::ALL`] order.
    pub fn neighbors(self) -> [HexCoord; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

impl Add for HexCoord {
    type Output = HexCoord;
    fn add(self, rhs: HexCoord) -> HexCoord {
        HexCoord::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Add<HexDirection> for HexCoord {
    type Output = HexCoord;
    fn add(self, rhs: HexDirection) -> HexCoord {
        self + rhs.delta()
    }
}

impl AddAssign for HexCoord {
    fn add_assign(&mut self, rhs: HexCoord) {
        *self = *self + rhs;
    }
}

impl Sub for HexCoord {
    type Output = HexCoord;
    fn sub(self, rhs: HexCoord) -> HexCoord {
        HexCoord::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl SubAssign for HexCoord {
    fn sub_assign(&mut self, rhs: HexCoord) {
        *self = *self - rhs;
    }
}

impl Neg for HexCoord {
    type Output = HexCoord;
    fn neg(self) -> HexCoord {
        HexCoord::new(-self.q, -self.r)
    }
}

impl Mul<i32> for HexCoord {
    type Output = HexCoord;
    fn mul(self, rhs: i32) -> HexCoord {
        HexCoord::new(self.q * rhs, self.r * rhs)
    }
}

/// The six unit steps of the axial grid.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HexDirection {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl HexDirection {
    /// Fixed enumeration order shared by every grid query.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::North,
        HexDirection::NorthEast,
        HexDirection::SouthEast,
        HexDirection::South,
        HexDirection::SouthWest,
        HexDirection::NorthWest,
    ];

    pub const fn delta(self) -> HexCoord {
        match self {
            HexDirection::North => HexCoord::new(0, -1),
            HexDirection::NorthEast => HexCoord::new(1, -1),
            HexDirection::SouthEast => HexCoord::new(1, 0),
            HexDirection::South => HexCoord::new(0, 1),
            HexDirection::SouthWest => HexCoord::new(-1, 1),
            HexDirection::NorthWest => HexCoord::new(-1, 0),
        }
    }

    /// Maps a unit delta back to its direction; `None` for anything that is
    /// not one of the six hex steps (including `(1, 1)` and `(-1, -1)`).
    pub fn from_delta(delta: HexCoord) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.delta() == delta)
    }

    pub const fn opposite(self) -> Self {
        match self {
            HexDirection::North => HexDirection::South,
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::SouthEast => HexDirection::NorthWest,
            HexDirection::South => HexDirection::North,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::NorthWest => HexDirection::SouthEast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_direction_round_trips_through_its_delta() {
        for direction in HexDirection::ALL {
            assert_eq!(HexDirection::from_delta(direction.delta()), Some(direction));
            assert_eq!(direction.delta() + direction.opposite().delta(), HexCoord::ORIGIN);
        }
    }

    #[test]
    fn diagonal_deltas_are_not_hex_steps() {
        assert_eq!(HexDirection::from_delta(HexCoord::new(1, 1)), None);
        assert_eq!(HexDirection::from_delta(HexCoord::new(-1, -1)), None);
        assert_eq!(HexDirection::from_delta(HexCoord::ORIGIN), None);
    }

    #[test]
    fn neighbors_are_one_step_away() {
        let center = HexCoord::new(3, -2);
        for neighbor in center.neighbors() {
            assert_eq!(center.hex_distance(neighbor), 1);
        }
        assert_eq!(center.hex_distance(HexCoord::new(5, -2)), 2);
        assert_eq!(HexCoord::ORIGIN.hex_distance(HexCoord::new(2, 2)), 4);
    }

    #[test]
    fn coordinate_arithmetic_is_component_wise() {
        let a = HexCoord::new(2, -1);
        let b = HexCoord::new(-3, 4);
        assert_eq!(a + b, HexCoord::new(-1, 3));
        assert_eq!(a - b, HexCoord::new(5, -5));
        assert_eq!(-a, HexCoord::new(-2, 1));
        assert_eq!(a * 3, HexCoord::new(6, -3));
        assert_eq!(a.to_string(), "(2, -1)");
    }
}
