//! Hex board geometry with tilted axial coordinates
//!
//! The grid is tilted so that (1, 1) and (-1, -1) are unit steps. Distance
//! follows from that: when the two deltas share a sign the longer one wins,
//! otherwise they add up.

use crate::error::HexError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tilted axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    /// Southwest-northeast axis
    pub q: i32,
    /// Northwest-southeast axis
    pub r: i32,
}

/// The six named unit directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

/// Direction vectors (dq, dr)
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 1),   // N
    (1, 0),   // NE
    (0, -1),  // SE
    (-1, -1), // S
    (-1, 0),  // SW
    (0, 1),   // NW
];

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Unit vector (dq, dr)
    pub const fn vector(self) -> (i32, i32) {
        DIRECTIONS[self as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::NorthEast => "northeast",
            Direction::SouthEast => "southeast",
            Direction::South => "south",
            Direction::SouthWest => "southwest",
            Direction::NorthWest => "northwest",
        }
    }

    pub const fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 3) % 6]
    }
}

impl FromStr for Direction {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| HexError::InvalidDirection(s.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Hex {
    pub const ORIGIN: Hex = Hex::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Hex offset by (dq, dr), or an error if a coordinate leaves the `i32` range
    pub fn offset(&self, dq: i32, dr: i32) -> Result<Hex, HexError> {
        match (self.q.checked_add(dq), self.r.checked_add(dr)) {
            (Some(q), Some(r)) => Ok(Hex::new(q, r)),
            _ => Err(HexError::InvalidArgument(format!(
                "offset ({dq}, {dr}) from {self} overflows"
            ))),
        }
    }

    /// Hex one step away in `direction`
    pub fn neighbor(&self, direction: Direction) -> Result<Hex, HexError> {
        let (dq, dr) = direction.vector();
        self.offset(dq, dr)
    }

    /// Hex one step away in the direction called `name` ("north", "southwest", ...)
    pub fn neighbor_named(&self, name: &str) -> Result<Hex, HexError> {
        self.neighbor(name.parse()?)
    }

    /// Distance between two hexes. Computed in `i64`, so it is defined for
    /// every pair of coordinates.
    pub fn distance(&self, other: Hex) -> i64 {
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        if dq.signum() * dr.signum() < 0 {
            dq.abs() + dr.abs()
        } else {
            dq.abs().max(dr.abs())
        }
    }

    /// All hexes at exactly `radius` from this one.
    ///
    /// Scans the bounding box of side `2 * radius + 1`, so the order is fixed
    /// but not meaningful. Each call returns a fresh iterator. Fails if the
    /// box does not fit in `i32` coordinates.
    pub fn ring(&self, radius: i32) -> Result<impl Iterator<Item = Hex>, HexError> {
        check_radius(radius)?;
        // Both box corners in range means every hex inside is too
        self.offset(-radius, -radius)?;
        self.offset(radius, radius)?;
        let center = *self;
        Ok((-radius..=radius)
            .flat_map(move |dq| (-radius..=radius).map(move |dr| Hex::new(center.q + dq, center.r + dr)))
            .filter(move |hex| center.distance(*hex) == i64::from(radius)))
    }

    /// The six hexes reached by going `radius` steps straight along each direction.
    ///
    /// For `radius == 0` this is six copies of `self`.
    pub fn straight_ring(&self, radius: i32) -> Result<[Hex; 6], HexError> {
        check_radius(radius)?;
        let mut ring = [*self; 6];
        for (slot, (dq, dr)) in ring.iter_mut().zip(DIRECTIONS) {
            // Unit components are -1, 0 or 1, so the scaling itself cannot overflow
            *slot = self.offset(dq * radius, dr * radius)?;
        }
        Ok(ring)
    }
}

fn check_radius(radius: i32) -> Result<(), HexError> {
    if radius < 0 {
        return Err(HexError::InvalidArgument(format!(
            "radius must be non-negative, got {radius}"
        )));
    }
    Ok(())
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex({}, {})", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_neighbor() {
        let hex = Hex::new(1, 2);
        assert_eq!(hex.neighbor(Direction::South).unwrap(), Hex::new(0, 1));
        assert_eq!(hex.neighbor_named("south").unwrap(), Hex::new(0, 1));
        assert_eq!(hex.neighbor(Direction::North).unwrap(), Hex::new(2, 3));
    }

    #[test]
    fn test_invalid_direction() {
        let err = Hex::ORIGIN.neighbor_named("up").unwrap_err();
        assert_eq!(err, HexError::InvalidDirection("up".to_string()));
        assert!("North".parse::<Direction>().is_err());
    }

    #[test]
    fn test_opposites_cancel() {
        for dir in Direction::ALL {
            let hex = Hex::new(2, -1);
            let next = hex.neighbor(dir).unwrap();
            assert_eq!(next.neighbor(dir.opposite()).unwrap(), hex);
            assert_eq!(hex.distance(next), 1);
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(Hex::new(0, 0).distance(Hex::new(3, 3)), 3);
        assert_eq!(Hex::new(3, 3).distance(Hex::new(1, 1)), 2);
        assert_eq!(Hex::new(2, -1).distance(Hex::ORIGIN), 3);
        assert_eq!(Hex::new(-2, 0).distance(Hex::ORIGIN), 2);
        assert_eq!(Hex::new(1, 1).distance(Hex::new(1, 1)), 0);
    }

    #[test]
    fn test_distance_at_extremes() {
        let max = Hex::new(i32::MAX, 0);
        let min = Hex::new(i32::MIN, 0);
        assert_eq!(max.distance(min), (1i64 << 32) - 1);
        assert_eq!(min.distance(max), max.distance(min));
        assert_eq!(Hex::new(i32::MIN, i32::MAX).distance(Hex::new(i32::MAX, i32::MIN)), 2 * ((1i64 << 32) - 1));
        assert_eq!(Hex::new(i32::MIN, i32::MIN).distance(Hex::ORIGIN), 1i64 << 31);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let edge = Hex::new(i32::MAX, 0);
        assert!(matches!(edge.neighbor(Direction::NorthEast), Err(HexError::InvalidArgument(_))));
        assert_eq!(edge.neighbor(Direction::SouthWest).unwrap(), Hex::new(i32::MAX - 1, 0));
        assert!(matches!(edge.ring(1), Err(HexError::InvalidArgument(_))));
        assert!(matches!(edge.straight_ring(1), Err(HexError::InvalidArgument(_))));
        assert!(matches!(Hex::new(0, i32::MIN).straight_ring(2), Err(HexError::InvalidArgument(_))));

        // Exactly at the edge is still fine
        assert_eq!(edge.ring(0).unwrap().collect::<Vec<_>>(), vec![edge]);
        let inner = Hex::new(i32::MAX - 1, 0);
        assert_eq!(inner.ring(1).unwrap().count(), 6);
    }

    #[test]
    fn test_hex_ring() {
        let ring: HashSet<_> = Hex::ORIGIN.ring(1).unwrap().collect();
        let expected: HashSet<_> = [
            Hex::new(1, 0),
            Hex::new(0, -1),
            Hex::new(-1, -1),
            Hex::new(-1, 0),
            Hex::new(0, 1),
            Hex::new(1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(ring, expected);
    }

    #[test]
    fn test_ring_sizes() {
        let center = Hex::new(1, -2);
        for radius in 1..5 {
            assert_eq!(center.ring(radius).unwrap().count(), 6 * radius as usize);
        }
        let zero: Vec<_> = center.ring(0).unwrap().collect();
        assert_eq!(zero, vec![center]);
    }

    #[test]
    fn test_negative_radius() {
        assert!(matches!(Hex::ORIGIN.ring(-1), Err(HexError::InvalidArgument(_))));
        assert!(matches!(Hex::ORIGIN.straight_ring(-1), Err(HexError::InvalidArgument(_))));
    }

    #[test]
    fn test_straight_ring() {
        let moves: HashSet<_> = Hex::new(0, 1).straight_ring(2).unwrap().into_iter().collect();
        let expected: HashSet<_> = [
            Hex::new(0, -1),
            Hex::new(2, 1),
            Hex::new(2, 3),
            Hex::new(0, 3),
            Hex::new(-2, 1),
            Hex::new(-2, -1),
        ]
        .into_iter()
        .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_straight_ring_zero() {
        let hex = Hex::new(3, -1);
        assert_eq!(hex.straight_ring(0).unwrap(), [hex; 6]);
    }
}
