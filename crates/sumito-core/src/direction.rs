//! The six axes of the hexagonal grid.

use std::fmt;

/// One of the six hex directions, in axial `(dq, dr)` terms.
///
/// Index order is fixed: `E, NE, NW, W, SW, SE`, so `opposite` is `+3 mod 6`
/// and the first three are the canonical line axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    East = 0,
    NorthEast = 1,
    NorthWest = 2,
    West = 3,
    SouthWest = 4,
    SouthEast = 5,
}

impl Direction {
    /// Total number of directions.
    pub const COUNT: usize = 6;

    /// All directions in index order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// One representative per line through a cell.
    pub const AXES: [Direction; 3] = [Direction::East, Direction::NorthEast, Direction::NorthWest];

    /// Axial offsets indexed by [`Direction::index()`].
    const DELTAS: [(i8, i8); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

    /// Return the index (0..6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a direction from its index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Direction> {
        match index {
            0 => Some(Direction::East),
            1 => Some(Direction::NorthEast),
            2 => Some(Direction::NorthWest),
            3 => Some(Direction::West),
            4 => Some(Direction::SouthWest),
            5 => Some(Direction::SouthEast),
            _ => None,
        }
    }

    /// Axial `(dq, dr)` step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        Self::DELTAS[self.index()]
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::West => Direction::East,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    /// Return `true` if `other` lies on the same line (same or opposite).
    #[inline]
    pub const fn is_parallel(self, other: Direction) -> bool {
        self.index() % 3 == other.index() % 3
    }

    /// Short compass label.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::West => "W",
            Direction::SouthWest => "SW",
            Direction::SouthEast => "SE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn opposite_is_plus_three() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().index(), (dir.index() + 3) % 6);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for dir in Direction::ALL {
            let (dq, dr) = dir.delta();
            let (oq, or) = dir.opposite().delta();
            assert_eq!((dq + oq, dr + or), (0, 0));
        }
    }

    #[test]
    fn parallel_axes() {
        assert!(Direction::East.is_parallel(Direction::West));
        assert!(Direction::NorthEast.is_parallel(Direction::NorthEast));
        assert!(!Direction::East.is_parallel(Direction::NorthEast));
        assert!(!Direction::NorthWest.is_parallel(Direction::SouthWest));
    }

    #[test]
    fn from_index_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_index(dir.index() as u8), Some(dir));
        }
        assert_eq!(Direction::from_index(6), None);
    }
}
