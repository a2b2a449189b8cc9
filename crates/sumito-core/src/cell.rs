//! Cells of the 61-cell hexagonal board in axial coordinates.

use std::fmt;

use crate::cell_set::CellSet;
use crate::direction::Direction;

/// Index of the first cell of each row, `r = -4` first.
const ROW_START: [u8; 9] = [0, 5, 11, 18, 26, 35, 43, 50, 56];

/// Sentinel for "no neighbour" in [`NEIGHBORS`].
const OFF_BOARD: u8 = u8::MAX;

/// Axial `(q, r)` of every cell, indexed by [`Cell::index()`].
static COORDS: [(i8, i8); Cell::COUNT] = {
    let mut table = [(0i8, 0i8); Cell::COUNT];
    let mut r = -Cell::RADIUS;
    let mut i = 0;
    while r <= Cell::RADIUS {
        let mut q = row_min_q(r);
        while q <= row_max_q(r) {
            table[i] = (q, r);
            i += 1;
            q += 1;
        }
        r += 1;
    }
    table
};

/// Neighbour index per direction, or [`OFF_BOARD`].
static NEIGHBORS: [[u8; Direction::COUNT]; Cell::COUNT] = {
    let mut table = [[OFF_BOARD; Direction::COUNT]; Cell::COUNT];
    let mut i = 0;
    while i < Cell::COUNT {
        let (q, r) = COORDS[i];
        let mut d = 0;
        while d < Direction::COUNT {
            let (dq, dr) = Direction::ALL[d].delta();
            if let Some(index) = axial_index(q + dq, r + dr) {
                table[i][d] = index;
            }
            d += 1;
        }
        i += 1;
    }
    table
};

const fn row_min_q(r: i8) -> i8 {
    if r < 0 { -Cell::RADIUS - r } else { -Cell::RADIUS }
}

const fn row_max_q(r: i8) -> i8 {
    if r > 0 { Cell::RADIUS - r } else { Cell::RADIUS }
}

const fn axial_index(q: i8, r: i8) -> Option<u8> {
    if r < -Cell::RADIUS || r > Cell::RADIUS {
        return None;
    }
    if q < row_min_q(r) || q > row_max_q(r) {
        return None;
    }
    Some(ROW_START[(r + Cell::RADIUS) as usize] + (q - row_min_q(r)) as u8)
}

/// A cell on the board, stored as its index (0..61).
///
/// Cells are numbered row by row from the top (`r = -4`) to the bottom
/// (`r = 4`), `q` ascending within a row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Total number of cells.
    pub const COUNT: usize = 61;

    /// Distance from the centre to the edge ring.
    pub const RADIUS: i8 = 4;

    /// The centre cell.
    pub const CENTER: Cell = Cell(30);

    /// Create a cell from axial coordinates, or `None` if off the board.
    #[inline]
    pub const fn from_axial(q: i8, r: i8) -> Option<Cell> {
        match axial_index(q, r) {
            Some(index) => Some(Cell(index)),
            None => None,
        }
    }

    /// Create a cell from an index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Cell> {
        if (index as usize) < Self::COUNT {
            Some(Cell(index))
        } else {
            None
        }
    }

    /// Create a cell from an index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 61`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Cell {
        debug_assert!((index as usize) < Self::COUNT);
        Cell(index)
    }

    /// Return the zero-based index (0..61).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Axial `q` coordinate.
    #[inline]
    pub const fn q(self) -> i8 {
        COORDS[self.0 as usize].0
    }

    /// Axial `r` coordinate.
    #[inline]
    pub const fn r(self) -> i8 {
        COORDS[self.0 as usize].1
    }

    /// Hex distance to the centre cell (0..=4).
    #[inline]
    pub const fn distance_from_center(self) -> u8 {
        let (q, r) = COORDS[self.0 as usize];
        (q.unsigned_abs() + r.unsigned_abs() + (q + r).unsigned_abs()) / 2
    }

    /// Return `true` if the cell lies on the outer ring.
    #[inline]
    pub const fn is_edge(self) -> bool {
        self.distance_from_center() == Self::RADIUS as u8
    }

    /// The adjacent cell in `dir`, or `None` past the edge.
    #[inline]
    pub const fn neighbor(self, dir: Direction) -> Option<Cell> {
        let index = NEIGHBORS[self.0 as usize][dir.index()];
        if index == OFF_BOARD { None } else { Some(Cell(index)) }
    }

    /// Return a set containing only this cell.
    #[inline]
    pub const fn bit(self) -> CellSet {
        CellSet::new(1u64 << self.0)
    }

    /// Iterate over all 61 cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0u8..Self::COUNT as u8).map(Cell)
    }

    /// Parse board notation such as `"E5"`: row letter `A` (bottom) to `I`
    /// (top), then diagonal number `1`..`9`.
    pub fn from_notation(s: &str) -> Option<Cell> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let row = bytes[0].to_ascii_uppercase();
        let diagonal = bytes[1];
        if !(b'A'..=b'I').contains(&row) || !(b'1'..=b'9').contains(&diagonal) {
            return None;
        }
        let r = Self::RADIUS - (row - b'A') as i8;
        let q = (diagonal - b'1') as i8 - Self::RADIUS;
        Cell::from_axial(q, r)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + (Self::RADIUS - self.r()) as u8) as char;
        let diagonal = self.q() + Self::RADIUS + 1;
        write!(f, "{row}{diagonal}")
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_one_cells() {
        assert_eq!(Cell::all().count(), 61);
        for cell in Cell::all() {
            assert_eq!(Cell::from_axial(cell.q(), cell.r()), Some(cell));
        }
    }

    #[test]
    fn center_is_origin() {
        assert_eq!(Cell::CENTER.q(), 0);
        assert_eq!(Cell::CENTER.r(), 0);
        assert_eq!(Cell::CENTER.distance_from_center(), 0);
    }

    #[test]
    fn off_board_coordinates_rejected() {
        assert!(Cell::from_axial(4, 1).is_none());
        assert!(Cell::from_axial(-4, -1).is_none());
        assert!(Cell::from_axial(5, 0).is_none());
        assert!(Cell::from_axial(4, -4).is_some());
    }

    #[test]
    fn edge_ring_has_24_cells() {
        assert_eq!(Cell::all().filter(|c| c.is_edge()).count(), 24);
    }

    #[test]
    fn neighbors_are_symmetric() {
        for cell in Cell::all() {
            for dir in Direction::ALL {
                if let Some(n) = cell.neighbor(dir) {
                    assert_eq!(n.neighbor(dir.opposite()), Some(cell));
                }
            }
        }
    }

    #[test]
    fn center_has_six_neighbors_corner_has_three() {
        let center = Direction::ALL.iter().filter(|&&d| Cell::CENTER.neighbor(d).is_some()).count();
        assert_eq!(center, 6);
        let corner = Cell::from_notation("A1").unwrap();
        let count = Direction::ALL.iter().filter(|&&d| corner.neighbor(d).is_some()).count();
        assert_eq!(count, 3);
    }

    #[test]
    fn notation_roundtrip() {
        for cell in Cell::all() {
            let text = cell.to_string();
            assert_eq!(Cell::from_notation(&text), Some(cell), "{text}");
        }
        assert_eq!(Cell::from_notation("E5"), Some(Cell::CENTER));
        assert!(Cell::from_notation("A6").is_none());
        assert!(Cell::from_notation("J1").is_none());
        assert!(Cell::from_notation("e").is_none());
    }
}
