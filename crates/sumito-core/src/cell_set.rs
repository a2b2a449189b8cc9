//! Sets of cells packed into a `u64`, one bit per cell (61 bits used).

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::cell::Cell;

/// A set of board cells. Bit `i` is [`Cell`] index `i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet(u64);

impl CellSet {
    /// Empty set.
    pub const EMPTY: CellSet = CellSet(0);

    /// Every cell on the board.
    pub const ALL: CellSet = CellSet((1u64 << Cell::COUNT) - 1);

    /// Create a set from raw bits. Bits at 61 and above are dropped.
    #[inline]
    pub const fn new(bits: u64) -> CellSet {
        CellSet(bits & Self::ALL.0)
    }

    /// Return the underlying `u64`.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    /// Return `true` if no cells are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if at least one cell is set.
    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Number of cells in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `cell` is in the set.
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        (self.0 & (1u64 << cell.index())) != 0
    }

    /// Return a new set with `cell` added.
    #[inline]
    pub const fn with(self, cell: Cell) -> CellSet {
        CellSet(self.0 | (1u64 << cell.index()))
    }

    /// Return a new set with `cell` removed.
    #[inline]
    pub const fn without(self, cell: Cell) -> CellSet {
        CellSet(self.0 & !(1u64 << cell.index()))
    }

    /// Return a new set with `cell` toggled.
    #[inline]
    pub const fn toggle(self, cell: Cell) -> CellSet {
        CellSet(self.0 ^ (1u64 << cell.index()))
    }

    /// Lowest-indexed cell, or `None` if empty.
    #[inline]
    pub const fn first(self) -> Option<Cell> {
        if self.0 == 0 {
            None
        } else {
            Some(Cell::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// Pop the lowest-indexed cell, returning it and the remaining set.
    #[inline]
    pub const fn pop_first(self) -> Option<(Cell, CellSet)> {
        if self.0 == 0 {
            None
        } else {
            let cell = Cell::from_index_unchecked(self.0.trailing_zeros() as u8);
            Some((cell, CellSet(self.0 & (self.0 - 1))))
        }
    }

    /// The outer ring of 24 cells.
    pub fn edge() -> CellSet {
        Cell::all().filter(|c| c.is_edge()).collect()
    }
}

impl BitAnd for CellSet {
    type Output = CellSet;
    #[inline]
    fn bitand(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 & rhs.0)
    }
}

impl BitAndAssign for CellSet {
    #[inline]
    fn bitand_assign(&mut self, rhs: CellSet) {
        self.0 &= rhs.0;
    }
}

impl BitOr for CellSet {
    type Output = CellSet;
    #[inline]
    fn bitor(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: CellSet) {
        self.0 |= rhs.0;
    }
}

impl BitXor for CellSet {
    type Output = CellSet;
    #[inline]
    fn bitxor(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for CellSet {
    #[inline]
    fn bitxor_assign(&mut self, rhs: CellSet) {
        self.0 ^= rhs.0;
    }
}

impl Not for CellSet {
    type Output = CellSet;
    /// Complement within the board (never sets the 3 unused high bits).
    #[inline]
    fn not(self) -> CellSet {
        CellSet(!self.0 & Self::ALL.0)
    }
}

/// Iterator over the cells of a [`CellSet`] in index order.
pub struct CellSetIter(CellSet);

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        let (cell, rest) = self.0.pop_first()?;
        self.0 = rest;
        Some(cell)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellSetIter {}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    #[inline]
    fn into_iter(self) -> CellSetIter {
        CellSetIter(self)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> CellSet {
        iter.into_iter().fold(CellSet::EMPTY, CellSet::with)
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}
