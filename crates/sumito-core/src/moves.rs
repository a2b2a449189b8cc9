//! Piece-group moves, bit-packed into a u16.

use std::fmt;

use crate::cell::Cell;
use crate::direction::Direction;

// Private bit-field constants.
const TAIL_MASK: u16 = 0x003F;
const DIR_MASK: u16 = 0x01C0;
const AXIS_MASK: u16 = 0x0E00;
const LEN_MASK: u16 = 0x3000;
const PUSH_MASK: u16 = 0xC000;
const DIR_SHIFT: u32 = 6;
const AXIS_SHIFT: u32 = 9;
const LEN_SHIFT: u32 = 12;
const PUSH_SHIFT: u32 = 14;

/// Whether a group moves along its own line or across it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// The group moves along its line; the head may push opposing pieces.
    Inline,
    /// The group moves sideways; every target cell must be empty.
    Sidestep,
}

/// A move of 1–3 pieces in one of the six directions.
///
/// ```text
/// bits  0-5:   tail cell          (0-60, rear-most cell of the group)
/// bits  6-8:   motion direction   (0-5)
/// bits  9-11:  line axis          (0-5, tail -> head)
/// bits 12-13:  group length       (1-3, 0 = null)
/// bits 14-15:  pieces pushed      (0-2)
/// ```
///
/// Inline moves store the motion direction as the axis, so the tail is the
/// rear-most cell and the head is `tail + (len - 1) * dir`. Sidesteps use one
/// of [`Direction::AXES`]. Both forms are canonical: a move has exactly one
/// encoding, so two equal moves always compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Null move sentinel (length 0). Never a legal move.
    pub const NULL: Move = Move(0);

    /// Create an inline move of `len` pieces whose rear piece is `tail`.
    pub const fn inline(tail: Cell, dir: Direction, len: u8, pushed: u8) -> Move {
        debug_assert!(len >= 1 && len <= 3 && pushed < len);
        Move(
            (tail.index() as u16)
                | ((dir.index() as u16) << DIR_SHIFT)
                | ((dir.index() as u16) << AXIS_SHIFT)
                | ((len as u16) << LEN_SHIFT)
                | ((pushed as u16) << PUSH_SHIFT),
        )
    }

    /// Create a sidestep of `len` pieces lying on `axis` from `tail`.
    pub const fn sidestep(tail: Cell, axis: Direction, len: u8, dir: Direction) -> Move {
        debug_assert!(len >= 2 && len <= 3 && !axis.is_parallel(dir));
        Move(
            (tail.index() as u16)
                | ((dir.index() as u16) << DIR_SHIFT)
                | ((axis.index() as u16) << AXIS_SHIFT)
                | ((len as u16) << LEN_SHIFT),
        )
    }

    /// Create a move from its raw 16-bit encoding (TT storage).
    #[inline]
    pub const fn from_raw(raw: u16) -> Move {
        Move(raw)
    }

    /// The raw 16-bit encoding.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Rear-most cell of the group.
    #[inline]
    pub const fn tail(self) -> Cell {
        Cell::from_index_unchecked((self.0 & TAIL_MASK) as u8)
    }

    /// Direction the pieces travel.
    #[inline]
    pub const fn direction(self) -> Direction {
        match Direction::from_index(((self.0 & DIR_MASK) >> DIR_SHIFT) as u8) {
            Some(dir) => dir,
            None => Direction::East,
        }
    }

    /// Direction from tail to head along the group's line.
    #[inline]
    pub const fn axis(self) -> Direction {
        match Direction::from_index(((self.0 & AXIS_MASK) >> AXIS_SHIFT) as u8) {
            Some(dir) => dir,
            None => Direction::East,
        }
    }

    /// Number of own pieces moved (1..=3).
    #[inline]
    pub const fn len(self) -> u8 {
        ((self.0 & LEN_MASK) >> LEN_SHIFT) as u8
    }

    /// Number of opposing pieces pushed (0..=2).
    #[inline]
    pub const fn pushed(self) -> u8 {
        ((self.0 & PUSH_MASK) >> PUSH_SHIFT) as u8
    }

    /// Inline or sidestep.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        if (self.0 & AXIS_MASK) >> AXIS_SHIFT == (self.0 & DIR_MASK) >> DIR_SHIFT {
            MoveKind::Inline
        } else {
            MoveKind::Sidestep
        }
    }

    /// Return `true` if this is the null move sentinel.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 & LEN_MASK == 0
    }

    /// Return `true` if the move pushes at least one opposing piece.
    #[inline]
    pub const fn is_push(self) -> bool {
        self.pushed() > 0
    }

    /// Front-most cell along the group's line.
    ///
    /// Returns `None` only for malformed moves whose group leaves the board.
    pub fn head(self) -> Option<Cell> {
        let mut cell = self.tail();
        for _ in 1..self.len() {
            cell = cell.neighbor(self.axis())?;
        }
        Some(cell)
    }

    /// Return `true` if the push shoves the last opposing piece off the board.
    pub fn ejects(self) -> bool {
        if !self.is_push() {
            return false;
        }
        let dir = self.direction();
        let Some(mut cell) = self.head() else {
            return false;
        };
        // head -> first pushed -> ... -> last pushed
        for _ in 0..self.pushed() {
            match cell.neighbor(dir) {
                Some(next) => cell = next,
                None => return false,
            }
        }
        cell.neighbor(dir).is_none()
    }

    /// The cells of the moving group, tail first.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let axis = self.axis();
        let len = self.len() as usize;
        std::iter::successors(Some(self.tail()), move |c| c.neighbor(axis)).take(len)
    }
}

impl fmt::Display for Move {
    /// `C3>NE` for a single piece, `C3-C5>NE` for a group (tail, head,
    /// direction), with `*N` appended for a push of `N` pieces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}", self.tail())?;
        if self.len() > 1 {
            match self.head() {
                Some(head) => write!(f, "-{head}")?,
                None => write!(f, "-??")?,
            }
        }
        write!(f, ">{}", self.direction())?;
        if self.is_push() {
            write!(f, "*{}", self.pushed())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
