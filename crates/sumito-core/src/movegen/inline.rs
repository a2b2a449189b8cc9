//! Inline moves: a group travelling along its own line, pushing if it must.

use crate::cell::Cell;
use crate::cell_set::CellSet;
use crate::direction::Direction;
use crate::moves::Move;

use super::{Filter, MoveList};

/// Generate inline moves of every group whose rear piece is `tail`.
pub(super) fn gen_inline(own: CellSet, theirs: CellSet, tail: Cell, filter: Filter, list: &mut MoveList) {
    for dir in Direction::ALL {
        let mut head = tail;
        for len in 1..=3u8 {
            if len > 1 {
                match head.neighbor(dir) {
                    Some(next) if own.contains(next) => head = next,
                    _ => break,
                }
            }
            let Some(pushed) = push_count(own, theirs, head, dir, len) else {
                continue;
            };
            if filter == Filter::PushesOnly && pushed == 0 {
                continue;
            }
            list.push(Move::inline(tail, dir, len, pushed));
        }
    }
}

/// How many opposing pieces a group of `len` with front piece `head` pushes
/// when it moves in `dir`, or `None` if the move is illegal.
fn push_count(own: CellSet, theirs: CellSet, head: Cell, dir: Direction, len: u8) -> Option<u8> {
    // Stepping off the board would throw our own piece away.
    let ahead = head.neighbor(dir)?;
    if own.contains(ahead) {
        return None;
    }
    if !theirs.contains(ahead) {
        return Some(0);
    }

    let mut pushed = 0u8;
    let mut cursor = Some(ahead);
    loop {
        match cursor {
            Some(cell) if theirs.contains(cell) => {
                pushed += 1;
                if pushed >= len {
                    return None;
                }
                cursor = cell.neighbor(dir);
            }
            // Off the board: the last piece of the run is ejected.
            None => return Some(pushed),
            Some(cell) if own.contains(cell) => return None,
            Some(_) => return Some(pushed),
        }
    }
}
