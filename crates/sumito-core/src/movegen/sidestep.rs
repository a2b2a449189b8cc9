//! Sidesteps: a group of two or three sliding across its own line.

use crate::cell::Cell;
use crate::cell_set::CellSet;
use crate::direction::Direction;
use crate::moves::Move;

use super::MoveList;

/// Generate sidesteps of groups lying on a canonical axis from `tail`.
pub(super) fn gen_sidesteps(own: CellSet, theirs: CellSet, tail: Cell, list: &mut MoveList) {
    let vacant = !(own | theirs);
    for axis in Direction::AXES {
        let mut group = [tail; 3];
        for len in 2..=3usize {
            match group[len - 2].neighbor(axis) {
                Some(next) if own.contains(next) => group[len - 1] = next,
                _ => break,
            }
            for dir in Direction::ALL {
                if dir.is_parallel(axis) {
                    continue;
                }
                let clear = group[..len]
                    .iter()
                    .all(|c| c.neighbor(dir).is_some_and(|t| vacant.contains(t)));
                if clear {
                    list.push(Move::sidestep(tail, axis, len as u8, dir));
                }
            }
        }
    }
}
