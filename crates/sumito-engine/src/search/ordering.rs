//! Move ordering: TT hint, then ejections, then other pushes, then the rest.

use std::cmp::Reverse;

use sumito_core::{Move, MoveList};

/// Ordering score of `mv`. Higher scores are searched first.
///
/// Score bands:
/// - TT move: 100,000
/// - Ejecting push: 20,000 + pieces pushed
/// - Other push: 10,000 + pieces pushed
/// - Everything else: 0
pub fn score_move(mv: Move, tt_move: Move) -> i32 {
    if mv == tt_move {
        100_000
    } else if mv.ejects() {
        20_000 + mv.pushed() as i32
    } else if mv.is_push() {
        10_000 + mv.pushed() as i32
    } else {
        0
    }
}

/// Sort `moves` by [`score_move`], keeping generation order within a band.
pub fn order_moves(moves: &mut MoveList, tt_move: Move) {
    moves
        .as_mut_slice()
        .sort_by_key(|&mv| Reverse(score_move(mv, tt_move)));
}
