//! Greedy one-ply search: the best immediate position wins.

use sumito_core::{Board, Move, MoveList};

use crate::eval::Evaluator;
use crate::search::negamax::{DRAW_SCORE, WIN_SCORE};

/// Pick the move whose child position scores best for the mover.
///
/// A child where the opponent has lost scores as a win and a child whose key
/// is in `history` scores as a draw. Ties go to the first move in generation
/// order. Returns the move, its score, and the number of children scored.
pub(crate) fn pick(board: &Board, moves: &MoveList, evaluator: &Evaluator, history: &[u64]) -> (Move, i32, u64) {
    let me = board.side_to_move();
    let mut best_move = Move::NULL;
    let mut best_score = i32::MIN;
    let mut nodes = 0u64;

    for &mv in moves {
        let child = board.make_move(mv);
        nodes += 1;
        let score = if child.winner() == Some(me) {
            WIN_SCORE - 1
        } else if history.contains(&child.hash()) {
            DRAW_SCORE
        } else {
            evaluator.evaluate(&child, me)
        };
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    (best_move, best_score, nodes)
}
