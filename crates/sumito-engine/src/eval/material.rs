//! Material balance: pieces still on the board.

use sumito_core::{Board, Player};

/// Piece-count difference from `perspective`'s point of view.
pub fn material(board: &Board, perspective: Player) -> i32 {
    board.pieces_on_board(perspective) as i32 - board.pieces_on_board(!perspective) as i32
}
