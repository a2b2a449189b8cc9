//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::movegen::legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without applying any of them. Finished games are leaves.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_game_over() {
        return 0;
    }

    let moves = legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut scratch = *board;
    let mut nodes = 0u64;
    for mv in &moves {
        scratch.apply_move(*mv);
        nodes += perft(&scratch, depth - 1);
        scratch.undo_move(*mv);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs sorted by move text.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let moves = legal_moves(board);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|mv| {
            let child = board.make_move(*mv);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
