//! Group structure: cohesion between pieces and pieces exposed on the edge.

use sumito_core::{Board, CellSet, Direction, Player};

/// Adjacent pairs of `player`'s pieces, each pair counted once.
fn adjacent_pairs(board: &Board, player: Player) -> i32 {
    let own = board.side(player);
    let mut pairs = 0;
    for cell in own {
        for axis in Direction::AXES {
            if cell.neighbor(axis).is_some_and(|n| own.contains(n)) {
                pairs += 1;
            }
        }
    }
    pairs
}

/// Edge pieces of `player` with fewer than two friendly neighbours.
fn exposed_pieces(board: &Board, player: Player) -> i32 {
    let own = board.side(player);
    (own & CellSet::edge())
        .into_iter()
        .filter(|cell| {
            let friends = Direction::ALL
                .iter()
                .filter(|&&dir| cell.neighbor(dir).is_some_and(|n| own.contains(n)))
                .count();
            friends < 2
        })
        .count() as i32
}

/// Cohesion difference from `perspective`'s point of view.
pub fn cohesion(board: &Board, perspective: Player) -> i32 {
    adjacent_pairs(board, perspective) - adjacent_pairs(board, !perspective)
}

/// Exposed-piece difference from `perspective`'s point of view.
pub fn danger(board: &Board, perspective: Player) -> i32 {
    exposed_pieces(board, perspective) - exposed_pieces(board, !perspective)
}
