//! Centre control: pieces far from the edge are hard to push off.

use sumito_core::{Board, Cell, Player};

/// Rings between a cell and the edge: 4 at the centre, 0 on the edge.
#[inline]
fn depth_from_edge(cell: Cell) -> i32 {
    Cell::RADIUS as i32 - cell.distance_from_center() as i32
}

fn centrality(board: &Board, player: Player) -> i32 {
    board.side(player).into_iter().map(depth_from_edge).sum()
}

/// Centrality difference from `perspective`'s point of view.
pub fn center_control(board: &Board, perspective: Player) -> i32 {
    centrality(board, perspective) - centrality(board, !perspective)
}
