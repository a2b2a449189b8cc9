//! Compile-time dispatch between pruned and exhaustive tree search.

/// Marker trait selecting how [`negamax`](super::negamax::negamax) walks
/// the tree.
pub(crate) trait Pruning {
    /// Cut off on `alpha >= beta`, order moves, and use the TT.
    const ALPHA_BETA: bool;
}

/// Alpha-beta with move ordering and the transposition table.
pub(crate) struct AlphaBeta;
impl Pruning for AlphaBeta {
    const ALPHA_BETA: bool = true;
}

/// Plain minimax: every move searched, no table.
pub(crate) struct Exhaustive;
impl Pruning for Exhaustive {
    const ALPHA_BETA: bool = false;
}
