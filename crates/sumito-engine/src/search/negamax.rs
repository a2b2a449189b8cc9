//! Negamax search with quiescence, shared by the pruned and exhaustive
//! variants.
//!
//! Every function returns `None` once the time budget is exhausted. The
//! caller discards the unfinished iteration, so nothing computed after the
//! abort is ever stored or reported.

use sumito_core::{Board, Move, generate_pushes, has_push, legal_moves};

use crate::eval::Evaluator;
use crate::search::control::SearchControl;
use crate::search::history::PositionHistory;
use crate::search::ordering::order_moves;
use crate::search::pruning::Pruning;
use crate::search::tt::{Bound, TranspositionTable};

/// Score bound no real score reaches.
pub const INF: i32 = 1_100_000_000;

/// Score of a won game, reduced by the ply it is reached at.
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Scores beyond this magnitude are proven wins or losses.
pub const WIN_THRESHOLD: i32 = 900_000_000;

/// Score of a repeated position.
pub const DRAW_SCORE: i32 = 0;

/// Score for the side to move when it has already lost at `ply`.
#[inline]
pub fn loss_score(ply: u8) -> i32 {
    -(WIN_SCORE - ply as i32)
}

/// Per-node search state, passed by value down the tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    /// Remaining nominal depth.
    pub depth: u8,
    /// Distance from the root.
    pub ply: u8,
    pub alpha: i32,
    pub beta: i32,
    /// History stack length on entry; restored before the node returns.
    pub history_len: usize,
}

impl Frame {
    /// Frame of a root search to `depth` with a full window.
    pub fn root(depth: u8, history_len: usize) -> Frame {
        Frame {
            depth,
            ply: 0,
            alpha: -INF,
            beta: INF,
            history_len,
        }
    }
}

/// Mutable state of one search call.
pub(crate) struct SearchContext<'a> {
    /// Nodes visited, quiescence nodes included.
    pub nodes: u64,
    /// Beta cutoffs taken.
    pub cutoffs: u64,
    /// TT probes that found the position.
    pub tt_hits: u64,
    pub tt: &'a mut TranspositionTable,
    pub evaluator: &'a Evaluator,
    pub control: SearchControl,
    /// Game keys, then the ancestors of the current node.
    pub history: PositionHistory,
    pub quiescence_depth: u8,
    /// Best root move of the iteration in progress.
    pub root_move: Move,
}

impl SearchContext<'_> {
    #[inline]
    fn evaluate(&self, board: &Board) -> i32 {
        self.evaluator.evaluate(board, board.side_to_move())
    }

    /// Count a node and poll the clock. `true` means abort.
    #[inline]
    fn enter_node(&mut self) -> bool {
        self.nodes += 1;
        self.control.should_stop(self.nodes)
    }
}

/// Play `mv`, search the child with the negated window, and take `mv` back.
///
/// The board and the history stack are restored before returning, whether
/// the child finished or aborted.
fn descend<P: Pruning>(board: &mut Board, mv: Move, frame: Frame, ctx: &mut SearchContext<'_>) -> Option<i32> {
    ctx.history.push(board.hash());
    board.apply_move(mv);
    let child = Frame {
        depth: frame.depth - 1,
        ply: frame.ply + 1,
        alpha: -frame.beta,
        beta: -frame.alpha,
        history_len: ctx.history.len(),
    };
    let result = negamax::<P>(board, child, ctx);
    board.undo_move(mv);
    ctx.history.truncate(frame.history_len);
    result.map(|score| -score)
}

/// Negamax search of `board` from the side to move's point of view.
///
/// At the root (`ply == 0`) the repetition check and TT cutoffs are skipped
/// and the best move is recorded in `ctx.root_move`.
pub(crate) fn negamax<P: Pruning>(board: &mut Board, mut frame: Frame, ctx: &mut SearchContext<'_>) -> Option<i32> {
    if ctx.enter_node() {
        return None;
    }

    // The previous mover may have just taken the sixth piece.
    if board.is_game_over() {
        return Some(loss_score(frame.ply));
    }

    if frame.ply > 0 && ctx.history.repeats(board.hash()) {
        return Some(DRAW_SCORE);
    }

    let mut tt_move = Move::NULL;
    if P::ALPHA_BETA
        && let Some(entry) = ctx.tt.probe(board.hash(), frame.ply)
    {
        ctx.tt_hits += 1;
        tt_move = entry.best_move;
        if frame.ply > 0 && entry.depth >= frame.depth {
            match entry.bound {
                Bound::Exact => return Some(entry.score),
                Bound::LowerBound => frame.alpha = frame.alpha.max(entry.score),
                Bound::UpperBound => frame.beta = frame.beta.min(entry.score),
            }
            if frame.alpha >= frame.beta {
                return Some(entry.score);
            }
        }
    }

    if frame.depth == 0 {
        // Quiet leaf: no push to resolve.
        if !has_push(board, board.side_to_move()) {
            return Some(ctx.evaluate(board));
        }
        return qsearch::<P>(board, frame.ply, frame.alpha, frame.beta, ctx.quiescence_depth, ctx);
    }

    let mut moves = legal_moves(board);
    // Blocked in with pieces left: score the position as it stands.
    if moves.is_empty() {
        return Some(ctx.evaluate(board));
    }
    if P::ALPHA_BETA {
        order_moves(&mut moves, tt_move);
    }

    let original_alpha = frame.alpha;
    let mut best_score = -INF;
    let mut best_move = Move::NULL;

    for &mv in moves.as_slice() {
        let score = descend::<P>(board, mv, frame, ctx)?;

        if score > best_score {
            best_score = score;
            best_move = mv;
            if frame.ply == 0 {
                ctx.root_move = mv;
            }
        }

        if P::ALPHA_BETA {
            if score > frame.alpha {
                frame.alpha = score;
            }
            if frame.alpha >= frame.beta {
                ctx.cutoffs += 1;
                break;
            }
        }
    }

    if P::ALPHA_BETA {
        let bound = if best_score <= original_alpha {
            Bound::UpperBound
        } else if best_score >= frame.beta {
            Bound::LowerBound
        } else {
            Bound::Exact
        };
        ctx.tt
            .store(board.hash(), frame.depth, best_score, best_move, bound, frame.ply);
    }

    Some(best_score)
}

/// Quiescence search over push moves only, at most `remaining` plies deep.
///
/// The side to move may stand pat on the static evaluation.
fn qsearch<P: Pruning>(
    board: &mut Board,
    ply: u8,
    mut alpha: i32,
    beta: i32,
    remaining: u8,
    ctx: &mut SearchContext<'_>,
) -> Option<i32> {
    if ctx.enter_node() {
        return None;
    }

    if board.is_game_over() {
        return Some(loss_score(ply));
    }

    let stand_pat = ctx.evaluate(board);
    if remaining == 0 {
        return Some(stand_pat);
    }
    if P::ALPHA_BETA {
        if stand_pat >= beta {
            return Some(stand_pat);
        }
        alpha = alpha.max(stand_pat);
    }

    let mut pushes = generate_pushes(board);
    if P::ALPHA_BETA {
        order_moves(&mut pushes, Move::NULL);
    }

    let mut best = stand_pat;
    for &mv in pushes.as_slice() {
        board.apply_move(mv);
        let result = qsearch::<P>(board, ply + 1, -beta, -alpha, remaining - 1, ctx);
        board.undo_move(mv);
        let score = -result?;

        best = best.max(score);
        if P::ALPHA_BETA {
            alpha = alpha.max(score);
            if alpha >= beta {
                ctx.cutoffs += 1;
                break;
            }
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Weights;
    use crate::search::pruning::{AlphaBeta, Exhaustive};
    use sumito_core::Player;

    fn run<P: Pruning>(board: &Board, depth: u8, history: &[u64], tt_mb: usize) -> (Move, i32, u64) {
        let mut tt = TranspositionTable::new(tt_mb);
        let evaluator = Evaluator::new(Weights::default());
        let mut ctx = SearchContext {
            nodes: 0,
            cutoffs: 0,
            tt_hits: 0,
            tt: &mut tt,
            evaluator: &evaluator,
            control: SearchControl::infinite(),
            history: PositionHistory::from_game(history),
            quiescence_depth: 2,
            root_move: Move::NULL,
        };
        let mut scratch = *board;
        let frame = Frame::root(depth, ctx.history.len());
        let score = negamax::<P>(&mut scratch, frame, &mut ctx).unwrap();
        assert_eq!(scratch, *board, "search must leave the board untouched");
        assert_eq!(ctx.history.len(), history.len(), "history must be restored");
        (ctx.root_move, score, ctx.nodes)
    }

    #[test]
    fn pruned_matches_exhaustive_on_contact_position() {
        let board: Board = "5/6/7/3bw3/2bbbw3/3ww3/7/6/5 b 0 0 0".parse().unwrap();
        for depth in 1..=2 {
            let (_, ab, ab_nodes) = run::<AlphaBeta>(&board, depth, &[], 0);
            let (_, mm, mm_nodes) = run::<Exhaustive>(&board, depth, &[], 0);
            assert_eq!(ab, mm, "depth {depth}");
            assert!(ab_nodes <= mm_nodes);
        }
    }

    #[test]
    fn finished_game_scores_as_loss() {
        let board: Board = "5/6/7/8/4b4/8/7/6/w4 w 0 6 30".parse().unwrap();
        let (mv, score, _) = run::<AlphaBeta>(&board, 3, &[], 1);
        assert!(mv.is_null());
        assert_eq!(score, loss_score(0));
    }

    #[test]
    fn ejecting_sixth_piece_scores_as_win() {
        let board: Board = "5/6/7/8/6bbw/8/7/6/w4 b 0 5 40".parse().unwrap();
        let (mv, score, _) = run::<AlphaBeta>(&board, 1, &[], 1);
        assert!(mv.ejects());
        assert_eq!(score, WIN_SCORE - 1);
    }

    #[test]
    fn repeated_child_scores_as_draw() {
        // Every black move from here leads to a position listed in the
        // history, so the best achievable score is a draw.
        let board: Board = "5/6/7/8/4b4/8/7/6/w4 b 0 0 0".parse().unwrap();
        let children: Vec<u64> = legal_moves(&board)
            .as_slice()
            .iter()
            .map(|&mv| board.make_move(mv).hash())
            .collect();
        let (_, score, _) = run::<Exhaustive>(&board, 2, &children, 0);
        assert_eq!(score, DRAW_SCORE);
    }

    #[test]
    fn quiet_leaf_is_evaluated_without_quiescence() {
        let start = Board::starting_position();
        let (_, score, nodes) = run::<AlphaBeta>(&start, 0, &[], 0);
        assert_eq!(nodes, 1);
        assert_eq!(score, Evaluator::new(Weights::default()).evaluate(&start, Player::Black));
    }

    #[test]
    fn noisy_leaf_extends_into_quiescence() {
        let board: Board = "5/6/7/8/2bbw4/8/7/6/5 b 0 0 0".parse().unwrap();
        let (_, _, nodes) = run::<Exhaustive>(&board, 0, &[], 0);
        assert!(nodes > 1);
    }
}
