//! Search algorithms and the engine entry point.

pub mod control;
pub(crate) mod greedy;
pub mod history;
pub mod negamax;
pub mod ordering;
pub(crate) mod pruning;
pub mod tt;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use sumito_core::{Board, Move, MoveList, Player, generate_moves};
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::{ParseAlgorithmError, SearchError};
use crate::eval::Evaluator;

use control::SearchControl;
use history::PositionHistory;
use negamax::{Frame, SearchContext, WIN_THRESHOLD, negamax};
use pruning::{AlphaBeta, Exhaustive, Pruning};
use tt::TranspositionTable;

/// Tree-traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// One ply, every child scored by the evaluator.
    Greedy,
    /// Iterative deepening over plain minimax: no pruning, no table.
    IterativeDeepeningMinimax,
    /// Iterative deepening over alpha-beta with ordering and the table.
    AlphaBetaChampion,
}

impl Algorithm {
    /// All algorithms.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Greedy,
        Algorithm::IterativeDeepeningMinimax,
        Algorithm::AlphaBetaChampion,
    ];

    /// Short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::IterativeDeepeningMinimax => "minimax",
            Algorithm::AlphaBetaChampion => "champion",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "minimax" | "idm" | "id-minimax" => Ok(Algorithm::IterativeDeepeningMinimax),
            "champion" | "alphabeta" | "alpha-beta" => Ok(Algorithm::AlphaBetaChampion),
            _ => Err(ParseAlgorithmError { name: s.to_string() }),
        }
    }
}

/// How a search call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every planned depth finished, or a forced result was proven.
    Completed,
    /// The budget ran out; the last completed depth was used.
    TimedOut,
}

/// What a search call did, reported next to the chosen move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    /// Nodes visited, quiescence nodes included.
    pub nodes: u64,
    /// Deepest fully completed iteration.
    pub depth: u8,
    /// Score of the chosen move from the mover's point of view.
    pub score: i32,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Beta cutoffs taken.
    pub cutoffs: u64,
    /// Transposition table hits.
    pub tt_hits: u64,
    pub outcome: SearchOutcome,
    /// `true` if no iteration finished and the greedy pick was used.
    pub fallback: bool,
}

/// Search engine: configuration, evaluator, and transposition table.
///
/// Searches take `&mut self`, so one engine runs one search at a time.
pub struct Engine {
    config: EngineConfig,
    evaluator: Evaluator,
    tt: TranspositionTable,
}

impl Engine {
    /// Build an engine; the table is allocated here.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            evaluator: Evaluator::new(config.weights),
            tt: TranspositionTable::new(config.tt_size_mb),
            config,
        }
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The evaluator in use.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Forget every stored position.
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    /// Choose a move for `player` within `budget`.
    ///
    /// See [`Engine::choose_move_with_history`].
    pub fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        algorithm: Algorithm,
        budget: Duration,
    ) -> Result<(Move, Diagnostics), SearchError> {
        self.choose_move_with_history(board, player, algorithm, budget, &[])
    }

    /// Choose a move for `player`, treating any position in `history` (keys
    /// of the game's recent positions) as a draw when the search reaches it.
    ///
    /// A budget too small for depth 1 still yields a legal move, picked
    /// greedily and flagged with [`Diagnostics::fallback`].
    ///
    /// # Errors
    ///
    /// [`SearchError::Board`] for a malformed board or a player who cannot
    /// move, [`SearchError::GameOver`] when the game already has a winner,
    /// and [`SearchError::NotToMove`] when `player` is not on turn.
    pub fn choose_move_with_history(
        &mut self,
        board: &Board,
        player: Player,
        algorithm: Algorithm,
        budget: Duration,
        history: &[u64],
    ) -> Result<(Move, Diagnostics), SearchError> {
        let start = Instant::now();

        board.validate()?;
        if let Some(winner) = board.winner() {
            return Err(SearchError::GameOver { winner });
        }
        let to_move = board.side_to_move();
        if player != to_move {
            return Err(SearchError::NotToMove { player, to_move });
        }
        let moves = generate_moves(board, player)?;

        let (best_move, diagnostics) = match algorithm {
            Algorithm::Greedy => {
                let (mv, score, nodes) = greedy::pick(board, &moves, &self.evaluator, history);
                let diagnostics = Diagnostics {
                    nodes,
                    depth: 1,
                    score,
                    elapsed: start.elapsed(),
                    cutoffs: 0,
                    tt_hits: 0,
                    outcome: SearchOutcome::Completed,
                    fallback: false,
                };
                (mv, diagnostics)
            }
            Algorithm::IterativeDeepeningMinimax => {
                self.deepen::<Exhaustive>(board, &moves, budget, history, start)
            }
            Algorithm::AlphaBetaChampion => self.deepen::<AlphaBeta>(board, &moves, budget, history, start),
        };

        info!(
            %algorithm,
            %player,
            best = %best_move,
            score = diagnostics.score,
            depth = diagnostics.depth,
            nodes = diagnostics.nodes,
            elapsed_ms = diagnostics.elapsed.as_millis() as u64,
            "move chosen"
        );

        Ok((best_move, diagnostics))
    }

    /// Iterative deepening from depth 1 until `max_depth`, a proven result,
    /// or the budget runs out.
    fn deepen<P: Pruning>(
        &mut self,
        board: &Board,
        moves: &MoveList,
        budget: Duration,
        history: &[u64],
        start: Instant,
    ) -> (Move, Diagnostics) {
        self.tt.new_generation();

        let mut ctx = SearchContext {
            nodes: 0,
            cutoffs: 0,
            tt_hits: 0,
            tt: &mut self.tt,
            evaluator: &self.evaluator,
            control: SearchControl::starting_at(start, Some(budget)),
            history: PositionHistory::from_game(history),
            quiescence_depth: self.config.quiescence_depth,
            root_move: Move::NULL,
        };

        let mut scratch = *board;
        let mut completed: Option<(Move, i32, u8)> = None;
        let mut outcome = SearchOutcome::Completed;

        for depth in 1..=self.config.max_depth.max(1) {
            if ctx.control.out_of_time() {
                outcome = SearchOutcome::TimedOut;
                break;
            }

            ctx.root_move = Move::NULL;
            let frame = Frame::root(depth, ctx.history.len());
            let Some(score) = negamax::<P>(&mut scratch, frame, &mut ctx) else {
                outcome = SearchOutcome::TimedOut;
                break;
            };

            let best = ctx.root_move;
            completed = Some((best, score, depth));
            debug!(depth, score, nodes = ctx.nodes, %best, "depth completed");

            if score.abs() > WIN_THRESHOLD {
                break;
            }
        }

        let SearchContext {
            nodes,
            cutoffs,
            tt_hits,
            ..
        } = ctx;

        let (best_move, score, depth, nodes, fallback) = match completed {
            Some((mv, score, depth)) => (mv, score, depth, nodes, false),
            None => {
                let (mv, score, greedy_nodes) = greedy::pick(board, moves, &self.evaluator, history);
                warn!(
                    budget_ms = budget.as_millis() as u64,
                    best = %mv,
                    "budget exhausted before depth 1, using greedy pick"
                );
                (mv, score, 1, nodes + greedy_nodes, true)
            }
        };

        let diagnostics = Diagnostics {
            nodes,
            depth,
            score,
            elapsed: start.elapsed(),
            cutoffs,
            tt_hits,
            outcome,
            fallback,
        };
        (best_move, diagnostics)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("tt", &self.tt)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_depth(depth: u8) -> EngineConfig {
        EngineConfig {
            max_depth: depth,
            ..EngineConfig::default()
        }
    }

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn algorithm_parses_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("Alpha-Beta".parse::<Algorithm>().unwrap(), Algorithm::AlphaBetaChampion);
        assert_eq!("IDM".parse::<Algorithm>().unwrap(), Algorithm::IterativeDeepeningMinimax);
        assert!("random".parse::<Algorithm>().is_err());
    }

    #[test]
    fn depth_1_returns_legal_move() {
        let board = Board::starting_position();
        let mut engine = Engine::new(fixed_depth(1));
        let (mv, diag) = engine
            .choose_move(&board, Player::Black, Algorithm::AlphaBetaChampion, HOUR)
            .unwrap();
        assert!(sumito_core::legal_moves(&board).contains(mv));
        assert_eq!(diag.depth, 1);
        assert_eq!(diag.outcome, SearchOutcome::Completed);
        assert!(!diag.fallback);
    }

    #[test]
    fn reaches_configured_depth() {
        let board = Board::starting_position();
        let mut engine = Engine::new(fixed_depth(3));
        let (_, diag) = engine
            .choose_move(&board, Player::Black, Algorithm::AlphaBetaChampion, HOUR)
            .unwrap();
        assert_eq!(diag.depth, 3);
        assert!(diag.nodes > 44);
    }

    #[test]
    fn second_search_hits_the_table() {
        let board = Board::starting_position();
        let mut engine = Engine::new(fixed_depth(3));
        engine
            .choose_move(&board, Player::Black, Algorithm::AlphaBetaChampion, HOUR)
            .unwrap();
        let (_, diag) = engine
            .choose_move(&board, Player::Black, Algorithm::AlphaBetaChampion, HOUR)
            .unwrap();
        assert!(diag.tt_hits > 0);
    }

    #[test]
    fn wrong_side_is_rejected() {
        let board = Board::starting_position();
        let mut engine = Engine::default();
        let err = engine
            .choose_move(&board, Player::White, Algorithm::Greedy, HOUR)
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::NotToMove {
                player: Player::White,
                to_move: Player::Black
            }
        );
    }

    #[test]
    fn finished_game_is_rejected() {
        let board: Board = "5/6/7/8/4b4/8/7/6/w4 w 0 6 30".parse().unwrap();
        let mut engine = Engine::default();
        let err = engine
            .choose_move(&board, Player::White, Algorithm::AlphaBetaChampion, HOUR)
            .unwrap_err();
        assert_eq!(err, SearchError::GameOver { winner: Player::Black });
    }

    #[test]
    fn player_without_pieces_is_invalid_state() {
        let board: Board = "5/6/7/8/4b4/8/7/6/5 w 0 0 30".parse().unwrap();
        let mut engine = Engine::default();
        let err = engine
            .choose_move(&board, Player::White, Algorithm::Greedy, HOUR)
            .unwrap_err();
        assert!(err.is_invalid_state());
    }
}
