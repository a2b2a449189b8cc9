//! Match driver.
//!
//! A match alternates the two engines from the configured start until a side
//! loses six pieces, a position repeats too often, a side cannot move, or the
//! move limit decides the game on eliminations. If nobody has lost a piece
//! when the escalation point is reached, both engines are rebuilt with
//! material and aggression scaled up to force contact.

use std::collections::HashMap;
use std::fmt;

use sumito_core::{Board, BoardError, Move, Player};
use sumito_engine::{Algorithm, Engine, SearchError};
use tracing::{debug, info, warn};

use crate::config::{MatchConfig, MatchRules, SideConfig};
use crate::error::ArenaError;

/// Why a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A side lost six pieces.
    Elimination,
    /// A position occurred as often as the repetition limit allows.
    Repetition,
    /// The side to move had no legal move and lost.
    NoMoves,
    /// The move limit was reached; more eliminations wins.
    MoveLimit,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndReason::Elimination => "elimination",
            EndReason::Repetition => "repetition",
            EndReason::NoMoves => "no legal moves",
            EndReason::MoveLimit => "move limit",
        };
        f.write_str(s)
    }
}

/// Result of one match.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub black: Algorithm,
    pub white: Algorithm,
    /// `None` for a draw.
    pub winner: Option<Player>,
    pub reason: EndReason,
    pub moves: Vec<Move>,
    pub final_board: Board,
    /// Whether the engines were escalated during the match.
    pub escalated: bool,
}

impl MatchRecord {
    /// The algorithm that won, if any.
    pub fn winning_algorithm(&self) -> Option<Algorithm> {
        self.winner.map(|player| match player {
            Player::Black => self.black,
            Player::White => self.white,
        })
    }
}

/// Aggregate of a series between two algorithms.
#[derive(Debug, Clone)]
pub struct SeriesSummary {
    pub first: Algorithm,
    pub second: Algorithm,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
    pub records: Vec<MatchRecord>,
}

impl SeriesSummary {
    /// Games played.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {} ({} draws, {} games)",
            self.first,
            self.first_wins,
            self.second_wins,
            self.second,
            self.draws,
            self.games()
        )
    }
}

/// Plays matches between engines.
///
/// Settings here apply to every match of a series; [`Arena::play_match`]
/// uses the [`MatchConfig`] it is given as is.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    rules: MatchRules,
    budget: Option<std::time::Duration>,
}

impl Arena {
    /// Arena with default rules and per-algorithm budgets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `rules` for every series match.
    pub fn with_rules(mut self, rules: MatchRules) -> Self {
        self.rules = rules;
        self
    }

    /// Give every engine in a series the same per-move budget.
    pub fn with_budget(mut self, budget: std::time::Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Play one match to completion.
    ///
    /// # Errors
    ///
    /// [`ArenaError::Search`] if an engine rejects the position for any
    /// reason other than having no legal move.
    pub fn play_match(&self, config: &MatchConfig) -> Result<MatchRecord, ArenaError> {
        let rules = &config.rules;
        let mut board = config.start;
        let mut engines = [
            Engine::new(config.black.engine.clone()),
            Engine::new(config.white.engine.clone()),
        ];
        let sides: [&SideConfig; 2] = [&config.black, &config.white];

        let mut seen: HashMap<u64, u32> = HashMap::new();
        let mut recent: Vec<u64> = Vec::with_capacity(rules.history_window + 1);
        let mut moves = Vec::new();
        let mut escalated = false;

        info!(
            black = %config.black.algorithm,
            white = %config.white.algorithm,
            "match started"
        );

        let (winner, reason) = loop {
            if let Some(winner) = board.winner() {
                break (Some(winner), EndReason::Elimination);
            }

            let count = seen.entry(board.hash()).or_insert(0);
            *count += 1;
            if *count >= rules.repetition_limit {
                break (None, EndReason::Repetition);
            }

            let played = moves.len() as u32;
            if played >= rules.max_moves {
                break (leader(&board), EndReason::MoveLimit);
            }

            if !escalated && played == rules.escalation_after && no_eliminations(&board) {
                escalated = true;
                warn!(
                    moves = played,
                    factor = rules.escalation_factor,
                    "no eliminations yet, escalating material and aggression"
                );
                for (engine, side) in engines.iter_mut().zip(sides) {
                    let mut engine_config = side.engine.clone();
                    engine_config.weights = engine_config.weights.escalated(rules.escalation_factor);
                    *engine = Engine::new(engine_config);
                }
            }

            let player = board.side_to_move();
            let side = sides[player.index()];
            let chosen = engines[player.index()].choose_move_with_history(
                &board,
                player,
                side.algorithm,
                side.budget,
                &recent,
            );
            let mv = match chosen {
                Ok((mv, diagnostics)) => {
                    debug!(
                        %player,
                        %mv,
                        depth = diagnostics.depth,
                        score = diagnostics.score,
                        "move played"
                    );
                    mv
                }
                Err(SearchError::Board {
                    source: BoardError::NoLegalMoves { .. } | BoardError::NoPieces { .. },
                }) => break (Some(player.flip()), EndReason::NoMoves),
                Err(source) => return Err(ArenaError::Search { player, source }),
            };

            board.apply_move(mv);
            moves.push(mv);
            recent.push(board.hash());
            if recent.len() > rules.history_window {
                recent.remove(0);
            }
        };

        let result = winner.map_or_else(|| "draw".to_string(), |p| format!("{p} wins"));
        info!(
            black = %config.black.algorithm,
            white = %config.white.algorithm,
            %result,
            %reason,
            moves = moves.len(),
            black_lost = board.eliminated(Player::Black),
            white_lost = board.eliminated(Player::White),
            "match finished"
        );

        Ok(MatchRecord {
            black: config.black.algorithm,
            white: config.white.algorithm,
            winner,
            reason,
            moves,
            final_board: board,
            escalated,
        })
    }

    /// Play `games` matches between `first` and `second`.
    ///
    /// `first` takes Black in the first half of the series and White in the
    /// second half.
    ///
    /// # Errors
    ///
    /// [`ArenaError::EmptySeries`] for zero games, or the first match error.
    pub fn run_series(
        &self,
        games: u32,
        first: Algorithm,
        second: Algorithm,
    ) -> Result<SeriesSummary, ArenaError> {
        if games == 0 {
            return Err(ArenaError::EmptySeries);
        }

        let mut summary = SeriesSummary {
            first,
            second,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
            records: Vec::with_capacity(games as usize),
        };

        let swap_at = games.div_ceil(2);
        for game in 0..games {
            let (black, white) = if game < swap_at {
                (first, second)
            } else {
                (second, first)
            };
            let mut config = MatchConfig::new(black, white);
            config.rules = self.rules.clone();
            if let Some(budget) = self.budget {
                config = config.with_budget(budget);
            }

            let record = self.play_match(&config)?;
            // Same algorithm on both sides: credit by seat.
            let first_player = if game < swap_at { Player::Black } else { Player::White };
            match record.winner {
                None => summary.draws += 1,
                Some(p) if p == first_player => summary.first_wins += 1,
                Some(_) => summary.second_wins += 1,
            }
            info!(game = game + 1, games, %summary, "series progress");
            summary.records.push(record);
        }

        Ok(summary)
    }
}

fn no_eliminations(board: &Board) -> bool {
    board.eliminated(Player::Black) == 0 && board.eliminated(Player::White) == 0
}

/// Side that has pushed off more pieces, `None` if level.
fn leader(board: &Board) -> Option<Player> {
    let black_lost = board.eliminated(Player::Black);
    let white_lost = board.eliminated(Player::White);
    match black_lost.cmp(&white_lost) {
        std::cmp::Ordering::Less => Some(Player::Black),
        std::cmp::Ordering::Greater => Some(Player::White),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn quick_rules(max_moves: u32) -> MatchRules {
        MatchRules {
            max_moves,
            ..MatchRules::default()
        }
    }

    fn greedy_match(max_moves: u32) -> MatchConfig {
        let mut config = MatchConfig::new(Algorithm::Greedy, Algorithm::Greedy)
            .with_budget(Duration::from_millis(20));
        config.rules = quick_rules(max_moves);
        config
    }

    #[test]
    fn leader_counts_eliminations() {
        let level = Board::starting_position();
        assert_eq!(leader(&level), None);

        let board: Board = "5/6/7/8/9/8/7/6/bw3 b 2 3 40".parse().unwrap();
        assert_eq!(leader(&board), Some(Player::Black));
        let board: Board = "5/6/7/8/9/8/7/6/bw3 b 4 1 40".parse().unwrap();
        assert_eq!(leader(&board), Some(Player::White));
    }

    #[test]
    fn match_stops_at_move_limit() {
        let record = Arena::new().play_match(&greedy_match(6)).unwrap();
        assert!(record.moves.len() <= 6);
        assert!(matches!(
            record.reason,
            EndReason::MoveLimit | EndReason::Repetition
        ));
    }

    #[test]
    fn ejecting_sixth_piece_ends_match() {
        let mut config = greedy_match(10);
        config.start = "5/6/7/8/6bbw/8/7/6/w4 b 0 5 30".parse().unwrap();
        let record = Arena::new().play_match(&config).unwrap();
        assert_eq!(record.winner, Some(Player::Black));
        assert_eq!(record.reason, EndReason::Elimination);
        assert_eq!(record.moves.len(), 1);
        assert_eq!(record.winning_algorithm(), Some(Algorithm::Greedy));
    }

    #[test]
    fn finished_start_position_ends_immediately() {
        let mut config = greedy_match(10);
        config.start = "5/6/7/8/9/8/7/6/bw3 b 6 0 80".parse().unwrap();
        let record = Arena::new().play_match(&config).unwrap();
        assert_eq!(record.winner, Some(Player::White));
        assert!(record.moves.is_empty());
    }

    #[test]
    fn escalation_triggers_without_eliminations() {
        let mut config = greedy_match(4);
        config.rules.escalation_after = 2;
        config.rules.repetition_limit = u32::MAX;
        let record = Arena::new().play_match(&config).unwrap();
        assert!(record.escalated);
        assert_eq!(record.reason, EndReason::MoveLimit);
    }

    #[test]
    fn repeated_position_is_a_draw() {
        let mut config = greedy_match(200);
        config.rules.repetition_limit = 1;
        let record = Arena::new().play_match(&config).unwrap();
        assert_eq!(record.winner, None);
        assert_eq!(record.reason, EndReason::Repetition);
        assert!(record.moves.is_empty());
    }

    #[test]
    fn zero_games_is_an_error() {
        let err = Arena::new()
            .run_series(0, Algorithm::Greedy, Algorithm::Greedy)
            .unwrap_err();
        assert!(matches!(err, ArenaError::EmptySeries));
    }

    #[test]
    fn series_swaps_sides_halfway() {
        let summary = Arena::new()
            .with_rules(quick_rules(4))
            .with_budget(Duration::from_millis(20))
            .run_series(2, Algorithm::Greedy, Algorithm::IterativeDeepeningMinimax)
            .unwrap();
        assert_eq!(summary.games(), 2);
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.records[0].black, Algorithm::Greedy);
        assert_eq!(summary.records[1].black, Algorithm::IterativeDeepeningMinimax);
        assert_eq!(summary.records[1].white, Algorithm::Greedy);
    }

    #[test]
    fn summary_display() {
        let summary = SeriesSummary {
            first: Algorithm::AlphaBetaChampion,
            second: Algorithm::IterativeDeepeningMinimax,
            first_wins: 3,
            second_wins: 1,
            draws: 2,
            records: Vec::new(),
        };
        assert_eq!(format!("{summary}"), "champion 3 - 1 minimax (2 draws, 6 games)");
    }
}
