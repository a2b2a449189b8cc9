//! Match configuration: who plays each side, with what budget and weights.

use std::time::Duration;

use sumito_core::Board;
use sumito_engine::{Algorithm, EngineConfig, Weights};

/// Weights used in arena play. Pushing is worth far more than in the
/// default tuning so that engines seek contact.
pub fn arena_weights() -> Weights {
    Weights {
        material: 10_000,
        center: 3,
        cohesion: 10,
        aggression: 2_000,
        danger: -250,
    }
}

/// One side of a match.
#[derive(Debug, Clone)]
pub struct SideConfig {
    pub algorithm: Algorithm,
    /// Time budget per move.
    pub budget: Duration,
    pub engine: EngineConfig,
}

impl SideConfig {
    /// Arena defaults for `algorithm`.
    ///
    /// The alpha-beta champion gets 5 s per move and a 20% stronger push
    /// weight; the other algorithms get 2 s.
    pub fn new(algorithm: Algorithm) -> Self {
        let mut weights = arena_weights();
        let budget = match algorithm {
            Algorithm::AlphaBetaChampion => {
                weights.aggression = weights.aggression * 6 / 5;
                Duration::from_secs(5)
            }
            Algorithm::Greedy | Algorithm::IterativeDeepeningMinimax => Duration::from_secs(2),
        };
        Self {
            algorithm,
            budget,
            engine: EngineConfig {
                weights,
                ..EngineConfig::default()
            },
        }
    }
}

/// Rules that end or reshape a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRules {
    /// Moves after which the game is decided on eliminations.
    pub max_moves: u32,
    /// Occurrences of one position that make a draw.
    pub repetition_limit: u32,
    /// Moves without any elimination after which both engines escalate.
    pub escalation_after: u32,
    /// Factor applied to material and aggression weights on escalation.
    pub escalation_factor: i32,
    /// Recent position keys handed to the engines as repetition history.
    pub history_window: usize,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            max_moves: 200,
            repetition_limit: 3,
            escalation_after: 100,
            escalation_factor: 100,
            history_window: 6,
        }
    }
}

/// A full match setup.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub black: SideConfig,
    pub white: SideConfig,
    pub rules: MatchRules,
    /// Position the match starts from.
    pub start: Board,
}

impl MatchConfig {
    /// Standard start with arena defaults for both sides.
    pub fn new(black: Algorithm, white: Algorithm) -> Self {
        Self {
            black: SideConfig::new(black),
            white: SideConfig::new(white),
            rules: MatchRules::default(),
            start: Board::starting_position(),
        }
    }

    /// Give both sides the same per-move budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.black.budget = budget;
        self.white.budget = budget;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(Algorithm::AlphaBetaChampion, Algorithm::IterativeDeepeningMinimax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn champion_gets_more_time_and_push() {
        let champion = SideConfig::new(Algorithm::AlphaBetaChampion);
        let minimax = SideConfig::new(Algorithm::IterativeDeepeningMinimax);
        assert!(champion.budget > minimax.budget);
        assert_eq!(champion.engine.weights.aggression, 2_400);
        assert_eq!(minimax.engine.weights.aggression, 2_000);
    }

    #[test]
    fn with_budget_overrides_both_sides() {
        let config = MatchConfig::new(Algorithm::Greedy, Algorithm::AlphaBetaChampion)
            .with_budget(Duration::from_millis(10));
        assert_eq!(config.black.budget, Duration::from_millis(10));
        assert_eq!(config.white.budget, Duration::from_millis(10));
    }
}
