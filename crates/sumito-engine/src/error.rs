//! Search errors.

use sumito_core::{BoardError, Player};

/// Errors returned by [`Engine::choose_move`](crate::Engine::choose_move).
///
/// A budget too small for even one iteration is not an error: the engine
/// falls back to a greedy pick and flags it in the diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The board is malformed or the player cannot move.
    #[error("{source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// The engine was asked to move for the side that is not on turn.
    #[error("{player} asked to move but {to_move} is on turn")]
    NotToMove {
        /// The requested player.
        player: Player,
        /// The side actually on turn.
        to_move: Player,
    },

    /// The game already has a winner.
    #[error("game is over, {winner} has won")]
    GameOver {
        /// The winning player.
        winner: Player,
    },
}

impl SearchError {
    /// Return `true` if the error reports a malformed game state.
    pub fn is_invalid_state(&self) -> bool {
        match self {
            SearchError::Board { source } => source.is_invalid_state(),
            _ => false,
        }
    }
}

/// An algorithm name that matched no [`Algorithm`](crate::Algorithm).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: \"{name}\" (expected greedy, minimax or champion)")]
pub struct ParseAlgorithmError {
    /// The rejected name.
    pub name: String,
}
