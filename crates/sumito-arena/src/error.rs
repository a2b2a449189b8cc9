//! Arena errors.

use sumito_core::Player;
use sumito_engine::SearchError;

/// Errors that abort a match.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    /// An engine refused to produce a move.
    #[error("{player}'s engine failed: {source}")]
    Search {
        /// The side whose engine failed.
        player: Player,
        /// The underlying search error.
        #[source]
        source: SearchError,
    },

    /// A series needs at least one game.
    #[error("a series needs at least one game")]
    EmptySeries,
}
