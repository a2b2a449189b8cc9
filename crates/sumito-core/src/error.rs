//! Error types for layout parsing, board validation, and move legality.

use crate::moves::Move;
use crate::player::Player;

/// Errors that occur when parsing layout notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have exactly 5 space-separated fields.
    #[error("expected 5 layout fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not have exactly 9 rows.
    #[error("expected 9 rows in placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer cells than it has.
    #[error("row {row_index} describes {length} cells, expected {expected}")]
    BadRowLength {
        /// Zero-based row index (0 = top row).
        row_index: usize,
        /// Number of cells described.
        length: usize,
        /// Number of cells in that row.
        expected: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "b" or "w".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid string.
        found: String,
    },
    /// A counter (eliminated pieces or ply) is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidCounter {
        /// Which counter failed to parse.
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from board validation, move generation, and move application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A player has more pieces on the board than it has left.
    #[error("{player} has {on_board} pieces on board and {eliminated} eliminated, more than 14")]
    TooManyPieces {
        /// Which player is over the limit.
        player: Player,
        /// Pieces on the board.
        on_board: u32,
        /// Pieces already eliminated.
        eliminated: u8,
    },
    /// Both players claim the same cell.
    #[error("black and white occupy the same cell")]
    OverlappingSides,
    /// Move generation was asked for a player with no pieces.
    #[error("invalid state: {player} has no pieces on the board")]
    NoPieces {
        /// The player with no pieces.
        player: Player,
    },
    /// Pieces remain but no move was generated.
    #[error("invalid state: {player} has pieces but no legal moves")]
    NoLegalMoves {
        /// The player without moves.
        player: Player,
    },
    /// The move is not one the generator produces for this position.
    #[error("illegal move {mv} for {player}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
        /// The side to move.
        player: Player,
    },
}

impl BoardError {
    /// Return `true` for errors signalling a malformed game state rather than
    /// a bad request.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            BoardError::TooManyPieces { .. }
                | BoardError::OverlappingSides
                | BoardError::NoPieces { .. }
                | BoardError::NoLegalMoves { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardError, LayoutError};
    use crate::player::Player;

    #[test]
    fn layout_error_display() {
        let err = LayoutError::WrongFieldCount { found: 3 };
        assert_eq!(format!("{err}"), "expected 5 layout fields, found 3");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::NoPieces { player: Player::White };
        assert_eq!(format!("{err}"), "invalid state: white has no pieces on the board");
    }

    #[test]
    fn layout_error_from_board_error() {
        let layout_err: LayoutError = BoardError::OverlappingSides.into();
        assert!(matches!(layout_err, LayoutError::InvalidBoard { .. }));
    }

    #[test]
    fn invalid_state_classification() {
        assert!(BoardError::NoLegalMoves { player: Player::Black }.is_invalid_state());
        let illegal = BoardError::IllegalMove {
            mv: crate::moves::Move::NULL,
            player: Player::Black,
        };
        assert!(!illegal.is_invalid_state());
    }
}
