//! Core game types: hex geometry, board representation, move generation, and rules.

mod board;
mod cell;
mod cell_set;
mod direction;
mod error;
mod layout;
mod make_move;
mod movegen;
mod moves;
mod perft;
mod player;
mod zobrist;

pub use board::{Board, ELIMINATION_TARGET, PIECES_PER_PLAYER, PrettyBoard};
pub use cell::Cell;
pub use cell_set::CellSet;
pub use direction::Direction;
pub use error::{BoardError, LayoutError};
pub use layout::STARTING_LAYOUT;
pub use movegen::{MAX_MOVES, MoveList, generate_moves, generate_pushes, has_push, legal_moves, push_targets};
pub use moves::{Move, MoveKind};
pub use perft::{divide, perft};
pub use player::Player;
pub use zobrist::hash_from_scratch;
