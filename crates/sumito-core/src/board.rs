//! The board: piece placement, side to move, elimination counters, and hash.

use std::fmt;

use crate::cell::Cell;
use crate::cell_set::CellSet;
use crate::error::BoardError;
use crate::player::Player;
use crate::zobrist;

/// Pieces each player starts with.
pub const PIECES_PER_PLAYER: u8 = 14;

/// Eliminated pieces that lose the game.
pub const ELIMINATION_TARGET: u8 = 6;

/// Complete game state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Cells occupied by each player, indexed by [`Player::index()`].
    sides: [CellSet; Player::COUNT],
    /// Which player moves next.
    side_to_move: Player,
    /// Half-moves played since the position was set up.
    ply: u16,
    /// Pieces pushed off the board, per player.
    eliminated: [u8; Player::COUNT],
    /// Zobrist hash of the position.
    hash: u64,
}

impl Board {
    /// Return the standard starting position, Black to move.
    pub fn starting_position() -> Board {
        let mut white = CellSet::EMPTY;
        let mut black = CellSet::EMPTY;
        for cell in Cell::all() {
            let (q, r) = (cell.q(), cell.r());
            // Two full back rows plus the middle three of the third row.
            if r <= -3 || (r == -2 && (0..=2).contains(&q)) {
                white = white.with(cell);
            }
            if r >= 3 || (r == 2 && (-2..=0).contains(&q)) {
                black = black.with(cell);
            }
        }

        let mut board = Board {
            sides: [black, white],
            side_to_move: Player::Black,
            ply: 0,
            eliminated: [0; Player::COUNT],
            hash: 0,
        };
        board.hash = zobrist::hash_from_scratch(&board);
        board
    }

    /// Build a board from its parts, validating the piece-count invariant.
    pub fn from_parts(
        black: CellSet,
        white: CellSet,
        side_to_move: Player,
        eliminated: [u8; Player::COUNT],
        ply: u16,
    ) -> Result<Board, BoardError> {
        let mut board = Board {
            sides: [black, white],
            side_to_move,
            ply,
            eliminated,
            hash: 0,
        };
        board.validate()?;
        board.hash = zobrist::hash_from_scratch(&board);
        Ok(board)
    }

    /// Cells occupied by `player`.
    #[inline]
    pub const fn side(&self, player: Player) -> CellSet {
        self.sides[player.index()]
    }

    /// Cells occupied by either player.
    #[inline]
    pub fn occupied(&self) -> CellSet {
        self.sides[0] | self.sides[1]
    }

    /// Cells with no piece.
    #[inline]
    pub fn vacant(&self) -> CellSet {
        !self.occupied()
    }

    /// Which player (if any) occupies `cell`.
    #[inline]
    pub const fn occupant(&self, cell: Cell) -> Option<Player> {
        if self.sides[0].contains(cell) {
            Some(Player::Black)
        } else if self.sides[1].contains(cell) {
            Some(Player::White)
        } else {
            None
        }
    }

    /// The side to move.
    #[inline]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// Half-moves played.
    #[inline]
    pub const fn ply(&self) -> u16 {
        self.ply
    }

    /// Pieces `player` has lost.
    #[inline]
    pub const fn eliminated(&self, player: Player) -> u8 {
        self.eliminated[player.index()]
    }

    /// Pieces `player` still has on the board.
    #[inline]
    pub const fn pieces_on_board(&self, player: Player) -> u32 {
        self.sides[player.index()].count()
    }

    /// Zobrist hash of the position.
    #[inline]
    pub const fn hash(&self) -> u64 {
        self.hash
    }

    /// The winner, if one player has lost [`ELIMINATION_TARGET`] pieces.
    #[inline]
    pub const fn winner(&self) -> Option<Player> {
        if self.eliminated[Player::Black.index()] >= ELIMINATION_TARGET {
            Some(Player::White)
        } else if self.eliminated[Player::White.index()] >= ELIMINATION_TARGET {
            Some(Player::Black)
        } else {
            None
        }
    }

    /// Return `true` once either player has lost six pieces.
    #[inline]
    pub const fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), BoardError> {
        if (self.sides[0] & self.sides[1]).is_nonempty() {
            return Err(BoardError::OverlappingSides);
        }
        for player in Player::ALL {
            let on_board = self.pieces_on_board(player);
            let eliminated = self.eliminated(player);
            if on_board + eliminated as u32 > PIECES_PER_PLAYER as u32 {
                return Err(BoardError::TooManyPieces {
                    player,
                    on_board,
                    eliminated,
                });
            }
        }
        Ok(())
    }

    // --- Mutation helpers for apply/undo (crate-internal) ---

    /// Toggle `player`'s piece on `cell`, keeping the hash in sync.
    #[inline]
    pub(crate) fn toggle_piece(&mut self, player: Player, cell: Cell) {
        self.sides[player.index()] = self.sides[player.index()].toggle(cell);
        self.hash ^= zobrist::PIECE_CELL[player.index()][cell.index()];
    }

    /// Pass the turn forward (`forward`) or back, keeping the hash in sync.
    #[inline]
    pub(crate) fn step_turn(&mut self, forward: bool) {
        self.side_to_move = !self.side_to_move;
        self.hash ^= zobrist::SIDE_TO_MOVE;
        if forward {
            self.ply += 1;
        } else {
            self.ply -= 1;
        }
    }

    #[inline]
    pub(crate) fn add_eliminated(&mut self, player: Player) {
        self.eliminated[player.index()] += 1;
    }

    #[inline]
    pub(crate) fn remove_eliminated(&mut self, player: Player) {
        self.eliminated[player.index()] -= 1;
    }
}

/// Wrapper that renders the board as a hexagon diagram.
pub struct PrettyBoard<'a>(pub &'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for r in -Cell::RADIUS..=Cell::RADIUS {
            let row_letter = (b'A' + (Cell::RADIUS - r) as u8) as char;
            write!(f, "{row_letter} {}", " ".repeat(r.unsigned_abs() as usize))?;
            for q in -Cell::RADIUS..=Cell::RADIUS {
                let Some(cell) = Cell::from_axial(q, r) else {
                    continue;
                };
                let c = match board.occupant(cell) {
                    Some(player) => player.tag(),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "to move: {}, lost: black {} white {}",
            board.side_to_move,
            board.eliminated(Player::Black),
            board.eliminated(Player::White)
        )
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}
