//! Zobrist hashing keys for position fingerprints.

use crate::board::Board;
use crate::cell::Cell;
use crate::player::Player;

/// Key for each (player, cell) pair. Indexed by `[Player::index()][Cell::index()]`.
pub(crate) static PIECE_CELL: [[u64; Cell::COUNT]; Player::COUNT] = {
    let mut table = [[0u64; Cell::COUNT]; Player::COUNT];
    let mut state = SEED;
    let mut player = 0;
    while player < Player::COUNT {
        let mut cell = 0;
        while cell < Cell::COUNT {
            let (val, next) = xorshift64(state);
            table[player][cell] = val;
            state = next;
            cell += 1;
        }
        player += 1;
    }
    table
};

/// Key XORed when White is the side to move.
pub(crate) static SIDE_TO_MOVE: u64 = {
    // Continue the stream past the 2 * 61 piece-cell keys.
    let mut state = SEED;
    let mut i = 0;
    while i < Player::COUNT * Cell::COUNT {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let (val, _) = xorshift64(state);
    val
};

const SEED: u64 = 0x5355_4d49_544f_2121; // "SUMITO!!"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Compute a Zobrist hash from scratch for the given board.
///
/// The board keeps its hash up to date incrementally; this is the reference
/// it must always agree with.
pub fn hash_from_scratch(board: &Board) -> u64 {
    let mut hash = 0u64;

    for player in Player::ALL {
        for cell in board.side(player) {
            hash ^= PIECE_CELL[player.index()][cell.index()];
        }
    }

    if board.side_to_move() == Player::White {
        hash ^= SIDE_TO_MOVE;
    }

    hash
}
