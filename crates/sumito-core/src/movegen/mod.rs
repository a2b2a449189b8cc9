//! Legal move generation.

mod inline;
mod sidestep;

use crate::board::Board;
use crate::cell_set::CellSet;
use crate::error::BoardError;
use crate::moves::Move;
use crate::player::Player;

use self::inline::gen_inline;
use self::sidestep::gen_sidesteps;

/// Capacity of a [`MoveList`]. Fourteen pieces cannot produce more than
/// about 430 moves, so this never overflows.
pub const MAX_MOVES: usize = 512;

/// Stack-allocated buffer for generated moves.
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; MAX_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_MOVES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return a mutable slice of the moves (for in-place ordering).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len as usize]
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Which moves a generation pass keeps.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Filter {
    All,
    PushesOnly,
}

/// Walk every move of `player` in generation order.
///
/// Own cells are visited in index order; for each cell the inline moves of
/// all six directions come first (group length ascending), then the
/// sidesteps of groups whose tail is that cell.
fn visit(board: &Board, player: Player, filter: Filter, list: &mut MoveList) {
    let own = board.side(player);
    let theirs = board.side(!player);
    for tail in own {
        gen_inline(own, theirs, tail, filter, list);
        if filter == Filter::All {
            gen_sidesteps(own, theirs, tail, list);
        }
    }
}

/// Generate all legal moves for the side to move.
///
/// Infallible: an empty list means the side to move has nothing to play.
pub fn legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    visit(board, board.side_to_move(), Filter::All, &mut list);
    list
}

/// Generate all legal moves for `player`, whoever is to move.
///
/// # Errors
///
/// [`BoardError::NoPieces`] when `player` has no pieces on the board, and
/// [`BoardError::NoLegalMoves`] when pieces remain but none can move.
pub fn generate_moves(board: &Board, player: Player) -> Result<MoveList, BoardError> {
    if board.side(player).is_empty() {
        return Err(BoardError::NoPieces { player });
    }
    let mut list = MoveList::new();
    visit(board, player, Filter::All, &mut list);
    if list.is_empty() {
        return Err(BoardError::NoLegalMoves { player });
    }
    Ok(list)
}

/// Generate the push moves of the side to move, in generation order.
pub fn generate_pushes(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    visit(board, board.side_to_move(), Filter::PushesOnly, &mut list);
    list
}

/// Opposing cells that some push of `player` would displace.
pub fn push_targets(board: &Board, player: Player) -> CellSet {
    let mut list = MoveList::new();
    visit(board, player, Filter::PushesOnly, &mut list);

    let mut targets = CellSet::EMPTY;
    for mv in &list {
        let dir = mv.direction();
        let mut cursor = mv.head();
        for _ in 0..mv.pushed() {
            cursor = cursor.and_then(|c| c.neighbor(dir));
            if let Some(cell) = cursor {
                targets = targets.with(cell);
            }
        }
    }
    targets
}

/// Return `true` if `player` has at least one push available.
pub fn has_push(board: &Board, player: Player) -> bool {
    let mut list = MoveList::new();
    visit(board, player, Filter::PushesOnly, &mut list);
    !list.is_empty()
}
