//! Move execution: in-place apply/undo for search, copying variants for hosts.

use crate::board::Board;
use crate::cell::Cell;
use crate::error::BoardError;
use crate::movegen::legal_moves;
use crate::moves::{Move, MoveKind};
use crate::player::Player;

/// Cells a move touches, resolved before any mutation.
///
/// Toggling the same cells a second time reverses the move, so apply and
/// undo share one footprint and differ only in the counters they adjust.
enum Footprint {
    Inline {
        tail: Cell,
        front: Cell,
        /// `Some(landing)` for a push; `landing` is `None` on ejection.
        push: Option<Option<Cell>>,
    },
    Sidestep {
        from: [Cell; 3],
        to: [Cell; 3],
        len: usize,
    },
}

impl Footprint {
    /// Resolve the cells of `mv`. `None` for malformed moves whose group or
    /// pushed run would leave the board. Callers screen out the null move.
    fn of(mv: Move) -> Option<Footprint> {
        let dir = mv.direction();
        match mv.kind() {
            MoveKind::Inline => {
                let front = mv.head()?.neighbor(dir)?;
                let push = if mv.is_push() {
                    let mut last = front;
                    for _ in 1..mv.pushed() {
                        last = last.neighbor(dir)?;
                    }
                    Some(last.neighbor(dir))
                } else {
                    None
                };
                Some(Footprint::Inline {
                    tail: mv.tail(),
                    front,
                    push,
                })
            }
            MoveKind::Sidestep => {
                let len = mv.len() as usize;
                let mut from = [mv.tail(); 3];
                let mut to = [mv.tail(); 3];
                for (i, cell) in mv.cells().enumerate() {
                    from[i] = cell;
                    to[i] = cell.neighbor(dir)?;
                }
                Some(Footprint::Sidestep { from, to, len })
            }
        }
    }
}

impl Board {
    /// Toggle every piece `mover`'s move touches. Returns `true` if an
    /// opposing piece left the board.
    fn toggle_footprint(&mut self, footprint: &Footprint, mover: Player) -> bool {
        match *footprint {
            Footprint::Inline { tail, front, push } => {
                let mut ejected = false;
                if let Some(landing) = push {
                    // The run shifts by one: its first cell changes hands and
                    // a new cell fills behind it, unless it falls off.
                    self.toggle_piece(!mover, front);
                    match landing {
                        Some(cell) => self.toggle_piece(!mover, cell),
                        None => ejected = true,
                    }
                }
                self.toggle_piece(mover, tail);
                self.toggle_piece(mover, front);
                ejected
            }
            Footprint::Sidestep { from, to, len } => {
                for i in 0..len {
                    self.toggle_piece(mover, from[i]);
                    self.toggle_piece(mover, to[i]);
                }
                false
            }
        }
    }

    /// Apply `mv` in place for the side to move.
    ///
    /// `mv` must come from the move generator for this position. The null
    /// move is a no-op. A move whose cells leave the board is rejected in
    /// debug builds and ignored otherwise; use [`Board::try_make_move`] for
    /// untrusted input.
    pub fn apply_move(&mut self, mv: Move) {
        if mv.is_null() {
            return;
        }
        let Some(footprint) = Footprint::of(mv) else {
            debug_assert!(false, "malformed move {mv}");
            return;
        };
        let mover = self.side_to_move();
        if self.toggle_footprint(&footprint, mover) {
            self.add_eliminated(!mover);
        }
        self.step_turn(true);
    }

    /// Reverse [`Board::apply_move`]. `mv` must be the move last applied.
    pub fn undo_move(&mut self, mv: Move) {
        if mv.is_null() {
            return;
        }
        let Some(footprint) = Footprint::of(mv) else {
            debug_assert!(false, "malformed move {mv}");
            return;
        };
        self.step_turn(false);
        let mover = self.side_to_move();
        if self.toggle_footprint(&footprint, mover) {
            self.remove_eliminated(!mover);
        }
    }

    /// Return a copy of the board with `mv` applied.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    /// Return a copy of the board with `mv` (the move that produced this
    /// position) taken back.
    pub fn unmake_move(&self, mv: Move) -> Board {
        let mut prev = *self;
        prev.undo_move(mv);
        prev
    }

    /// Apply `mv` after checking it against the generated moves.
    ///
    /// # Errors
    ///
    /// [`BoardError::IllegalMove`] if the generator does not produce `mv`
    /// for the side to move.
    pub fn try_make_move(&self, mv: Move) -> Result<Board, BoardError> {
        if !legal_moves(self).contains(mv) {
            return Err(BoardError::IllegalMove {
                mv,
                player: self.side_to_move(),
            });
        }
        Ok(self.make_move(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::zobrist::hash_from_scratch;

    fn cell(s: &str) -> Cell {
        Cell::from_notation(s).unwrap()
    }

    fn board(layout: &str) -> Board {
        layout.parse().unwrap()
    }

    #[test]
    fn single_step() {
        let start = Board::starting_position();
        let mv = Move::inline(cell("C3"), Direction::NorthWest, 1, 0);
        let next = start.make_move(mv);
        assert_eq!(next.occupant(cell("C3")), None);
        assert_eq!(next.occupant(cell("D3")), Some(Player::Black));
        assert_eq!(next.side_to_move(), Player::White);
        assert_eq!(next.ply(), 1);
    }

    #[test]
    fn inline_group_moves_tail_to_front() {
        let start = Board::starting_position();
        // A3-B3-C3 advancing north-west: A3 empties, D3 fills.
        let mv = Move::inline(cell("A3"), Direction::NorthWest, 3, 0);
        assert!(legal_moves(&start).contains(mv));
        let next = start.make_move(mv);
        assert_eq!(next.occupant(cell("A3")), None);
        assert_eq!(next.occupant(cell("B3")), Some(Player::Black));
        assert_eq!(next.occupant(cell("C3")), Some(Player::Black));
        assert_eq!(next.occupant(cell("D3")), Some(Player::Black));
        assert_eq!(next.pieces_on_board(Player::Black), 14);
    }

    #[test]
    fn push_relocates_opponent() {
        let b = board("5/6/7/8/2bbw4/8/7/6/5 b 0 0 0");
        let next = b.make_move(Move::inline(cell("E3"), Direction::East, 2, 1));
        assert_eq!(next.occupant(cell("E3")), None);
        assert_eq!(next.occupant(cell("E4")), Some(Player::Black));
        assert_eq!(next.occupant(cell("E5")), Some(Player::Black));
        assert_eq!(next.occupant(cell("E6")), Some(Player::White));
        assert_eq!(next.eliminated(Player::White), 0);
    }

    #[test]
    fn ejection_increments_counter() {
        let b = board("5/6/7/8/6bbw/8/7/6/5 b 0 3 0");
        let next = b.make_move(Move::inline(cell("E7"), Direction::East, 2, 1));
        assert_eq!(next.eliminated(Player::White), 4);
        assert_eq!(next.pieces_on_board(Player::White), 0);
        assert_eq!(next.occupant(cell("E9")), Some(Player::Black));
        assert!(next.validate().is_ok());
    }

    #[test]
    fn sixth_ejection_ends_game() {
        let b = board("5/6/7/8/6bbw/8/7/6/w4 b 0 5 0");
        let next = b.make_move(Move::inline(cell("E7"), Direction::East, 2, 1));
        assert_eq!(next.winner(), Some(Player::Black));
    }

    #[test]
    fn sidestep_moves_every_piece() {
        let b = board("5/6/7/8/3bb4/8/7/6/w4 b 0 0 0");
        let mv = Move::sidestep(cell("E4"), Direction::East, 2, Direction::NorthWest);
        let next = b.make_move(mv);
        assert_eq!(next.occupant(cell("E4")), None);
        assert_eq!(next.occupant(cell("E5")), None);
        assert_eq!(next.occupant(cell("F4")), Some(Player::Black));
        assert_eq!(next.occupant(cell("F5")), Some(Player::Black));
    }

    #[test]
    fn apply_undo_restores_every_child() {
        let positions = [
            Board::starting_position(),
            board("5/6/7/8/1bbbww3/8/7/6/5 b 0 0 0"),
            board("5/6/7/8/6bbw/8/7/6/w4 b 0 2 9"),
        ];
        for original in positions {
            let mut b = original;
            for mv in &legal_moves(&original) {
                b.apply_move(*mv);
                assert_eq!(b.hash(), hash_from_scratch(&b), "hash drift after {mv}");
                assert!(b.validate().is_ok());
                b.undo_move(*mv);
                assert_eq!(b, original, "undo of {mv} did not restore the board");
            }
        }
    }

    #[test]
    fn unmake_reverses_make() {
        let start = Board::starting_position();
        for mv in &legal_moves(&start) {
            assert_eq!(start.make_move(*mv).unmake_move(*mv), start);
        }
    }

    #[test]
    fn incremental_hash_over_a_line_of_play() {
        let mut b = Board::starting_position();
        for _ in 0..20 {
            let moves = legal_moves(&b);
            let mv = moves[moves.len() / 2];
            b.apply_move(mv);
            assert_eq!(b.hash(), hash_from_scratch(&b));
        }
    }

    #[test]
    fn try_make_move_rejects_illegal() {
        let start = Board::starting_position();
        // White piece, but Black is to move.
        let mv = Move::inline(cell("G5"), Direction::SouthEast, 1, 0);
        let err = start.try_make_move(mv).unwrap_err();
        assert_eq!(
            err,
            BoardError::IllegalMove {
                mv,
                player: Player::Black
            }
        );
        assert!(start.try_make_move(Move::NULL).is_err());
    }

    #[test]
    fn null_move_leaves_board_untouched() {
        let start = Board::starting_position();
        let mut b = start;
        b.apply_move(Move::NULL);
        assert_eq!(b, start);
        assert_eq!(b.validate(), Ok(()));
        b.undo_move(Move::NULL);
        assert_eq!(b, start);
        assert_eq!(start.make_move(Move::NULL), start);
    }
}
