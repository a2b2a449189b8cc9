//! Aggression: opposing pieces within reach of a push.

use sumito_core::{Board, Player, push_targets};

/// Pushable-piece difference from `perspective`'s point of view.
///
/// Counts opposing pieces that some push available right now would
/// displace, for both sides, regardless of who is on turn.
pub fn aggression(board: &Board, perspective: Player) -> i32 {
    push_targets(board, perspective).count() as i32 - push_targets(board, !perspective).count() as i32
}
