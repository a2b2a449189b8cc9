//! The two sides of the game.

use std::fmt;
use std::ops::Not;

/// A player: Black moves first, White second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Black = 0,
    White = 1,
}

impl Player {
    /// Total number of players.
    pub const COUNT: usize = 2;

    /// All players in index order.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// Return the index (0 for Black, 1 for White).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the other player.
    #[inline]
    pub const fn flip(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-character tag used by the layout notation.
    #[inline]
    pub const fn tag(self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }

    /// Parse a layout tag (`b` or `w`).
    pub const fn from_tag(c: char) -> Option<Player> {
        match c {
            'b' => Some(Player::Black),
            'w' => Some(Player::White),
            _ => None,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.flip()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Player;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Player::Black.flip(), Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::Black.flip().flip(), Player::Black);
    }

    #[test]
    fn tags() {
        for player in Player::ALL {
            assert_eq!(Player::from_tag(player.tag()), Some(player));
        }
        assert_eq!(Player::from_tag('x'), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::Black), "black");
        assert_eq!(format!("{}", Player::White), "white");
    }
}
