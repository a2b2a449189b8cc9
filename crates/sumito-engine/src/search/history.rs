//! Position-history stack for repetition detection.

/// Zobrist keys of the game's recent positions followed by the ancestors
/// of the node being searched.
///
/// Strictly LIFO during search: every push is matched by a
/// [`truncate`](PositionHistory::truncate) to the length recorded before it.
#[derive(Debug, Clone, Default)]
pub struct PositionHistory {
    keys: Vec<u64>,
}

impl PositionHistory {
    /// Seed the stack with keys from the game so far.
    pub fn from_game(keys: &[u64]) -> Self {
        let mut stack = Vec::with_capacity(keys.len() + 64);
        stack.extend_from_slice(keys);
        Self { keys: stack }
    }

    #[inline]
    pub fn push(&mut self, key: u64) {
        self.keys.push(key);
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.keys.truncate(len);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Return `true` if `key` occurred earlier in the game or on the path.
    #[inline]
    pub fn repeats(&self, key: u64) -> bool {
        self.keys.iter().rev().any(|&k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_keys_count_as_repetitions() {
        let history = PositionHistory::from_game(&[1, 2, 3]);
        assert!(history.repeats(2));
        assert!(!history.repeats(4));
    }

    #[test]
    fn truncate_forgets_path() {
        let mut history = PositionHistory::from_game(&[1]);
        let mark = history.len();
        history.push(7);
        assert!(history.repeats(7));
        history.truncate(mark);
        assert!(!history.repeats(7));
        assert_eq!(history.len(), 1);
    }
}
