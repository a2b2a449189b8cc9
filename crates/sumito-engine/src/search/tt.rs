//! Transposition table: depth-preferred replacement with generation aging.
//!
//! One entry per slot, indexed by the low bits of the Zobrist key; the full
//! key is kept to reject collisions. The table is owned by the engine and
//! mutated through `&mut self`, so a single search uses it at a time.

use sumito_core::Move;

use crate::search::negamax::WIN_THRESHOLD;

/// Bound type stored in a TT entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is exact.
    Exact,
    /// The stored score is a lower bound (failed high / beta cutoff).
    LowerBound,
    /// The stored score is an upper bound (failed low).
    UpperBound,
}

/// Result of a successful TT probe.
#[derive(Debug, Clone, Copy)]
pub struct TtProbeResult {
    /// Best move from a previous search of this position (may be null).
    pub best_move: Move,
    /// Remaining depth the entry was searched to.
    pub depth: u8,
    /// Bound type.
    pub bound: Bound,
    /// Score, adjusted back to the probing node's ply.
    pub score: i32,
}

/// Convert a search score to TT-storable form.
///
/// Win scores depend on the distance from the root; stored entries keep the
/// distance from the node instead so they stay valid on any path.
pub fn score_to_tt(score: i32, ply: u8) -> i32 {
    if score > WIN_THRESHOLD {
        score + ply as i32
    } else if score < -WIN_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

/// Reverse [`score_to_tt`].
pub fn score_from_tt(score: i32, ply: u8) -> i32 {
    if score > WIN_THRESHOLD {
        score - ply as i32
    } else if score < -WIN_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

#[derive(Clone, Copy)]
struct Entry {
    key: u64,
    best_move: Move,
    score: i32,
    depth: u8,
    generation: u8,
    bound: Bound,
}

/// Fixed-size transposition table.
pub struct TranspositionTable {
    slots: Box<[Option<Entry>]>,
    /// `slots.len() - 1`; the slot count is a power of two.
    mask: u64,
    generation: u8,
}

impl TranspositionTable {
    /// Create a table of about `mb` megabytes. `0` disables it: probes miss
    /// and stores are dropped.
    pub fn new(mb: usize) -> Self {
        if mb == 0 {
            return Self {
                slots: Vec::new().into_boxed_slice(),
                mask: 0,
                generation: 0,
            };
        }
        let bytes = mb * 1024 * 1024;
        let slot_size = std::mem::size_of::<Option<Entry>>();
        let count = ((bytes / slot_size).next_power_of_two() >> 1).max(1);
        Self {
            slots: vec![None; count].into_boxed_slice(),
            mask: (count - 1) as u64,
            generation: 0,
        }
    }

    /// Return `true` if the table has no slots.
    pub fn is_disabled(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drop every entry and reset the generation.
    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.generation = 0;
    }

    /// Advance the generation. Called once per search.
    pub fn new_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key & self.mask) as usize
    }

    /// Look up `key`, converting win scores to be relative to `ply`.
    pub fn probe(&self, key: u64, ply: u8) -> Option<TtProbeResult> {
        if self.is_disabled() {
            return None;
        }
        let entry = self.slots[self.index(key)]?;
        if entry.key != key {
            return None;
        }
        Some(TtProbeResult {
            best_move: entry.best_move,
            depth: entry.depth,
            bound: entry.bound,
            score: score_from_tt(entry.score, ply),
        })
    }

    /// Store a completed node.
    ///
    /// Replaces the slot when it is empty, holds an entry from an older
    /// generation, or holds one searched no deeper than `depth`.
    pub fn store(&mut self, key: u64, depth: u8, score: i32, best_move: Move, bound: Bound, ply: u8) {
        if self.is_disabled() {
            return;
        }
        let index = self.index(key);
        let generation = self.generation;
        let replace = match self.slots[index] {
            None => true,
            Some(old) => old.generation != generation || depth >= old.depth,
        };
        if !replace {
            return;
        }
        self.slots[index] = Some(Entry {
            key,
            best_move,
            score: score_to_tt(score, ply),
            depth,
            generation,
            bound,
        });
    }
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("slots", &self.slots.len())
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::negamax::WIN_SCORE;
    use sumito_core::{Cell, Direction};

    fn some_move() -> Move {
        Move::inline(Cell::CENTER, Direction::East, 1, 0)
    }

    fn other_move() -> Move {
        Move::inline(Cell::CENTER, Direction::West, 1, 0)
    }

    #[test]
    fn store_and_probe_roundtrip() {
        let mut tt = TranspositionTable::new(1);
        let key = 0xDEAD_BEEF_1234_5678;
        tt.store(key, 5, 100, some_move(), Bound::Exact, 0);
        let hit = tt.probe(key, 0).expect("entry should be present");
        assert_eq!(hit.best_move, some_move());
        assert_eq!(hit.depth, 5);
        assert_eq!(hit.bound, Bound::Exact);
        assert_eq!(hit.score, 100);
    }

    #[test]
    fn probe_miss_returns_none() {
        let tt = TranspositionTable::new(1);
        assert!(tt.probe(0x1234_5678_9ABC_DEF0, 0).is_none());
    }

    #[test]
    fn colliding_key_is_rejected() {
        let mut tt = TranspositionTable::new(1);
        let key = 0x0000_0001_0000_0007;
        tt.store(key, 3, 10, some_move(), Bound::Exact, 0);
        let alias = key ^ (1 << 63);
        assert!(tt.probe(alias, 0).is_none());
    }

    #[test]
    fn win_score_adjustment_roundtrip() {
        let win = WIN_SCORE - 3;
        assert_eq!(score_from_tt(score_to_tt(win, 5), 5), win);
        assert_eq!(score_from_tt(score_to_tt(-win, 7), 7), -win);
        assert_eq!(score_from_tt(score_to_tt(150, 9), 9), 150);
    }

    #[test]
    fn win_distance_follows_probe_ply() {
        let mut tt = TranspositionTable::new(1);
        // Found at ply 4 as a win two plies below the node.
        tt.store(42, 2, WIN_SCORE - 6, some_move(), Bound::Exact, 4);
        // Reached again at ply 2: the win is now four plies from the root.
        assert_eq!(tt.probe(42, 2).unwrap().score, WIN_SCORE - 4);
    }

    #[test]
    fn shallower_store_keeps_deeper_entry() {
        let mut tt = TranspositionTable::new(1);
        let key = 0x1111_2222_3333_4444;
        tt.store(key, 5, 100, some_move(), Bound::LowerBound, 0);
        tt.store(key, 3, 200, other_move(), Bound::LowerBound, 0);
        assert_eq!(tt.probe(key, 0).unwrap().best_move, some_move());
    }

    #[test]
    fn newer_generation_replaces_deeper_entry() {
        let mut tt = TranspositionTable::new(1);
        let key = 0xAAAA_BBBB_CCCC_DDDD;
        tt.store(key, 10, 100, some_move(), Bound::Exact, 0);
        tt.new_generation();
        tt.store(key, 1, 200, other_move(), Bound::UpperBound, 0);
        let hit = tt.probe(key, 0).unwrap();
        assert_eq!(hit.best_move, other_move());
        assert_eq!(hit.score, 200);
    }

    #[test]
    fn disabled_table_stores_nothing() {
        let mut tt = TranspositionTable::new(0);
        assert!(tt.is_disabled());
        tt.store(9, 4, 1, some_move(), Bound::Exact, 0);
        assert!(tt.probe(9, 0).is_none());
    }

    #[test]
    fn clear_removes_all_entries() {
        let mut tt = TranspositionTable::new(1);
        tt.store(5, 5, 100, some_move(), Bound::Exact, 0);
        tt.clear();
        assert!(tt.probe(5, 0).is_none());
    }
}
