//! Transposition table for caching search results.
//!
//! A fixed number of slots, indexed by the low bits of the Zobrist key. Each
//! slot holds at most one entry and a store always replaces what was there.
//! The full key is kept in the entry and checked on probe, so an index
//! collision reads as a miss.

use std::mem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Move;

/// Default table size in megabytes.
pub const DEFAULT_TT_MB: usize = 16;

/// How a stored score relates to the true value of the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundType {
    Exact,      // score is the exact value
    LowerBound, // failed high: true value >= score
    UpperBound, // failed low: true value <= score
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    pub depth: u32,
    pub score: i32,
    pub bound: BoundType,
    /// Best or refuting move found at this node; `Move::NONE` if none.
    pub best_move: Move,
}

impl TtEntry {
    /// Whether this entry was searched at least as deep as `depth`.
    #[inline]
    #[must_use]
    pub fn covers(&self, depth: u32) -> bool {
        self.depth >= depth
    }
}

pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    mask: usize,
    occupied: usize,
}

impl TranspositionTable {
    /// Create a table of roughly `size_mb` megabytes, rounded down to a
    /// power-of-two slot count (minimum 1024 slots).
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = mem::size_of::<Option<TtEntry>>();
        let mut num_slots = (size_mb.saturating_mul(1024 * 1024)) / slot_size;

        num_slots = num_slots.next_power_of_two() / 2;
        if num_slots < 1024 {
            num_slots = 1024;
        }

        TranspositionTable {
            slots: vec![None; num_slots],
            mask: num_slots - 1,
            occupied: 0,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// The entry stored for `key`, if its slot holds that exact key.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<TtEntry> {
        match self.slots[self.index(key)] {
            Some(entry) if entry.key == key => Some(entry),
            _ => None,
        }
    }

    /// Store an entry, replacing whatever occupies the slot.
    pub fn store(&mut self, key: u64, depth: u32, score: i32, bound: BoundType, best_move: Move) {
        let idx = self.index(key);
        let slot = &mut self.slots[idx];
        if slot.is_none() {
            self.occupied += 1;
        }
        *slot = Some(TtEntry {
            key,
            depth,
            score,
            bound,
            best_move,
        });
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.occupied = 0;
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        ((self.occupied as u64 * 1000) / self.slots.len() as u64) as u32
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new(DEFAULT_TT_MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{MoveKind, Square};

    #[test]
    fn test_size_is_power_of_two() {
        let tt = TranspositionTable::new(1);
        assert!(tt.capacity().is_power_of_two());
        assert!(tt.capacity() >= 1024);
        assert!(tt.is_empty());
    }

    #[test]
    fn test_store_and_probe() {
        let mut tt = TranspositionTable::new(1);
        let mv = Move::new(Square::new(4, 6), Square::new(4, 4), MoveKind::Normal);
        tt.store(0xDEAD_BEEF, 3, 42, BoundType::Exact, mv);

        let entry = tt.probe(0xDEAD_BEEF).unwrap();
        assert_eq!(entry.score, 42);
        assert_eq!(entry.bound, BoundType::Exact);
        assert_eq!(entry.best_move, mv);
        assert!(entry.covers(3));
        assert!(!entry.covers(4));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_index_collision_is_a_miss() {
        let mut tt = TranspositionTable::new(1);
        let cap = tt.capacity() as u64;
        tt.store(5, 1, 10, BoundType::LowerBound, Move::NONE);
        assert!(tt.probe(5 + cap).is_none());

        // always replace
        tt.store(5 + cap, 1, 20, BoundType::UpperBound, Move::NONE);
        assert!(tt.probe(5).is_none());
        assert_eq!(tt.probe(5 + cap).unwrap().score, 20);
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut tt = TranspositionTable::new(1);
        for key in 0..100 {
            tt.store(key, 1, 0, BoundType::Exact, Move::NONE);
        }
        assert_eq!(tt.len(), 100);
        assert!(tt.hashfull_per_mille() > 0);
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.hashfull_per_mille(), 0);
        assert!(tt.probe(7).is_none());
    }
}
