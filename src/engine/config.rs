use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::time::{DEFAULT_MOVES_TO_GO, MIN_MOVE_TIME};
use crate::tt::DEFAULT_TT_MB;
use crate::zobrist::DEFAULT_ZOBRIST_SEED;

/// Hard ceiling on iterative-deepening depth
pub const MAX_SEARCH_DEPTH: u32 = 12;

/// Default cap on quiescence recursion below the main search
pub const DEFAULT_QSEARCH_DEPTH: u32 = 8;

/// Tunables for an [`Engine`](super::Engine).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Upper bound on the depth any difficulty may request
    pub max_depth: u32,
    /// Transposition table size in megabytes
    pub tt_size_mb: usize,
    /// Seed of the engine's own Zobrist key set
    pub zobrist_seed: u64,
    /// Divisor splitting the clock into per-move budgets
    pub moves_to_go: u32,
    /// Floor for any per-move budget
    pub min_move_time: Duration,
    pub max_qsearch_depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_depth: MAX_SEARCH_DEPTH,
            tt_size_mb: DEFAULT_TT_MB,
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
            moves_to_go: DEFAULT_MOVES_TO_GO,
            min_move_time: MIN_MOVE_TIME,
            max_qsearch_depth: DEFAULT_QSEARCH_DEPTH,
        }
    }
}
