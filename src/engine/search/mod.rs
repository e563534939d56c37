//! Alpha-beta search over board copies.
//!
//! - Iterative deepening driven from [`Engine`](super::Engine)
//! - White-relative minimax with alpha-beta pruning
//! - Transposition table probes and stores
//! - Quiescence search over captures (all moves when in check)
//! - Move ordering by capture value and the history heuristic

mod alphabeta;
mod move_order;
mod quiescence;

pub use move_order::{move_score, order_moves, HistoryTable};

use std::time::{Duration, Instant};

use crate::board::{Board, Color, Move};
use crate::tt::TranspositionTable;
use crate::zobrist::ZobristKeys;

/// Score of delivering mate at the root. Mate at ply `n` scores
/// `MATE_SCORE - n`.
pub const MATE_SCORE: i32 = 1_000_000;

/// Scores with absolute value >= this are mate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Larger than any reachable score
pub const INFINITY: i32 = 2_000_000;

/// Bounds on one call to [`Engine::search`](super::Engine::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_depth: u32,
    /// `None` searches until `max_depth` completes.
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchLimits {
            max_depth,
            move_time: None,
        }
    }

    #[must_use]
    pub fn timed(max_depth: u32, move_time: Duration) -> Self {
        SearchLimits {
            max_depth,
            move_time: Some(move_time),
        }
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// `Move::NONE` only when the side to move has no legal move
    pub best_move: Move,
    /// Score of `best_move` for the side to move, in centipawns
    pub score: i32,
    /// Deepest fully completed iteration; 0 if none completed
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    /// Moves until mate, positive when the side to move mates.
    #[must_use]
    pub fn mate_in(&self) -> Option<i32> {
        mate_distance(self.score)
    }
}

/// Snapshot reported after every completed iteration.
#[derive(Debug, Clone, Copy)]
pub struct SearchInfo {
    pub depth: u32,
    /// Side-to-move relative, like [`SearchResult::score`]
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub hashfull: u32,
    pub best_move: Move,
}

/// Full moves until mate for a side-to-move relative score.
#[must_use]
pub fn mate_distance(score: i32) -> Option<i32> {
    if score >= MATE_THRESHOLD {
        Some((MATE_SCORE - score + 1) / 2)
    } else if score <= -MATE_THRESHOLD {
        Some(-((MATE_SCORE + score + 1) / 2))
    } else {
        None
    }
}

/// Mate scores are stored relative to the node, not the root.
#[inline]
pub(crate) fn score_to_tt(score: i32, ply: u32) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

#[inline]
pub(crate) fn score_from_tt(score: i32, ply: u32) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

/// Static score for `color`, rounded to whole centipawns.
#[inline]
pub(crate) fn static_eval(board: &Board, color: Color) -> i32 {
    board.evaluate_position(color).round() as i32
}

/// State for one search call.
pub(crate) struct SearchContext<'a> {
    pub(crate) tt: &'a mut TranspositionTable,
    pub(crate) keys: &'a ZobristKeys,
    pub(crate) history: HistoryTable,
    pub(crate) deadline: Option<Instant>,
    pub(crate) max_qsearch_depth: u32,
    pub(crate) nodes: u64,
    pub(crate) aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        tt: &'a mut TranspositionTable,
        keys: &'a ZobristKeys,
        deadline: Option<Instant>,
        max_qsearch_depth: u32,
    ) -> Self {
        SearchContext {
            tt,
            keys,
            history: HistoryTable::new(),
            deadline,
            max_qsearch_depth,
            nodes: 0,
            aborted: false,
        }
    }

    /// Check the deadline; once passed, stays aborted.
    #[inline]
    pub(crate) fn time_up(&mut self) -> bool {
        if !self.aborted {
            if let Some(deadline) = self.deadline {
                if Instant::now() >= deadline {
                    self.aborted = true;
                }
            }
        }
        self.aborted
    }

    /// Search every root move to `depth` and return the best one with its
    /// white-relative score. `None` if the deadline passed before the
    /// iteration finished; `partial` then holds the best move seen so far.
    pub(crate) fn search_root(
        &mut self,
        board: &Board,
        moves: &[Move],
        depth: u32,
        partial: &mut Option<Move>,
    ) -> Option<(Move, i32)> {
        let maximizing = board.side_to_move() == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best_move = Move::NONE;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            if self.time_up() {
                return None;
            }
            let mut child = board.clone();
            child.apply_move(mv);
            let score = self.alpha_beta(&child, depth.saturating_sub(1), alpha, beta, 1);
            if self.aborted {
                return None;
            }

            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improved || !best_move.is_valid() {
                best_score = score;
                best_move = *mv;
                *partial = Some(*mv);
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        Some((best_move, best_score))
    }
}
