//! Move-selecting engine.
//!
//! Owns the transposition table and Zobrist keys across calls; everything
//! else (history, deadline, node count) lives for a single search.

mod config;
pub mod search;
pub mod time;

pub use config::{EngineConfig, DEFAULT_QSEARCH_DEPTH, MAX_SEARCH_DEPTH};
pub use search::{SearchInfo, SearchLimits, SearchResult, MATE_SCORE, MATE_THRESHOLD};
pub use time::{Difficulty, ParseDifficultyError, TimeControl, DEFAULT_MOVES_TO_GO, MIN_MOVE_TIME};

use std::time::Instant;

use log::{info, trace};

use crate::board::{Board, Move};
use crate::tt::TranspositionTable;
use crate::zobrist::ZobristKeys;
use search::{order_moves, SearchContext};

pub struct Engine {
    config: EngineConfig,
    tt: TranspositionTable,
    keys: ZobristKeys,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            tt: TranspositionTable::new(config.tt_size_mb),
            keys: ZobristKeys::new(config.zobrist_seed),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resize (and clear) the transposition table.
    pub fn set_hash_size(&mut self, size_mb: usize) {
        self.config.tt_size_mb = size_mb;
        self.tt = TranspositionTable::new(size_mb);
    }

    /// Forget everything learned from previous positions.
    pub fn new_game(&mut self) {
        self.tt.clear();
    }

    #[must_use]
    pub fn hashfull(&self) -> u32 {
        self.tt.hashfull_per_mille()
    }

    /// Pick a move for the side to move within the budget derived from
    /// `time_control`, searching no deeper than `difficulty` allows.
    ///
    /// Returns `Move::NONE` when there is no legal move.
    pub fn find_best_move(
        &mut self,
        board: &Board,
        difficulty: Difficulty,
        time_control: &TimeControl,
    ) -> Move {
        let budget = time_control.move_budget(
            board.fullmove_number(),
            self.config.moves_to_go,
            self.config.min_move_time,
        );
        let limits = SearchLimits::timed(difficulty.search_depth(), budget);
        self.search(board, limits).best_move
    }

    /// Iterative-deepening search of `board` within `limits`.
    pub fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        self.search_with_info(board, limits, |_| {})
    }

    /// Like [`Engine::search`], calling `on_iteration` after each completed
    /// depth.
    pub fn search_with_info<F>(
        &mut self,
        board: &Board,
        limits: SearchLimits,
        mut on_iteration: F,
    ) -> SearchResult
    where
        F: FnMut(&SearchInfo),
    {
        let start = Instant::now();
        let deadline = limits.move_time.map(|t| start + t);
        let max_depth = limits.max_depth.clamp(1, self.config.max_depth.max(1));
        let side = board.side_to_move();

        let mut root_moves = board.legal_moves(side);
        if root_moves.is_empty() {
            info!("no legal moves in {}", board.to_fen());
            return SearchResult {
                best_move: Move::NONE,
                score: 0,
                depth: 0,
                nodes: 0,
                elapsed: start.elapsed(),
            };
        }

        let mut ctx = SearchContext::new(
            &mut self.tt,
            &self.keys,
            deadline,
            self.config.max_qsearch_depth,
        );

        let mut best_move = Move::NONE;
        let mut best_score = 0;
        let mut completed = 0;
        let mut partial = None;

        for depth in 1..=max_depth {
            if ctx.time_up() {
                break;
            }

            order_moves(board, &mut root_moves, &ctx.history);
            // previous iteration's choice goes first
            if let Some(pos) = root_moves.iter().position(|m| *m == best_move) {
                root_moves[..=pos].rotate_right(1);
            }

            match ctx.search_root(board, &root_moves, depth, &mut partial) {
                Some((mv, white_score)) => {
                    best_move = mv;
                    best_score = white_score * side.sign();
                    completed = depth;

                    let report = SearchInfo {
                        depth,
                        score: best_score,
                        nodes: ctx.nodes,
                        elapsed: start.elapsed(),
                        hashfull: ctx.tt.hashfull_per_mille(),
                        best_move,
                    };
                    trace!(
                        "depth {} score {} nodes {} best {}",
                        depth,
                        best_score,
                        ctx.nodes,
                        best_move
                    );
                    on_iteration(&report);

                    if best_score.abs() >= MATE_THRESHOLD {
                        break;
                    }
                }
                None => break,
            }
        }

        if completed == 0 {
            // nothing finished: take the partial best, else the first move
            best_move = partial.unwrap_or(root_moves[0]);
        }

        let result = SearchResult {
            best_move,
            score: best_score,
            depth: completed,
            nodes: ctx.nodes,
            elapsed: start.elapsed(),
        };
        info!(
            "search done: {} depth {} score {} nodes {} in {:?}",
            result.best_move, result.depth, result.score, result.nodes, result.elapsed
        );
        result
    }
}
