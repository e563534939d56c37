use super::{order_moves, score_from_tt, score_to_tt, SearchContext, INFINITY};
use crate::board::{Board, Color, Move};
use crate::tt::BoundType;

impl SearchContext<'_> {
    /// Minimax with alpha-beta pruning. Scores are from White's point of
    /// view: White maximizes, Black minimizes.
    ///
    /// Once the deadline passes the return value is meaningless and the
    /// caller must check `self.aborted`.
    pub(crate) fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        ply: u32,
    ) -> i32 {
        self.nodes += 1;
        if self.time_up() {
            return 0;
        }

        // rule draws depend on the move log, which the table key ignores
        if board.is_rule_draw() {
            return self.quiesce_white(board, alpha, beta, ply);
        }

        let key = self.keys.hash(board);
        if let Some(entry) = self.tt.probe(key) {
            if entry.covers(depth) {
                let score = score_from_tt(entry.score, ply);
                match entry.bound {
                    BoundType::Exact => return score,
                    BoundType::LowerBound => alpha = alpha.max(score),
                    BoundType::UpperBound => beta = beta.min(score),
                }
                if alpha >= beta {
                    return score;
                }
            }
        }

        if depth == 0 {
            return self.quiesce_white(board, alpha, beta, ply);
        }
        let side = board.side_to_move();
        let mut moves = board.legal_moves(side);
        // mate and stalemate are scored by quiescence
        if moves.is_empty() {
            return self.quiesce_white(board, alpha, beta, ply);
        }

        order_moves(board, &mut moves, &self.history);

        let window = (alpha, beta);
        let maximizing = side == Color::White;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = Move::NONE;

        for mv in &moves {
            let mut child = board.clone();
            child.apply_move(mv);
            let score = self.alpha_beta(&child, depth - 1, alpha, beta, ply + 1);
            if self.aborted {
                return 0;
            }

            if maximizing {
                if score > best {
                    best = score;
                    best_move = *mv;
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_move = *mv;
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.history.reward(mv, depth);
                break;
            }
        }

        let bound = if best <= window.0 {
            BoundType::UpperBound
        } else if best >= window.1 {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.tt.store(key, depth, score_to_tt(best, ply), bound, best_move);

        best
    }

    /// Quiescence from White's point of view.
    pub(crate) fn quiesce_white(&mut self, board: &Board, alpha: i32, beta: i32, ply: u32) -> i32 {
        match board.side_to_move() {
            Color::White => self.quiesce(board, alpha, beta, ply, 0),
            Color::Black => -self.quiesce(board, -beta, -alpha, ply, 0),
        }
    }
}
