use super::{order_moves, static_eval, SearchContext, MATE_SCORE};
use crate::board::Board;

impl SearchContext<'_> {
    /// Quiescence search, scored for the side to move (negamax, fail-hard).
    ///
    /// Mate scores `-(MATE_SCORE - ply)`; stalemate and rule draws score 0.
    /// Only captures are searched unless the side to move is in check.
    pub(crate) fn quiesce(
        &mut self,
        board: &Board,
        mut alpha: i32,
        beta: i32,
        ply: u32,
        qdepth: u32,
    ) -> i32 {
        self.nodes += 1;
        if self.time_up() {
            return 0;
        }

        let side = board.side_to_move();
        let in_check = board.is_in_check(side);
        let mut moves = board.legal_moves(side);
        if moves.is_empty() {
            return if in_check {
                -(MATE_SCORE - ply as i32)
            } else {
                0
            };
        }
        if board.is_rule_draw() {
            return 0;
        }

        if !in_check {
            let stand_pat = static_eval(board, side);
            if stand_pat >= beta {
                return beta;
            }
            if stand_pat > alpha {
                alpha = stand_pat;
            }
        }

        if qdepth >= self.max_qsearch_depth {
            return alpha;
        }

        if !in_check {
            moves.retain(|mv| mv.is_capture());
        }
        order_moves(board, &mut moves, &self.history);

        for mv in &moves {
            let mut child = board.clone();
            child.apply_move(mv);
            let score = -self.quiesce(&child, -beta, -alpha, ply + 1, qdepth + 1);
            if self.aborted {
                return 0;
            }
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
