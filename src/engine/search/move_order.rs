//! Move ordering for search.

use std::cmp::Reverse;

use crate::board::{Board, Move};

/// History heuristic: cutoff credit per origin square.
#[derive(Clone, Debug)]
pub struct HistoryTable {
    scores: [i32; 64],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable { scores: [0; 64] }
    }

    #[must_use]
    pub fn score(&self, mv: &Move) -> i32 {
        if mv.from.is_valid() {
            self.scores[mv.from.index()]
        } else {
            0
        }
    }

    /// Credit a move that caused a beta cutoff at `depth`.
    pub fn reward(&mut self, mv: &Move, depth: u32) {
        if mv.from.is_valid() {
            let bonus = (depth * depth) as i32;
            let entry = &mut self.scores[mv.from.index()];
            *entry = entry.saturating_add(bonus);
        }
    }

    pub fn clear(&mut self) {
        self.scores = [0; 64];
    }
}

/// Capture bonus: ten times the victim's value minus the attacker's.
fn capture_score(board: &Board, mv: &Move) -> i32 {
    match (mv.captured, board.piece_at(mv.from)) {
        (Some(victim), Some(attacker)) => 10 * victim.kind.value() - attacker.kind.value(),
        (Some(victim), None) => 10 * victim.kind.value(),
        (None, _) => 0,
    }
}

#[must_use]
pub fn move_score(board: &Board, mv: &Move, history: &HistoryTable) -> i32 {
    capture_score(board, mv).saturating_add(history.score(mv))
}

/// Sort `moves` best-first. Ties keep generation order.
pub fn order_moves(board: &Board, moves: &mut [Move], history: &HistoryTable) {
    moves.sort_by_cached_key(|mv| Reverse(move_score(board, mv, history)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_sorted_by_victim_then_attacker() {
        // white queen and pawn can both take; rook on d5, knight on f5
        let board = Board::from_fen("4k3/8/8/3r1n2/4P3/8/8/3QK3 w - - 0 1").unwrap();
        let mut moves = board.legal_moves(board.side_to_move());
        order_moves(&board, &mut moves, &HistoryTable::new());
        assert_eq!(moves[0].to_uci(), "e4d5"); // PxR
        assert_eq!(moves[1].to_uci(), "d1d5"); // QxR
        assert_eq!(moves[2].to_uci(), "e4f5"); // PxN
    }

    #[test]
    fn test_history_breaks_quiet_ties() {
        let board = Board::new();
        let mut moves = board.legal_moves(board.side_to_move());
        let mut history = HistoryTable::new();
        let knight = board.parse_move("g1f3").unwrap();
        history.reward(&knight, 3);
        order_moves(&board, &mut moves, &history);
        assert_eq!(moves[0].from, knight.from);
        assert_eq!(history.score(&knight), 9);
    }
}
