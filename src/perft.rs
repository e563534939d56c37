//! Move-path enumeration, the reference check for the move generator.

use crate::board::{Board, Move};

impl Board {
    /// Number of legal move sequences of length `depth` from here.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(self.side_to_move());
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut scratch = self.clone();
        let mut nodes = 0;
        for m in &moves {
            scratch.apply_move(m);
            nodes += scratch.perft(depth - 1);
            scratch.undo_move();
        }
        nodes
    }

    /// Perft split by root move, in generation order. Empty at depth 0.
    #[must_use]
    pub fn perft_divide(&self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let mut scratch = self.clone();
        self.legal_moves(self.side_to_move())
            .into_iter()
            .map(|m| {
                scratch.apply_move(&m);
                let count = scratch.perft(depth - 1);
                scratch.undo_move();
                (m, count)
            })
            .collect()
    }
}
