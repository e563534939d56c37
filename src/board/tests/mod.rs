//! Board module tests.
//!
//! - `perft.rs` - move generator node counts
//! - `draw.rs` - fifty-move, repetition and material draws
//! - `make_unmake.rs` - make/undo correctness
//! - `edge_cases.rs` - special moves and unusual positions
//! - `proptest.rs` - property-based tests over random games

use crate::board::{Board, Move, PieceKind, Square};

mod edge_cases;
mod perft;

pub(super) fn sq(name: &str) -> Square {
    Square::from_algebraic(name)
}

/// The generated legal move from `from` to `to` with the given promotion.
pub(super) fn find_move(board: &Board, from: &str, to: &str, promotion: Option<PieceKind>) -> Move {
    board
        .legal_moves(board.side_to_move())
        .into_iter()
        .find(|m| m.from == sq(from) && m.to == sq(to) && m.promotion == promotion)
        .unwrap_or_else(|| panic!("{from}{to} not legal in {}", board.to_fen()))
}

pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for uci in moves {
        board
            .make_move_uci(uci)
            .unwrap_or_else(|e| panic!("{uci}: {e}"));
    }
}
