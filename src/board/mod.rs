//! Chess board representation and game rules.
//!
//! An 8x8 grid of `Option<Piece>` plus the game state around it. Supports the
//! full rules: castling, en passant, promotion, check, mate, stalemate and the
//! fifty-move, repetition and insufficient-material draws.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod pst;
mod rules;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use rules::FIFTY_MOVE_LIMIT;
pub use state::Board;
pub use types::{CastlingRights, Color, GameResult, Move, MoveKind, Piece, PieceKind, Square, BOARD_SIZE};

pub(crate) use types::PROMOTION_KINDS;
