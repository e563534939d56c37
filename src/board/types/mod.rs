//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - board occupants
//! - `Square` - signed file/rank pair with a "none" sentinel
//! - `Move` and `MoveKind` - moves as produced by the generator
//! - `CastlingRights` - castling state
//! - `GameResult` - terminal classification

mod castling;
mod moves;
mod piece;
mod result;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveKind};
pub use piece::{Color, Piece, PieceKind};
pub use result::GameResult;
pub use square::{Square, BOARD_SIZE};

pub(crate) use piece::PROMOTION_KINDS;
