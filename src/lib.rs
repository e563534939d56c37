//! Chess rules and a small alpha-beta engine.
//!
//! - [`board`] - position, move generation, rules, FEN/UCI/SAN notation
//! - [`engine`] - iterative-deepening search with a transposition table
//! - [`uci`] - the text protocol front end used by the binary

pub mod board;
pub mod engine;
mod perft;
pub mod tt;
pub mod uci;
pub mod zobrist;

pub use board::{Board, Color, GameResult, Move, Piece, PieceKind, Square};
pub use engine::{Difficulty, Engine, EngineConfig, SearchLimits, SearchResult, TimeControl};
pub use tt::TranspositionTable;
pub use zobrist::ZobristKeys;
