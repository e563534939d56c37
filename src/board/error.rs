//! Error types for board operations.

use thiserror::Error;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// FEN must have exactly six whitespace-separated fields
    #[error("FEN must have 6 fields, found {found}")]
    WrongFieldCount { found: usize },
    /// Placement must describe exactly eight ranks
    #[error("FEN placement must have 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    /// Invalid character in the placement field
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// A rank does not cover exactly eight files
    #[error("Rank {rank} of FEN placement covers {files} files, expected 8")]
    BadRankLength { rank: usize, files: usize },
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    #[error("Invalid castling field '{found}'")]
    InvalidCastling { found: String },
    #[error("Invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    #[error("Invalid half-move clock '{found}'")]
    InvalidHalfmoveClock { found: String },
    #[error("Invalid full-move number '{found}'")]
    InvalidFullmoveNumber { found: String },
}

/// Error type for UCI move parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    #[error("Move must be 4-5 characters, found {len}")]
    InvalidLength { len: usize },
    #[error("Invalid square notation in '{notation}'")]
    InvalidSquare { notation: String },
    #[error("Invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
    /// Well-formed, but not legal in the current position
    #[error("Illegal move '{notation}'")]
    IllegalMove { notation: String },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("Rank {rank} out of bounds (must be 0-7)")]
    RankOutOfBounds { rank: i8 },
    #[error("File {file} out of bounds (must be 0-7)")]
    FileOutOfBounds { file: i8 },
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}
