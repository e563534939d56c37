//! Square type and algebraic conversion.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the chess board, addressed by signed `(file, rank)`.
///
/// Files run a..h as 0..7. Ranks are numbered top to bottom: rank index 0 is
/// the eighth rank and rank index 7 is the first rank, so White's pieces start
/// on rank indices 6 and 7.
///
/// `Square::NONE` (`-1, -1`) is the "no square" sentinel; any square outside
/// the board reports `is_valid() == false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    /// The "no square" sentinel.
    pub const NONE: Square = Square { file: -1, rank: -1 };

    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Square shifted by `(df, dr)`; the result may be off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, df: i8, dr: i8) -> Self {
        Square {
            file: self.file + df,
            rank: self.rank + dr,
        }
    }

    /// Index 0..64 in rank-major order (a8 = 0, h1 = 63). Only meaningful for
    /// valid squares.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    /// Inverse of [`Square::index`].
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square {
            file: (idx % 8) as i8,
            rank: (idx / 8) as i8,
        }
    }

    /// Parse algebraic notation ("e4"), returning `Square::NONE` on bad input.
    #[must_use]
    pub fn from_algebraic(s: &str) -> Self {
        s.parse().unwrap_or(Square::NONE)
    }

    /// Algebraic notation, or an empty string for an invalid square.
    #[must_use]
    pub fn to_algebraic(self) -> String {
        if self.is_valid() {
            self.to_string()
        } else {
            String::new()
        }
    }

    /// All 64 squares, top-left (a8) first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::NONE
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "-");
        }
        write!(
            f,
            "{}{}",
            (b'a' + self.file as u8) as char,
            (b'8' - self.rank as u8) as char
        )
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (i8, i8)) -> Result<Self, Self::Error> {
        if !(0..BOARD_SIZE).contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if !(0..BOARD_SIZE).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square { file, rank })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as i8,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b'8' - b) as i8,
            _ => return Err(invalid()),
        };
        Ok(Square { file, rank })
    }
}
