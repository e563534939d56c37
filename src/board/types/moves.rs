//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// What kind of transition a move is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    #[default]
    Normal,
    Castle,
    EnPassant,
    Promotion,
}

/// A move as produced by the move generator.
///
/// `captured` records the piece taken (the pawn behind the target square for
/// en passant), and `promotion` is set only for [`MoveKind::Promotion`].
/// `Move::default()` is the invalid "no move".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub promotion: Option<PieceKind>,
    pub captured: Option<Piece>,
}

impl Move {
    /// The invalid "no move"
    pub const NONE: Move = Move {
        from: Square::NONE,
        to: Square::NONE,
        kind: MoveKind::Normal,
        promotion: None,
        captured: None,
    };

    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move {
            from,
            to,
            kind,
            promotion: None,
            captured: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: PieceKind) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Promotion,
            promotion: Some(piece),
            captured: None,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn with_capture(mut self, captured: Option<Piece>) -> Self {
        self.captured = captured;
        self
    }

    /// Both squares are on the board.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub fn is_castle(&self) -> bool {
        self.kind == MoveKind::Castle
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    /// Same from, to, kind and promotion; the captured piece is ignored.
    #[inline]
    #[must_use]
    pub fn same_action(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.kind == other.kind
            && self.promotion == other.promotion
    }

    /// Coordinate form "e2e4" without the promotion suffix.
    #[must_use]
    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.from.to_algebraic(), self.to.to_algebraic())
    }

    /// UCI long algebraic form, e.g. "e2e4" or "e7e8q". Invalid moves give
    /// "0000", the UCI null move.
    #[must_use]
    pub fn to_uci(&self) -> String {
        if !self.is_valid() {
            return "0000".to_string();
        }
        let mut s = self.to_algebraic();
        if self.kind == MoveKind::Promotion {
            if let Some(piece) = self.promotion {
                s.push(piece.to_char());
            }
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
