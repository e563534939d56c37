//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// FEN letters in canonical order, paired with their bit
const FEN_ORDER: [(char, u8); 4] = [
    ('K', CASTLE_WHITE_K),
    ('Q', CASTLE_WHITE_Q),
    ('k', CASTLE_BLACK_K),
    ('q', CASTLE_BLACK_Q),
];

/// Castling rights as a 4-bit mask.
///
/// Bit 0 = White king side, bit 1 = White queen side, bit 2 = Black king side,
/// bit 3 = Black queen side. The raw mask indexes the Zobrist castling keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, king_side: bool) -> bool {
        self.0 & Self::bit_for(color, king_side) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, king_side: bool) {
        self.0 |= Self::bit_for(color, king_side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, king_side: bool) {
        self.0 &= !Self::bit_for(color, king_side);
    }

    /// Drop both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// FEN field: subset of "KQkq" in that order, or "-"
    #[must_use]
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        FEN_ORDER
            .iter()
            .filter(|(_, bit)| self.0 & bit != 0)
            .map(|(c, _)| *c)
            .collect()
    }

    /// Parse the FEN castling field. Returns the offending character on
    /// unknown or repeated letters.
    pub(crate) fn from_fen(field: &str) -> Result<Self, char> {
        if field == "-" {
            return Ok(CastlingRights::none());
        }
        let mut rights = CastlingRights::none();
        for c in field.chars() {
            let bit = FEN_ORDER
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|(_, bit)| *bit)
                .ok_or(c)?;
            if rights.0 & bit != 0 {
                return Err(c);
            }
            rights.0 |= bit;
        }
        if rights.is_empty() {
            // empty string is not a valid field
            return Err(' ');
        }
        Ok(rights)
    }

    #[inline]
    const fn bit_for(color: Color, king_side: bool) -> u8 {
        match (color, king_side) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        for field in ["KQkq", "Kq", "k", "-", "Qk"] {
            assert_eq!(CastlingRights::from_fen(field).unwrap().to_fen(), field);
        }
    }

    #[test]
    fn test_fen_canonical_order() {
        assert_eq!(CastlingRights::from_fen("qK").unwrap().to_fen(), "Kq");
    }

    #[test]
    fn test_fen_rejects_garbage() {
        assert_eq!(CastlingRights::from_fen("KX"), Err('X'));
        assert_eq!(CastlingRights::from_fen("KK"), Err('K'));
    }

    #[test]
    fn test_set_remove() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, true);
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        rights.remove_color(Color::Black);
        assert_eq!(rights.as_u8(), CASTLE_WHITE_Q);
        rights.set(Color::Black, false);
        assert!(rights.has(Color::Black, false));
    }
}
