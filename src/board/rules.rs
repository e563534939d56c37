//! Terminal-state classification and draw rules.

use super::{Board, Color, GameResult, PieceKind};

/// Half-move clock value at which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;

impl Board {
    /// Classify the current position for the side to move.
    ///
    /// Mate and stalemate take precedence over the fifty-move rule, which in
    /// turn precedes repetition and insufficient material.
    #[must_use]
    pub fn game_result(&self) -> GameResult {
        let color = self.side_to_move;
        if !self.has_legal_move(color) {
            return if self.is_in_check(color) {
                GameResult::checkmate_by(color.opponent())
            } else {
                GameResult::Stalemate
            };
        }
        if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
            return GameResult::DrawFiftyMoves;
        }
        if self.is_threefold_repetition() {
            return GameResult::DrawRepetition;
        }
        if self.is_insufficient_material() {
            return GameResult::DrawMaterial;
        }
        GameResult::Ongoing
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// The current position's fingerprint appears at least three times in
    /// the log.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.hash();
        self.history.iter().filter(|&&key| key == current).count() >= 3
    }

    /// King against king, or king and a single knight or bishop against a
    /// bare king.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut extra = self.pieces().filter(|(_, p)| p.kind != PieceKind::King);
        match (extra.next(), extra.next()) {
            (None, _) => true,
            (Some((_, piece)), None) => piece.kind.is_minor(),
            _ => false,
        }
    }

    /// Rule draws only: fifty moves, repetition, insufficient material.
    /// Stalemate is not included.
    #[must_use]
    pub fn is_rule_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_LIMIT
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
    }
}
