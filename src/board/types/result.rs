//! Game outcome classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// State of the game as seen from the current position.
///
/// `CheckmateWhite` means White delivered mate (White wins);
/// `CheckmateBlack` means Black delivered mate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    Ongoing,
    CheckmateWhite,
    CheckmateBlack,
    Stalemate,
    DrawFiftyMoves,
    DrawRepetition,
    DrawMaterial,
}

impl GameResult {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameResult::Stalemate
                | GameResult::DrawFiftyMoves
                | GameResult::DrawRepetition
                | GameResult::DrawMaterial
        )
    }

    /// The winning color, if the game ended in mate
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::CheckmateWhite => Some(Color::White),
            GameResult::CheckmateBlack => Some(Color::Black),
            _ => None,
        }
    }

    pub(crate) const fn checkmate_by(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::CheckmateWhite,
            Color::Black => GameResult::CheckmateBlack,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::Ongoing => "ongoing",
            GameResult::CheckmateWhite => "checkmate, White wins",
            GameResult::CheckmateBlack => "checkmate, Black wins",
            GameResult::Stalemate => "stalemate",
            GameResult::DrawFiftyMoves => "draw by fifty-move rule",
            GameResult::DrawRepetition => "draw by threefold repetition",
            GameResult::DrawMaterial => "draw by insufficient material",
        };
        f.write_str(text)
    }
}
