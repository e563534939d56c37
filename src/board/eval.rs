use super::pst::table_for;
use super::{Board, Color, Piece, Square};

/// Material plus piece-square value of one piece, always positive-good for
/// its owner.
#[inline]
fn piece_score(piece: Piece, sq: Square) -> f32 {
    let row = match piece.color {
        Color::White => sq.rank,
        Color::Black => 7 - sq.rank,
    } as usize;
    piece.kind.value() as f32 + table_for(piece.kind)[row][sq.file as usize]
}

impl Board {
    /// Static score of the position from `perspective`'s point of view:
    /// own material and placement minus the opponent's.
    #[must_use]
    pub fn evaluate_position(&self, perspective: Color) -> f32 {
        let white: f32 = self
            .pieces()
            .map(|(sq, piece)| match piece.color {
                Color::White => piece_score(piece, sq),
                Color::Black => -piece_score(piece, sq),
            })
            .sum();
        match perspective {
            Color::White => white,
            Color::Black => -white,
        }
    }
}
