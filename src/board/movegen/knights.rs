use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Board, Color, Move, MoveKind, Square};

impl Board {
    pub(super) fn knight_moves(&self, from: Square, color: Color, out: &mut Vec<Move>) {
        for (df, dr) in KNIGHT_OFFSETS {
            let to = from.offset(df, dr);
            if !to.is_valid() {
                continue;
            }
            let target = self.piece_at(to);
            if target.is_some_and(|p| p.color == color) {
                continue;
            }
            out.push(Move::new(from, to, MoveKind::Normal).with_capture(target));
        }
    }
}
