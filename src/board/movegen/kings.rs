use super::super::attacks::{square_attacked, KING_OFFSETS};
use super::super::{Board, Color, Move, MoveKind, Piece, PieceKind, Square};

/// File the king starts on.
const KING_FILE: i8 = 4;

impl Board {
    pub(super) fn king_moves(&self, from: Square, color: Color, out: &mut Vec<Move>) {
        let enemy = color.opponent();

        for (df, dr) in KING_OFFSETS {
            let to = from.offset(df, dr);
            if !to.is_valid() {
                continue;
            }
            let target = self.piece_at(to);
            if target.is_some_and(|p| p.color == color) {
                continue;
            }
            if square_attacked(&self.grid, to, enemy) {
                continue;
            }
            out.push(Move::new(from, to, MoveKind::Normal).with_capture(target));
        }

        self.castling_moves(from, color, out);
    }

    fn castling_moves(&self, from: Square, color: Color, out: &mut Vec<Move>) {
        let home = color.home_rank();
        if from != Square::new(KING_FILE, home) {
            return;
        }
        let enemy = color.opponent();
        if square_attacked(&self.grid, from, enemy) {
            return;
        }
        let rook = Some(Piece::new(PieceKind::Rook, color));
        let empty = |files: &[i8]| files.iter().all(|&f| self.is_empty(Square::new(f, home)));
        let safe = |files: &[i8]| {
            files
                .iter()
                .all(|&f| !square_attacked(&self.grid, Square::new(f, home), enemy))
        };

        if self.castling.has(color, true)
            && self.piece_at(Square::new(7, home)) == rook
            && empty(&[5, 6])
            && safe(&[5, 6])
        {
            out.push(Move::new(from, Square::new(6, home), MoveKind::Castle));
        }

        if self.castling.has(color, false)
            && self.piece_at(Square::new(0, home)) == rook
            && empty(&[1, 2, 3])
            && safe(&[3, 2])
        {
            out.push(Move::new(from, Square::new(2, home), MoveKind::Castle));
        }
    }
}
