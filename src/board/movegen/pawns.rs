use super::super::{Board, Color, Move, MoveKind, Piece, PieceKind, Square, PROMOTION_KINDS};

/// Push `from -> to`, expanding to the four promotions on the last rank.
fn push_pawn_move(from: Square, to: Square, color: Color, captured: Option<Piece>, out: &mut Vec<Move>) {
    if to.rank == color.promotion_rank() {
        for kind in PROMOTION_KINDS {
            out.push(Move::promotion(from, to, kind).with_capture(captured));
        }
    } else {
        out.push(Move::new(from, to, MoveKind::Normal).with_capture(captured));
    }
}

impl Board {
    pub(super) fn pawn_moves(&self, from: Square, color: Color, out: &mut Vec<Move>) {
        let dir = color.pawn_direction();

        let one = from.offset(0, dir);
        if one.is_valid() && self.is_empty(one) {
            push_pawn_move(from, one, color, None, out);

            let two = from.offset(0, 2 * dir);
            if from.rank == color.pawn_start_rank() && self.is_empty(two) {
                out.push(Move::new(from, two, MoveKind::Normal));
            }
        }

        for df in [-1, 1] {
            let to = from.offset(df, dir);
            if !to.is_valid() {
                continue;
            }
            match self.piece_at(to) {
                Some(target) if target.color != color => {
                    push_pawn_move(from, to, color, Some(target), out);
                }
                None if to == self.en_passant && color == self.side_to_move => {
                    // victim sits beside the capturing pawn
                    let enemy_pawn = Piece::new(PieceKind::Pawn, color.opponent());
                    let victim = Square::new(to.file, from.rank);
                    if self.piece_at(victim) == Some(enemy_pawn) {
                        out.push(Move::new(from, to, MoveKind::EnPassant).with_capture(Some(enemy_pawn)));
                    }
                }
                _ => {}
            }
        }
    }
}
