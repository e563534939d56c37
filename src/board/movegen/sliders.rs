use super::super::{Board, Color, Move, MoveKind, Square};

impl Board {
    /// Walk each ray until the edge or the first piece. An enemy piece is
    /// captured and ends the ray; a friendly one just ends it.
    pub(super) fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        out: &mut Vec<Move>,
    ) {
        for &(df, dr) in directions {
            let mut to = from.offset(df, dr);
            while to.is_valid() {
                match self.piece_at(to) {
                    None => out.push(Move::new(from, to, MoveKind::Normal)),
                    Some(p) => {
                        if p.color != color {
                            out.push(Move::new(from, to, MoveKind::Normal).with_capture(Some(p)));
                        }
                        break;
                    }
                }
                to = to.offset(df, dr);
            }
        }
    }
}
