mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{king_attacked, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::make_unmake::apply_to_grid;
use super::{Board, Color, Move, PieceKind, Square};

impl Board {
    /// Moves of the piece on `from` before the own-king safety check.
    fn pseudo_moves(&self, from: Square, out: &mut Vec<Move>) {
        let Some(piece) = self.piece_at(from) else {
            return;
        };
        let color = piece.color;
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, color, out),
            PieceKind::Knight => self.knight_moves(from, color, out),
            PieceKind::Bishop => self.sliding_moves(from, color, &BISHOP_DIRECTIONS, out),
            PieceKind::Rook => self.sliding_moves(from, color, &ROOK_DIRECTIONS, out),
            PieceKind::Queen => {
                self.sliding_moves(from, color, &ROOK_DIRECTIONS, out);
                self.sliding_moves(from, color, &BISHOP_DIRECTIONS, out);
            }
            PieceKind::King => self.king_moves(from, color, out),
        }
    }

    /// Play `mv` on a scratch copy of the grid and check the mover's king.
    fn leaves_king_safe(&self, mv: &Move, mover: Color) -> bool {
        let mut scratch = self.grid;
        apply_to_grid(&mut scratch, mv);
        !king_attacked(&scratch, mover)
    }

    /// Legal moves of the piece on `sq`; empty for an empty square.
    ///
    /// Works for either color, independent of whose turn it is.
    #[must_use]
    pub fn piece_moves(&self, sq: Square) -> Vec<Move> {
        let Some(piece) = self.piece_at(sq) else {
            return Vec::new();
        };
        let mut moves = Vec::with_capacity(28);
        self.pseudo_moves(sq, &mut moves);
        moves.retain(|mv| self.leaves_king_safe(mv, piece.color));
        moves
    }

    /// All legal moves for `color`.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        let mut buf = Vec::with_capacity(28);
        for (sq, piece) in self.pieces() {
            if piece.color != color {
                continue;
            }
            buf.clear();
            self.pseudo_moves(sq, &mut buf);
            moves.extend(buf.iter().filter(|mv| self.leaves_king_safe(mv, color)));
        }
        moves
    }

    /// Legal captures (including en passant) for `color`.
    #[must_use]
    pub fn legal_captures(&self, color: Color) -> Vec<Move> {
        let mut moves = self.legal_moves(color);
        moves.retain(Move::is_capture);
        moves
    }

    /// Whether `color` has at least one legal move. Stops at the first one.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        let mut buf = Vec::with_capacity(28);
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .any(|(sq, _)| {
                buf.clear();
                self.pseudo_moves(sq, &mut buf);
                buf.iter().any(|mv| self.leaves_king_safe(mv, color))
            })
    }

    /// Whether the side to move may play `mv`, matched on from, to, kind and
    /// promotion.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        match self.piece_at(mv.from) {
            Some(piece) if piece.color == self.side_to_move => self
                .piece_moves(mv.from)
                .iter()
                .any(|candidate| candidate.same_action(mv)),
            _ => false,
        }
    }
}
