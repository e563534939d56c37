use log::debug;

use super::state::{grid_at, grid_set, Grid, UndoInfo};
use super::{Board, Color, Move, MoveKind, Piece, PieceKind, Square};

/// Rook origin and destination for a castling move, on the king's rank.
#[inline]
pub(crate) fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let rank = mv.from.rank;
    if mv.to.file == 6 {
        (Square::new(7, rank), Square::new(5, rank))
    } else {
        (Square::new(0, rank), Square::new(3, rank))
    }
}

/// Relocate pieces for `mv` on a bare grid: rook for castling, the passed
/// pawn for en passant, the new piece for promotion. Returns what was taken
/// and where it stood.
pub(crate) fn apply_to_grid(grid: &mut Grid, mv: &Move) -> Option<(Square, Piece)> {
    let moving = grid_at(grid, mv.from)?;

    let captured = match mv.kind {
        MoveKind::EnPassant => {
            let victim = Square::new(mv.to.file, mv.from.rank);
            let taken = grid_at(grid, victim).map(|p| (victim, p));
            grid_set(grid, victim, None);
            taken
        }
        MoveKind::Castle => {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = grid_at(grid, rook_from);
            grid_set(grid, rook_from, None);
            grid_set(grid, rook_to, rook);
            None
        }
        MoveKind::Normal | MoveKind::Promotion => grid_at(grid, mv.to).map(|p| (mv.to, p)),
    };

    let placed = match (mv.kind, mv.promotion) {
        (MoveKind::Promotion, Some(kind)) => Piece::new(kind, moving.color),
        _ => moving,
    };
    grid_set(grid, mv.from, None);
    grid_set(grid, mv.to, Some(placed));
    captured
}

/// Castling right tied to a rook corner, if `sq` is one.
fn corner_right(sq: Square) -> Option<(Color, bool)> {
    match (sq.file, sq.rank) {
        (0, 7) => Some((Color::White, false)),
        (7, 7) => Some((Color::White, true)),
        (0, 0) => Some((Color::Black, false)),
        (7, 0) => Some((Color::Black, true)),
        _ => None,
    }
}

impl Board {
    /// The generated legal move matching `mv`'s action, if the side to move
    /// may play it.
    pub(crate) fn find_legal(&self, mv: &Move) -> Option<Move> {
        let piece = self.piece_at(mv.from)?;
        if piece.color != self.side_to_move {
            return None;
        }
        self.piece_moves(mv.from)
            .into_iter()
            .find(|candidate| candidate.same_action(mv))
    }

    /// Play `mv` if it is legal for the side to move.
    ///
    /// Returns `false` and leaves the board untouched otherwise. The captured
    /// piece recorded on `mv` is ignored; the board's own occupant is used.
    pub fn make_move(&mut self, mv: &Move) -> bool {
        match self.find_legal(mv) {
            Some(legal) => {
                self.apply_move(&legal);
                true
            }
            None => {
                debug!("rejected illegal move {} in {}", mv, self.to_fen());
                false
            }
        }
    }

    /// Play a move already known to be legal. Used by search and perft,
    /// which only feed back moves the generator produced.
    pub(crate) fn apply_move(&mut self, mv: &Move) {
        let Some(moved) = self.piece_at(mv.from) else {
            return;
        };

        let previous_castling = self.castling;
        let previous_en_passant = self.en_passant;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let captured = apply_to_grid(&mut self.grid, mv);

        if moved.kind == PieceKind::King {
            self.castling.remove_color(moved.color);
        }
        for sq in [mv.from, mv.to] {
            if let Some((color, king_side)) = corner_right(sq) {
                self.castling.remove(color, king_side);
            }
        }

        self.en_passant = if moved.kind == PieceKind::Pawn && (mv.to.rank - mv.from.rank).abs() == 2 {
            mv.from.offset(0, moved.color.pawn_direction())
        } else {
            Square::NONE
        };

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if moved.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opponent();

        self.undo_stack.push(UndoInfo {
            mv: *mv,
            moved,
            captured,
            previous_castling,
            previous_en_passant,
            previous_halfmove_clock,
            previous_fullmove_number,
        });
        self.record_position();
    }

    /// Revert the last move played through `make_move`.
    ///
    /// Returns the reverted move, or `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let undo = self.undo_stack.pop()?;
        let mv = undo.mv;

        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved));
        if mv.kind == MoveKind::Castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.piece_at(rook_to);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, rook);
        }
        if let Some((sq, piece)) = undo.captured {
            self.set_piece(sq, Some(piece));
        }

        self.castling = undo.previous_castling;
        self.en_passant = undo.previous_en_passant;
        self.halfmove_clock = undo.previous_halfmove_clock;
        self.fullmove_number = undo.previous_fullmove_number;
        self.side_to_move = self.side_to_move.opponent();
        self.history.pop();

        Some(mv)
    }
}
