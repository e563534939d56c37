//! Attack detection on a placement grid.
//!
//! Everything here works on a bare [`Grid`] so the legality filter can ask
//! "is the king attacked" about a scratch copy without building a full board.

use super::state::{grid_at, Grid};
use super::{Board, Color, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
fn holds(grid: &Grid, sq: Square, kind: PieceKind, color: Color) -> bool {
    matches!(grid_at(grid, sq), Some(p) if p.kind == kind && p.color == color)
}

/// First occupied square along a ray, if any.
fn first_blocker(grid: &Grid, from: Square, (df, dr): (i8, i8)) -> Option<Square> {
    let mut sq = from.offset(df, dr);
    while sq.is_valid() {
        if grid_at(grid, sq).is_some() {
            return Some(sq);
        }
        sq = sq.offset(df, dr);
    }
    None
}

/// Whether any piece of `attacker` attacks `sq`.
///
/// Pawns attack diagonally forward only; sliders stop at the first piece.
pub(crate) fn square_attacked(grid: &Grid, sq: Square, attacker: Color) -> bool {
    if !sq.is_valid() {
        return false;
    }

    // A pawn of `attacker` hits `sq` from one rank behind it.
    let back = -attacker.pawn_direction();
    if holds(grid, sq.offset(-1, back), PieceKind::Pawn, attacker)
        || holds(grid, sq.offset(1, back), PieceKind::Pawn, attacker)
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(grid, sq.offset(df, dr), PieceKind::Knight, attacker))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(grid, sq.offset(df, dr), PieceKind::King, attacker))
    {
        return true;
    }

    let slider_hit = |dirs: &[(i8, i8)], kind: PieceKind| {
        dirs.iter().any(|&dir| {
            first_blocker(grid, sq, dir).is_some_and(|b| {
                holds(grid, b, kind, attacker) || holds(grid, b, PieceKind::Queen, attacker)
            })
        })
    };

    slider_hit(&ROOK_DIRECTIONS, PieceKind::Rook) || slider_hit(&BISHOP_DIRECTIONS, PieceKind::Bishop)
}

/// Square of `color`'s king, or `Square::NONE` if it has none.
pub(crate) fn king_square(grid: &Grid, color: Color) -> Square {
    Square::all()
        .find(|&sq| holds(grid, sq, PieceKind::King, color))
        .unwrap_or(Square::NONE)
}

/// A missing king counts as not in check.
pub(crate) fn king_attacked(grid: &Grid, color: Color) -> bool {
    let king = king_square(grid, color);
    king.is_valid() && square_attacked(grid, king, color.opponent())
}

impl Board {
    /// Whether `sq` is attacked by any piece of `by`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        square_attacked(&self.grid, sq, by)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Square {
        king_square(&self.grid, color)
    }

    /// Whether `color`'s king is attacked. Boards without that king are
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        king_attacked(&self.grid, color)
    }
}
