use std::fmt;

use crate::zobrist::DEFAULT_KEYS;

use super::{CastlingRights, Color, Move, Piece, PieceKind, Square};

/// Piece placement, indexed `[rank][file]` with rank index 0 = the eighth rank.
pub(crate) type Grid = [[Option<Piece>; 8]; 8];

pub(crate) const EMPTY_GRID: Grid = [[None; 8]; 8];

/// Everything `make_move` overwrites, so `undo_move` can restore it exactly.
#[derive(Clone, Debug)]
pub(crate) struct UndoInfo {
    pub(crate) mv: Move,
    pub(crate) moved: Piece,
    pub(crate) captured: Option<(Square, Piece)>,
    pub(crate) previous_castling: CastlingRights,
    pub(crate) previous_en_passant: Square,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

/// Full game state: placement, side to move, castling rights, en-passant
/// target, both move counters, the log of position fingerprints (for
/// repetition) and the undo stack.
///
/// Boards are cheap to clone and the search works on copies; nothing in here
/// is shared.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Square,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<u64>,
    pub(crate) undo_stack: Vec<UndoInfo>,
}

#[inline]
pub(crate) fn grid_at(grid: &Grid, sq: Square) -> Option<Piece> {
    if sq.is_valid() {
        grid[sq.rank as usize][sq.file as usize]
    } else {
        None
    }
}

#[inline]
pub(crate) fn grid_set(grid: &mut Grid, sq: Square, piece: Option<Piece>) {
    if sq.is_valid() {
        grid[sq.rank as usize][sq.file as usize] = piece;
    }
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            let file = file as i8;
            board.set_piece(Square::new(file, 0), Some(Piece::new(*kind, Color::Black)));
            board.set_piece(Square::new(file, 1), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set_piece(Square::new(file, 6), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set_piece(Square::new(file, 7), Some(Piece::new(*kind, Color::White)));
        }
        board.castling = CastlingRights::all();
        board.record_position();
        board
    }

    /// A cleared board: no pieces, White to move, no castling rights, clocks
    /// at 0 and 1, empty logs.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: EMPTY_GRID,
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: Square::NONE,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
            undo_stack: Vec::new(),
        }
    }

    /// The piece on `sq`, or `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        grid_at(&self.grid, sq)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        grid_set(&mut self.grid, sq, piece);
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn can_castle(&self, color: Color, king_side: bool) -> bool {
        self.castling.has(color, king_side)
    }

    /// The en-passant target, or `Square::NONE`.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Square {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Fingerprint of placement, side to move, castling rights and
    /// en-passant file. The move counters are not part of it.
    #[must_use]
    pub fn hash(&self) -> u64 {
        DEFAULT_KEYS.hash(self)
    }

    /// Fingerprints of every position since setup, current one last.
    #[must_use]
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    /// Number of moves `undo_move` can still revert.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Iterate over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub(crate) fn record_position(&mut self) {
        let key = self.hash();
        self.history.push(key);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BORDER: &str = "  +---+---+---+---+---+---+---+---+";
        writeln!(f, "{BORDER}")?;
        for rank in 0..8i8 {
            write!(f, "{} |", 8 - rank)?;
            for file in 0..8i8 {
                let c = self
                    .piece_at(Square::new(file, rank))
                    .map_or(' ', Piece::to_fen_char);
                write!(f, " {c} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{BORDER}")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")
    }
}
