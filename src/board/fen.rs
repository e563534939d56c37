use std::str::FromStr;

use log::debug;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, PieceKind, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(field: &str, board: &mut Board) -> Result<(), FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPiece { char: c });
                }
                file += run as usize;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file < 8 {
                    board.set_piece(Square::new(file as i8, rank_idx as i8), Some(piece));
                }
                file += 1;
            }
            if file > 8 {
                return Err(FenError::BadRankLength {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        if file != 8 {
            return Err(FenError::BadRankLength {
                rank: rank_idx,
                files: file,
            });
        }
    }
    Ok(())
}

fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Square, FenError> {
    if field == "-" {
        return Ok(Square::NONE);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq: Square = field.parse().map_err(|_| invalid())?;
    // the target lies behind a pawn of the side that just moved
    let expected_rank = match side_to_move {
        Color::White => Square::from_algebraic("a6").rank,
        Color::Black => Square::from_algebraic("a3").rank,
    };
    if sq.rank != expected_rank {
        return Err(invalid());
    }
    Ok(sq)
}

impl Board {
    /// Parse a position from FEN.
    ///
    /// All six fields are required. The fingerprint log starts with the
    /// parsed position and the undo stack is empty.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }

        let mut board = Board::empty();
        parse_placement(fields[0], &mut board)?;

        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling =
            CastlingRights::from_fen(fields[2]).map_err(|_| FenError::InvalidCastling {
                found: fields[2].to_string(),
            })?;

        board.en_passant = parse_en_passant(fields[3], board.side_to_move)?;

        board.halfmove_clock = fields[4]
            .parse()
            .map_err(|_| FenError::InvalidHalfmoveClock {
                found: fields[4].to_string(),
            })?;
        board.fullmove_number = fields[5]
            .parse()
            .map_err(|_| FenError::InvalidFullmoveNumber {
                found: fields[5].to_string(),
            })?;

        board.record_position();
        Ok(board)
    }

    /// Replace this board with the position in `fen`.
    ///
    /// On error the board is left exactly as it was.
    pub fn load_from_fen(&mut self, fen: &str) -> Result<(), FenError> {
        match Board::from_fen(fen) {
            Ok(board) => {
                *self = board;
                Ok(())
            }
            Err(err) => {
                debug!("rejected FEN {fen:?}: {err}");
                Err(err)
            }
        }
    }

    fn placement_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..8i8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8i8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// The FEN's first four fields: placement, side, castling, en passant.
    /// Positions equal under the repetition rule share a key.
    #[must_use]
    pub fn position_key(&self) -> String {
        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        format!(
            "{} {} {} {}",
            self.placement_fen(),
            active,
            self.castling.to_fen(),
            self.en_passant
        )
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.position_key(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Resolve a UCI move string ("e2e4", "e7e8q") against the legal moves
    /// of the side to move.
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if kind != PieceKind::Pawn && kind != PieceKind::King => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let illegal = || MoveParseError::IllegalMove {
            notation: uci.to_string(),
        };
        match self.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {}
            _ => return Err(illegal()),
        }
        self.piece_moves(from)
            .into_iter()
            .find(|mv| mv.to == to && mv.promotion == promotion)
            .ok_or_else(illegal)
    }

    /// Parse a UCI move and play it.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.apply_move(&mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
