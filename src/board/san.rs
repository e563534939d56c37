//! Standard Algebraic Notation (SAN) output.
//!
//! Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#".

use super::{Board, Move, MoveKind, PieceKind};

impl Board {
    /// Format a legal move of the side to move in SAN.
    ///
    /// Moves the board would reject are formatted from the squares alone,
    /// without a check suffix.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        let Some(piece) = self.piece_at(mv.from) else {
            return mv.to_uci();
        };

        let mut san = String::new();
        if mv.kind == MoveKind::Castle {
            san.push_str(if mv.to.file == 6 { "O-O" } else { "O-O-O" });
        } else {
            let capture = mv.is_capture() || self.piece_at(mv.to).is_some();
            if piece.kind == PieceKind::Pawn {
                if capture {
                    san.push(file_char(mv.from.file));
                }
            } else {
                san.push(piece.kind.to_char().to_ascii_uppercase());
                let (needs_file, needs_rank) = self.needs_disambiguation(mv);
                if needs_file {
                    san.push(file_char(mv.from.file));
                }
                if needs_rank {
                    san.push(rank_char(mv.from.rank));
                }
            }
            if capture {
                san.push('x');
            }
            san.push_str(&mv.to.to_algebraic());
            if let Some(promo) = mv.promotion {
                san.push('=');
                san.push(promo.to_char().to_ascii_uppercase());
            }
        }

        if let Some(legal) = self.find_legal(mv) {
            let mut after = self.clone();
            after.apply_move(&legal);
            let defender = after.side_to_move();
            if after.is_checkmate(defender) {
                san.push('#');
            } else if after.is_in_check(defender) {
                san.push('+');
            }
        }
        san
    }

    /// Whether the origin file and/or rank must be spelled out because
    /// another piece of the same kind can reach the same square.
    fn needs_disambiguation(&self, mv: &Move) -> (bool, bool) {
        let Some(piece) = self.piece_at(mv.from) else {
            return (false, false);
        };
        let rivals: Vec<Move> = self
            .legal_moves(piece.color)
            .into_iter()
            .filter(|m| m.to == mv.to && m.from != mv.from && self.piece_at(m.from) == Some(piece))
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }
        let same_file = rivals.iter().any(|m| m.from.file == mv.from.file);
        let same_rank = rivals.iter().any(|m| m.from.rank == mv.from.rank);
        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}

fn file_char(file: i8) -> char {
    (b'a' + file as u8) as char
}

fn rank_char(rank: i8) -> char {
    (b'8' - rank as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    fn san_of(fen: &str, uci: &str) -> String {
        let board = Board::from_fen(fen).unwrap();
        let mv = board.parse_move(uci).unwrap();
        board.move_to_san(&mv)
    }

    #[test]
    fn test_pawn_and_piece_moves() {
        let start = Board::new();
        assert_eq!(start.move_to_san(&start.parse_move("e2e4").unwrap()), "e4");
        assert_eq!(start.move_to_san(&start.parse_move("g1f3").unwrap()), "Nf3");
    }

    #[test]
    fn test_castling() {
        let fen = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";
        assert_eq!(san_of(fen, "e1g1"), "O-O");
        assert_eq!(san_of(fen, "e1c1"), "O-O-O");
    }

    #[test]
    fn test_captures() {
        let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2";
        assert_eq!(san_of(fen, "e4d5"), "exd5");
        assert_eq!(san_of("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2", "e5d6"), "exd6");
    }

    #[test]
    fn test_promotion() {
        assert_eq!(san_of("8/P7/8/8/8/8/8/K1k5 w - - 0 1", "a7a8q"), "a8=Q");
    }

    #[test]
    fn test_disambiguation() {
        let fen = "1k6/8/8/8/R6R/8/8/4K3 w - - 0 1";
        assert_eq!(san_of(fen, "a4d4"), "Rad4");
        assert_eq!(san_of(fen, "h4d4"), "Rhd4");
        let stacked = "3k4/8/8/R7/8/R7/8/4K3 w - - 0 1";
        assert_eq!(san_of(stacked, "a5a4"), "R5a4");
    }

    #[test]
    fn test_check_and_mate_suffixes() {
        assert_eq!(san_of("4k3/8/8/8/8/8/8/4K2R w K - 0 1", "h1h8"), "Rh8+");
        let fools = "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2";
        assert_eq!(san_of(fools, "d8h4"), "Qh4#");
    }
}
