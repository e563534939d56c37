//! Special moves and unusual positions.

use super::{find_move, play, sq};
use crate::board::{Board, Color, GameResult, MoveKind, Piece, PieceKind};

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(board.is_checkmate(Color::White));
    assert!(board.legal_moves(Color::White).is_empty());
    assert_eq!(board.game_result(), GameResult::CheckmateBlack);
    assert_eq!(board.game_result().winner(), Some(Color::Black));
}

#[test]
fn test_stalemate_position() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!board.is_checkmate(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
}

#[test]
fn test_all_four_promotions() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let promos: Vec<_> = board
        .piece_moves(sq("a7"))
        .into_iter()
        .filter_map(|m| m.promotion)
        .collect();
    assert_eq!(promos.len(), 4);
    for kind in [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight] {
        assert!(promos.contains(&kind), "{kind:?} missing");
    }
}

#[test]
fn test_underpromotion_to_knight() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let mv = find_move(&board, "a7", "a8", Some(PieceKind::Knight));
    assert_eq!(mv.kind, MoveKind::Promotion);
    assert!(board.make_move(&mv));
    assert_eq!(
        board.piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Knight, Color::White))
    );
    assert!(board.is_empty(sq("a7")));
}

#[test]
fn test_black_promotion() {
    let mut board = Board::from_fen("k7/8/8/8/8/8/6p1/K7 b - - 0 1").unwrap();
    play(&mut board, &["g2g1q"]);
    assert_eq!(
        board.piece_at(sq("g1")),
        Some(Piece::new(PieceKind::Queen, Color::Black))
    );
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let mv = find_move(&board, "e5", "d6", None);
    assert!(mv.is_en_passant());
    assert_eq!(mv.captured, Some(Piece::new(PieceKind::Pawn, Color::Black)));
    assert!(board.make_move(&mv));
    assert!(board.is_empty(sq("d5")));
    assert_eq!(
        board.piece_at(sq("d6")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
}

#[test]
fn test_en_passant_expires() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5", "g1f3", "a6a5"]);
    assert!(board
        .piece_moves(sq("e5"))
        .iter()
        .all(|m| !m.is_en_passant()));
}

#[test]
fn test_en_passant_pinned_pawn() {
    // capturing would expose the king along the fifth rank
    let board = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1").unwrap();
    assert!(board
        .piece_moves(sq("e5"))
        .iter()
        .all(|m| !m.is_en_passant()));
}

#[test]
fn test_castling_both_sides() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castles: Vec<_> = board
        .piece_moves(sq("e1"))
        .into_iter()
        .filter(|m| m.is_castle())
        .map(|m| m.to)
        .collect();
    assert_eq!(castles.len(), 2);
    assert!(castles.contains(&sq("g1")));
    assert!(castles.contains(&sq("c1")));
}

#[test]
fn test_castling_moves_rook() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut board, &["e1g1", "e8c8"]);
    assert_eq!(board.piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(board.is_empty(sq("h1")));
    assert_eq!(board.piece_at(sq("d8")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(board.is_empty(sq("a8")));
    assert!(board.castling_rights().is_empty());
}

#[test]
fn test_no_castling_through_check() {
    // the black rook covers f1
    let board = Board::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let castles: Vec<_> = board
        .piece_moves(sq("e1"))
        .into_iter()
        .filter(|m| m.is_castle())
        .map(|m| m.to)
        .collect();
    assert_eq!(castles, vec![sq("c1")]);
}

#[test]
fn test_no_castling_out_of_check() {
    let board = Board::from_fen("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(board.is_in_check(Color::White));
    assert!(board.piece_moves(sq("e1")).iter().all(|m| !m.is_castle()));
}

#[test]
fn test_queen_side_b_file_may_be_attacked() {
    // b1 is attacked but the king never crosses it
    let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    assert!(board
        .piece_moves(sq("e1"))
        .iter()
        .any(|m| m.is_castle() && m.to == sq("c1")));
}

#[test]
fn test_queen_side_blocked_on_b_file() {
    let board = Board::from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").unwrap();
    assert!(board.piece_moves(sq("e1")).iter().all(|m| !m.is_castle()));
}

#[test]
fn test_pinned_piece_cannot_move() {
    let board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    assert!(board.piece_moves(sq("e2")).is_empty());
}

#[test]
fn test_piece_moves_empty_square() {
    assert!(Board::new().piece_moves(sq("e4")).is_empty());
}

#[test]
fn test_piece_moves_either_color() {
    let board = Board::new();
    assert_eq!(board.piece_moves(sq("g8")).len(), 2);
    assert_eq!(board.piece_moves(sq("e2")).len(), 2);
}

#[test]
fn test_is_legal() {
    let board = Board::new();
    let e4 = find_move(&board, "e2", "e4", None);
    assert!(board.is_legal(&e4));
    let mut bogus = e4;
    bogus.to = sq("e5");
    assert!(!board.is_legal(&bogus));
}

#[test]
fn test_start_position() {
    let board = Board::new();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert!(!board.is_in_check(Color::White));
    assert_eq!(board.game_result(), GameResult::Ongoing);
}

#[test]
fn test_fools_mate_from_fen() {
    let board =
        Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/5PPq/8/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert_eq!(board.game_result(), GameResult::CheckmateBlack);
    assert!(board.game_result().is_terminal());
}
