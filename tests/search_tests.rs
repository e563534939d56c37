//! Engine behaviour on small positions.

use std::time::{Duration, Instant};

use chess_core::board::{Board, Color, Move};
use chess_core::engine::{Difficulty, Engine, EngineConfig, SearchLimits, TimeControl};

fn best_uci(fen: &str, depth: u32) -> String {
    let board = Board::from_fen(fen).expect("bad fen");
    Engine::default()
        .search(&board, SearchLimits::depth(depth))
        .best_move
        .to_uci()
}

#[test]
fn finds_mate_in_one_back_rank() {
    assert_eq!(best_uci("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 4), "e1e8");
}

#[test]
fn finds_mate_in_one_for_black() {
    let board = Board::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let result = Engine::default().search(&board, SearchLimits::depth(4));
    assert_eq!(result.best_move.to_uci(), "a8a1");
    assert_eq!(result.mate_in(), Some(1));
    assert!(result.score > 0);
}

#[test]
fn captures_free_piece() {
    assert_eq!(best_uci("4k3/8/2b5/8/8/8/8/2R1K3 w - - 0 1", 3), "c1c6");
}

#[test]
fn avoids_hanging_queen() {
    // Qxb7 loses the queen to the bishop on c8
    let uci = best_uci(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 2 3",
        3,
    );
    assert_ne!(uci, "f3b7");
    assert_ne!(uci, "f3f7");
}

#[test]
fn score_is_side_to_move_relative() {
    // Black is a queen up
    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/4K3 b - - 0 1").unwrap();
    let result = Engine::default().search(&board, SearchLimits::depth(2));
    assert!(result.score > 500, "score {}", result.score);

    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/4K3 w - - 0 1").unwrap();
    let result = Engine::default().search(&board, SearchLimits::depth(2));
    assert!(result.score < -500, "score {}", result.score);
}

#[test]
fn no_move_when_checkmated() {
    let board =
        Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    let result = Engine::default().search(&board, SearchLimits::depth(4));
    assert_eq!(result.best_move, Move::NONE);
    assert_eq!(result.depth, 0);
}

#[test]
fn no_move_when_stalemated() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let result = Engine::default().search(&board, SearchLimits::depth(4));
    assert_eq!(result.best_move, Move::NONE);
    assert_eq!(result.score, 0);
}

#[test]
fn search_does_not_touch_board() {
    let board = Board::new();
    let before = board.to_fen();
    Engine::default().search(&board, SearchLimits::depth(3));
    assert_eq!(board.to_fen(), before);
}

#[test]
fn best_move_is_legal() {
    let board = Board::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    let result = Engine::default().search(&board, SearchLimits::depth(3));
    assert!(board.is_legal(&result.best_move));
    assert_eq!(result.depth, 3);
    assert!(result.nodes > 0);
}

#[test]
fn search_is_deterministic() {
    let board = Board::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
        .unwrap();
    let first = Engine::default().search(&board, SearchLimits::depth(3));
    let second = Engine::default().search(&board, SearchLimits::depth(3));
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);
}

#[test]
fn reports_every_iteration() {
    let board = Board::new();
    let mut depths = Vec::new();
    let result = Engine::default().search_with_info(&board, SearchLimits::depth(3), |info| {
        depths.push(info.depth);
    });
    assert_eq!(depths, vec![1, 2, 3]);
    assert_eq!(result.depth, 3);
}

#[test]
fn time_limit_is_respected() {
    let board = Board::new();
    let mut engine = Engine::default();
    let start = Instant::now();
    let result = engine.search(&board, SearchLimits::timed(12, Duration::from_millis(100)));
    assert!(start.elapsed() < Duration::from_secs(3), "took {:?}", start.elapsed());
    assert!(board.is_legal(&result.best_move));
    assert!(result.depth < 12);
}

#[test]
fn depth_capped_by_config() {
    let config = EngineConfig {
        max_depth: 2,
        ..EngineConfig::default()
    };
    let mut engine = Engine::new(config);
    let result = engine.search(&Board::new(), SearchLimits::depth(8));
    assert_eq!(result.depth, 2);
}

#[test]
fn find_best_move_with_difficulty() {
    let board = Board::new();
    let mut engine = Engine::default();
    let clock = TimeControl::from_millis(60_000, 0);
    let mv = engine.find_best_move(&board, Difficulty::Beginner, &clock);
    assert!(board.is_legal(&mv));
    assert_eq!(board.side_to_move(), Color::White);
}

#[test]
fn transposition_table_fills() {
    let mut engine = Engine::new(EngineConfig {
        tt_size_mb: 1,
        ..EngineConfig::default()
    });
    assert_eq!(engine.hashfull(), 0);
    engine.search(&Board::new(), SearchLimits::depth(4));
    assert!(engine.hashfull() > 0);
    engine.new_game();
    assert_eq!(engine.hashfull(), 0);
}
