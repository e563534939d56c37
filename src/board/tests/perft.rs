//! Perft node counts for move generator correctness.

use crate::board::{Board, START_FEN};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: START_FEN,
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264)],
    },
    TestPosition {
        name: "Position 5",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1486)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568)],
    },
];

#[test]
fn test_all_perft_positions() {
    for position in TEST_POSITIONS {
        let board = Board::from_fen(position.fen).unwrap();
        for &(depth, expected) in position.depths {
            assert_eq!(
                board.perft(depth),
                expected,
                "perft failed for '{}' at depth {}",
                position.name,
                depth
            );
        }
    }
}

#[test]
fn test_perft_leaves_board_untouched() {
    let board = Board::from_fen(TEST_POSITIONS[1].fen).unwrap();
    let before = board.to_fen();
    board.perft(2);
    assert_eq!(board.to_fen(), before);
    assert_eq!(board.undo_depth(), 0);
}

#[test]
fn test_perft_divide_sums_to_perft() {
    let board = Board::new();
    let divide = board.perft_divide(3);
    assert_eq!(divide.len(), 20);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8902);
}

#[test]
fn test_perft_depth_zero() {
    assert_eq!(Board::new().perft(0), 1);
    assert!(Board::new().perft_divide(0).is_empty());
}
