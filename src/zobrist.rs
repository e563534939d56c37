//! Zobrist hashing for chess positions.
//!
//! A key set is a table of random 64-bit numbers drawn from a seeded
//! generator; a position's fingerprint XORs together the keys of its features.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color};

/// Seed of the process-wide key set behind [`Board::hash`].
pub const DEFAULT_ZOBRIST_SEED: u64 = 1_234_567_890;

/// Random keys for every hashed feature of a position.
#[derive(Clone, Debug)]
pub struct ZobristKeys {
    // piece_keys[color][kind][square_index]
    piece_keys: [[[u64; 64]; 6]; 2],
    white_to_move_key: u64,
    // indexed by the raw 4-bit castling mask
    castling_keys: [u64; 16],
    // indexed by file; only the file of the target matters
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    /// Draw a key set from `seed`. Equal seeds give equal keys.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; 8];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let white_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            white_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    /// Fingerprint of placement, side to move, castling rights and
    /// en-passant file. Move counters are ignored.
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        let mut hash = board.pieces().fold(0u64, |acc, (sq, piece)| {
            acc ^ self.piece_keys[piece.color.index()][piece.kind.index()][sq.index()]
        });

        if board.side_to_move() == Color::White {
            hash ^= self.white_to_move_key;
        }

        hash ^= self.castling_keys[board.castling_rights().as_u8() as usize & 0xF];

        let ep = board.en_passant_target();
        if ep.is_valid() {
            hash ^= self.en_passant_keys[ep.file as usize];
        }

        hash
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        ZobristKeys::new(DEFAULT_ZOBRIST_SEED)
    }
}

/// Key set used by every board's fingerprint log.
pub(crate) static DEFAULT_KEYS: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::default);
