//! Bitboard primitives for Othello move generation.
//!
//! A board side is a single `u64` with bit `row * 8 + col` set for every
//! stone. Legal moves and flips are computed with directional shifts, masking
//! out the file that would wrap around the board edge.

pub mod tables;
pub use tables::*;

/// Number of shift directions on the board
pub const DIRECTION_COUNT: usize = 8;

/// Shift every stone one step in `dir` (0..8), dropping stones that leave the board.
///
/// Directions: 0=E, 1=W, 2=S, 3=N, 4=SE, 5=SW, 6=NE, 7=NW where S increases
/// the row index.
#[inline(always)]
pub fn shift(bb: u64, dir: usize) -> u64 {
    match dir {
        0 => (bb << 1) & NOT_A_FILE,
        1 => (bb >> 1) & NOT_H_FILE,
        2 => bb << 8,
        3 => bb >> 8,
        4 => (bb << 9) & NOT_A_FILE,
        5 => (bb << 7) & NOT_H_FILE,
        6 => (bb >> 7) & NOT_A_FILE,
        7 => (bb >> 9) & NOT_H_FILE,
        _ => 0,
    }
}

/// All empty squares where the owner of `own` can legally place a stone.
///
/// A run of opponent stones is at most six long, so five extra fill steps
/// after the first shift cover every bracket.
pub fn legal_move_mask(own: u64, opp: u64) -> u64 {
    let empty = !(own | opp);
    let mut moves = 0u64;

    for dir in 0..DIRECTION_COUNT {
        let mut run = shift(own, dir) & opp;
        for _ in 0..5 {
            run |= shift(run, dir) & opp;
        }
        moves |= shift(run, dir) & empty;
    }

    moves
}

/// Opponent stones flipped by placing a stone on `square`.
///
/// Returns 0 when the placement brackets nothing.
pub fn flip_mask(own: u64, opp: u64, square: usize) -> u64 {
    let placed = 1u64 << square;
    let mut flips = 0u64;

    for dir in 0..DIRECTION_COUNT {
        let mut captured = 0u64;
        let mut cursor = shift(placed, dir);

        while cursor & opp != 0 {
            captured |= cursor;
            cursor = shift(cursor, dir);
        }

        if cursor & own != 0 {
            flips |= captured;
        }
    }

    flips
}

/// Pop the least significant bit from a bitboard and return its index
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> usize {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    sq
}
