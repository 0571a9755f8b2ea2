//! The board interface consumed by evaluation and search.
//!
//! Search never looks inside a board: it only enumerates moves, applies them
//! to produce fresh boards, counts stones and reads cell owners. Any type
//! providing those operations can be searched, which is how the tests
//! instrument the search with counting wrappers.

use super::{Cell, Move, Side};
use smallvec::SmallVec;

/// Legal moves in enumeration order. Othello positions rarely exceed 32.
pub type MoveList = SmallVec<[Move; 32]>;

pub trait BoardOracle: Clone {
    /// Legal moves for `side`, in a stable order. May be empty.
    fn legal_moves(&self, side: Side) -> MoveList;

    /// A new board with `mv` played by `side`. Never mutates `self`.
    ///
    /// `mv` must be one of `legal_moves(side)`.
    fn apply_move(&self, side: Side, mv: Move) -> Self;

    fn piece_count(&self, side: Side) -> u32;

    fn cell_owner(&self, row: u8, col: u8) -> Cell;

    /// Number of legal moves for `side`
    fn mobility(&self, side: Side) -> u32 {
        self.legal_moves(side).len() as u32
    }

    fn has_legal_move(&self, side: Side) -> bool {
        self.mobility(side) > 0
    }
}
