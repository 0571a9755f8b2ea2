use super::bitboards::{flip_mask, legal_move_mask, pop_lsb};
use super::oracle::{BoardOracle, MoveList};
use super::{Cell, Move, Side};
use crate::error::{GameError, Result};
use std::fmt;

/// An 8x8 Othello board stored as one bitboard per side.
///
/// Boards are plain `Copy` values: applying a move returns a new board and
/// leaves the original untouched, so sibling search branches never alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening position: d4/e5 White, e4/d5 Black
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(3, 3, Cell::White);
        board.set(3, 4, Cell::Black);
        board.set(4, 3, Cell::Black);
        board.set(4, 4, Cell::White);
        board
    }

    pub fn empty() -> Self {
        Self { black: 0, white: 0 }
    }

    /// Build a board directly from bitboards. Overlapping bits are a caller bug.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "a square cannot hold two stones");
        Self { black, white }
    }

    /// Parse 64 cells in row-major order, whitespace ignored.
    ///
    /// `X`/`B` mark Black, `O`/`W` mark White, `-`/`.` mark empty squares.
    ///
    /// ```
    /// use othello_engine::game_repr::{Board, Side};
    ///
    /// let board = Board::from_rows(
    ///     "--------
    ///      --------
    ///      --------
    ///      ---OX---
    ///      ---XO---
    ///      --------
    ///      --------
    ///      --------",
    /// )
    /// .unwrap();
    /// assert_eq!(board, Board::new());
    /// assert_eq!(board.legal_moves(Side::Black).len(), 4);
    /// ```
    pub fn from_rows(s: &str) -> Result<Self> {
        let mut board = Self::empty();
        let mut count = 0usize;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_char(c).ok_or(GameError::InvalidCell(c))?;
            if count < 64 {
                board.set((count / 8) as u8, (count % 8) as u8, cell);
            }
            count += 1;
        }

        if count != 64 {
            return Err(GameError::BoardParse { expected: 64, got: count });
        }

        Ok(board)
    }

    /// Place or clear a stone without any flipping
    pub fn set(&mut self, row: u8, col: u8, cell: Cell) {
        let bit = Move::new(row, col).bit();
        self.black &= !bit;
        self.white &= !bit;
        match cell {
            Cell::Black => self.black |= bit,
            Cell::White => self.white |= bit,
            Cell::Empty => {}
        }
    }

    /// Bitboard of `side`'s stones
    #[inline(always)]
    pub fn stones(&self, side: Side) -> u64 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    #[inline(always)]
    pub fn occupied(&self) -> u64 {
        self.black | self.white
    }

    pub fn empty_count(&self) -> u32 {
        64 - self.occupied().count_ones()
    }

    /// Bitboard of squares where `side` may play
    #[inline]
    pub fn legal_move_bits(&self, side: Side) -> u64 {
        legal_move_mask(self.stones(side), self.stones(side.opposite()))
    }

    /// Legal moves for `side` in ascending square order (a1, b1, ..., h8)
    pub fn legal_moves(&self, side: Side) -> MoveList {
        let mut bits = self.legal_move_bits(side);
        let mut moves = MoveList::new();
        while bits != 0 {
            moves.push(Move::from_square(pop_lsb(&mut bits)));
        }
        moves
    }

    pub fn is_legal(&self, side: Side, mv: Move) -> bool {
        self.legal_move_bits(side) & mv.bit() != 0
    }

    pub fn has_legal_move(&self, side: Side) -> bool {
        self.legal_move_bits(side) != 0
    }

    /// Play a legal move and return the resulting board.
    ///
    /// The move must be legal for `side`; use [`Board::try_apply_move`] for
    /// moves from untrusted sources.
    pub fn apply_move(&self, side: Side, mv: Move) -> Board {
        debug_assert!(self.is_legal(side, mv), "{} is not legal for {}", mv, side);

        let own = self.stones(side);
        let opp = self.stones(side.opposite());
        let flips = flip_mask(own, opp, mv.square());

        let own = own | flips | mv.bit();
        let opp = opp & !flips;

        match side {
            Side::Black => Board { black: own, white: opp },
            Side::White => Board { black: opp, white: own },
        }
    }

    /// Checked variant of [`Board::apply_move`]
    pub fn try_apply_move(&self, side: Side, mv: Move) -> Result<Board> {
        if self.occupied() & mv.bit() != 0 {
            return Err(GameError::SquareOccupied { mv });
        }

        let flips = flip_mask(self.stones(side), self.stones(side.opposite()), mv.square());
        if flips == 0 {
            return Err(GameError::InvalidMove { mv });
        }

        Ok(self.apply_move(side, mv))
    }

    pub fn piece_count(&self, side: Side) -> u32 {
        self.stones(side).count_ones()
    }

    pub fn cell_owner(&self, row: u8, col: u8) -> Cell {
        let bit = Move::new(row, col).bit();
        if self.black & bit != 0 {
            Cell::Black
        } else if self.white & bit != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// The game ends when neither side can place a stone
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Side::Black) && !self.has_legal_move(Side::White)
    }

    /// Side with more stones, `None` on equal counts
    pub fn winner(&self) -> Option<Side> {
        let black = self.piece_count(Side::Black);
        let white = self.piece_count(Side::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Side::Black),
            std::cmp::Ordering::Less => Some(Side::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Count leaf nodes of the game tree to `depth` plies.
    ///
    /// A forced pass consumes one ply and a finished game is a leaf.
    pub fn perft(&self, side: Side, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(side);
        if moves.is_empty() {
            if !self.has_legal_move(side.opposite()) {
                return 1;
            }
            return self.perft(side.opposite(), depth - 1);
        }

        // Bulk counting at the last ply
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| self.apply_move(side, mv).perft(side.opposite(), depth - 1))
            .sum()
    }
}

impl BoardOracle for Board {
    fn legal_moves(&self, side: Side) -> MoveList {
        Board::legal_moves(self, side)
    }

    fn apply_move(&self, side: Side, mv: Move) -> Self {
        Board::apply_move(self, side, mv)
    }

    fn piece_count(&self, side: Side) -> u32 {
        Board::piece_count(self, side)
    }

    fn cell_owner(&self, row: u8, col: u8) -> Cell {
        Board::cell_owner(self, row, col)
    }

    fn mobility(&self, side: Side) -> u32 {
        self.legal_move_bits(side).count_ones()
    }

    fn has_legal_move(&self, side: Side) -> bool {
        Board::has_legal_move(self, side)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8u8 {
            write!(f, "{}", row + 1)?;
            for col in 0..8u8 {
                write!(f, " {}", self.cell_owner(row, col).to_char())?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "X: {}  O: {}",
            self.piece_count(Side::Black),
            self.piece_count(Side::White)
        )
    }
}
