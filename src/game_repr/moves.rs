use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/*-------ARCHITECTURE--------*/

// | 2 bits  | 3 bits | 3 bits |
// | unused  |  Row   |  Col   |
// |         8 bits            |

/// A stone placement on one of the 64 squares.
///
/// Passing is not a move: a side without legal moves simply has nothing to
/// choose from and the host skips its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    square: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "move ({}, {}) is off the board", row, col);
        Self { square: (row << 3) | col }
    }

    pub fn from_square(square: usize) -> Self {
        debug_assert!(square < 64, "square {} is off the board", square);
        Self { square: square as u8 }
    }

    #[inline(always)]
    pub fn square(&self) -> usize {
        self.square as usize
    }

    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.square >> 3
    }

    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.square & 0x7
    }

    /// Single-bit bitboard for this square
    #[inline(always)]
    pub fn bit(&self) -> u64 {
        1u64 << self.square
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}

impl FromStr for Move {
    type Err = GameError;

    /// Parse algebraic notation: column letter then row digit ("d3")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(GameError::InvalidSquare(s.to_string()));
        }

        let col = bytes[0].to_ascii_lowercase();
        let row = bytes[1];
        if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&row) {
            return Err(GameError::InvalidSquare(s.to_string()));
        }

        Ok(Move::new(row - b'1', col - b'a'))
    }
}
