//! Error types for the Othello engine.

use crate::game_repr::{Move, Side};
use thiserror::Error;

/// Errors raised by the checked board surfaces and the game loop.
///
/// The search core never produces these: evaluation and negamax are total
/// over well-formed boards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("illegal move {mv}: no opponent stones would be flipped")]
    InvalidMove { mv: Move },

    #[error("illegal move {mv}: square is already occupied")]
    SquareOccupied { mv: Move },

    #[error("invalid square '{0}' (expected a column a-h followed by a row 1-8)")]
    InvalidSquare(String),

    #[error("board string has the wrong size: expected {expected} cells, got {got}")]
    BoardParse { expected: usize, got: usize },

    #[error("invalid cell character '{0}' (expected X/B, O/W, - or .)")]
    InvalidCell(char),

    #[error("{side:?} has a legal move but the player returned none")]
    NoMoveReturned { side: Side },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
