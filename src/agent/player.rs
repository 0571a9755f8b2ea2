//! Player trait and associated types for Othello game agents.
//!
//! A player is anything that can be asked for a move on a given board: the
//! negamax engine, a random baseline, or a scripted opponent in tests. Each
//! player is bound to one side for its whole lifetime, mirroring how a
//! tournament host constructs a bot for a fixed colour and destroys it after
//! the game.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. The engine searches to a fixed depth and returns;
//! the orchestrator simply waits for the result.

use crate::game_repr::{Board, Move, Side};

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning side, `None` meaning a draw
    pub fn from_winner(winner: Option<Side>) -> Self {
        match winner {
            Some(Side::Black) => GameResult::BlackWins,
            Some(Side::White) => GameResult::WhiteWins,
            None => GameResult::Draw,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::BlackWins => Some(Side::Black),
            GameResult::WhiteWins => Some(Side::White),
            GameResult::Draw => None,
        }
    }
}

/// Trait for entities that can provide Othello moves.
///
/// Only `get_move()` and `side()` must be implemented.
pub trait Player {
    /// Request the next move for `self.side()` on `board`.
    ///
    /// The orchestrator only asks when the side has at least one legal move.
    /// Returns `None` if the player cannot or will not move; the orchestrator
    /// treats that as an error when a legal move existed.
    fn get_move(&mut self, board: &Board) -> Option<Move>;

    /// The side this player was constructed for
    fn side(&self) -> Side;

    /// Notify this player that the opponent made a move (`None` = pass).
    fn opponent_moved(&mut self, _mv: Option<Move>) {}

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
