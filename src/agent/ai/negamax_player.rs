//! NegamaxPlayer - Othello AI using Negamax with Alpha-Beta pruning
//!
//! The player is bound to one side at construction and owns an
//! [`EngineConfig`]. Each call to `get_move` runs a fresh, stateless root
//! search; nothing carries over between moves.
//!
//! # Difficulty Levels
//!
//! - **Easy**: Depth 2
//! - **Medium**: Depth 4
//! - **Hard**: Depth 6 (default)
//! - **Expert**: Depth 8
//!
//! # Examples
//!
//! ```
//! use othello_engine::agent::ai::{Difficulty, NegamaxPlayer};
//! use othello_engine::agent::Player;
//! use othello_engine::game_repr::{Board, Side};
//!
//! let mut ai = NegamaxPlayer::with_difficulty(Side::Black, Difficulty::Easy);
//! let mv = ai.get_move(&Board::new()).unwrap();
//! assert!(Board::new().is_legal(Side::Black, mv));
//! ```

use super::config::EngineConfig;
use super::search::search_root;
use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Board, Move, Side};

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
    Expert,
}

impl Difficulty {
    /// Total lookahead in plies, root ply included
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn config(&self) -> EngineConfig {
        EngineConfig::new(self.max_depth())
    }
}

/// AI player that selects moves with a fixed-depth negamax search
pub struct NegamaxPlayer {
    side: Side,
    config: EngineConfig,
    name: String,
}

impl NegamaxPlayer {
    pub fn new(side: Side, config: EngineConfig, name: String) -> Self {
        Self { side, config, name }
    }

    /// Player named "AI (depth N)" after its configured depth
    pub fn with_config(side: Side, config: EngineConfig) -> Self {
        let name = format!("AI (depth {})", config.depth());
        Self::new(side, config, name)
    }

    /// Player named "AI ({difficulty})"
    pub fn with_difficulty(side: Side, difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(side, difficulty.config(), name)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Player for NegamaxPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Move> {
        let result = search_root(board, self.side, &self.config);

        log::info!(
            "[{}] {} plays {} (score {}, {} nodes)",
            self.name,
            self.side,
            result.best_move.map(|m| m.to_string()).unwrap_or_else(|| "nothing".to_string()),
            result.score,
            result.nodes_searched
        );

        result.best_move
    }

    fn side(&self) -> Side {
        self.side
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game over: {:?}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
