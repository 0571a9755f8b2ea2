//! Fixed-depth negamax Othello engine.
//!
//! - [`game_repr`]: bitboard board model, move generation and flipping
//! - [`agent::ai`]: static evaluation, negamax with alpha-beta, root move selection
//! - [`agent`]: the `Player` abstraction and concrete players
//! - [`orchestrator`]: a headless host that plays a full game between two players

pub mod agent;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use error::{GameError, Result};
