pub mod player;
pub use player::*;

pub mod random_player;
pub use random_player::RandomPlayer;

pub mod ai;
pub use ai::{Difficulty, EngineConfig, NegamaxPlayer, SearchResult};
