// AI Agent - Negamax with Alpha-Beta Pruning
//
// A classical fixed-depth Othello engine.
//
// Key features:
// - Deterministic (same position always gives same move)
// - Full-width negamax search with alpha-beta pruning
// - Static evaluation from material, corner/edge control and mobility
// - All tuning lives in `EngineConfig`, passed in rather than compiled in

mod config;
mod evaluation;
mod negamax;
mod negamax_player;
mod search;

#[cfg(test)]
mod tests;

pub use config::{EngineConfig, EvalWeights, NoMovePolicy, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};
pub use evaluation::{evaluate, evaluate_terms, EvalTerms, Region, Score, INF};
pub use negamax::{negamax, SearchContext};
pub use negamax_player::{Difficulty, NegamaxPlayer};
pub use search::{search_root, select_move, SearchResult};
