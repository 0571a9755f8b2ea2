// Root move selection
//
// Every legal root move is applied to a copy of the board and scored with a
// full-window negamax of the remaining depth from the opponent's side. The
// move with the strictly greatest negated score wins; ties keep the move
// found first in enumeration order.

use super::config::EngineConfig;
use super::evaluation::{Score, INF};
use super::negamax::{negamax, SearchContext};
use crate::game_repr::{BoardOracle, Move, Side};

/// Result of a root search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move had no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` from the mover's perspective. Zero when the
    /// single-move shortcut skipped the search.
    pub score: Score,
    /// Plies searched, root ply included
    pub depth: u8,
    pub nodes_searched: u64,
}

impl SearchResult {
    /// Create a new search result with no move found
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes_searched: 0,
        }
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Search every root move of `side` to the configured depth
///
/// # Arguments
/// * `board` - Current position
/// * `side` - Side to move; expected to have at least one legal move
/// * `config` - Depth, evaluation weights and blocked-side policy
///
/// # Returns
/// SearchResult with the chosen move and search statistics. With exactly one
/// legal move it is returned without searching.
pub fn search_root<B: BoardOracle>(board: &B, side: Side, config: &EngineConfig) -> SearchResult {
    let mut result = SearchResult::new();
    let moves = board.legal_moves(side);

    match moves.len() {
        0 => {
            log::warn!("move requested for {} with no legal moves", side);
            return result;
        }
        1 => {
            result.best_move = Some(moves[0]);
            result.depth = 1;
            log::debug!("{}: only move {}", side, moves[0]);
            return result;
        }
        _ => {}
    }

    let depth = config.depth();
    let mut ctx = SearchContext::new(config);
    let mut best_score = -INF;
    let mut best_move = moves[0];

    for &mv in &moves {
        let child = board.apply_move(side, mv);
        let score = -negamax(&child, depth - 1, -INF, INF, side.opposite(), &mut ctx);

        log::trace!("{}: root move {} scored {}", side, mv, score);

        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    result.best_move = Some(best_move);
    result.score = best_score;
    result.depth = depth;
    result.nodes_searched = ctx.nodes;

    log::debug!(
        "{}: selected {} (score {}, depth {}, {} nodes)",
        side,
        best_move,
        best_score,
        depth,
        ctx.nodes
    );

    result
}

/// Pick the best move for `side`.
///
/// Stateless and deterministic: the same board, side and configuration
/// always produce the same move. Returns `None` if `side` cannot move.
pub fn select_move<B: BoardOracle>(board: &B, side: Side, config: &EngineConfig) -> Option<Move> {
    search_root(board, side, config).best_move
}
