// Negamax Search with Alpha-Beta Pruning
//
// Negamax is a variant of the minimax algorithm that relies on the zero-sum
// property of the game: max(a, b) = -min(-a, -b). Each call returns the score
// from the perspective of the side to move and the parent negates it.
//
// Moves are searched in the order the board yields them. There is no move
// ordering, transposition table or quiescence: the tree is full width to a
// fixed depth, cut only by alpha-beta.

use super::config::{EngineConfig, NoMovePolicy};
use super::evaluation::{evaluate, Score, INF};
use crate::game_repr::{BoardOracle, Side};

/// Per-search state threaded through the recursion
#[derive(Debug)]
pub struct SearchContext<'a> {
    pub config: &'a EngineConfig,
    /// Number of negamax calls made so far
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config, nodes: 0 }
    }
}

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `board` - Position to search; never modified, each child is a fresh board
/// * `depth` - Remaining plies (0 = static evaluation)
/// * `alpha` - Lower bound the side to move can already guarantee
/// * `beta` - Upper bound the opponent will allow
/// * `side` - Side to move
/// * `ctx` - Configuration and node counter
///
/// # Returns
///
/// Score from the perspective of `side`. Fail-soft: when a cutoff happens the
/// best score found so far is returned, which may lie outside the window.
pub fn negamax<B: BoardOracle>(
    board: &B,
    depth: u8,
    mut alpha: Score,
    beta: Score,
    side: Side,
    ctx: &mut SearchContext<'_>,
) -> Score {
    ctx.nodes += 1;
    let config = ctx.config;
    let weights = &config.weights;

    if depth == 0 {
        return evaluate(board, side, weights);
    }

    let moves = board.legal_moves(side);

    if moves.is_empty() {
        return match config.no_move_policy {
            NoMovePolicy::StaticEval => evaluate(board, side, weights),
            NoMovePolicy::PassTurn => {
                if board.has_legal_move(side.opposite()) {
                    // Same board, same depth, turn handed over
                    -negamax(board, depth, -beta, -alpha, side.opposite(), ctx)
                } else {
                    evaluate(board, side, weights)
                }
            }
        };
    }

    let mut best = -INF;

    for mv in moves {
        let child = board.apply_move(side, mv);
        let score = -negamax(&child, depth - 1, -beta, -alpha, side.opposite(), ctx);

        best = best.max(score);
        alpha = alpha.max(score);

        // Beta cutoff
        if alpha >= beta {
            break;
        }
    }

    best
}
