// Static position evaluation
// Returns a score from the perspective of `side` (positive = good for `side`)

use super::config::EvalWeights;
use crate::game_repr::bitboards::{CORNER_MASK, EDGE_MASK};
use crate::game_repr::{BoardOracle, Move, Side};

/// Search score. Negation is always safe: every score lies within `-INF..=INF`.
pub type Score = i32;

/// Bound sentinel for alpha-beta windows, one unit inside `i32::MAX`
pub const INF: Score = i32::MAX - 1;

/// Classification of a square for the positional term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Corner,
    Edge,
    Interior,
}

impl Region {
    pub fn of(row: u8, col: u8) -> Self {
        let bit = Move::new(row, col).bit();
        if CORNER_MASK & bit != 0 {
            Region::Corner
        } else if EDGE_MASK & bit != 0 {
            Region::Edge
        } else {
            Region::Interior
        }
    }

    fn weight(&self, weights: &EvalWeights) -> i32 {
        match self {
            Region::Corner => weights.corner,
            Region::Edge => weights.edge,
            Region::Interior => 0,
        }
    }
}

/// Raw evaluation terms, each already a difference `side - opponent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalTerms {
    pub material: i32,
    pub positional: i32,
    pub mobility: i32,
}

impl EvalTerms {
    pub fn combine(&self, weights: &EvalWeights) -> Score {
        self.material + weights.stability * self.positional + weights.mobility * self.mobility
    }

    /// The same terms seen from the other side
    pub fn negated(&self) -> Self {
        Self {
            material: -self.material,
            positional: -self.positional,
            mobility: -self.mobility,
        }
    }
}

/// Weighted corner/edge tally for `side`.
///
/// A static proxy for stability: border stones are not checked for being
/// unflippable.
fn positional_tally<B: BoardOracle>(board: &B, side: Side, weights: &EvalWeights) -> i32 {
    let cell = side.cell();
    let mut tally = 0;

    for row in 0..8u8 {
        for col in 0..8u8 {
            if board.cell_owner(row, col) == cell {
                tally += Region::of(row, col).weight(weights);
            }
        }
    }

    tally
}

/// Compute the three evaluation terms for `side`
pub fn evaluate_terms<B: BoardOracle>(board: &B, side: Side, weights: &EvalWeights) -> EvalTerms {
    let opponent = side.opposite();

    let material = board.piece_count(side) as i32 - board.piece_count(opponent) as i32;
    let positional =
        positional_tally(board, side, weights) - positional_tally(board, opponent, weights);
    let mobility = board.mobility(side) as i32 - board.mobility(opponent) as i32;

    EvalTerms { material, positional, mobility }
}

/// Score `board` from `side`'s perspective.
///
/// Total over every board, including ones where `side` cannot move; a blocked
/// side simply gets a non-positive mobility term.
pub fn evaluate<B: BoardOracle>(board: &B, side: Side, weights: &EvalWeights) -> Score {
    evaluate_terms(board, side, weights).combine(weights)
}
