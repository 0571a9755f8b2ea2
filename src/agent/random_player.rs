//! Baseline player that picks uniformly among legal moves.

use super::player::Player;
use crate::game_repr::{Board, Move, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct RandomPlayer {
    side: Side,
    rng: StdRng,
}

impl RandomPlayer {
    /// Seeded so that games against it are reproducible
    pub fn new(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves(self.side).choose(&mut self.rng).copied()
    }

    fn side(&self) -> Side {
        self.side
    }

    fn name(&self) -> &str {
        "Random"
    }
}
