//! Headless game loop driving two players.
//!
//! The [`Orchestrator`] plays the host role around the engine: it owns the
//! board, asks the side to move for a move only when that side can move,
//! validates and applies the answer, passes the turn otherwise, and stops
//! when neither side can play.
//!
//! # Game Flow
//!
//! ```text
//! [Start] -> [Side to move has a move?] --yes--> [Request move] -> [Apply] --+
//!                  |                                                         |
//!                  no -> [Opponent has a move?] --yes--> [Pass] -------------+
//!                                 |                                          |
//!                                 no -> [Game over, report result]   <- [Switch turn]
//! ```

use crate::agent::player::{GameResult, Player};
use crate::error::{GameError, Result};
use crate::game_repr::{Board, Move, Side};

/// One entry of the game record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    Placed { side: Side, mv: Move },
    Passed { side: Side },
}

/// Outcome of a single call to [`Orchestrator::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Played(Ply),
    Finished(GameResult),
}

/// Full record of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub result: GameResult,
    pub final_board: Board,
    pub plies: Vec<Ply>,
}

impl GameRecord {
    /// Number of stones placed (passes excluded)
    pub fn move_count(&self) -> usize {
        self.plies
            .iter()
            .filter(|p| matches!(p, Ply::Placed { .. }))
            .count()
    }

    /// Moves in algebraic notation, "pass" for passes
    pub fn transcript(&self) -> String {
        self.plies
            .iter()
            .map(|p| match p {
                Ply::Placed { mv, .. } => mv.to_string(),
                Ply::Passed { .. } => "pass".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Root component coordinating a game between two players.
pub struct Orchestrator {
    board: Board,
    current_turn: Side,
    black: Box<dyn Player>,
    white: Box<dyn Player>,
    plies: Vec<Ply>,
    result: Option<GameResult>,
}

impl Orchestrator {
    /// Start a game from the standard opening with Black to move.
    ///
    /// Each player must be bound to the side it is seated at.
    pub fn new(black: Box<dyn Player>, white: Box<dyn Player>) -> Self {
        Self::from_position(Board::new(), Side::Black, black, white)
    }

    /// Start a game from an arbitrary position
    pub fn from_position(
        board: Board,
        to_move: Side,
        black: Box<dyn Player>,
        white: Box<dyn Player>,
    ) -> Self {
        debug_assert_eq!(black.side(), Side::Black);
        debug_assert_eq!(white.side(), Side::White);

        Self {
            board,
            current_turn: to_move,
            black,
            white,
            plies: Vec::new(),
            result: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        match side {
            Side::Black => self.black.as_mut(),
            Side::White => self.white.as_mut(),
        }
    }

    /// Advance the game by one ply (a move or a pass).
    ///
    /// Once the game is over every further call returns the same
    /// [`StepOutcome::Finished`].
    pub fn step(&mut self) -> Result<StepOutcome> {
        if let Some(result) = self.result {
            return Ok(StepOutcome::Finished(result));
        }

        let side = self.current_turn;

        if !self.board.has_legal_move(side) {
            if !self.board.has_legal_move(side.opposite()) {
                return Ok(StepOutcome::Finished(self.finish()));
            }

            log::debug!("{} passes", side);
            let ply = Ply::Passed { side };
            self.plies.push(ply);
            self.player_mut(side.opposite()).opponent_moved(None);
            self.current_turn = side.opposite();
            return Ok(StepOutcome::Played(ply));
        }

        let board = self.board;
        let mv = self
            .player_mut(side)
            .get_move(&board)
            .ok_or(GameError::NoMoveReturned { side })?;

        self.board = self.board.try_apply_move(side, mv)?;
        log::debug!("{} plays {}", side, mv);

        let ply = Ply::Placed { side, mv };
        self.plies.push(ply);
        self.player_mut(side.opposite()).opponent_moved(Some(mv));
        self.current_turn = side.opposite();

        Ok(StepOutcome::Played(ply))
    }

    /// Play until neither side can move
    pub fn run(mut self) -> Result<GameRecord> {
        loop {
            if let StepOutcome::Finished(result) = self.step()? {
                return Ok(GameRecord {
                    result,
                    final_board: self.board,
                    plies: self.plies,
                });
            }
        }
    }

    fn finish(&mut self) -> GameResult {
        let result = GameResult::from_winner(self.board.winner());
        log::info!(
            "game over: {:?} ({} - {})",
            result,
            self.board.piece_count(Side::Black),
            self.board.piece_count(Side::White)
        );

        self.black.game_ended(result);
        self.white.game_ended(result);
        self.result = Some(result);
        result
    }
}
