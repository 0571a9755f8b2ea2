//! Integration tests for the move selector
//!
//! These drive the public API only: board model, root search and players.

use othello_engine::agent::ai::{evaluate, search_root, select_move, EngineConfig, NoMovePolicy};
use othello_engine::game_repr::{Board, BoardOracle, Cell, Move, MoveList, Side};
use std::cell::Cell as Counter;
use std::rc::Rc;

/// Board wrapper that counts the oracle calls made by the search
#[derive(Clone)]
struct CountingBoard {
    inner: Board,
    applied: Rc<Counter<u64>>,
    enumerated: Rc<Counter<u64>>,
}

impl CountingBoard {
    fn new(inner: Board) -> Self {
        Self {
            inner,
            applied: Rc::new(Counter::new(0)),
            enumerated: Rc::new(Counter::new(0)),
        }
    }
}

impl BoardOracle for CountingBoard {
    fn legal_moves(&self, side: Side) -> MoveList {
        self.enumerated.set(self.enumerated.get() + 1);
        self.inner.legal_moves(side)
    }

    fn apply_move(&self, side: Side, mv: Move) -> Self {
        self.applied.set(self.applied.get() + 1);
        Self {
            inner: self.inner.apply_move(side, mv),
            applied: Rc::clone(&self.applied),
            enumerated: Rc::clone(&self.enumerated),
        }
    }

    fn piece_count(&self, side: Side) -> u32 {
        self.inner.piece_count(side)
    }

    fn cell_owner(&self, row: u8, col: u8) -> Cell {
        self.inner.cell_owner(row, col)
    }
}

/// Positions along a fixed game, `stride` picking the move index each ply
fn game_positions(plies: usize, stride: usize) -> Vec<(Board, Side)> {
    let mut positions = Vec::new();
    let mut board = Board::new();
    let mut side = Side::Black;

    for ply in 0..plies {
        if board.is_game_over() {
            break;
        }
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            side = side.opposite();
            continue;
        }
        positions.push((board, side));
        board = board.apply_move(side, moves[(ply * stride) % moves.len()]);
        side = side.opposite();
    }

    positions
}

#[test]
fn test_single_move_shortcut_skips_search() {
    let board = CountingBoard::new(
        Board::from_rows(
            "OX------
             --------
             --------
             --------
             --------
             --------
             --------
             --------",
        )
        .unwrap(),
    );

    let mv = select_move(&board, Side::White, &EngineConfig::default());
    assert_eq!(mv, Some("c1".parse().unwrap()));
    assert_eq!(board.applied.get(), 0, "no board should be explored");
    assert_eq!(board.enumerated.get(), 1, "only the root enumeration");
}

#[test]
fn test_search_never_touches_caller_board() {
    let start = Board::new().apply_move(Side::Black, Move::new(2, 3));
    let board = CountingBoard::new(start);

    select_move(&board, Side::White, &EngineConfig::new(4));

    assert_eq!(board.inner, start);
    assert!(board.applied.get() > 3);
}

#[test]
fn test_opening_scenario_depth_one() {
    let board = Board::new();
    let config = EngineConfig::new(1);

    let best = select_move(&board, Side::Black, &config).unwrap();
    let best_eval = evaluate(&board.apply_move(Side::Black, best), Side::Black, &config.weights);

    for mv in board.legal_moves(Side::Black) {
        let eval = evaluate(&board.apply_move(Side::Black, mv), Side::Black, &config.weights);
        assert!(eval <= best_eval);
    }
    assert_eq!(best.to_string(), "d3");
}

#[test]
fn test_selection_is_repeatable_across_positions() {
    let config = EngineConfig::new(3);
    for (board, side) in game_positions(20, 2) {
        let first = select_move(&board, side, &config);
        let second = select_move(&board, side, &config);
        assert_eq!(first, second);
        assert!(board.legal_moves(side).contains(&first.unwrap()));
    }
}

#[test]
fn test_deeper_search_can_change_the_move() {
    // No agreement is promised between depths: over a spread of positions a
    // shallow and a deeper search disagree somewhere.
    let shallow = EngineConfig::new(1);
    let deep = EngineConfig::new(4);

    let disagreements = game_positions(40, 3)
        .into_iter()
        .filter(|(board, side)| {
            select_move(board, *side, &shallow) != select_move(board, *side, &deep)
        })
        .count();

    assert!(disagreements > 0, "depth 1 and depth 4 always agreed");
}

#[test]
fn test_pass_policy_only_affects_blocked_nodes() {
    // Nobody can be blocked this close to the opening, so both policies
    // must agree exactly.
    let static_eval = EngineConfig::new(3);
    let pass_turn = EngineConfig::new(3).with_no_move_policy(NoMovePolicy::PassTurn);

    for (board, side) in game_positions(2, 1) {
        assert_eq!(
            search_root(&board, side, &static_eval),
            search_root(&board, side, &pass_turn)
        );
    }
}

#[test]
fn test_engine_plays_full_legal_game() {
    let config = EngineConfig::new(2);
    let mut board = Board::new();
    let mut side = Side::Black;

    while !board.is_game_over() {
        if !board.has_legal_move(side) {
            side = side.opposite();
            continue;
        }
        let mv = select_move(&board, side, &config).expect("side has a legal move");
        board = board.try_apply_move(side, mv).expect("engine move must be legal");
        side = side.opposite();
    }

    assert!(board.piece_count(Side::Black) + board.piece_count(Side::White) <= 64);
}
