// Tests for the static evaluator

use crate::agent::ai::config::EvalWeights;
use crate::agent::ai::evaluation::{evaluate, evaluate_terms, EvalTerms, Region};
use crate::game_repr::{Board, Side};

fn played(moves: &[&str]) -> Board {
    let mut board = Board::new();
    let mut side = Side::Black;
    for mv in moves {
        if !board.has_legal_move(side) {
            side = side.opposite();
        }
        board = board.apply_move(side, mv.parse().unwrap());
        side = side.opposite();
    }
    board
}

#[test]
fn test_opening_position_is_balanced() {
    let board = Board::new();
    let weights = EvalWeights::default();
    assert_eq!(evaluate(&board, Side::Black, &weights), 0);
    assert_eq!(evaluate(&board, Side::White, &weights), 0);
}

#[test]
fn test_region_classification() {
    assert_eq!(Region::of(0, 0), Region::Corner);
    assert_eq!(Region::of(7, 0), Region::Corner);
    assert_eq!(Region::of(0, 3), Region::Edge);
    assert_eq!(Region::of(5, 7), Region::Edge);
    assert_eq!(Region::of(1, 1), Region::Interior);
    assert_eq!(Region::of(3, 4), Region::Interior);
}

#[test]
fn test_terms_after_first_move() {
    let board = played(&["d3"]);
    let terms = evaluate_terms(&board, Side::Black, &EvalWeights::default());
    assert_eq!(terms, EvalTerms { material: 3, positional: 0, mobility: 0 });
}

#[test]
fn test_terms_negate_when_sides_swap() {
    let weights = EvalWeights::default();
    let boards = [
        Board::new(),
        played(&["d3"]),
        played(&["d3", "c3", "c4"]),
        played(&["f5", "f6", "e6", "f4", "e3"]),
        Board::from_rows(
            "OX------
             --------
             --------
             --------
             --------
             --------
             --------
             -------X",
        )
        .unwrap(),
    ];

    for board in boards {
        let black = evaluate_terms(&board, Side::Black, &weights);
        let white = evaluate_terms(&board, Side::White, &weights);
        assert_eq!(black.material, -white.material);
        assert_eq!(black.positional, -white.positional);
        assert_eq!(black.mobility, -white.mobility);
        assert_eq!(black.negated(), white);
    }
}

#[test]
fn test_corner_outweighs_edge() {
    let weights = EvalWeights::default();
    let corner = Board::from_rows(
        "X-------
         --------
         --------
         --------
         --------
         --------
         --------
         -------O",
    )
    .unwrap();
    let edge = Board::from_rows(
        "-X------
         --------
         --------
         --------
         --------
         --------
         --------
         -------O",
    )
    .unwrap();

    let corner_terms = evaluate_terms(&corner, Side::Black, &weights);
    let edge_terms = evaluate_terms(&edge, Side::Black, &weights);
    assert_eq!(corner_terms.positional, 0, "one corner each");
    assert_eq!(edge_terms.positional, 10 - 100);
    assert!(evaluate(&corner, Side::Black, &weights) > evaluate(&edge, Side::Black, &weights));
}

#[test]
fn test_blocked_side_gets_negative_mobility() {
    let board = Board::from_rows(
        "OX------
         --------
         --------
         --------
         --------
         --------
         --------
         --------",
    )
    .unwrap();
    let terms = evaluate_terms(&board, Side::Black, &EvalWeights::default());
    assert_eq!(terms.mobility, -1);
    assert_eq!(terms.material, 0);
    assert_eq!(terms.positional, -90);
}

#[test]
fn test_combine_uses_weights() {
    let terms = EvalTerms { material: 2, positional: -3, mobility: 4 };
    assert_eq!(terms.combine(&EvalWeights::default()), 2 + 25 * -3 + 15 * 4);
    assert_eq!(terms.combine(&EvalWeights::material_only()), 2);
    assert_eq!(terms.combine(&EvalWeights::new(1, 1, 2, 3)), 2 - 6 + 12);
}

#[test]
fn test_weight_profiles_rank_positions_differently() {
    // Black holds a corner but is down material
    let board = Board::from_rows(
        "X-------
         --------
         --OOO---
         --OXO---
         --OOO---
         --------
         --------
         --------",
    )
    .unwrap();

    let positional = evaluate(&board, Side::Black, &EvalWeights::default());
    let material = evaluate(&board, Side::Black, &EvalWeights::material_only());
    assert!(positional > 0, "corner should dominate: {}", positional);
    assert_eq!(material, 2 - 8);
}

#[test]
fn test_empty_board_scores_zero() {
    assert_eq!(evaluate(&Board::empty(), Side::White, &EvalWeights::default()), 0);
}
