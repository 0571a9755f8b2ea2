use crate::game_repr::{Board, Side};

#[test]
fn test_opening_is_not_over() {
    let board = Board::new();
    assert!(!board.is_game_over());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_one_sided_board_is_over() {
    let board = Board::from_rows(
        "XXXX----
         --------
         --------
         --------
         --------
         --------
         --------
         --------",
    )
    .unwrap();
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Side::Black));
}

#[test]
fn test_blocked_side_does_not_end_game() {
    // Black is stuck but White still has c1
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
    assert!(!board.has_legal_move(Side::Black));
    assert!(board.has_legal_move(Side::White));
    assert!(!board.is_game_over());
}

#[test]
fn test_full_board_winner() {
    let mut rows = String::new();
    for i in 0..64 {
        rows.push(if i < 33 { 'O' } else { 'X' });
    }
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board.empty_count(), 0);
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Side::White));
}
