//! Tests for board queries over every reachable position.

use strictly_tictactoe::{Board, GameStatus, MoveError, Player, Position, Square};

/// Walks every position reachable by legal alternating play.
fn visit_reachable(board: &Board, visit: &mut impl FnMut(&Board)) {
    visit(board);
    if board.status() != GameStatus::InProgress {
        return;
    }

    let player = board.current_player();
    for pos in board.legal_moves() {
        let mut next = board.clone();
        next.place(pos.to_index(), player).expect("legal move");
        next.switch_turn();
        visit_reachable(&next, visit);
    }
}

#[test]
fn test_reachable_boards_never_have_two_winners() {
    let mut positions = 0usize;
    visit_reachable(&Board::new(), &mut |board: &Board| {
        positions += 1;
        assert!(
            !(board.winner(Player::Human) && board.winner(Player::Ai)),
            "two winners on\n{board}"
        );
        let expected = [Player::Human, Player::Ai]
            .into_iter()
            .find(|&player| board.winner(player));
        assert_eq!(board.winning_player(), expected);
    });
    // Size of the full tic-tac-toe game tree, root included.
    assert_eq!(positions, 549_946);
}

#[test]
fn test_failed_place_never_mutates() {
    visit_reachable(&Board::new(), &mut |board: &Board| {
        let mut probe = board.clone();
        for pos in Position::ALL {
            if board.get(pos) != Square::Empty {
                assert_eq!(
                    probe.place(pos.to_index(), Player::Ai),
                    Err(MoveError::SquareOccupied(pos))
                );
            }
        }
        assert_eq!(probe.place(9, Player::Human), Err(MoveError::OutOfBounds(9)));
        assert_eq!(&probe, board);
    });
}

#[test]
fn test_legal_moves_ascending() {
    let board: Board = "..X.O..X.".parse().expect("valid board");
    let indices: Vec<usize> = board.legal_moves().iter().map(|p| p.to_index()).collect();
    assert_eq!(indices, vec![0, 1, 3, 5, 6, 8]);
}

#[test]
fn test_full_board_has_no_legal_moves() {
    let board: Board = "XOXXOOOXX".parse().expect("valid board");
    assert!(board.legal_moves().is_empty());
    assert!(board.is_full());
    assert_eq!(board.status(), GameStatus::Draw);
}

#[test]
fn test_board_json_round_trip() {
    let board: Board = "X...O...X".parse().expect("valid board");
    let json = serde_json::to_string(&board).expect("serialize");
    let restored: Board = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, board);
    assert_eq!(restored.current_player(), Player::Ai);
}
