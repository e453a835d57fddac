//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// Returns true if `player` holds all three squares of some line.
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    Position::LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line found with three matching
/// marks, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in Position::LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
