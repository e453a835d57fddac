//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the game loop share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_won};

use crate::{Board, GameStatus};

/// Classifies the board as won, drawn, or still in progress.
pub fn status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
