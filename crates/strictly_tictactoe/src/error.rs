//! Error types for board mutation and board parsing.

use crate::{Player, Position};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not name a cell (must be 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Error returned when a board description cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The description did not contain exactly 9 cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A cell used an unknown mark.
    #[display("Unknown mark {:?} (use X, O, or . for empty)", _0)]
    InvalidMark(#[error(not(source))] char),

    /// The cells describe a position real play cannot reach.
    #[display("Unreachable board: {}", _0)]
    Inconsistent(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(
            MoveError::OutOfBounds(9).to_string(),
            "Position 9 is out of bounds (must be 0-8)"
        );
        assert!(MoveError::SquareOccupied(Position::Center)
            .to_string()
            .contains("occupied"));
        assert_eq!(
            MoveError::WrongPlayer(Player::Ai).to_string(),
            "It's not AI's turn"
        );
    }
}
