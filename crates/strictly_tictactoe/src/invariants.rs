//! First-class invariants for boards reached by real play.
//!
//! Invariants are logical properties that must hold after every real move.
//! Search hypotheticals are exempt: they are undone before the search returns.

use crate::{Board, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the human has as many marks as the AI, or exactly one more.
pub struct AlternatingMarks;

impl Invariant<Board> for AlternatingMarks {
    fn holds(board: &Board) -> bool {
        let human = board.count(Player::Human);
        let ai = board.count(Player::Ai);
        let valid = human == ai || human == ai + 1;
        if !valid {
            warn!(human, ai, "Mark alternation violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate with the human moving first"
    }
}

/// Invariant: at most one player owns a complete line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let valid = !(board.winner(Player::Human) && board.winner(Player::Ai));
        if !valid {
            warn!("Both players own a winning line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player has a winning line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (AlternatingMarks, SingleWinner);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_invariants_hold_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_alternation_detects_double_move() {
        let mut board = Board::new();
        board.place(0, Player::Human).unwrap();
        board.place(1, Player::Human).unwrap();
        assert!(!AlternatingMarks::holds(&board));
    }

    #[test]
    fn test_alternation_detects_ai_first() {
        let mut board = Board::new();
        board.place(4, Player::Ai).unwrap();
        assert!(!AlternatingMarks::holds(&board));
    }

    #[test]
    fn test_single_winner_detects_two_lines() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.place(pos.to_index(), Player::Human).unwrap();
        }
        for pos in [Position::BottomLeft, Position::BottomCenter, Position::BottomRight] {
            board.place(pos.to_index(), Player::Ai).unwrap();
        }
        assert!(!SingleWinner::holds(&board));

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, SingleWinner::description());
    }
}
