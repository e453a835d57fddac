//! Game state machine: `InProgress` until someone completes a line or the
//! board fills up.

use crate::error::MoveError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::search;
use crate::{Board, GameStatus, Move, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A single game of human versus AI.
///
/// Real moves are permanent. A rematch is a fresh `Game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Game {
    /// The board.
    board: Board,
    /// Game status.
    status: GameStatus,
    /// Move history in play order.
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with the human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.board.current_player()
    }

    /// Applies the human's move at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Fails without changing the game if the game is over, it is the AI's
    /// turn, or the index is out of range or occupied.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        self.apply(index, Player::Human)
    }

    /// Computes the AI's optimal move and applies it.
    ///
    /// # Errors
    ///
    /// Fails if the game is over or it is the human's turn.
    #[instrument(skip(self))]
    pub fn play_ai(&mut self) -> Result<Position, MoveError> {
        self.ensure_can_move(Player::Ai)?;
        self.play_best().map(|mov| mov.position)
    }

    /// Plays the optimal move for whichever side is to move.
    ///
    /// # Errors
    ///
    /// Fails if the game is over.
    #[instrument(skip(self))]
    pub fn play_best(&mut self) -> Result<Move, MoveError> {
        let player = self.to_move();
        self.ensure_can_move(player)?;
        let position = search::best_move_for(&mut self.board, player).ok_or(MoveError::GameOver)?;
        self.apply(position.to_index(), player)?;
        Ok(Move::new(player, position))
    }

    fn ensure_can_move(&self, player: Player) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move() {
            return Err(MoveError::WrongPlayer(player));
        }
        Ok(())
    }

    fn apply(&mut self, index: usize, player: Player) -> Result<GameStatus, MoveError> {
        self.ensure_can_move(player)?;

        let position = self.board.place(index, player)?;
        self.history.push(Move::new(player, position));

        BoardInvariants::check_all(&self.board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        self.status = if self.board.winner(player) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            self.board.switch_turn();
            GameStatus::InProgress
        };

        debug!(%player, %position, status = %self.status, "Applied move");
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
