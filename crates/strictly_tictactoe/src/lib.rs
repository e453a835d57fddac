//! Strictly Tic-Tac-Toe - pure game logic with a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and whose turn it is, with win/draw queries
//! - **Search**: exhaustive minimax that picks the optimal move
//! - **Game**: the win/draw state machine the outer game loop drives
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.play_human(0).unwrap();
//! let reply = game.play_ai().unwrap();
//! assert_eq!(reply.to_index(), 4);
//! assert_eq!(game.status(), &GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::Move;
pub use error::{BoardParseError, MoveError};
pub use game::Game;
pub use position::Position;
pub use search::{best_move, best_move_for, evaluate, scored_moves, Score, ScoredMove};
pub use types::{Board, GameStatus, Player, Square};
