//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - play against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an AI that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play,

    /// Watch two perfect players play each other
    SelfPlay,

    /// Score every move for the side to move in a position
    Analyze {
        /// Board as 9 cells in row order: X, O, and . for empty (e.g. "X...X...O")
        board: String,
    },
}
