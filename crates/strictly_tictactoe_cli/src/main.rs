//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Reads moves from stdin, prints the board to stdout, and leaves the
//! thinking to the minimax engine in `strictly_tictactoe`.

#![warn(missing_docs)]

mod analyze;
mod cli;
mod play;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let command = cli.command.unwrap_or(Command::Play);
    info!(?command, "Starting tictactoe");

    let stdout = io::stdout();
    match command {
        Command::Play => play::run_session(io::stdin().lock(), stdout.lock()),
        Command::SelfPlay => analyze::self_play(&mut stdout.lock()),
        Command::Analyze { board } => analyze::analyze(&board, &mut stdout.lock()),
    }
}
