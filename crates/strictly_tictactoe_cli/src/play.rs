//! Interactive game loop: human at the keyboard versus the minimax engine.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, Game, GameStatus, MoveError, Player, Position};
use tracing::{debug, info, instrument};

const RULE: &str = "========================================";

/// Runs games until the player declines a rematch or input runs out.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    loop {
        let Some(status) = play_game(&mut input, &mut output)? else {
            info!("Input closed during a game");
            return Ok(());
        };

        writeln!(output, "{}", outcome_message(status))?;
        writeln!(output, "{RULE}")?;

        write!(output, "\nPlay again? (yes/no): ")?;
        output.flush()?;
        let answer = read_line(&mut input)?.unwrap_or_default();
        if !matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
            writeln!(output, "Thanks for playing!")?;
            return Ok(());
        }
        debug!("Starting rematch");
    }
}

/// Plays one game. Returns `None` if input ends before the game does.
#[instrument(skip_all)]
fn play_game<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<GameStatus>> {
    let mut game = Game::new();

    writeln!(output, "{RULE}")?;
    writeln!(output, "Welcome to Tic-Tac-Toe!")?;
    writeln!(output, "{RULE}")?;
    writeln!(
        output,
        "You are {}, AI is {}",
        Player::Human.mark(),
        Player::Ai.mark()
    )?;
    writeln!(output, "Position numbers:\n{}\n", Board::new())?;

    loop {
        writeln!(output, "\n{}\n", game.board())?;

        match game.to_move() {
            Player::Human => {
                if !read_human_move(&mut game, input, output)? {
                    return Ok(None);
                }
            }
            Player::Ai => {
                let pos = game.play_ai().context("AI failed to move")?;
                writeln!(output, "AI plays at position {}", pos.to_index())?;
            }
        }

        if game.status().is_over() {
            writeln!(output, "\n{}\n", game.board())?;
            return Ok(Some(*game.status()));
        }
    }
}

/// Prompts until the human enters a legal move. Returns false on end of input.
fn read_human_move<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    loop {
        write!(output, "Enter your move (0-8): ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        let Some(index) = parse_move(&line) else {
            writeln!(output, "Please enter a number between 0 and 8.")?;
            continue;
        };

        match game.play_human(index) {
            Ok(_) => return Ok(true),
            Err(err @ (MoveError::OutOfBounds(_) | MoveError::SquareOccupied(_))) => {
                writeln!(output, "Invalid move! {err}.")?;
            }
            Err(err) => return Err(err).context("Human move rejected"),
        }
    }
}

/// Accepts a bare index (range checked by the board) or a label like `center`.
fn parse_move(line: &str) -> Option<usize> {
    let line = line.trim();
    line.parse::<usize>()
        .ok()
        .or_else(|| Position::from_label_or_number(line).map(Position::to_index))
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    Ok((read > 0).then_some(line))
}

fn outcome_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won(Player::Human) => "You won! Congratulations!",
        GameStatus::Won(Player::Ai) => "AI wins! Better luck next time.",
        GameStatus::Draw => "It's a draw!",
        GameStatus::InProgress => "Game abandoned.",
    }
}
