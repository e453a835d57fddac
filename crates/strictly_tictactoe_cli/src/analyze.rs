//! Non-interactive commands: self-play and position analysis.

use anyhow::{Context, Result};
use std::io::Write;
use strictly_tictactoe::{best_move_for, scored_moves, Board, Game, ScoredMove};
use tracing::instrument;

/// Plays both sides perfectly from an empty board and prints the game.
#[instrument(skip_all)]
pub fn self_play<W: Write>(output: &mut W) -> Result<()> {
    let mut game = Game::new();
    while !game.status().is_over() {
        let mov = game.play_best().context("Self-play stalled")?;
        writeln!(output, "{mov}")?;
    }

    writeln!(output, "\n{}\n", game.board())?;
    writeln!(output, "Result: {}", game.status())?;
    Ok(())
}

/// Prints the minimax score of every legal move in `cells`.
#[instrument(skip(output))]
pub fn analyze<W: Write>(cells: &str, output: &mut W) -> Result<()> {
    let mut board: Board = cells
        .parse()
        .with_context(|| format!("Invalid board {cells:?}"))?;

    writeln!(output, "{board}\n")?;

    let status = board.status();
    if status.is_over() {
        writeln!(output, "Game over: {status}")?;
        return Ok(());
    }

    let player = board.current_player();
    writeln!(output, "{player} to move ({})", player.mark())?;
    for ScoredMove { position, score } in scored_moves(&mut board, player) {
        writeln!(output, "  {:<18} {:+}", position.to_string(), score)?;
    }

    let best = best_move_for(&mut board, player).context("No legal moves")?;
    writeln!(output, "Best move: {best}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut output = Vec::new();
        f(&mut output).expect("command succeeds");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn test_self_play_draws() {
        let output = run(|out| self_play(out));
        assert_eq!(output.lines().filter(|l| l.contains("->")).count(), 9);
        assert!(output.ends_with("Result: Draw\n"));
    }

    #[test]
    fn test_analyze_reports_best_move() {
        let output = run(|out| analyze("X...X...O", out));
        assert!(output.contains("AI to move (O)"));
        assert!(output.contains("Top-right (2)"));
        assert!(output.ends_with("Best move: Top-right (2)\n"));
    }

    #[test]
    fn test_analyze_finished_board() {
        let output = run(|out| analyze("XXXOO....", out));
        assert!(output.ends_with("Game over: Human wins\n"));
    }

    #[test]
    fn test_analyze_rejects_garbage() {
        let mut output = Vec::new();
        let err = analyze("XO", &mut output).unwrap_err();
        assert!(format!("{err:#}").contains("Expected 9 cells"));
    }
}
