//! Exhaustive minimax search for perfect play.
//!
//! Scores are from the searching player's point of view: a win `d` plies
//! below the root scores `10 - d`, a loss scores `d - 10`, a draw 0. Faster
//! wins and slower losses are therefore preferred.

use crate::{Board, Player, Position};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Minimax score of a position.
pub type Score = i32;

/// Score of a win at the search root.
pub const WIN_SCORE: Score = 10;

/// A candidate move together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// Where the mark would be placed.
    pub position: Position,
    /// Score of the position after placing it.
    pub score: Score,
}

/// A mark placed for look-ahead only. Clears its square on drop.
struct Hypothetical<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Hypothetical<'a> {
    fn place(board: &'a mut Board, pos: Position, player: Player) -> Self {
        board.fill(pos, player);
        Self { board, pos }
    }
}

impl Deref for Hypothetical<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Hypothetical<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Hypothetical<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

/// Scores `board` for `player` by exhaustive minimax.
///
/// `depth` is the number of plies already below the root and `maximizing`
/// says whether `player` is the side to move. The board is returned exactly
/// as it was given.
pub fn evaluate(board: &mut Board, player: Player, depth: u8, maximizing: bool) -> Score {
    let mut nodes = 0;
    minimax(board, player, depth, maximizing, &mut nodes)
}

fn minimax(board: &mut Board, player: Player, depth: u8, maximizing: bool, nodes: &mut u64) -> Score {
    *nodes += 1;

    if board.winner(player) {
        return WIN_SCORE - Score::from(depth);
    }
    if board.winner(player.opponent()) {
        return Score::from(depth) - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if maximizing { player } else { player.opponent() };
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut trial = Hypothetical::place(board, pos, mover);
        let score = minimax(&mut trial, player, depth + 1, !maximizing, nodes);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

fn score_candidates(board: &mut Board, player: Player, nodes: &mut u64) -> Vec<ScoredMove> {
    let mut scored = Vec::new();
    for position in board.legal_moves() {
        let mut trial = Hypothetical::place(board, position, player);
        let score = minimax(&mut trial, player, 0, false, nodes);
        scored.push(ScoredMove { position, score });
    }
    scored
}

/// Scores every legal move for `player`, in ascending index order.
#[instrument(skip(board))]
pub fn scored_moves(board: &mut Board, player: Player) -> Vec<ScoredMove> {
    let mut nodes = 0;
    let scored = score_candidates(board, player, &mut nodes);
    debug!(candidates = scored.len(), nodes, "Scored candidate moves");
    scored
}

/// Returns the optimal move for `player`, or `None` on a full board.
///
/// Ties go to the lowest index: a candidate replaces the current best only
/// with a strictly greater score.
#[instrument(skip(board))]
pub fn best_move_for(board: &mut Board, player: Player) -> Option<Position> {
    let mut nodes = 0;
    let mut best: Option<ScoredMove> = None;

    for candidate in score_candidates(board, player, &mut nodes) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    match best {
        Some(chosen) => {
            debug!(position = %chosen.position, score = chosen.score, nodes, "Chose move");
            Some(chosen.position)
        }
        None => {
            debug!("No legal moves to search");
            None
        }
    }
}

/// Returns the optimal move for the AI, or `None` on a full board.
pub fn best_move(board: &mut Board) -> Option<Position> {
    best_move_for(board, Player::Ai)
}
