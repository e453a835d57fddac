//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, MoveError};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player, marks `X` and moves first.
    Human,
    /// The computer player, marks `O`.
    Ai,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// Returns the mark this player writes on the board.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Ai => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Ai => write!(f, "AI"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board plus the player whose real turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Player whose mark the game places next.
    current_player: Player,
}

impl Board {
    /// Creates a new empty board with the human to move.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            current_player: Player::Human,
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the player whose turn it is in the real game.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Returns true if `player` owns any complete row, column, or diagonal.
    pub fn winner(&self, player: Player) -> bool {
        rules::has_won(self, player)
    }

    /// Returns the player owning a complete line, if any.
    pub fn winning_player(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the status implied by the marks on the board.
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }

    /// Returns every empty position in ascending index order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Places `player`'s mark at `index` if it names an empty square.
    ///
    /// On failure the board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index above 8 and
    /// [`MoveError::SquareOccupied`] when the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.fill(pos, player);
        Ok(pos)
    }

    /// Writes a mark without validation. Callers guarantee the square is empty.
    pub(crate) fn fill(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "filling occupied square {pos}");
        self.squares[pos.to_index()] = Square::Occupied(player);
    }

    /// Resets a square to empty. Only the search undoes moves.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Hands the turn to the other player.
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid, showing the index of each empty square.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{pos}")?,
                    Square::Occupied(player) => write!(f, "{}", player.mark())?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses 9 cells written row-major, e.g. `"XX.OO...."`.
    ///
    /// `X` is the human, `O` the AI, and `.`, `_`, `-` or a space is empty.
    /// `|` and newlines are ignored so a rendered grid row can be pasted in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !matches!(c, '|' | '\n' | '\r')).collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (index, c) in cells.into_iter().enumerate() {
            board.squares[index] = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::Human),
                'O' => Square::Occupied(Player::Ai),
                '.' | '_' | '-' | ' ' => Square::Empty,
                other => return Err(BoardParseError::InvalidMark(other)),
            };
        }

        if board.count(Player::Human) > board.count(Player::Ai) {
            board.current_player = Player::Ai;
        }

        BoardInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            BoardParseError::Inconsistent(descriptions)
        })?;

        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.current_player(), Player::Human);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_sets_square() {
        let mut board = Board::new();
        assert_eq!(board.place(4, Player::Human), Ok(Position::Center));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::Human));
        assert!(!board.legal_moves().contains(&Position::Center));
    }

    #[test]
    fn test_place_out_of_bounds_leaves_board() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(board.place(9, Player::Human), Err(MoveError::OutOfBounds(9)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_occupied_leaves_board() {
        let mut board = Board::new();
        board.place(0, Player::Human).unwrap();
        let before = board.clone();
        assert_eq!(
            board.place(0, Player::Ai),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new();
        board.place(8, Player::Ai).unwrap();
        board.clear(Position::BottomRight);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_switch_turn_toggles() {
        let mut board = Board::new();
        board.switch_turn();
        assert_eq!(board.current_player(), Player::Ai);
        board.switch_turn();
        assert_eq!(board.current_player(), Player::Human);
    }

    #[test]
    fn test_display_shows_indices_for_empty() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.to_string(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_parse_sets_side_to_move() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.current_player(), Player::Ai);
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.current_player(), Player::Human);
    }

    #[test]
    fn test_parse_accepts_rendered_rows() {
        let board: Board = "X|O|.\n.|X|.\n.|.|O".parse().unwrap();
        assert_eq!(board.count(Player::Human), 2);
        assert_eq!(board.count(Player::Ai), 2);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(BoardParseError::InvalidMark('Z'))
        );
        assert!(matches!(
            "OO.......".parse::<Board>(),
            Err(BoardParseError::Inconsistent(_))
        ));
    }
}
