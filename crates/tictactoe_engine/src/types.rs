//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player, marks with `X`. Moves first.
    #[default]
    #[display("player 1")]
    Player1,
    /// Second player, marks with `O`.
    #[display("player 2")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Player number as shown to humans (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Numeric code: 0 for empty, otherwise the player number.
    pub fn code(self) -> u8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.number(),
        }
    }

    /// Display symbol: `" "`, `"X"` or `"O"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Square::Empty => " ",
            Square::Occupied(Player::Player1) => "X",
            Square::Occupied(Player::Player2) => "O",
        }
    }
}

/// A validated board coordinate, 0-indexed and row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position if both coordinates fall inside the board.
    pub fn new(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|r| *r < SIZE)?;
        let col = usize::try_from(col).ok().filter(|c| *c < SIZE)?;
        Some(Self { row, col })
    }

    /// Unchecked constructor for the static tables in this crate.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    /// Squares indexed by `[row][col]`.
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row][pos.col]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row][pos.col] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares, row by row.
    pub fn squares(&self) -> &[[Square; SIZE]; SIZE] {
        &self.squares
    }

    /// Numeric view of the board (0 empty, 1 player 1, 2 player 2).
    pub fn codes(&self) -> [[u8; SIZE]; SIZE] {
        self.squares.map(|row| row.map(Square::code))
    }

    /// Symbol view of the board.
    pub fn symbols(&self) -> [[&'static str; SIZE]; SIZE] {
        self.squares.map(|row| row.map(Square::symbol))
    }
}

/// Current status of the game, derived from the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum GameStatus {
    /// Moves remain and nobody has a line.
    #[display("ongoing")]
    Ongoing = 0,
    /// Player 1 completed a line.
    #[display("player 1 wins")]
    Player1Wins = 1,
    /// Player 2 completed a line.
    #[display("player 2 wins")]
    Player2Wins = 2,
    /// Board is full and nobody has a line.
    #[display("draw")]
    Draw = 3,
}

impl GameStatus {
    /// Numeric code (0 ongoing, 1 and 2 for the winners, 3 draw).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parses a numeric status code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_repr(code)
    }

    /// Status for a game won by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Player1 => GameStatus::Player1Wins,
            Player::Player2 => GameStatus::Player2Wins,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Player1Wins => Some(Player::Player1),
            GameStatus::Player2Wins => Some(Player::Player2),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }

    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_square_codes_and_symbols() {
        assert_eq!(Square::Empty.code(), 0);
        assert_eq!(Square::Occupied(Player::Player1).code(), 1);
        assert_eq!(Square::Occupied(Player::Player2).code(), 2);
        assert_eq!(Square::Empty.symbol(), " ");
        assert_eq!(Square::Occupied(Player::Player1).symbol(), "X");
        assert_eq!(Square::Occupied(Player::Player2).symbol(), "O");
    }

    #[test]
    fn test_position_bounds() {
        assert_eq!(Position::new(0, 0), Some(Position::at(0, 0)));
        assert_eq!(Position::new(2, 2), Some(Position::at(2, 2)));
        assert_eq!(Position::new(-1, 0), None);
        assert_eq!(Position::new(0, -1), None);
        assert_eq!(Position::new(3, 0), None);
        assert_eq!(Position::new(0, 3), None);
        assert_eq!(Position::new(i64::MIN, i64::MAX), None);
    }

    #[test]
    fn test_all_positions_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.row(), i / SIZE);
            assert_eq!(pos.col(), i % SIZE);
        }
    }

    #[test]
    fn test_board_set_and_views() {
        let mut board = Board::new();
        board.set(Position::at(1, 2), Square::Occupied(Player::Player2));
        assert!(!board.is_empty(Position::at(1, 2)));
        assert_eq!(board.codes(), [[0, 0, 0], [0, 0, 2], [0, 0, 0]]);
        assert_eq!(
            board.symbols(),
            [[" ", " ", " "], [" ", " ", "O"], [" ", " ", " "]]
        );
    }

    #[test]
    fn test_status_codes() {
        for code in 0..4 {
            let status = GameStatus::from_code(code).unwrap();
            assert_eq!(status.code(), code);
        }
        assert_eq!(GameStatus::from_code(4), None);
        assert_eq!(GameStatus::won_by(Player::Player2), GameStatus::Player2Wins);
        assert_eq!(GameStatus::Player1Wins.winner(), Some(Player::Player1));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(!GameStatus::Ongoing.is_over());
        assert!(GameStatus::Draw.is_over());
    }
}
