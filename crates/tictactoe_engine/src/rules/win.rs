//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] holding three of
/// that player's marks, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in positions {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Player::Player2, &line);
            assert_eq!(check_winner(&board), Some(Player::Player2), "line {line:?}");
        }
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::Player1,
            &[Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
        );
        assert_eq!(check_winner(&board), Some(Player::Player1));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::Player2,
            &[Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
        );
        assert_eq!(check_winner(&board), Some(Player::Player2));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::Player1, &[Position::at(0, 0), Position::at(0, 1)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::Player1, &[Position::at(0, 0), Position::at(0, 1)]);
        board.set(Position::at(0, 2), Square::Occupied(Player::Player2));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lines_are_distinct_triples() {
        for (i, a) in LINES.iter().enumerate() {
            for b in &LINES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
