//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().flatten().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::tests::fill;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill([[1, 2, 1], [2, 1, 2], [2, 1, 0]]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        // X O X / O X X / O X O
        let board = fill([[1, 2, 1], [2, 1, 1], [2, 1, 2]]);
        assert!(is_full(&board));
    }
}
