//! The game engine: one board, one active player.

use crate::rules;
use crate::{Board, GameStatus, MoveError, Player, Position, SIZE, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board and whose turn it is. Moves mutate it in place; the
/// status is derived from the board whenever it is asked for. Serializes
/// for inspection only; there is no way to load a game back in.
///
/// ```compile_fail
/// fn loadable<T: serde::de::DeserializeOwned>() {}
/// loadable::<tictactoe_engine::Engine>();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Engine {
    board: Board,
    active_player: Player,
}

impl Engine {
    /// Creates a new game with an empty board and player 1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next move places.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Places the active player's mark at `(row, col)`.
    ///
    /// Returns `false` when the coordinates are off the board or the
    /// square is taken. A rejected move leaves the engine unchanged.
    pub fn play_move(&mut self, row: i64, col: i64) -> bool {
        self.try_play_move(row, col).is_ok()
    }

    /// Like [`Engine::play_move`], but says why a move was rejected.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either coordinate is outside `0..3`.
    /// - [`MoveError::SquareOccupied`] if the target square is not empty.
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn try_play_move(&mut self, row: i64, col: i64) -> Result<Position, MoveError> {
        let Some(pos) = Position::new(row, col) else {
            debug!(row, col, "Rejected move off the board");
            return Err(MoveError::OutOfBounds { row, col });
        };

        if !self.board.is_empty(pos) {
            debug!(%pos, "Rejected move onto occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.active_player));
        self.active_player = self.active_player.opponent();
        debug!(%pos, next = %self.active_player, "Move applied");

        Ok(pos)
    }

    /// Board as display symbols: `" "` empty, `"X"` player 1, `"O"` player 2.
    ///
    /// The grid is a fresh copy; changing it does not touch the engine.
    pub fn visual_board(&self) -> [[&'static str; SIZE]; SIZE] {
        self.board.symbols()
    }

    /// Classifies the current board by scanning every line.
    #[instrument(skip(self))]
    pub fn compute_game_status(&self) -> GameStatus {
        let status = rules::evaluate(&self.board);
        debug!(%status, "Computed game status");
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine() {
        let engine = Engine::new();
        assert_eq!(engine.active_player(), Player::Player1);
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.compute_game_status(), GameStatus::Ongoing);
    }

    #[test]
    fn test_try_play_move_reports_reason() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.try_play_move(3, 1),
            Err(MoveError::OutOfBounds { row: 3, col: 1 })
        );
        let pos = engine.try_play_move(1, 1).unwrap();
        assert_eq!((pos.row(), pos.col()), (1, 1));
        assert_eq!(
            engine.try_play_move(1, 1),
            Err(MoveError::SquareOccupied(pos))
        );
        assert_eq!(engine.active_player(), Player::Player2);
    }

    #[test]
    fn test_move_error_messages() {
        let mut engine = Engine::new();
        let err = engine.try_play_move(-1, 4).unwrap_err();
        assert_eq!(err.to_string(), "Position (-1, 4) is outside the board");
        engine.play_move(0, 2);
        let err = engine.try_play_move(0, 2).unwrap_err();
        assert_eq!(err.to_string(), "Square (0, 2) is already occupied");
    }
}
