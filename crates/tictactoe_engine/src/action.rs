//! Move rejection reasons.

use crate::Position;

/// Why a move was not applied.
///
/// Rejection is a normal outcome of play, not a fault: the engine is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Position ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),
}
