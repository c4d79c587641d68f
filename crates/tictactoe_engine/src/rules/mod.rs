//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Status is recomputed from the whole
//! board on every call; nothing is cached between moves.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Classifies the board: a completed line wins, then a full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::won_by(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}
