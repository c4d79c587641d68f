//! Tic-tac-toe game engine.
//!
//! Board state, move validation, turn alternation, and win/draw detection
//! for two players on a fixed 3x3 grid.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, GameStatus};
//!
//! let mut engine = Engine::new();
//! assert!(engine.play_move(1, 1));
//! assert!(!engine.play_move(1, 1));
//! assert_eq!(engine.visual_board()[1][1], "X");
//! assert_eq!(engine.compute_game_status(), GameStatus::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod rules;
mod types;

pub use action::MoveError;
pub use engine::Engine;
pub use types::{Board, GameStatus, Player, Position, SIZE, Square};
