//! Text interface for playing tic-tac-toe at a terminal.
//!
//! Reads `row,col` moves from a line-oriented input, applies them to a
//! [`tictactoe_engine::Engine`], and prints the board and the final result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod ui;

pub use cli::Cli;
pub use config::{BoardStyle, ConfigError, UiConfig};
pub use input::{InputError, parse_move};
pub use ui::{TextInterface, render_board};
