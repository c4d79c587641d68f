//! The read-move, play, print loop.

use crate::config::{BoardStyle, UiConfig};
use crate::input::{InputError, parse_move};
use std::io::{self, BufRead, Write};
use tictactoe_engine::{Engine, GameStatus, SIZE};
use tracing::{debug, info, instrument, warn};

const INSTRUCTIONS: &str = "Two players will play this game. At each turn, play a move (for the \
specified player) by inputting row and column separated by {sep}, like '1{sep}0'. If input is \
invalid, it will ask you to try again. When you play a valid move, it will display the resultant \
board. When game ends, it will display the end-game status.";

/// Renders a symbol grid in the given style, one line per row.
pub fn render_board(grid: &[[&str; SIZE]; SIZE], style: BoardStyle) -> String {
    match style {
        BoardStyle::List => grid
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|s| format!("'{}'", s)).collect();
                format!("[{}]\n", cells.join(", "))
            })
            .collect(),
        BoardStyle::Grid => {
            let rows: Vec<String> = grid.iter().map(|row| row.join("|")).collect();
            format!("{}\n", rows.join("\n-+-+-\n"))
        }
    }
}

/// A text session: one engine driven by lines read from `input`.
pub struct TextInterface<R, W> {
    engine: Engine,
    config: UiConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextInterface<R, W> {
    /// Creates a session over a fresh engine.
    pub fn new(config: UiConfig, input: R, output: W) -> Self {
        Self {
            engine: Engine::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the engine being played on.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the game is won or drawn, or input runs out.
    ///
    /// Returns the final status; [`GameStatus::Ongoing`] means the input
    /// ended before the game did.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the input or output streams.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<GameStatus> {
        writeln!(self.output, "Starting a game of tic-tac-toe.")?;
        if *self.config.show_instructions() {
            let sep = self.config.separator().to_string();
            writeln!(self.output, "{}", INSTRUCTIONS.replace("{sep}", &sep))?;
        }
        writeln!(self.output, "Starting board: ")?;
        self.print_board()?;

        let mut buf = Vec::new();
        loop {
            write!(
                self.output,
                "Please input your move (player {}): ",
                self.engine.active_player().number()
            )?;
            self.output.flush()?;

            // Invalid UTF-8 is malformed input and gets re-prompted like any other.
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                warn!("Input ended before the game finished");
                writeln!(self.output)?;
                return Ok(GameStatus::Ongoing);
            }
            let line = String::from_utf8_lossy(&buf);

            let (row, col) = match parse_move(&line, *self.config.separator()) {
                Ok(coords) => coords,
                Err(e) => {
                    debug!(error = %e, "Malformed move input");
                    self.print_invalid()?;
                    if let InputError::NotANumber { .. } = e {
                        writeln!(self.output, "Error message of invalid input: {}", e)?;
                    }
                    continue;
                }
            };

            if !self.engine.play_move(row, col) {
                self.print_invalid()?;
                continue;
            }

            self.print_board()?;

            let status = self.engine.compute_game_status();
            if let Some(winner) = status.winner() {
                writeln!(self.output, "Player {} wins the game!", winner.number())?;
            } else if status == GameStatus::Draw {
                writeln!(self.output, "The game ends in a draw!")?;
            } else {
                continue;
            }

            info!(%status, "Game finished");
            return Ok(status);
        }
    }

    fn print_board(&mut self) -> io::Result<()> {
        let grid = self.engine.visual_board();
        write!(
            self.output,
            "{}",
            render_board(&grid, *self.config.board_style())
        )
    }

    fn print_invalid(&mut self) -> io::Result<()> {
        let sep = self.config.separator();
        writeln!(
            self.output,
            "Invalid input. Input position must be within the board, and not already be \
             occupied. Example of valid input: '1{}2' (without the quotes)",
            sep
        )
    }
}
