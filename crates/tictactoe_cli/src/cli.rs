//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against another human in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with interface settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the instructions printed before the first move
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter directive (overrides RUST_LOG), e.g. "debug"
    #[arg(long)]
    pub log_level: Option<String>,
}
