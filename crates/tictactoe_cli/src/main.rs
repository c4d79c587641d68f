//! Tic-tac-toe - play in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{Cli, TextInterface, UiConfig};
use tictactoe_engine::GameStatus;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let mut config = match &cli.config {
        Some(path) => UiConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => UiConfig::default(),
    };
    if cli.quiet {
        config = config.hide_instructions();
    }

    run(config)
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(directive: Option<&str>) {
    let filter = match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(config))]
fn run(config: UiConfig) -> Result<()> {
    info!("Starting tic-tac-toe session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = TextInterface::new(config, stdin.lock(), stdout.lock());
    let status = session.run().context("terminal I/O failed")?;

    if status == GameStatus::Ongoing {
        eprintln!("Input closed before the game finished.");
    }

    Ok(())
}
