//! Strictly Games - terminal tic-tac-toe tournaments.

#![warn(missing_docs)]

mod cli;
mod shell;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use shell::Shell;
use std::time::Duration;
use strictly_tictactoe::TournamentEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays the game transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.tournament_config()?;
    info!(?config, "Starting tournament");

    let engine = TournamentEngine::new(config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(
        engine,
        stdin.lock(),
        stdout.lock(),
        Duration::from_millis(cli.delay_ms),
    );
    shell.run()
}
