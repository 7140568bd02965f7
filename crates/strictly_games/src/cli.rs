//! Command-line interface for strictly_games.

use clap::Parser;
use std::path::PathBuf;
use strictly_tictactoe::{ConfigError, Difficulty, Opponent, TournamentConfig};
use tracing::instrument;

/// Strictly Games - tic-tac-toe tournaments in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play a tic-tac-toe tournament against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML tournament config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Opponent: human or computer (overrides the config file)
    #[arg(long)]
    pub opponent: Option<Opponent>,

    /// Computer strength: easy, medium or hard (overrides the config file)
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Number of rounds (overrides the config file)
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer replies and between rounds, in milliseconds
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,
}

impl Cli {
    /// Builds the tournament config from the file (if any) and flag overrides.
    #[instrument(skip(self))]
    pub fn tournament_config(&self) -> Result<TournamentConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::from_file(path)?,
            None => TournamentConfig::default(),
        };
        if let Some(opponent) = self.opponent {
            config = config.with_opponent(opponent);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(rounds) = self.rounds {
            config = config.with_total_rounds(rounds);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }
        config.validate()?;
        Ok(config)
    }
}
