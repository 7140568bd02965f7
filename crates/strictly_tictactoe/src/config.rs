//! Tournament configuration.

use crate::Player;
use crate::difficulty::{DEFAULT_OPTIMAL_MOVE_PROBABILITY, Difficulty};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who sits across from the first human.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Opponent {
    /// Two humans share the board.
    Human,
    /// The engine plays one side.
    #[default]
    Computer,
}

/// Which player opens the next round of a tournament.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum RoundOpener {
    /// The player who made the last move of the previous round opens.
    #[default]
    Persist,
    /// The previous round's opener hands the first move to the opponent.
    Alternate,
    /// X opens every round.
    AlwaysX,
}

/// Settings fixed at tournament start.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TournamentConfig {
    /// Human or computer opponent.
    #[serde(default)]
    opponent: Opponent,

    /// Computer strength (ignored against a human opponent).
    #[serde(default)]
    difficulty: Difficulty,

    /// Number of rounds in the tournament (at least one).
    #[serde(default = "default_total_rounds")]
    total_rounds: u32,

    /// The mark the computer plays.
    #[serde(default = "default_computer_player")]
    computer_player: Player,

    /// Opening policy between rounds.
    #[serde(default)]
    round_opener: RoundOpener,

    /// Chance that a medium computer plays the minimax move.
    #[serde(default = "default_optimal_move_probability")]
    optimal_move_probability: f64,

    /// Seed for the computer's random choices; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_total_rounds() -> u32 {
    3
}

fn default_computer_player() -> Player {
    Player::O
}

fn default_optimal_move_probability() -> f64 {
    DEFAULT_OPTIMAL_MOVE_PROBABILITY
}

impl TournamentConfig {
    /// Creates a configuration with default opener policy, mark and seed.
    #[instrument]
    pub fn new(opponent: Opponent, difficulty: Difficulty, total_rounds: u32) -> Self {
        Self {
            opponent,
            difficulty,
            total_rounds,
            ..Self::default()
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            opponent = %config.opponent,
            difficulty = %config.difficulty,
            total_rounds = config.total_rounds,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values a tournament cannot start with.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::new(
                "total_rounds must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.optimal_move_probability) {
            return Err(ConfigError::new(format!(
                "optimal_move_probability must be within 0.0..=1.0, got {}",
                self.optimal_move_probability
            )));
        }
        Ok(())
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            opponent: Opponent::default(),
            difficulty: Difficulty::default(),
            total_rounds: default_total_rounds(),
            computer_player: default_computer_player(),
            round_opener: RoundOpener::default(),
            optimal_move_probability: default_optimal_move_probability(),
            seed: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
