//! Tic-tac-toe tournament engine with a minimax computer opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw/terminal checks over a [`Board`]
//! - **Search**: exhaustive minimax on a borrowed board, plus a random move
//! - **Difficulty**: chooses between the two for the computer player
//! - **Engine**: [`TournamentEngine`] owns the board, turn order, rounds and
//!   scores, and is driven by a presentation layer through
//!   [`TournamentEngine::apply_move`], [`TournamentEngine::play_computer_move`]
//!   and [`TournamentEngine::advance_round`]
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Difficulty, Opponent, Status, TournamentConfig, TournamentEngine};
//!
//! let config = TournamentConfig::new(Opponent::Computer, Difficulty::Hard, 1).with_seed(Some(7));
//! let mut engine = TournamentEngine::new(config)?;
//!
//! assert!(engine.apply_move(4));
//! let reply = engine.play_computer_move();
//! assert!(reply.is_some());
//! assert!(matches!(engine.status(), Status::Turn(_)));
//! # Ok::<(), strictly_tictactoe::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod difficulty;
mod engine;
mod invariants;
mod position;
pub mod rules;
mod scoreboard;
pub mod search;
mod types;

pub use config::{ConfigError, Opponent, RoundOpener, TournamentConfig};
pub use difficulty::{DEFAULT_OPTIMAL_MOVE_PROBABILITY, Difficulty, select_move};
pub use engine::{Phase, Snapshot, Status, TournamentEngine};
pub use invariants::{BoardConsistent, SingleWinner};
pub use position::Position;
pub use scoreboard::{Scoreboard, TournamentWinner};
pub use search::{WIN_SCORE, best_move, minimax_score, random_move};
pub use types::{Board, GameResult, Player, Square};
