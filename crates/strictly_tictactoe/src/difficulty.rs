//! Difficulty-weighted move selection for the computer player.

use crate::search::{best_move, random_move};
use crate::{Board, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Chance that a medium computer plays the minimax move.
pub const DEFAULT_OPTIMAL_MOVE_PROBABILITY: f64 = 0.7;

/// How strongly the computer plays.
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
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random among empty cells.
    Easy,
    /// Minimax with a configurable probability, random otherwise.
    #[default]
    Medium,
    /// Always minimax.
    Hard,
}

/// Chooses the computer's move for the given difficulty.
///
/// `optimal_probability` only matters for [`Difficulty::Medium`] and is
/// clamped to `0.0..=1.0`. Returns `None` when the board has no empty square.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &mut Board,
    computer: Player,
    difficulty: Difficulty,
    optimal_probability: f64,
    rng: &mut R,
) -> Option<Position> {
    let optimal = match difficulty {
        Difficulty::Easy => false,
        Difficulty::Hard => true,
        Difficulty::Medium if optimal_probability.is_nan() => false,
        Difficulty::Medium => rng.gen_bool(optimal_probability.clamp(0.0, 1.0)),
    };
    trace!(optimal, "Dispatching move selection");

    if optimal {
        best_move(board, computer)
    } else {
        random_move(board, rng)
    }
}
