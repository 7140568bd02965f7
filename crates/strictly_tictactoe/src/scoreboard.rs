//! Running win counts for a tournament.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Final result of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TournamentWinner {
    /// The player with the strictly higher score.
    Champion(Player),
    /// Both players won the same number of rounds.
    Tie,
}

/// Rounds won by each player. Draws are not recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Credits `player` with a round win.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    /// Zeroes both counts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The player ahead, or a tie on equal scores.
    pub fn leader(&self) -> TournamentWinner {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Greater => TournamentWinner::Champion(Player::X),
            std::cmp::Ordering::Less => TournamentWinner::Champion(Player::O),
            std::cmp::Ordering::Equal => TournamentWinner::Tie,
        }
    }
}
