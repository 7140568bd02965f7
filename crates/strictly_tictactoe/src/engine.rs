//! Tournament engine: the authoritative board, turn order, rounds and scores.
//!
//! The engine never reports errors for bad input. A move on an occupied or
//! out-of-range cell, a move outside [`Phase::AwaitingMove`], a human move on
//! the computer's turn, or an early [`TournamentEngine::advance_round`] is
//! ignored and leaves every field untouched.

use crate::config::{ConfigError, Opponent, RoundOpener, TournamentConfig};
use crate::difficulty::{Difficulty, select_move};
use crate::invariants::assert_invariants;
use crate::rules::check_game_end;
use crate::scoreboard::{Scoreboard, TournamentWinner};
use crate::{Board, GameResult, Player, Position, Square};
use derive_getters::Getters;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the engine is in the tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// A move may be placed.
    AwaitingMove,
    /// The round ended; `winner` is `None` for a draw.
    RoundOver {
        /// Winner of the round.
        winner: Option<Player>,
    },
    /// All rounds are played.
    TournamentOver(TournamentWinner),
}

/// Status message class for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The player is to move.
    Turn(Player),
    /// The player won the round.
    Win {
        /// Round winner.
        player: Player,
        /// 1-based round number.
        round: u32,
    },
    /// The round was drawn.
    Draw {
        /// 1-based round number.
        round: u32,
    },
    /// The tournament is over.
    TournamentEnd(TournamentWinner),
}

/// Read-only view of the engine after a transition.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board squares.
    board: Board,
    /// Player holding the turn marker.
    current_player: Player,
    /// 1-based round number.
    round: u32,
    /// Rounds in the tournament.
    total_rounds: u32,
    /// Rounds won per player.
    scores: Scoreboard,
    /// Status message class.
    status: Status,
    /// State machine phase.
    phase: Phase,
    /// Human or computer opponent.
    opponent: Opponent,
    /// Computer strength.
    difficulty: Difficulty,
    /// Mark played by the computer.
    computer_player: Player,
    /// Whether [`TournamentEngine::apply_move`] would currently be accepted.
    accepts_moves: bool,
    /// Whether the collaborator should call [`TournamentEngine::play_computer_move`].
    computer_to_move: bool,
}

/// Owns all mutable game state for one tournament at a time.
#[derive(Debug, Clone)]
pub struct TournamentEngine {
    config: TournamentConfig,
    board: Board,
    current_player: Player,
    round_opener: Player,
    round: u32,
    scores: Scoreboard,
    phase: Phase,
    rng: ChaCha8Rng,
}

impl TournamentEngine {
    /// Creates an engine and starts the configured tournament.
    #[instrument(skip(config))]
    pub fn new(config: TournamentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = seeded_rng(*config.seed());
        let mut engine = Self {
            config,
            board: Board::new(),
            current_player: Player::X,
            round_opener: Player::X,
            round: 1,
            scores: Scoreboard::new(),
            phase: Phase::AwaitingMove,
            rng,
        };
        engine.reset();
        Ok(engine)
    }

    /// Starts a new tournament, discarding scores and the current board.
    ///
    /// On a validation error the running tournament is left as it was.
    #[instrument(skip(self, config))]
    pub fn start_tournament(&mut self, config: TournamentConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.rng = seeded_rng(*config.seed());
        self.config = config;
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.scores.reset();
        self.round = 1;
        self.board.clear();
        self.current_player = Player::X;
        self.round_opener = Player::X;
        self.phase = Phase::AwaitingMove;
        info!(
            opponent = %self.config.opponent(),
            difficulty = %self.config.difficulty(),
            total_rounds = *self.config.total_rounds(),
            "Tournament started"
        );
    }

    /// Places the current player's mark at cell `index` (0-8).
    ///
    /// Returns `false` and changes nothing when the move is not acceptable.
    #[instrument(skip(self), fields(round = self.round, player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        if self.computer_to_move() {
            debug!(index, "Ignoring move on the computer's turn");
            return false;
        }
        let Some(pos) = Position::from_index(index) else {
            debug!(index, "Ignoring out-of-range cell");
            return false;
        };
        self.place(pos)
    }

    /// Lets the computer choose and play its move.
    ///
    /// Returns the chosen cell, or `None` when the computer is not due to move.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_computer_move(&mut self) -> Option<Position> {
        if !self.computer_to_move() {
            debug!("Computer is not due to move");
            return None;
        }
        let computer = *self.config.computer_player();
        let difficulty = *self.config.difficulty();
        let probability = *self.config.optimal_move_probability();

        let pos = select_move(
            &mut self.board,
            computer,
            difficulty,
            probability,
            &mut self.rng,
        )?;
        self.place(pos).then_some(pos)
    }

    fn place(&mut self, pos: Position) -> bool {
        if self.phase != Phase::AwaitingMove {
            debug!(position = %pos, phase = ?self.phase, "Ignoring move outside of play");
            return false;
        }
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Ignoring move on occupied square");
            return false;
        }

        let mover = self.current_player;
        self.board.set(pos, Square::Occupied(mover));
        assert_invariants(&self.board, self.round_opener, mover);
        debug!(position = %pos, player = %mover, "Move applied");

        match check_game_end(&self.board, mover) {
            GameResult::Win(winner) => {
                self.scores.record_win(winner);
                self.phase = Phase::RoundOver {
                    winner: Some(winner),
                };
                info!(
                    round = self.round,
                    winner = %winner,
                    x = self.scores.wins(Player::X),
                    o = self.scores.wins(Player::O),
                    "Round won"
                );
            }
            GameResult::Draw => {
                self.phase = Phase::RoundOver { winner: None };
                info!(round = self.round, "Round drawn");
            }
            GameResult::InProgress => {
                self.current_player = mover.opponent();
            }
        }
        true
    }

    /// Moves on from a finished round.
    ///
    /// Starts the next round, or ends the tournament after the last one.
    /// Returns `false` and changes nothing outside [`Phase::RoundOver`].
    #[instrument(skip(self), fields(round = self.round))]
    pub fn advance_round(&mut self) -> bool {
        if !matches!(self.phase, Phase::RoundOver { .. }) {
            warn!(phase = ?self.phase, "advance_round called before the round ended");
            return false;
        }

        if self.round < *self.config.total_rounds() {
            let opener = match self.config.round_opener() {
                RoundOpener::Persist => self.current_player,
                RoundOpener::Alternate => self.round_opener.opponent(),
                RoundOpener::AlwaysX => Player::X,
            };
            self.round += 1;
            self.board.clear();
            self.round_opener = opener;
            self.current_player = opener;
            self.phase = Phase::AwaitingMove;
            info!(round = self.round, opener = %opener, "Round started");
        } else {
            let winner = self.scores.leader();
            self.phase = Phase::TournamentOver(winner);
            info!(?winner, "Tournament finished");
        }
        true
    }

    /// Whether a computer opponent holds the turn.
    pub fn computer_to_move(&self) -> bool {
        self.phase == Phase::AwaitingMove
            && *self.config.opponent() == Opponent::Computer
            && self.current_player == *self.config.computer_player()
    }

    /// Whether a human move would currently be accepted.
    pub fn accepts_moves(&self) -> bool {
        self.phase == Phase::AwaitingMove && !self.computer_to_move()
    }

    /// Status message class for the current state.
    pub fn status(&self) -> Status {
        match self.phase {
            Phase::AwaitingMove => Status::Turn(self.current_player),
            Phase::RoundOver {
                winner: Some(player),
            } => Status::Win {
                player,
                round: self.round,
            },
            Phase::RoundOver { winner: None } => Status::Draw { round: self.round },
            Phase::TournamentOver(winner) => Status::TournamentEnd(winner),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player holding the turn marker.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// 1-based round number.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Rounds won per player.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// State machine phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Active configuration.
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Captures the state a presentation layer renders.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            round: self.round,
            total_rounds: *self.config.total_rounds(),
            scores: self.scores,
            status: self.status(),
            phase: self.phase,
            opponent: *self.config.opponent(),
            difficulty: *self.config.difficulty(),
            computer_player: *self.config.computer_player(),
            accepts_moves: self.accepts_moves(),
            computer_to_move: self.computer_to_move(),
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_humans(rounds: u32) -> TournamentEngine {
        TournamentEngine::new(TournamentConfig::new(
            Opponent::Human,
            Difficulty::Easy,
            rounds,
        ))
        .unwrap()
    }

    #[test]
    fn test_new_engine_awaits_x() {
        let engine = two_humans(3);
        assert_eq!(engine.phase(), Phase::AwaitingMove);
        assert_eq!(engine.status(), Status::Turn(Player::X));
        assert_eq!(engine.round(), 1);
        assert!(engine.accepts_moves());
    }

    #[test]
    fn test_move_flips_turn() {
        let mut engine = two_humans(1);
        assert!(engine.apply_move(4));
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(engine.current_player(), Player::O);
    }

    #[test]
    fn test_occupied_and_out_of_range_ignored() {
        let mut engine = two_humans(1);
        engine.apply_move(4);
        let before = engine.snapshot();
        assert!(!engine.apply_move(4));
        assert!(!engine.apply_move(9));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_advance_before_round_end_ignored() {
        let mut engine = two_humans(2);
        engine.apply_move(0);
        let before = engine.snapshot();
        assert!(!engine.advance_round());
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_invalid_restart_keeps_running_tournament() {
        let mut engine = two_humans(2);
        engine.apply_move(0);
        let before = engine.snapshot();
        let result = engine.start_tournament(TournamentConfig::default().with_total_rounds(0));
        assert!(result.is_err());
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_computer_not_due_against_human() {
        let mut engine = two_humans(1);
        engine.apply_move(0);
        assert!(!engine.computer_to_move());
        assert_eq!(engine.play_computer_move(), None);
    }
}
