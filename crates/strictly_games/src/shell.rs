//! Line-based terminal shell driving a [`TournamentEngine`].
//!
//! The shell owns presentation only: rendering, reading cell choices and
//! pacing. Every rule decision is delegated to the engine.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_tictactoe::{
    Phase, Player, Position, Snapshot, Status, TournamentEngine, TournamentWinner,
};
use tracing::{debug, instrument};

/// Terminal collaborator for one tournament.
pub struct Shell<R, W> {
    engine: TournamentEngine,
    input: R,
    output: W,
    delay: Duration,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell around a started engine.
    pub fn new(engine: TournamentEngine, input: R, output: W, delay: Duration) -> Self {
        Self {
            engine,
            input,
            output,
            delay,
        }
    }

    /// Plays until the tournament ends, the input closes, or the player quits.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        self.render()?;

        loop {
            match self.engine.phase() {
                Phase::AwaitingMove if self.engine.computer_to_move() => {
                    self.pause();
                    if let Some(pos) = self.engine.play_computer_move() {
                        writeln!(self.output, "Computer plays {}", pos)?;
                    }
                    self.render()?;
                }
                Phase::AwaitingMove => {
                    write!(self.output, "> ")?;
                    self.output.flush()?;

                    let mut line = String::new();
                    if self.input.read_line(&mut line)? == 0 {
                        debug!("Input closed");
                        return Ok(());
                    }
                    let line = line.trim();
                    if matches!(line, "q" | "quit") {
                        writeln!(self.output, "Goodbye.")?;
                        return Ok(());
                    }
                    match Position::from_label_or_number(line) {
                        Some(pos) if self.engine.apply_move(pos.to_index()) => self.render()?,
                        Some(pos) => writeln!(self.output, "{} is already taken.", pos)?,
                        None => writeln!(
                            self.output,
                            "Enter a cell number 1-9 or a name like \"center\"."
                        )?,
                    }
                }
                Phase::RoundOver { .. } => {
                    self.pause();
                    self.engine.advance_round();
                    self.render()?;
                }
                Phase::TournamentOver(_) => return Ok(()),
            }
        }
    }

    /// Hands the engine back, e.g. to inspect the final state.
    pub fn into_engine(self) -> TournamentEngine {
        self.engine
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }

    fn render(&mut self) -> Result<()> {
        let snapshot = self.engine.snapshot();
        writeln!(self.output)?;
        writeln!(self.output, "{}", snapshot.board().display())?;
        writeln!(self.output, "{}", scoreline(&snapshot))?;
        writeln!(self.output, "{}", describe(&snapshot))?;
        Ok(())
    }
}

fn scoreline(snapshot: &Snapshot) -> String {
    format!(
        "Round {}/{}  X: {}  O: {}",
        snapshot.round(),
        snapshot.total_rounds(),
        snapshot.scores().wins(Player::X),
        snapshot.scores().wins(Player::O)
    )
}

/// Renders the status message class as text.
fn describe(snapshot: &Snapshot) -> String {
    let x = snapshot.scores().wins(Player::X);
    let o = snapshot.scores().wins(Player::O);
    match snapshot.status() {
        Status::Turn(player) if *snapshot.computer_to_move() => {
            format!("{}'s turn (computer)", player)
        }
        Status::Turn(player) => format!("{}'s turn", player),
        Status::Win { player, round } => format!("{} wins round {}!", player, round),
        Status::Draw { round } => format!("Round {} is a draw!", round),
        Status::TournamentEnd(TournamentWinner::Champion(player)) => {
            format!("Tournament over: {} wins {}-{}", player, x.max(o), x.min(o))
        }
        Status::TournamentEnd(TournamentWinner::Tie) => {
            format!("Tournament over: tie {}-{}", x, o)
        }
    }
}
