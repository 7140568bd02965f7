//! Exhaustive minimax search for the computer player.
//!
//! Scores are fixed: a computer win is worth [`WIN_SCORE`], a loss the
//! negation, a draw zero. Depth is not discounted, so a slow forced win ranks
//! the same as an immediate one. Ties go to the lowest cell index.
//!
//! The search works on the caller's board. Every tentative mark is placed
//! through a `Tentative` guard, which clears the square again when it goes out of
//! scope, so the board comes back exactly as it was lent.

use crate::rules::check_game_end;
use crate::{Board, GameResult, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a terminal position won by the computer.
pub const WIN_SCORE: i32 = 10;

/// A mark placed for the duration of one search branch.
struct Tentative<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Tentative<'a> {
    fn place(board: &'a mut Board, position: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(position));
        board.set(position, Square::Occupied(player));
        Self { board, position }
    }
}

impl Deref for Tentative<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Square::Empty);
    }
}

/// Returns the optimal cell for `computer`, who is to move.
///
/// Returns `None` when the board has no empty square. The board is restored
/// before returning.
#[instrument(skip(board), fields(empty = board.empty_positions().count()))]
pub fn best_move(board: &mut Board, computer: Player) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let score = {
            let mut placed = Tentative::place(board, pos, computer);
            score_after(&mut placed, computer, computer)
        };
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "Minimax selected move");
    }
    best.map(|(pos, _)| pos)
}

/// Scores a position with `to_move` to play, from the computer's side.
///
/// Terminal boards are scored against the player who moved last.
pub fn minimax_score(board: &mut Board, computer: Player, to_move: Player) -> i32 {
    score_after(board, computer, to_move.opponent())
}

/// Scores the board right after `last_mover` placed a mark.
fn score_after(board: &mut Board, computer: Player, last_mover: Player) -> i32 {
    match check_game_end(board, last_mover) {
        GameResult::Win(winner) if winner == computer => WIN_SCORE,
        GameResult::Win(_) => -WIN_SCORE,
        GameResult::Draw => 0,
        GameResult::InProgress => score_to_move(board, computer, last_mover.opponent()),
    }
}

/// Inner ply: only the extreme score matters, not which cell produced it.
fn score_to_move(board: &mut Board, computer: Player, to_move: Player) -> i32 {
    let maximizing = to_move == computer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        let mut placed = Tentative::place(board, pos, to_move);
        let score = score_after(&mut placed, computer, to_move);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Picks an empty cell uniformly at random.
///
/// Returns `None` when the board has no empty square.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let choice = Position::valid_moves(board).choose(rng).copied();
    if let Some(pos) = choice {
        debug!(position = %pos, "Random move selected");
    }
    choice
}
