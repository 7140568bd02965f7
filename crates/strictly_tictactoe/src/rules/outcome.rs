//! Composite terminal test.

use super::{check_draw, check_win};
use crate::{Board, GameResult, Player};

/// Classifies the board after `last_mover` has placed a mark.
///
/// A complete line wins for the last mover; otherwise a full board is a
/// draw. Win takes priority over a full board.
pub fn check_game_end(board: &Board, last_mover: Player) -> GameResult {
    if check_win(board) {
        GameResult::Win(last_mover)
    } else if check_draw(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
