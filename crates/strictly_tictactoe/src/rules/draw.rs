//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// Only meaningful as a draw once [`super::check_win`] has returned false:
/// a full board can also hold a complete line.
pub fn check_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
