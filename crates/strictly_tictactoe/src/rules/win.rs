//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};

/// The eight lines that win when uniformly occupied.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player holding a complete line, if any.
///
/// Called at every node of the search, so it is not instrumented.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    })
}

/// Checks if any line is held by a single player.
pub fn check_win(board: &Board) -> bool {
    winner(board).is_some()
}
