//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. They hold no state and accept any
//! arrangement of squares, reachable or not.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::check_draw;
pub use outcome::check_game_end;
pub use win::{LINES, check_win, winner};
