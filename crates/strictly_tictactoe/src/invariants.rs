//! Board invariants checked by the engine in debug builds.

use crate::rules::winner;
use crate::{Board, Player};
use tracing::{instrument, warn};

/// Invariant: the round opener has placed as many marks as the other player,
/// or exactly one more.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the mark counts against the round opener.
    #[instrument(skip(board))]
    pub fn holds(board: &Board, opener: Player) -> bool {
        let opener_count = board.count(opener);
        let other_count = board.count(opener.opponent());

        let valid = opener_count == other_count || opener_count == other_count + 1;
        if !valid {
            warn!(opener_count, other_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: at most one player holds a complete line, and only the player
/// who moved last can hold it.
pub struct SingleWinner;

impl SingleWinner {
    /// Checks that any complete line belongs to `last_mover`.
    #[instrument(skip(board))]
    pub fn holds(board: &Board, last_mover: Player) -> bool {
        let valid = winner(board).is_none_or(|player| player == last_mover);
        if !valid {
            warn!(?last_mover, "Line held by a player who did not move last");
        }
        valid
    }
}

/// Asserts board invariants after a move (panics on violation in debug builds).
pub fn assert_invariants(board: &Board, opener: Player, last_mover: Player) {
    debug_assert!(
        BoardConsistent::holds(board, opener),
        "Board consistency violated"
    );
    debug_assert!(
        SingleWinner::holds(board, last_mover),
        "Line held by the wrong player"
    );
}
