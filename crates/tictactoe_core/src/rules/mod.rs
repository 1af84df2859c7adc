//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the session
//! so they can be evaluated on any board, including snapshots.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use super::{Board, Line, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board after a move.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody has won and empty squares remain.
    #[display("In progress")]
    Ongoing,
    /// `player` completed `line`.
    #[display("Player {player} wins ({line})")]
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full without a completed line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Returns true once the round is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Evaluates a board.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// completed line is reported. A full board without a line is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Win { player, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}
