//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Player, Square};
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Returns `Some((player, line))` if `player` holds all three squares of
/// `line`, `None` otherwise.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let first = board.get(a);
        match first {
            Square::Occupied(player) if board.get(b) == first && board.get(c) == first => {
                Some((player, line))
            }
            _ => None,
        }
    })
}
