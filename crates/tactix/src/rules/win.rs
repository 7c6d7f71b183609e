//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines in fixed enumeration order (0-8, row-major).
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Returns the first line (in `LINES` order) fully occupied by `player`.
///
/// A legal board has at most one completed line per terminal check;
/// if a malformed board has several, the first in enumeration order
/// is reported.
#[instrument]
pub fn winning_line(board: &Board, player: Player) -> Option<[usize; 3]> {
    LINES
        .into_iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == Some(Square::Occupied(player))))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Some(Square::Occupied(player)) => Some(player),
                _ => None,
            };
        }
    }

    None
}
