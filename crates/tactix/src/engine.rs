//! Exhaustive minimax search for the optimal move.
//!
//! The search is scored from O's perspective: O is the maximizer,
//! X the minimizer. The 9-cell board bounds the tree to at most 9!
//! nodes, so the search runs full depth with no pruning, caching,
//! or move ordering. Correctness and determinism over performance.

use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Score for a board where X has won, from O's perspective.
pub const X_WIN_SCORE: i32 = -10;
/// Score for a board where O has won, from O's perspective.
pub const O_WIN_SCORE: i32 = 10;
/// Score for a drawn board.
pub const DRAW_SCORE: i32 = 0;

/// Outcome of a minimax search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move, or `None` on a terminal board.
    pub index: Option<usize>,
    /// The score of the position under optimal play by both sides.
    pub score: i32,
}

/// Recursive minimax over `board` with `to_move` to play.
///
/// The board is mutated in place and restored before returning, so
/// callers should pass a scratch copy rather than an authoritative
/// board. Terminal boards are detected before move generation in a
/// fixed order (X win, O win, full); this order is sound because a
/// legal board cannot hold two completed lines of different players.
///
/// Ties between equally scored moves resolve to the lowest index,
/// since candidates are tried in ascending order and only a strictly
/// better score replaces the incumbent.
pub fn search(board: &mut Board, to_move: Player) -> SearchResult {
    if rules::winning_line(board, Player::X).is_some() {
        return SearchResult {
            index: None,
            score: X_WIN_SCORE,
        };
    }
    if rules::winning_line(board, Player::O).is_some() {
        return SearchResult {
            index: None,
            score: O_WIN_SCORE,
        };
    }
    if board.is_full() {
        return SearchResult {
            index: None,
            score: DRAW_SCORE,
        };
    }

    let mut best: Option<SearchResult> = None;
    for pos in 0..9 {
        if !board.is_empty(pos) {
            continue;
        }

        board
            .set(pos, Square::Occupied(to_move))
            .expect("position is in bounds");
        let score = search(board, to_move.opponent()).score;
        board.set(pos, Square::Empty).expect("position is in bounds");

        let better = match best {
            None => true,
            Some(incumbent) => match to_move {
                Player::O => score > incumbent.score,
                Player::X => score < incumbent.score,
            },
        };
        if better {
            best = Some(SearchResult {
                index: Some(pos),
                score,
            });
        }
    }

    best.expect("non-terminal board has at least one empty square")
}

/// Returns the optimal move for O on `board`, assuming optimal play
/// by both sides thereafter.
///
/// Returns `None` on a terminal board. The search operates on a
/// private copy; the caller's board is never mutated.
#[instrument]
pub fn best_move(board: &Board) -> Option<usize> {
    let mut scratch = board.clone();
    search(&mut scratch, Player::O).index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [Option<Player>; 9]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks.into_iter().enumerate() {
            if let Some(player) = mark {
                board.set(pos, Square::Occupied(player)).unwrap();
            }
        }
        board
    }

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);
    const E: Option<Player> = None;

    #[test]
    fn test_blocks_immediate_loss() {
        // X X _ / _ O _ / _ _ O - O must block at 2
        let board = board_from([X, X, E, E, O, E, E, E, O]);
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn test_winning_beats_blocking() {
        // O O _ / X X _ / _ _ _ - O wins at 2 rather than blocking at 5
        let board = board_from([O, O, E, X, X, E, E, E, E]);
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn test_empty_board_returns_valid_index() {
        let board = Board::new();
        let pos = best_move(&board).unwrap();
        assert!(pos < 9);
    }

    #[test]
    fn test_terminal_board_returns_none() {
        // X already won the top row
        let board = board_from([X, X, X, O, O, E, E, E, E]);
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn test_caller_board_not_mutated() {
        let board = board_from([X, X, E, E, O, E, E, E, O]);
        let snapshot = board.clone();
        best_move(&board);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_tie_break_keeps_lowest_index() {
        // O wins immediately at 2, 7, or 8; ascending order with a
        // strict comparison keeps the first, index 2.
        let board = board_from([O, O, E, X, O, X, X, E, E]);
        let result = search(&mut board.clone(), Player::O);
        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, O_WIN_SCORE);
    }

    #[test]
    fn test_minimizer_picks_least_score() {
        // X to move with a win at 2: the minimizer should take it,
        // scoring X_WIN_SCORE from O's perspective.
        let board = board_from([X, X, E, O, O, E, E, E, E]);
        let result = search(&mut board.clone(), Player::X);
        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, X_WIN_SCORE);
    }
}
