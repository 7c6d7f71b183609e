//! The stateful game manager for tic-tac-toe.

use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use derive_more::{Display, Error};
use tracing::instrument;

/// Errors that can occur when applying a move.
///
/// A rejected move leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
    /// The position is outside 0-8.
    #[display("position out of bounds (must be 0-8)")]
    OutOfBounds,
    /// The square is already occupied.
    #[display("square is already occupied")]
    SquareOccupied,
    /// The given player is not the current player.
    #[display("it is not that player's turn")]
    OutOfTurn,
}

/// Tic-tac-toe game engine: the single source of truth for board
/// contents and game status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game: empty board, X to move, in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Resets the game to its initial state.
    #[instrument]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Applies a move for `player` at position `pos` (0-8).
    ///
    /// On success the cell is marked and the game evaluates
    /// termination: a completed line sets `Won`, a full board sets
    /// `Draw`, otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Rejects moves on a finished game, out-of-bounds positions,
    /// occupied squares, and out-of-turn players. The state is
    /// unchanged on rejection.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: usize, player: Player) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if pos >= 9 {
            return Err(MoveError::OutOfBounds);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied);
        }
        if player != self.current_player {
            return Err(MoveError::OutOfTurn);
        }

        self.board
            .set(pos, Square::Occupied(player))
            .expect("position bounds already checked");

        if let Some(line) = rules::winning_line(&self.board, player) {
            self.status = GameStatus::Won { player, line };
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
        }

        Ok(())
    }

    /// Returns the first completed line held by `player`, if any.
    pub fn winning_line(&self, player: Player) -> Option<[usize; 3]> {
        rules::winning_line(&self.board, player)
    }

    /// Checks if the game is a draw (full board, no winner).
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
