//! Application state and logic.

use crate::mode::GameMode;
use tactix::{engine, Game, GameStatus, Player};
use tracing::{debug, warn};

/// Main application state.
pub struct App {
    game: Game,
    mode: GameMode,
    status_message: String,
}

impl App {
    /// Creates a new application in player-vs-player mode.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            mode: GameMode::default(),
            status_message: turn_message(Player::X),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a human move at the given position (0-8).
    ///
    /// In AI mode the engine replies immediately whenever the game
    /// is still in progress and it is O's turn.
    pub fn make_move(&mut self, position: usize) {
        debug!(position, "human move");

        let player = self.game.current_player();
        if let Err(e) = self.game.apply_move(position, player) {
            // Illegal clicks are expected input; leave the state as-is.
            debug!(error = %e, "move rejected");
            return;
        }
        self.refresh_status();

        if self.mode == GameMode::VsAi
            && *self.game.status() == GameStatus::InProgress
            && self.game.current_player() == Player::O
        {
            self.ai_move();
        }
    }

    /// Plays the engine's move for O.
    fn ai_move(&mut self) {
        let Some(position) = engine::best_move(self.game.board()) else {
            warn!("engine invoked on terminal board");
            return;
        };
        debug!(position, "engine move");
        if let Err(e) = self.game.apply_move(position, Player::O) {
            warn!(error = %e, position, "engine move rejected");
            return;
        }
        self.refresh_status();
    }

    /// Restarts the game, keeping the current mode.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game.reset();
        self.status_message = turn_message(Player::X);
    }

    /// Switches mode and restarts, as the original mode buttons do.
    pub fn set_mode(&mut self, mode: GameMode) {
        debug!(?mode, "switching mode");
        self.mode = mode;
        self.restart();
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.game.status() {
            GameStatus::InProgress => turn_message(self.game.current_player()),
            GameStatus::Won { player, .. } => {
                format!("{player:?} wins! Press 'r' to restart or 'q' to quit.")
            }
            GameStatus::Draw => "It's a draw! Press 'r' to restart or 'q' to quit.".to_string(),
        };
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {player:?}'s turn. Press 1-9 to make a move.")
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
