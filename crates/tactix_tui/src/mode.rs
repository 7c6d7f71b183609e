//! Game mode selection.

/// Game mode - who is the opponent?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    #[default]
    PvP,
    /// Human as X against the minimax AI as O.
    VsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::PvP => "Player vs Player",
            GameMode::VsAi => "Player vs AI",
        }
    }
}
