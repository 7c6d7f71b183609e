//! Pure tic-tac-toe game logic with a perfect-play minimax engine.
//!
//! # Architecture
//!
//! - **Types**: board, players, squares, game status
//! - **Rules**: pure win/draw predicates over a board
//! - **Game**: the stateful game manager enforcing move legality
//! - **Engine**: exhaustive minimax search returning the optimal move
//!
//! # Example
//!
//! ```
//! use tactix::{engine, Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(4, Player::X)?;
//!
//! // O responds with the game-theoretically optimal move.
//! let pos = engine::best_move(game.board()).unwrap();
//! game.apply_move(pos, Player::O)?;
//! assert_eq!(*game.status(), GameStatus::InProgress);
//! # Ok::<(), tactix::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
mod game;
pub mod rules;
mod types;

pub use game::{Game, MoveError};
pub use types::{Board, GameStatus, Player, Square};
