//! Tic-tac-toe game state machine.
//!
//! Tracks a 3x3 board, alternates two players, and detects a win or tie.
//! A view layer drives it through two operations:
//!
//! - [`Game::apply_move`] places the current player's mark at a board index.
//!   Moves on an occupied cell, off the board, or after the game is decided
//!   are silently ignored.
//! - [`Game::reset`] starts a fresh game.
//!
//! and reads it back through [`Game::status`] and [`Game::board`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(
//!     game.status(),
//!     GameStatus::Won { player: Player::X, line: [0, 1, 2] }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod lines;
mod position;
mod state;
mod types;

pub use error::{InvalidState, MoveRejection};
pub use lines::{LINES, Line, winning_line};
pub use position::Position;
pub use state::{Game, GameState, GameStatus};
pub use types::{BOARD_SIZE, Board, Cell, Player};
