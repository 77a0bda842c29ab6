//! Terminal front end for tic-tac-toe.
//!
//! Renders a [`tictactoe_core::Game`] with ratatui and forwards key presses
//! and mouse clicks to it as cell indices.
//!
//! # Architecture
//!
//! - **View**: pure presentation model (header text, per-cell glyph,
//!   clickability, highlight)
//! - **UI**: ratatui drawing, plus the click map used for mouse hit-testing
//! - **App**: input handling and the current game
//! - **Config**: TOML display settings and the CLI

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;
mod view;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::{ClickMap, draw};
pub use view::{CellView, cell_views, header_text, is_read_only, show_play_again};
