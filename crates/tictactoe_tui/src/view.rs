//! Presentation model: what the board looks like for a given game state.
//!
//! Everything here is pure so it can be checked without a terminal.

use crate::config::TuiConfig;
use tictactoe_core::{BOARD_SIZE, Cell, GameState, GameStatus};

/// How a single cell should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Board index (0-8).
    pub index: usize,
    /// Text to draw; empty for an unmarked cell.
    pub glyph: String,
    /// Whether a click here would place a mark.
    pub clickable: bool,
    /// Whether the cell belongs to the winning line.
    pub highlighted: bool,
}

/// Heading shown above the board.
pub fn header_text(status: &GameStatus) -> String {
    match status {
        GameStatus::Playing(player) => format!("Next Player: {}", player),
        GameStatus::Won { player, .. } => format!("Winner: {}", player),
        GameStatus::Tied => "It's a tie!".to_string(),
    }
}

/// The board stops accepting input once the game is decided.
pub fn is_read_only(state: &GameState) -> bool {
    state.is_decided()
}

/// "Play again" is only offered for a finished game.
pub fn show_play_again(state: &GameState) -> bool {
    state.is_decided()
}

/// Builds the view of every cell, in board order.
pub fn cell_views(state: &GameState, config: &TuiConfig) -> [CellView; BOARD_SIZE] {
    let read_only = is_read_only(state);
    let winning_line = state.winning_line();

    std::array::from_fn(|index| {
        let cell = state.board().get(index).unwrap_or_default();
        let glyph = match cell {
            Cell::Empty => String::new(),
            Cell::Occupied(player) => config.glyph(player).to_string(),
        };
        CellView {
            index,
            glyph,
            clickable: !read_only && cell.is_empty(),
            highlighted: winning_line.is_some_and(|line| line.contains(&index)),
        }
    })
}
