//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at a board index.
    Place(usize),
    /// Move the cursor.
    MoveCursor(Direction),
    /// Place at the cursor, or play again once the game is over.
    Activate,
    /// Start a new game.
    PlayAgain,
    /// Leave the app.
    Quit,
    /// Key has no binding.
    None,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// Translates a key press.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Char(c @ '1'..='9') => Action::Place(c as usize - '1' as usize),
        KeyCode::Up => Action::MoveCursor(Direction::Up),
        KeyCode::Down => Action::MoveCursor(Direction::Down),
        KeyCode::Left => Action::MoveCursor(Direction::Left),
        KeyCode::Right => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::PlayAgain,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
