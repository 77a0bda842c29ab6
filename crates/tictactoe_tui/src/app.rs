//! Application state and input handling.

use crate::input::{Action, action_for, move_cursor};
use crate::ui::ClickMap;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_core::{Game, Position};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    click_map: ClickMap,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            click_map: ClickMap::default(),
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the last frame put each clickable element.
    pub fn set_click_map(&mut self, click_map: ClickMap) {
        self.click_map = click_map;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match action_for(key) {
            Action::Place(index) => self.click_cell(index),
            Action::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::Activate => {
                if self.game.state().is_decided() {
                    self.play_again();
                } else {
                    self.click_cell(self.cursor.to_index());
                }
            }
            Action::PlayAgain => self.play_again(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    /// Handles a mouse event; only left-button presses do anything.
    #[instrument(skip(self, event), fields(column = event.column, row = event.row))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = self.click_map.cell_at(event.column, event.row) {
            if let Some(position) = Position::from_index(index) {
                self.cursor = position;
            }
            self.click_cell(index);
        } else if self.click_map.is_play_again(event.column, event.row) {
            self.play_again();
        }
    }

    /// Forwards a cell click to the game. Clicks on locked cells are inert.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, index: usize) {
        if self.game.apply_move(index) {
            debug!(status = ?self.game.status(), "Board updated");
        }
    }

    /// Starts a new game, but only once the current one is decided.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) {
        if !self.game.state().is_decided() {
            debug!("Play again ignored while game is in progress");
            return;
        }
        info!("Starting a new game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{GameState, GameStatus, Player};

    fn press(app: &mut App, keys: &[char]) {
        for &c in keys {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = App::new();
        press(&mut app, &['1', '4', '2', '5', '3']);
        assert_eq!(
            app.game().status(),
            GameStatus::Won {
                player: Player::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().state().move_count(), 1);
        assert!(!app.game().board().is_empty(Position::TopCenter.to_index()));
    }

    #[test]
    fn test_play_again_only_after_game_ends() {
        let mut app = App::new();
        press(&mut app, &['5', 'r']);
        assert_eq!(app.game().state().move_count(), 1);

        press(&mut app, &['1', '4', '2', '6', '3']);
        assert!(app.game().state().is_decided());
        press(&mut app, &['r']);
        assert_eq!(app.game().state(), &GameState::new());
    }

    #[test]
    fn test_enter_on_finished_game_plays_again() {
        let mut app = App::new();
        press(&mut app, &['1', '4', '2', '5', '3']);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().state(), &GameState::new());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
