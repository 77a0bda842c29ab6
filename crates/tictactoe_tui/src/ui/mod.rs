//! UI rendering using ratatui.

mod board;

use crate::app::App;
use crate::config::TuiConfig;
use crate::view;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::BOARD_SIZE;

use board::{BOARD_HEIGHT, BoardStyle, center_rect, render_board};

const PLAY_AGAIN_WIDTH: u16 = 16;

/// Screen areas of the clickable elements in the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickMap {
    /// Area of each board cell, by index.
    pub cells: [Rect; BOARD_SIZE],
    /// Area of the "Play again" button, when shown.
    pub play_again: Option<Rect>,
}

impl ClickMap {
    /// Board index of the cell at a terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cells
            .iter()
            .position(|&area| hit(area, column, row))
    }

    /// Whether a terminal coordinate falls on the "Play again" button.
    pub fn is_play_again(&self, column: u16, row: u16) -> bool {
        self.play_again.is_some_and(|area| hit(area, column, row))
    }
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Draws the whole screen and reports where the clickable elements ended up.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig, highlight: Color) -> ClickMap {
    let state = app.game().state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let header = Paragraph::new(view::header_text(&state.status()))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[1]);

    let cells = view::cell_views(state, config);
    let style = BoardStyle {
        cursor: (!view::is_read_only(state)).then(|| app.cursor().to_index()),
        highlight,
    };
    let cell_areas = render_board(frame, chunks[2], &cells, style);

    let play_again = view::show_play_again(state).then(|| {
        let area = center_rect(chunks[3], PLAY_AGAIN_WIDTH, 3);
        let button = Paragraph::new("Play again")
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, area);
        area
    });

    let help_text = if play_again.is_some() {
        "Enter/R/click: Play again | Q: Quit"
    } else {
        "1-9/click: Move | Arrows+Enter: Move | Q: Quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    ClickMap {
        cells: cell_areas,
        play_again,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_is_half_open() {
        let area = Rect::new(10, 5, 3, 2);
        assert!(hit(area, 10, 5));
        assert!(hit(area, 12, 6));
        assert!(!hit(area, 13, 5));
        assert!(!hit(area, 10, 7));
        assert!(!hit(area, 9, 5));
    }

    #[test]
    fn test_click_map_lookup() {
        let mut map = ClickMap::default();
        map.cells[4] = Rect::new(10, 10, 5, 3);
        map.play_again = Some(Rect::new(0, 20, 16, 3));
        assert_eq!(map.cell_at(12, 11), Some(4));
        assert_eq!(map.cell_at(30, 30), None);
        assert!(map.is_play_again(5, 21));
        assert!(!map.is_play_again(5, 19));
    }
}
