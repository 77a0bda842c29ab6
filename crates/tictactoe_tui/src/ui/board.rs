//! Tic-tac-toe board rendering.

use crate::view::CellView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_core::BOARD_SIZE;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
/// Full grid size including separators.
pub(crate) const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Full grid height including separators.
pub(crate) const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Styling inputs that are not part of the cell view.
#[derive(Debug, Clone, Copy)]
pub struct BoardStyle {
    /// Cell under the keyboard cursor, if the cursor should be shown.
    pub cursor: Option<usize>,
    /// Background of the winning line.
    pub highlight: Color,
}

/// Renders the board and returns the screen area of each cell.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    cells: &[CellView; BOARD_SIZE],
    style: BoardStyle,
) -> [Rect; BOARD_SIZE] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); BOARD_SIZE];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = row * 3 + col;
            render_cell(frame, cell_area, &cells[index], style);
            areas[index] = cell_area;
        }
        render_vertical_sep(frame, cols[1]);
        render_vertical_sep(frame, cols[3]);
    }
    render_separator(frame, rows[1]);
    render_separator(frame, rows[3]);

    areas
}

fn render_cell(frame: &mut Frame, area: Rect, cell: &CellView, style: BoardStyle) {
    let (text, mut cell_style) = if cell.glyph.is_empty() {
        // Hint the digit key for cells that can still be played.
        let hint = if cell.clickable {
            (cell.index + 1).to_string()
        } else {
            String::new()
        };
        (hint, Style::default().fg(Color::DarkGray))
    } else {
        (
            cell.glyph.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    if cell.highlighted {
        cell_style = cell_style.bg(style.highlight).fg(Color::Black);
    }
    if style.cursor == Some(cell.index) {
        cell_style = cell_style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text, cell_style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(cell_style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
