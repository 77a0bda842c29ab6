//! Win detection for tic-tac-toe.

use crate::types::{Board, Cell};

/// Three board indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Every winning line, scanned in this order.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line in [`LINES`] whose three cells hold the same mark.
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.get(a);
        matches!(cell, Some(Cell::Occupied(_))) && cell == board.get(b) && cell == board.get(c)
    })
}
