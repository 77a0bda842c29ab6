//! Reasons a move is ignored.

use crate::position::Position;

/// Why a move left the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// Index is not on the board.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The game has been won or tied.
    #[display("Game is already decided")]
    GameDecided,
}

/// Why a stored game state was refused on load.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidState {
    /// Recorded move count differs from the marks on the board.
    #[display("move_count is {} but the board holds {} marks", recorded, occupied)]
    MoveCount {
        /// Value found in the input.
        recorded: u8,
        /// Marks actually on the board.
        occupied: usize,
    },

    /// X and O mark counts cannot come from alternating play.
    #[display("board holds {} X marks and {} O marks", x, o)]
    MarkBalance {
        /// X marks on the board.
        x: usize,
        /// O marks on the board.
        o: usize,
    },

    /// Player to move does not match the move count.
    #[display("{} cannot be to move after {} moves", player, move_count)]
    CurrentPlayer {
        /// Value found in the input.
        player: crate::types::Player,
        /// Moves played.
        move_count: u8,
    },

    /// Recorded winning line differs from the one on the board.
    #[display("winning_line is {:?} but the board shows {:?}", recorded, actual)]
    WinningLine {
        /// Value found in the input.
        recorded: Option<crate::lines::Line>,
        /// Line computed from the board.
        actual: Option<crate::lines::Line>,
    },
}
