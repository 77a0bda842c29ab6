//! Game state machine for tic-tac-toe.
//!
//! A [`GameState`] is an immutable snapshot. Applying a move produces the
//! next snapshot; illegal moves produce a copy of the current one. The
//! phase (playing, won, tied) is derived from the snapshot, never stored.

use crate::error::{InvalidState, MoveRejection};
use crate::lines::{Line, winning_line};
use crate::position::Position;
use crate::types::{BOARD_SIZE, Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Derived status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player to move.
    Playing(Player),
    /// A player completed a line.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no line.
    Tied,
}

impl GameStatus {
    /// Returns true once the game is won or tied.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameStatus::Playing(_))
    }
}

/// Complete game state.
///
/// Deserialization checks the stored fields against the board and refuses
/// any state that alternating play could not have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredGameState")]
pub struct GameState {
    board: Board,
    move_count: u8,
    current_player: Player,
    winning_line: Option<Line>,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct StoredGameState {
    board: Board,
    move_count: u8,
    current_player: Player,
    winning_line: Option<Line>,
}

impl TryFrom<StoredGameState> for GameState {
    type Error = InvalidState;

    fn try_from(stored: StoredGameState) -> Result<Self, Self::Error> {
        let occupied = stored.board.occupied_count();
        if usize::from(stored.move_count) != occupied {
            return Err(InvalidState::MoveCount {
                recorded: stored.move_count,
                occupied,
            });
        }

        let x = stored.board.count(Player::X);
        let o = stored.board.count(Player::O);
        if x != o && x != o + 1 {
            return Err(InvalidState::MarkBalance { x, o });
        }

        let to_move = if x == o { Player::X } else { Player::O };
        if stored.current_player != to_move {
            return Err(InvalidState::CurrentPlayer {
                player: stored.current_player,
                move_count: stored.move_count,
            });
        }

        let actual = winning_line(&stored.board);
        if stored.winning_line != actual {
            return Err(InvalidState::WinningLine {
                recorded: stored.winning_line,
                actual,
            });
        }

        Ok(Self {
            board: stored.board,
            move_count: stored.move_count,
            current_player: stored.current_player,
            winning_line: stored.winning_line,
        })
    }
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            move_count: 0,
            current_player: Player::X,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played so far.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// The player whose mark goes down next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The completed line, if the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns true once the game is won or the board is full.
    pub fn is_decided(&self) -> bool {
        self.winning_line.is_some() || usize::from(self.move_count) == BOARD_SIZE
    }

    /// Derives the game status.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winning_line
            && let Some(Cell::Occupied(player)) = self.board.get(line[0])
        {
            GameStatus::Won { player, line }
        } else if usize::from(self.move_count) == BOARD_SIZE {
            GameStatus::Tied
        } else {
            GameStatus::Playing(self.current_player)
        }
    }

    /// Places the current player's mark at `index`, returning the next state.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveRejection`] if the game is decided, `index` is off the
    /// board, or the cell is occupied.
    #[instrument(skip(self), fields(player = %self.current_player, move_count = self.move_count))]
    pub fn try_apply_move(&self, index: usize) -> Result<Self, MoveRejection> {
        if self.is_decided() {
            return Err(MoveRejection::GameDecided);
        }

        let position = Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))?;

        if !self.board.is_empty(index) {
            return Err(MoveRejection::Occupied(position));
        }

        let board = self.board.with_mark(index, self.current_player);
        let next = Self {
            board,
            move_count: self.move_count.saturating_add(1),
            current_player: self.current_player.opponent(),
            winning_line: winning_line(&board),
        };

        debug!(%position, %board, status = ?next.status(), "Move applied");
        Ok(next)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Illegal moves are ignored: the returned state equals `self`.
    pub fn apply_move(&self, index: usize) -> Self {
        match self.try_apply_move(index) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(index, %rejection, "Move ignored");
                *self
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the current [`GameState`], replaced wholesale on every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board for rendering.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Derives the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Applies a move at `index`. Returns whether the state changed.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        let next = self.state.apply_move(index);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Discards the current state and starts over.
    #[instrument(skip(self), fields(move_count = self.state.move_count()))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::new();
    }
}
