//! Game state: the authoritative board plus turn and outcome bookkeeping
//!
//! `GameState` owns the board and enforces the legal-move and
//! turn-alternation rules. A move either fully succeeds (board, turn, and
//! outcome updated together) or fully fails with the state untouched.
//! Once the outcome leaves `InProgress` the state is frozen until
//! [`reset`](GameState::reset).

use thiserror::Error;
use tracing::{debug, warn};

use crate::board::{Board, Player, Pos};
use crate::rules::{find_winning_line, WinLine};

/// Errors returned by the core. Both are local, recoverable conditions;
/// the caller decides how to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The cell is occupied, the coordinates are out of range, it is not
    /// that side's turn, or the game is already over.
    #[error("invalid move at ({row}, {col})")]
    InvalidMove { row: usize, col: usize },
    /// The search was asked for a move it cannot make: the game is over,
    /// the board is full, or it is not the computer's turn.
    #[error("no move available")]
    NoMoveAvailable,
}

/// Result of a finished or ongoing game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won { winner: Player, line: WinLine },
    Draw,
}

impl Outcome {
    /// True once the game has ended in a win or a draw
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// One game of Tic-Tac-Toe. Created fresh with an empty board, the human
/// to move, and no outcome.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_turn: Player,
    outcome: Outcome,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::Human,
            outcome: Outcome::InProgress,
        }
    }

    /// Read access to the board
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// The game outcome so far
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Check whether a cell can still be played. Out-of-range coordinates
    /// are simply unavailable, never a panic.
    pub fn is_cell_available(&self, row: usize, col: usize) -> bool {
        Pos::is_valid(row, col) && self.board.is_empty(Pos::new(row as u8, col as u8))
    }

    /// Place `side`'s mark at (`row`, `col`).
    ///
    /// On success the cell is marked, the outcome re-evaluated (a winning
    /// move is scored as a win even when it also fills the board), and the
    /// turn handed to the other side if the game continues. On failure the
    /// state is unchanged.
    pub fn place_mark(&mut self, row: usize, col: usize, side: Player) -> Result<(), GameError> {
        let rejected = GameError::InvalidMove { row, col };

        if self.outcome.is_terminal() || !Pos::is_valid(row, col) {
            warn!(?side, row, col, "move rejected");
            return Err(rejected);
        }
        let pos = Pos::new(row as u8, col as u8);
        if !self.board.is_empty(pos) || side != self.current_turn {
            warn!(?side, row, col, "move rejected");
            return Err(rejected);
        }

        self.board.place_mark(pos, side);

        // Win is checked before draw so a final move that completes a line
        // while filling the board is scored as a win.
        if let Some(line) = find_winning_line(&self.board, side) {
            self.outcome = Outcome::Won { winner: side, line };
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.current_turn = side.opponent();
        }

        debug!(?side, row, col, outcome = ?self.outcome, "move accepted");
        Ok(())
    }

    /// A fresh initial state. Prior clones of the old state are untouched.
    pub fn reset() -> Self {
        Self::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
