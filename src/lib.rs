//! Tic-Tac-Toe engine with an optimal computer opponent
//!
//! A 3x3 Tic-Tac-Toe game pitting the human (X, moves first) against a
//! computer (O) that always plays optimally. The game is solved: full-depth
//! minimax with alpha-beta pruning means the computer draws or wins, never
//! loses.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Cell, position, and 3x3 grid types
//! - [`rules`]: Win lines and winner lookup
//! - [`game`]: Authoritative game state with turn and outcome bookkeeping
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Computer opponent facade over the search
//! - [`ui`]: egui/eframe presentation layer
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Engine, GameState, Player};
//!
//! let mut game = GameState::new();
//! game.place_mark(0, 0, Player::Human)?;
//!
//! // The computer answers with its optimal move
//! let mut engine = Engine::new();
//! let pos = engine.get_move(&game)?;
//! game.place_mark(pos.row as usize, pos.col as usize, Player::Computer)?;
//! # Ok::<(), tictactoe::GameError>(())
//! ```
//!
//! # Determinism
//!
//! Moves are generated in row-major order and ties keep the first-found
//! cell, so the engine's answer for a given position never changes. From an
//! empty board with the computer to move it plays (0, 0).

pub mod board;
pub mod engine;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use engine::{Engine, MoveResult};
pub use game::{GameError, GameState, Outcome};
pub use rules::WinLine;
