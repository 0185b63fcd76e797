//! Game rules for Tic-Tac-Toe
//!
//! The rule set is small: three in a row, column, or diagonal wins, and a
//! full board with no winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_winning_line, has_win, WinLine, WIN_LINES};
