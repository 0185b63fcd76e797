//! Win condition checking
//!
//! A side wins by occupying all three cells of one of the 8 lines:
//! 3 rows, 3 columns, and the 2 diagonals. Lines are always scanned in a
//! fixed priority order (rows top-to-bottom, then columns left-to-right,
//! then main diagonal, then anti-diagonal), so the reported winning line is
//! deterministic even on boards that satisfy several lines at once.

use crate::board::{Board, Player, Pos};

/// The three cells of a winning line, in scan order
pub type WinLine = [Pos; 3];

/// All 8 winning lines in priority order
pub const WIN_LINES: [[(u8, u8); 3]; 8] = [
    // Rows, top to bottom
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns, left to right
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals: top-left to bottom-right, then top-right to bottom-left
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Find the winning line for the given side, if one exists.
///
/// Returns the first complete line in the fixed priority order.
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinLine> {
    let mark = player.mark();
    for line in &WIN_LINES {
        if line
            .iter()
            .all(|&(row, col)| board.get(Pos::new(row, col)) == mark)
        {
            let cells = [
                Pos::new(line[0].0, line[0].1),
                Pos::new(line[1].0, line[1].1),
                Pos::new(line[2].0, line[2].1),
            ];
            return Some(cells);
        }
    }
    None
}

/// Check if the given side has three in a row
#[inline]
pub fn has_win(board: &Board, player: Player) -> bool {
    find_winning_line(board, player).is_some()
}

/// Check for a winner
///
/// Returns `Some((side, line))` if either side has completed a line,
/// `None` otherwise. The human is checked first; under legal alternating
/// play at most one side can have a line.
pub fn check_winner(board: &Board) -> Option<(Player, WinLine)> {
    for player in [Player::Human, Player::Computer] {
        if let Some(line) = find_winning_line(board, player) {
            return Some((player, line));
        }
    }
    None
}
