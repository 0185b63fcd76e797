//! The 3x3 grid of cells

use super::{Cell, Player, Pos, BOARD_SIZE};

/// Game board. A plain 3x3 array is the whole representation; the board is
/// mutated only through [`place_mark`](Board::place_mark) and
/// [`remove_mark`](Board::remove_mark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the mark at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a side's mark. Legality is enforced by `GameState`;
    /// the search also calls this directly on its scratch board.
    #[inline]
    pub fn place_mark(&mut self, pos: Pos, player: Player) {
        self.cells[pos.row as usize][pos.col as usize] = player.mark();
    }

    /// Clear a cell back to empty (search unmake)
    #[inline]
    pub fn remove_mark(&mut self, pos: Pos) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
    }

    /// True iff no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&c| c != Cell::Empty))
    }

    /// Number of marks the given side has on the board
    #[inline]
    pub fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == mark)
            .count()
    }

    /// Empty cells in row-major order (row 0..2, then column 0..2)
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..BOARD_SIZE).flat_map(move |row| {
            (0..BOARD_SIZE).filter_map(move |col| {
                let pos = Pos::new(row as u8, col as u8);
                self.is_empty(pos).then_some(pos)
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
