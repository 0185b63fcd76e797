//! Minimax search with alpha-beta pruning
//!
//! Tic-tac-toe is small enough to search to the end of the game, so the
//! terminal scores are exact: +1 if the computer has won, -1 if the human
//! has won, 0 for a draw. Scores carry no depth component; a win in two
//! moves and a win in four are equal, matching the reference behavior.
//! Pruning only skips branches that provably cannot change the result, so
//! the chosen move and score are identical to an exhaustive search.
//!
//! The search mutates a scratch board and restores every cell on the way
//! back up, including when a branch is cut short by pruning; callers never
//! observe a modified board.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::Board;
//! use tictactoe::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&Board::new());
//! assert_eq!(result.best_move.map(|p| (p.row, p.col)), Some((0, 0)));
//! ```

use crate::board::{Board, Player, Pos, BOARD_SIZE};
use crate::rules::has_win;

/// Score of a computer win; the human win is its negation
pub const WIN_SCORE: i32 = 1;

/// Infinity for alpha-beta bounds (any value above `WIN_SCORE`)
const INF: i32 = WIN_SCORE + 1;

/// Best move found for the computer together with search diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    /// Best move, `None` only when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Minimax score of the best move (+1 win, 0 draw, -1 loss)
    pub score: i32,
    /// Number of nodes visited, for diagnostics
    pub nodes: u64,
}

/// Full-depth minimax searcher for the computer side.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Find the best computer move on the given board.
    ///
    /// Candidates are tried in row-major order and only a strictly greater
    /// score replaces the incumbent, so among equally good moves the
    /// earliest cell wins. The caller's board is never modified.
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let mut work = board.clone();

        let mut best_score = -INF;
        let mut best_move = None;

        // Each root candidate gets the full (-INF, INF) window so its score
        // is exact, which the strictly-greater tie-break relies on.
        for pos in board.empty_cells() {
            work.place_mark(pos, Player::Computer);
            let score = self.minimax(&mut work, false, -INF, INF);
            work.remove_mark(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
        }
    }

    /// Recursive minimax. `maximizing` is true at computer-turn nodes.
    ///
    /// Alpha tracks the best score the maximizer is assured of, beta the
    /// best for the minimizer; once `beta <= alpha` the remaining siblings
    /// cannot affect the result and the loop exits. The mark is removed
    /// before the bounds are updated, so the board is restored on every
    /// return path.
    fn minimax(&mut self, board: &mut Board, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        // Terminal tests, win before draw
        if has_win(board, Player::Computer) {
            return WIN_SCORE;
        }
        if has_win(board, Player::Human) {
            return -WIN_SCORE;
        }
        if board.is_full() {
            return 0;
        }

        if maximizing {
            let mut best = -INF;
            'outer: for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let pos = Pos::new(row as u8, col as u8);
                    if !board.is_empty(pos) {
                        continue;
                    }
                    board.place_mark(pos, Player::Computer);
                    let score = self.minimax(board, false, alpha, beta);
                    board.remove_mark(pos);

                    best = best.max(score);
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break 'outer;
                    }
                }
            }
            best
        } else {
            let mut best = INF;
            'outer: for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let pos = Pos::new(row as u8, col as u8);
                    if !board.is_empty(pos) {
                        continue;
                    }
                    board.place_mark(pos, Player::Human);
                    let score = self.minimax(board, true, alpha, beta);
                    board.remove_mark(pos);

                    best = best.min(score);
                    beta = beta.min(best);
                    if beta <= alpha {
                        break 'outer;
                    }
                }
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exhaustive minimax without pruning, used as the oracle.
    fn minimax_exhaustive(board: &mut Board, maximizing: bool) -> i32 {
        if has_win(board, Player::Computer) {
            return WIN_SCORE;
        }
        if has_win(board, Player::Human) {
            return -WIN_SCORE;
        }
        if board.is_full() {
            return 0;
        }

        let (player, mut best) = if maximizing {
            (Player::Computer, -INF)
        } else {
            (Player::Human, INF)
        };
        for pos in board.clone().empty_cells() {
            board.place_mark(pos, player);
            let score = minimax_exhaustive(board, !maximizing);
            board.remove_mark(pos);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// Exhaustive best-move selection with the same row-major tie-break.
    fn best_move_exhaustive(board: &Board) -> (Option<Pos>, i32) {
        let mut work = board.clone();
        let mut best_score = -INF;
        let mut best_move = None;
        for pos in board.empty_cells() {
            work.place_mark(pos, Player::Computer);
            let score = minimax_exhaustive(&mut work, false);
            work.remove_mark(pos);
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }
        (best_move, best_score)
    }

    fn board_from_rows(rows: [[char; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match ch {
                    'H' => board.place_mark(pos, Player::Human),
                    'C' => board.place_mark(pos, Player::Computer),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_best_move_is_top_left() {
        // Every opening reply scores 0 (the game is drawn under optimal
        // play), so the row-major tie-break picks (0, 0).
        let mut searcher = Searcher::new();
        let result = searcher.search(&Board::new());
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = board_from_rows([[' ', 'H', ' '], [' ', ' ', ' '], [' ', ' ', ' ']]);
        let mut searcher = Searcher::new();
        let first = searcher.search(&board);
        let second = searcher.search(&board);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_from_rows([
            ['C', 'C', ' '],
            ['H', 'H', ' '],
            ['H', ' ', ' '],
        ]);
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let board = board_from_rows([
            ['H', 'H', ' '],
            [' ', 'C', ' '],
            [' ', ' ', ' '],
        ]);
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
    }

    #[test]
    fn test_prefers_own_win_over_block() {
        // Both sides threaten a line; moving first, the computer completes
        // its own instead of blocking.
        let board = board_from_rows([
            ['H', 'H', ' '],
            ['C', 'C', ' '],
            ['H', ' ', ' '],
        ]);
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from_rows([
            ['H', 'C', 'H'],
            ['H', 'C', 'C'],
            ['C', 'H', 'H'],
        ]);
        let result = Searcher::new().search(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_board_restored_after_search() {
        let board = board_from_rows([['H', ' ', ' '], [' ', 'C', ' '], [' ', ' ', 'H']]);
        let snapshot = board.clone();
        Searcher::new().search(&board);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_pruned_matches_exhaustive() {
        // Compare pruned and exhaustive search on every position reachable
        // within three plies with the computer to move (human moved first).
        fn positions() -> Vec<Board> {
            let mut boards = Vec::new();
            let base = Board::new();
            for h1 in base.empty_cells() {
                let mut b1 = base.clone();
                b1.place_mark(h1, Player::Human);
                boards.push(b1.clone());
                for c1 in b1.clone().empty_cells() {
                    let mut b2 = b1.clone();
                    b2.place_mark(c1, Player::Computer);
                    for h2 in b2.clone().empty_cells() {
                        let mut b3 = b2.clone();
                        b3.place_mark(h2, Player::Human);
                        boards.push(b3);
                    }
                }
            }
            boards
        }

        let mut searcher = Searcher::new();
        for board in positions() {
            let pruned = searcher.search(&board);
            let (oracle_move, oracle_score) = best_move_exhaustive(&board);
            assert_eq!(pruned.best_move, oracle_move, "board {:?}", board);
            assert_eq!(pruned.score, oracle_score, "board {:?}", board);
        }
    }

    #[test]
    fn test_pruning_reduces_nodes() {
        let mut searcher = Searcher::new();
        let result = searcher.search(&Board::new());
        // 9! = 362880 leaves without pruning; the pruned tree is far smaller.
        assert!(result.nodes < 100_000, "searched {} nodes", result.nodes);
    }
}
