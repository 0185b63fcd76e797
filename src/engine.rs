//! Engine facade for the computer opponent
//!
//! Wraps the minimax searcher behind the narrow interface the presentation
//! layer drives: given a game state where it is the computer's turn and the
//! game is still in progress, return the optimal cell. The game is solved,
//! so the computer never loses; against this engine the best the human can
//! do is a draw.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Engine, GameState, Player};
//!
//! let mut game = GameState::new();
//! game.place_mark(1, 1, Player::Human).unwrap();
//!
//! let mut engine = Engine::new();
//! let pos = engine.get_move(&game).unwrap();
//! game.place_mark(pos.row as usize, pos.col as usize, Player::Computer).unwrap();
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Player, Pos};
use crate::game::{GameError, GameState};
use crate::search::Searcher;

/// Result of a move search with diagnostics for the UI debug card.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the move (+1 win, 0 draw, -1 loss)
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// The computer opponent.
///
/// Stateless between moves apart from the reusable searcher; the same
/// engine instance can serve any number of games.
#[derive(Debug, Default)]
pub struct Engine {
    searcher: Searcher,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Compute the computer's move for the given state.
    ///
    /// Valid only while the game is in progress and it is the computer's
    /// turn; anything else, including a full board, yields
    /// [`GameError::NoMoveAvailable`] rather than a panic.
    pub fn get_move(&mut self, state: &GameState) -> Result<Pos, GameError> {
        if state.outcome().is_terminal() || state.current_turn() != Player::Computer {
            return Err(GameError::NoMoveAvailable);
        }
        self.get_move_with_stats(state)
            .best_move
            .ok_or(GameError::NoMoveAvailable)
    }

    /// Like [`get_move`](Engine::get_move) but returns search diagnostics;
    /// preconditions are the caller's responsibility here.
    pub fn get_move_with_stats(&mut self, state: &GameState) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(state.board());
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "search finished"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;

    #[test]
    fn test_rejects_human_turn() {
        let game = GameState::new();
        let mut engine = Engine::new();
        assert_eq!(engine.get_move(&game), Err(GameError::NoMoveAvailable));
    }

    #[test]
    fn test_rejects_finished_game() {
        let mut game = GameState::new();
        // Human wins the top row while the computer plays the middle row.
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            let side = game.current_turn();
            game.place_mark(row, col, side).unwrap();
        }
        assert!(game.outcome().is_terminal());
        assert_eq!(
            Engine::new().get_move(&game),
            Err(GameError::NoMoveAvailable)
        );
    }

    #[test]
    fn test_returns_move_with_stats() {
        let mut game = GameState::new();
        game.place_mark(1, 1, Player::Human).unwrap();

        let result = Engine::new().get_move_with_stats(&game);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_computer_never_loses() {
        // Exhaustive adversarial check: for every line of human play, legal
        // or clever, the engine's replies never let the human win.
        fn visit(game: &GameState, engine: &mut Engine, games: &mut u64) {
            match game.outcome() {
                Outcome::Won { winner, .. } => {
                    assert_ne!(winner, Player::Human, "human won: {:?}", game.board());
                    *games += 1;
                    return;
                }
                Outcome::Draw => {
                    *games += 1;
                    return;
                }
                Outcome::InProgress => {}
            }

            // Branch over every human move, then apply the engine's reply.
            for pos in game.board().empty_cells().collect::<Vec<_>>() {
                let mut next = game.clone();
                next.place_mark(pos.row as usize, pos.col as usize, Player::Human)
                    .unwrap();
                if next.outcome() == Outcome::InProgress {
                    let reply = engine.get_move(&next).unwrap();
                    next.place_mark(reply.row as usize, reply.col as usize, Player::Computer)
                        .unwrap();
                }
                visit(&next, engine, games);
            }
        }

        let mut games = 0;
        visit(&GameState::new(), &mut Engine::new(), &mut games);
        assert!(games > 100);
    }

    #[test]
    fn test_deterministic_first_reply() {
        // Same position, same engine answer every time.
        let mut game = GameState::new();
        game.place_mark(2, 2, Player::Human).unwrap();

        let mut engine = Engine::new();
        let first = engine.get_move(&game).unwrap();
        for _ in 0..3 {
            assert_eq!(engine.get_move(&game).unwrap(), first);
        }
    }
}
