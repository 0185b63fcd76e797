//! Adversarial search for the computer opponent
//!
//! Contains:
//! - Minimax with alpha-beta pruning over the full game tree
//! - Row-major move generation with a first-found tie-break

pub mod minimax;

pub use minimax::{SearchResult, Searcher};
