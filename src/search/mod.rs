//! Expectiminimax move selection for automated players.
//!
//! - `config`: search depth, score bound and evaluation weights
//! - `eval`: static evaluation and move ordering
//! - `expectiminimax`: the tree search
//! - `stats`: per-search node counters

pub mod config;
pub mod eval;
pub mod expectiminimax;
pub mod stats;

pub use config::{EvalWeights, SearchConfig};
pub use eval::{evaluate, evaluate_board, order_moves};
pub use expectiminimax::{NodeKind, SearchEngine};
pub use stats::SearchStats;
