//! Immutable game states and turn rules.
//!
//! ## GameState
//!
//! A board snapshot plus the last roll and a link to the previous state.
//! Transitions return new `Arc<GameState>` values and never touch their
//! input.
//!
//! ## Turn rules
//!
//! A six grants another roll; the third six in a row forfeits the turn.

pub mod game_state;
pub mod turn;

pub use game_state::GameState;
pub use turn::{turn_outcome, TurnOutcome, TurnPhase, MAX_CONSECUTIVE_SIXES};
