//! # ludo-engine
//!
//! A two-player Ludo rules engine with an expectiminimax opponent.
//!
//! ## Architecture
//!
//! - **Persistent states**: every transition returns a new
//!   `Arc<GameState>` linked to its predecessor. Boards clone cheaply
//!   (`im::Vector` cells, `Copy` pieces), so the search can branch freely.
//!
//! - **History as a chain**: turn retention (sixes, the three-six forfeit)
//!   is derived by walking predecessors, not kept in counters.
//!
//! - **Chance-aware search**: expectiminimax averages over dice faces and
//!   prunes with alpha-beta between move siblings.
//!
//! ## Modules
//!
//! - `core`: colors, pieces, players, dice, configuration, errors
//! - `board`: path geometry, cells, legality and move execution
//! - `state`: immutable game states and turn rules
//! - `search`: evaluation and expectiminimax
//! - `game`: headless match driver
//!
//! ## Example
//!
//! ```
//! use ludo_engine::{GameState, GameConfig, SearchEngine, SearchConfig};
//!
//! let config = GameConfig::default();
//! let state = GameState::from_config(&config).unwrap().apply_dice_roll(6);
//!
//! let mut engine = SearchEngine::new(SearchConfig::default().with_depth(2));
//! let mv = engine.find_best_move(&state).unwrap();
//! let next = state.apply_move(mv);
//! assert_eq!(next.current_seat(), state.current_seat());
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    Color, ConfigError, Dice, DiceState, GameConfig, Piece, PieceId, Player, Position, Seat,
    SeatConfig, SeatMap,
};

pub use crate::board::{Board, Cell, Move, MoveResult, PathSpec};

pub use crate::state::{GameState, TurnOutcome, TurnPhase};

pub use crate::search::{EvalWeights, NodeKind, SearchConfig, SearchEngine, SearchStats};

pub use crate::game::{Match, TurnRecord};
