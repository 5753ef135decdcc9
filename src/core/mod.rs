//! Core types: colors, pieces, players, dice, configuration, errors.
//!
//! These are the leaf building blocks; the board, state and search layers
//! are built on top of them.

pub mod color;
pub mod config;
pub mod dice;
pub mod error;
pub mod piece;
pub mod player;

pub use color::Color;
pub use config::{GameConfig, SeatConfig};
pub use dice::{Dice, DiceState, FACES, SIX};
pub use error::ConfigError;
pub use piece::{Piece, PieceId, Position, PIECES_PER_PLAYER};
pub use player::{Player, Seat, SeatMap};
