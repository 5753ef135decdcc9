//! Board, geometry and move rules.
//!
//! - `geometry`: pure per-color path arithmetic
//! - `cell`: a single square with its derived occupant list
//! - `board`: all cells, both players, legality and occupancy mutation
//! - `moves`: `Move` and `MoveResult`

#[allow(clippy::module_inception)]
pub mod board;
pub mod cell;
pub mod geometry;
pub mod moves;

pub use board::Board;
pub use cell::{Cell, Occupants};
pub use geometry::{
    is_home_lane_cell, next_position, track_distance, PathSpec, CELL_COUNT, FINAL_PROGRESS,
    HOME_LANE_LEN, LAST_TRACK_PROGRESS, TRACK_LEN,
};
pub use moves::{Move, MoveResult};
