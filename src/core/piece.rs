//! Pieces and their positions.
//!
//! A piece's `position` and `done` flag are the single source of truth
//! for where it is. Board cells only keep a derived index of `PieceId`s.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Number of pieces each player races.
pub const PIECES_PER_PLAYER: usize = 4;

/// Piece identity: color plus index (0..4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId {
    pub color: Color,
    pub index: u8,
}

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(color: Color, index: u8) -> Self {
        Self { color, index }
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.color, self.index)
    }
}

/// Where a piece currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Waiting in the base; needs a six to enter the track.
    Base,
    /// On a board cell: shared track `[0, 51]` or a home-lane cell.
    At(usize),
}

impl Position {
    /// The board cell index, or `None` while in base.
    #[must_use]
    pub const fn cell(self) -> Option<usize> {
        match self {
            Position::Base => None,
            Position::At(index) => Some(index),
        }
    }
}

/// A single racing piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub position: Position,
    /// Set exactly when the piece sits on the last cell of its home lane.
    pub done: bool,
}

impl Piece {
    /// Create a piece in base.
    #[must_use]
    pub const fn new(color: Color, index: u8) -> Self {
        Self {
            id: PieceId::new(color, index),
            position: Position::Base,
            done: false,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.color
    }

    #[must_use]
    pub const fn index(&self) -> u8 {
        self.id.index
    }

    #[must_use]
    pub fn is_in_base(&self) -> bool {
        self.position == Position::Base
    }

    /// On the board and still racing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.done && !self.is_in_base()
    }

    /// Send the piece back to base after a capture.
    pub fn send_to_base(&mut self) {
        self.position = Position::Base;
        self.done = false;
    }

    /// Place the piece on a cell, marking it done if that cell ends its lane.
    pub fn place(&mut self, cell: usize, finished: bool) {
        self.position = Position::At(cell);
        self.done = finished;
    }
}
