//! A single board cell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, PieceId};

/// Occupant list. Inline capacity covers every realistic stack.
pub type Occupants = SmallVec<[PieceId; 4]>;

/// One square of the board.
///
/// `occupants` is a derived index kept in sync with piece positions by
/// [`Board::sync_occupancy`](super::Board::sync_occupancy).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Owning color for start cells and home lanes, `None` for plain track.
    pub color: Option<Color>,
    pub occupants: Occupants,
    /// Pieces on a safe cell cannot be captured.
    pub is_safe: bool,
}

impl Cell {
    /// Create an empty cell.
    #[must_use]
    pub fn new(color: Option<Color>, is_safe: bool) -> Self {
        Self {
            color,
            occupants: Occupants::new(),
            is_safe,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Color of the block on this cell, if two or more same-color pieces
    /// share it.
    #[must_use]
    pub fn block_color(&self) -> Option<Color> {
        let (first, rest) = self.occupants.split_first()?;
        if rest.is_empty() || rest.iter().any(|p| p.color != first.color) {
            return None;
        }
        Some(first.color)
    }

    /// Whether this cell holds a block that a `color` piece cannot cross.
    #[must_use]
    pub fn blocks(&self, color: Color) -> bool {
        self.block_color().is_some_and(|c| c != color)
    }

    /// The lone opposing piece a `color` piece would capture by landing here.
    #[must_use]
    pub fn capturable_by(&self, color: Color) -> Option<PieceId> {
        match self.occupants.as_slice() {
            [only] if !self.is_safe && only.color != color => Some(*only),
            _ => None,
        }
    }
}
