//! Moves and their outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{PieceId, Position};

/// A move: advance one piece by the rolled number of steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceId,
    pub steps: u8,
}

impl Move {
    #[must_use]
    pub const fn new(piece: PieceId, steps: u8) -> Self {
        Self { piece, steps }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} +{}", self.piece, self.steps)
    }
}

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub mv: Move,
    pub from: Position,
    /// Destination cell.
    pub to: usize,
    /// Opposing piece sent back to base, if any.
    pub captured: Option<PieceId>,
    /// The moved piece finished its home lane.
    pub finished: bool,
    /// The mover's player has now finished all pieces.
    pub winning: bool,
}
