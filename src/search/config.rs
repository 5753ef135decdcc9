//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Expectiminimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search depth in plies, counting move and chance levels alike.
    /// 3 covers our move, the next roll, and the reply.
    pub depth: u32,

    /// Scores are clamped to `[-score_bound, score_bound]`.
    pub score_bound: f64,

    /// Order candidate moves before expanding them.
    /// Affects how often alpha-beta cuts, never the chosen value.
    pub order_moves: bool,

    /// Static evaluation weights.
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            score_bound: 100_000.0,
            order_moves: true,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom evaluation weights.
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Create a new config with move ordering switched on or off.
    pub fn with_move_ordering(mut self, enabled: bool) -> Self {
        self.order_moves = enabled;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !(self.score_bound.is_finite() && self.score_bound > 0.0) {
            return Err(ConfigError::Validation(
                "score_bound must be finite and > 0".into(),
            ));
        }
        if self.weights.win > self.score_bound {
            return Err(ConfigError::Validation(
                "weights.win must not exceed score_bound".into(),
            ));
        }
        Ok(())
    }
}

/// Weights for the static evaluation.
///
/// Any values work as long as they keep a finished piece ahead of one near
/// home, ahead of one on a safe cell, ahead of an exposed one, ahead of one
/// still in base.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Returned (signed) when either side has finished all pieces.
    /// At `score_bound`, a decision node that finds a win stops searching.
    pub win: f64,
    /// Per finished piece.
    pub done: f64,
    /// Per piece still in base (negative).
    pub base: f64,
    /// Scales the fraction of the path a piece has covered.
    pub progress: f64,
    /// Per piece on a safe cell.
    pub safe: f64,
    /// Per unit of proximity to an opponent that can capture the piece.
    pub threat: f64,
    /// Per unit of proximity to an opponent the piece can capture.
    pub attack: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            win: 100_000.0,
            done: 60.0,
            base: -20.0,
            progress: 40.0,
            safe: 6.0,
            threat: 0.5,
            attack: 0.5,
        }
    }
}
