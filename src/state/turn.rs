//! Turn retention rules.
//!
//! A six earns another roll for the same seat, except that the third six
//! in a row forfeits the turn outright. Captures do not earn a roll.

use serde::{Deserialize, Serialize};

use crate::core::SIX;

/// Sixes in a row that forfeit the turn.
pub const MAX_CONSECUTIVE_SIXES: usize = 3;

/// Where a state sits within the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No dice value yet.
    AwaitingRoll,
    /// Rolled; the seat to move picks a move or passes.
    AwaitingMove,
    /// Rolled a third six: no move is allowed and the turn must pass.
    Forfeited,
}

/// What happens once the current roll has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Same seat rolls again.
    TurnContinues,
    /// The other seat rolls next.
    TurnSwitches,
}

/// Decide retention for a roll, given the run of sixes that ends with it.
#[must_use]
pub fn turn_outcome(roll: Option<u8>, consecutive_sixes: usize) -> TurnOutcome {
    match roll {
        Some(SIX) if consecutive_sixes < MAX_CONSECUTIVE_SIXES => TurnOutcome::TurnContinues,
        _ => TurnOutcome::TurnSwitches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_continues() {
        assert_eq!(turn_outcome(Some(6), 1), TurnOutcome::TurnContinues);
        assert_eq!(turn_outcome(Some(6), 2), TurnOutcome::TurnContinues);
    }

    #[test]
    fn test_third_six_switches() {
        assert_eq!(turn_outcome(Some(6), 3), TurnOutcome::TurnSwitches);
    }

    #[test]
    fn test_other_rolls_switch() {
        for roll in 1..6 {
            assert_eq!(turn_outcome(Some(roll), 0), TurnOutcome::TurnSwitches);
        }
        assert_eq!(turn_outcome(None, 0), TurnOutcome::TurnSwitches);
    }
}
