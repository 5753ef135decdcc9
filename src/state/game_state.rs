//! Immutable game states linked into a history chain.
//!
//! Every transition (`apply_dice_roll`, `apply_move`, `pass_turn`) builds a
//! new `GameState` that owns an independent board and points back at the
//! state it came from. States are shared as `Arc<GameState>` and never
//! mutated after construction, so a search can explore one branch while its
//! siblings and ancestors stay untouched.
//!
//! The predecessor chain is the only turn history: runs of sixes and recent
//! rolls are recovered by walking it.

use std::sync::Arc;

use super::turn::{turn_outcome, TurnOutcome, TurnPhase, MAX_CONSECUTIVE_SIXES};
use crate::board::{Board, Move, MoveResult};
use crate::core::{ConfigError, GameConfig, Player, Seat, SIX};

/// A snapshot of the game between transitions.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    dice_value: Option<u8>,
    predecessor: Option<Arc<GameState>>,
}

impl GameState {
    /// Create a root state (no history, no roll) for a board.
    #[must_use]
    pub fn new(board: Board) -> Arc<Self> {
        Arc::new(Self {
            board,
            dice_value: None,
            predecessor: None,
        })
    }

    /// Create a root state from a game configuration.
    pub fn from_config(config: &GameConfig) -> Result<Arc<Self>, ConfigError> {
        Ok(Self::new(Board::from_config(config)?))
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The last roll, cleared once a move or pass resolves it.
    #[must_use]
    pub fn dice_value(&self) -> Option<u8> {
        self.dice_value
    }

    #[must_use]
    pub fn predecessor(&self) -> Option<&Arc<GameState>> {
        self.predecessor.as_ref()
    }

    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.board.current_seat()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.board.current_player()
    }

    /// The player waiting for the current seat to finish.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        self.board.player(self.current_seat().other())
    }

    /// This state followed by its predecessors, newest first.
    pub fn history(&self) -> impl Iterator<Item = &GameState> {
        std::iter::successors(Some(self), |s| s.predecessor.as_deref())
    }

    // === Turn History ===

    /// Length of the run of sixes rolled by the current seat that ends at
    /// its most recent roll.
    ///
    /// Move and pass states carry no roll and are skipped; a roll by the
    /// other seat or any non-six ends the run.
    #[must_use]
    pub fn consecutive_sixes(&self) -> usize {
        let roller = self.current_seat();
        let mut count = 0;
        for state in self.history() {
            let Some(value) = state.dice_value else {
                continue;
            };
            if state.current_seat() != roller || value != SIX {
                break;
            }
            count += 1;
        }
        count
    }

    /// The last `n` rolls on record, most recent first.
    #[must_use]
    pub fn last_dice_values(&self, n: usize) -> Vec<u8> {
        self.history().filter_map(|s| s.dice_value).take(n).collect()
    }

    /// Whether the current roll is a forfeiting third six.
    #[must_use]
    pub fn is_forfeited(&self) -> bool {
        self.dice_value == Some(SIX) && self.consecutive_sixes() >= MAX_CONSECUTIVE_SIXES
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.dice_value {
            None => TurnPhase::AwaitingRoll,
            Some(_) if self.is_forfeited() => TurnPhase::Forfeited,
            Some(_) => TurnPhase::AwaitingMove,
        }
    }

    /// Retention once the current roll is resolved.
    #[must_use]
    pub fn turn_outcome(&self) -> TurnOutcome {
        turn_outcome(self.dice_value, self.consecutive_sixes())
    }

    // === Rules ===

    /// Legal moves for the current seat and roll.
    ///
    /// Empty with no roll or on a forfeiting third six.
    #[must_use]
    pub fn get_valid_moves(&self) -> Vec<Move> {
        match self.dice_value {
            Some(value) if !self.is_forfeited() => {
                self.board.get_valid_moves(self.current_seat(), value)
            }
            _ => Vec::new(),
        }
    }

    /// Whether a player has finished all pieces.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.board.winner().is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.board.winner()
    }

    // === Transitions ===

    /// New state with `value` rolled by the current seat.
    #[must_use]
    pub fn apply_dice_roll(self: &Arc<Self>, value: u8) -> Arc<Self> {
        Arc::new(Self {
            board: self.board.clone(),
            dice_value: Some(value),
            predecessor: Some(Arc::clone(self)),
        })
    }

    /// New state after `mv`, with turn retention applied and the roll cleared.
    #[must_use]
    pub fn apply_move(self: &Arc<Self>, mv: Move) -> Arc<Self> {
        self.apply_move_with_result(mv).0
    }

    /// Like [`apply_move`](Self::apply_move), also reporting what the move
    /// did.
    ///
    /// A move for a piece the current seat does not own, or with an invalid
    /// destination, leaves every piece where it was; the turn still resolves.
    #[must_use]
    pub fn apply_move_with_result(self: &Arc<Self>, mv: Move) -> (Arc<Self>, Option<MoveResult>) {
        let mut board = self.board.clone();

        let result = if mv.piece.color == board.current_player().color {
            board.apply(mv)
        } else {
            None
        };
        if result.is_none() {
            tracing::warn!(%mv, seat = %self.current_seat(), "move had no effect");
        }

        let roll = self.dice_value.or(Some(mv.steps));
        if turn_outcome(roll, self.consecutive_sixes()) == TurnOutcome::TurnSwitches {
            board.switch_player();
        }

        let next = Arc::new(Self {
            board,
            dice_value: None,
            predecessor: Some(Arc::clone(self)),
        });
        (next, result)
    }

    /// New state for a roll that cannot be used (no legal move or a
    /// forfeiting third six). Retention follows the same rule as a move.
    #[must_use]
    pub fn pass_turn(self: &Arc<Self>) -> Arc<Self> {
        let mut board = self.board.clone();
        if self.turn_outcome() == TurnOutcome::TurnSwitches {
            board.switch_player();
        }
        Arc::new(Self {
            board,
            dice_value: None,
            predecessor: Some(Arc::clone(self)),
        })
    }
}

impl Drop for GameState {
    // Unlink iteratively so long histories don't recurse on drop.
    fn drop(&mut self) {
        let mut next = self.predecessor.take();
        while let Some(state) = next {
            match Arc::try_unwrap(state) {
                Ok(mut owned) => next = owned.predecessor.take(),
                Err(_) => break,
            }
        }
    }
}
