//! Headless match driver.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{Move, MoveResult};
use crate::core::{ConfigError, Dice, GameConfig, Seat, FACES};
use crate::search::SearchEngine;
use crate::state::GameState;

/// One resolved roll: who rolled, what, and what was done with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub seat: Seat,
    pub roll: u8,
    /// `None` when the roll was passed.
    pub mv: Option<Move>,
    pub result: Option<MoveResult>,
}

/// A running game: the current state, the dice, and an engine for
/// automated seats.
///
/// Rolls come either from the seeded [`Dice`] ([`roll`](Self::roll)) or
/// from the caller ([`roll_value`](Self::roll_value)), so scripted games
/// and self-play share one code path.
#[derive(Debug)]
pub struct Match {
    state: Arc<GameState>,
    dice: Dice,
    engine: SearchEngine,
    records: Vec<TurnRecord>,
}

impl Match {
    /// Start a match from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let state = GameState::from_config(config)?;
        info!(
            first = %config.seat(Seat::First).color,
            second = %config.seat(Seat::Second).color,
            seed = config.seed,
            "match started"
        );
        Ok(Self {
            state,
            dice: Dice::new(config.seed),
            engine: SearchEngine::new(config.search.clone()),
            records: Vec::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &Arc<GameState> {
        &self.state
    }

    #[must_use]
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    #[must_use]
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Every resolved roll so far, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.state.winner()
    }

    /// Legal moves for the pending roll.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.state.get_valid_moves()
    }

    // === Turn Steps ===

    /// Roll the dice for the seat to move.
    ///
    /// Returns `None` if the game is over or a roll is already pending.
    pub fn roll(&mut self) -> Option<u8> {
        if !self.can_roll() {
            return None;
        }
        let value = self.dice.roll();
        self.state = self.state.apply_dice_roll(value);
        debug!(seat = %self.state.current_seat(), value, "rolled");
        Some(value)
    }

    /// Record a roll chosen by the caller instead of the dice.
    ///
    /// Returns `false` (nothing changes) for values outside `1..=6`, a
    /// finished game or a roll already pending.
    pub fn roll_value(&mut self, value: u8) -> bool {
        if !(1..=FACES).contains(&value) || !self.can_roll() {
            warn!(value, "roll rejected");
            return false;
        }
        self.state = self.state.apply_dice_roll(value);
        debug!(seat = %self.state.current_seat(), value, "roll set");
        true
    }

    /// Play a legal move for the pending roll.
    ///
    /// Returns `None` (nothing changes) if `mv` is not among
    /// [`legal_moves`](Self::legal_moves).
    pub fn play(&mut self, mv: Move) -> Option<MoveResult> {
        if !self.legal_moves().contains(&mv) {
            warn!(%mv, "illegal move rejected");
            return None;
        }
        let seat = self.state.current_seat();
        let roll = self.state.dice_value()?;

        let (next, result) = self.state.apply_move_with_result(mv);
        self.state = next;
        self.records.push(TurnRecord {
            seat,
            roll,
            mv: Some(mv),
            result,
        });

        if let Some(winner) = self.winner() {
            info!(%winner, turns = self.records.len(), "match finished");
        }
        result
    }

    /// Give up a roll that has no legal move.
    ///
    /// Returns `false` if no roll is pending or a move is available.
    pub fn pass(&mut self) -> bool {
        let Some(roll) = self.state.dice_value() else {
            return false;
        };
        if !self.legal_moves().is_empty() {
            return false;
        }

        let seat = self.state.current_seat();
        self.state = self.state.pass_turn();
        self.records.push(TurnRecord {
            seat,
            roll,
            mv: None,
            result: None,
        });
        debug!(%seat, roll, "passed");
        true
    }

    /// Roll and resolve one roll for the seat to move.
    ///
    /// Automated seats use the search engine; other seats take the first
    /// legal move. Returns `None` once the game is over.
    pub fn step(&mut self) -> Option<TurnRecord> {
        if self.state.dice_value().is_none() {
            self.roll()?;
        }

        let choice = if self.state.current_player().is_automated {
            self.engine.find_best_move(&self.state)
        } else {
            self.legal_moves().first().copied()
        };

        match choice {
            Some(mv) => {
                self.play(mv)?;
            }
            None => {
                self.pass();
            }
        }
        self.records.last().copied()
    }

    /// Step until someone wins or `max_steps` rolls have been resolved.
    pub fn play_out(&mut self, max_steps: usize) -> Option<Seat> {
        for _ in 0..max_steps {
            if self.is_over() {
                break;
            }
            self.step();
        }
        self.winner()
    }

    fn can_roll(&self) -> bool {
        !self.is_over() && self.state.dice_value().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PieceId, Position, SeatConfig};
    use crate::search::SearchConfig;

    fn config() -> GameConfig {
        GameConfig::new(SeatConfig::human(Color::Red), SeatConfig::automated(Color::Yellow))
            .with_seed(7)
            .with_search(SearchConfig::default().with_depth(1))
    }

    #[test]
    fn test_new_rejects_duplicate_colors() {
        let config =
            GameConfig::new(SeatConfig::human(Color::Red), SeatConfig::automated(Color::Red));
        assert_eq!(Match::new(&config).err(), Some(ConfigError::DuplicateColor(Color::Red)));
    }

    #[test]
    fn test_scripted_roll_and_move() {
        let mut game = Match::new(&config()).unwrap();
        assert!(game.roll_value(6));
        assert!(!game.roll_value(6), "a roll is already pending");
        assert_eq!(game.roll(), None);

        let red0 = PieceId::new(Color::Red, 0);
        let result = game.play(Move::new(red0, 6)).unwrap();
        assert_eq!(result.to, 13);
        assert_eq!(game.state().board().piece(red0).unwrap().position, Position::At(13));
        assert_eq!(game.state().current_seat(), Seat::First, "six keeps the turn");
        assert_eq!(game.records().len(), 1);
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut game = Match::new(&config()).unwrap();
        assert!(!game.roll_value(0));
        assert!(!game.roll_value(7));

        assert!(game.roll_value(3));
        assert!(game.play(Move::new(PieceId::new(Color::Red, 0), 3)).is_none());
        assert!(game.records().is_empty());
    }

    #[test]
    fn test_pass_only_without_moves() {
        let mut game = Match::new(&config()).unwrap();
        assert!(!game.pass(), "nothing rolled yet");

        assert!(game.roll_value(6));
        assert!(!game.pass(), "a six can leave base");

        game.play(Move::new(PieceId::new(Color::Red, 0), 6));
        assert!(game.roll_value(2));
        assert!(!game.pass());
        game.play(Move::new(PieceId::new(Color::Red, 0), 2));

        // Yellow is all in base.
        assert!(game.roll_value(4));
        assert!(game.pass());
        assert_eq!(game.state().current_seat(), Seat::First);
        assert_eq!(game.records().last().unwrap().mv, None);
    }

    #[test]
    fn test_step_resolves_a_roll() {
        let mut game = Match::new(&config()).unwrap();
        let record = game.step().unwrap();
        assert_eq!(record.seat, Seat::First);
        assert!((1..=6).contains(&record.roll));
        assert_eq!(record.mv.is_some(), record.roll == 6);
        assert!(game.state().dice_value().is_none());
    }

    #[test]
    fn test_self_play_finishes() {
        let config = GameConfig::new(
            SeatConfig::automated(Color::Blue),
            SeatConfig::automated(Color::Green),
        )
        .with_seed(11)
        .with_search(SearchConfig::default().with_depth(1));
        let mut game = Match::new(&config).unwrap();

        let winner = game.play_out(20_000);
        assert!(winner.is_some());
        assert!(game.is_over());
        assert!(game.step().is_none());
        assert!(game.state().board().player(winner.unwrap()).is_winning());
    }
}
