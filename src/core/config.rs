//! Game configuration.
//!
//! A `GameConfig` describes who sits where and how the automated side
//! searches. Rendering and interactive setup live outside this crate; they
//! build a `GameConfig` and hand it to [`Board::from_config`](crate::board::Board::from_config)
//! or [`Match::new`](crate::game::Match::new).

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ConfigError;
use super::player::{Seat, SeatMap};
use crate::search::SearchConfig;

/// Configuration for one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Color raced from this seat.
    pub color: Color,

    /// Whether moves for this seat are chosen by the search engine.
    pub automated: bool,
}

impl SeatConfig {
    #[must_use]
    pub const fn human(color: Color) -> Self {
        Self {
            color,
            automated: false,
        }
    }

    #[must_use]
    pub const fn automated(color: Color) -> Self {
        Self {
            color,
            automated: true,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat setup. `Seat::First` rolls first.
    pub seats: SeatMap<SeatConfig>,

    /// Seed for the dice.
    pub seed: u64,

    /// Search parameters for automated seats.
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: SeatMap::from_array([
                SeatConfig::human(Color::Blue),
                SeatConfig::automated(Color::Green),
            ]),
            seed: 42,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a config for the given seats with default seed and search.
    #[must_use]
    pub fn new(first: SeatConfig, second: SeatConfig) -> Self {
        Self {
            seats: SeatMap::from_array([first, second]),
            ..Self::default()
        }
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom search parameters.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Get the configuration for one seat.
    #[must_use]
    pub fn seat(&self, seat: Seat) -> SeatConfig {
        self.seats[seat]
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let first = self.seats[Seat::First].color;
        if first == self.seats[Seat::Second].color {
            return Err(ConfigError::DuplicateColor(first));
        }
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.seat(Seat::First).automated);
        assert!(config.seat(Seat::Second).automated);
    }

    #[test]
    fn test_duplicate_colors_rejected() {
        let config = GameConfig::new(
            SeatConfig::human(Color::Red),
            SeatConfig::automated(Color::Red),
        );
        assert_eq!(config.validate(), Err(ConfigError::DuplicateColor(Color::Red)));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(7)
            .with_search(SearchConfig::default().with_depth(2));
        assert_eq!(config.seed, 7);
        assert_eq!(config.search.depth, 2);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(
            SeatConfig::automated(Color::Yellow),
            SeatConfig::human(Color::Red),
        );
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.seats, config.seats);
        assert_eq!(deserialized.seed, config.seed);
    }
}
