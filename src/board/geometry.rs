//! Board geometry: how a color's logical progress maps onto cells.
//!
//! ## Layout
//!
//! - Cells `0..52` form the circular shared track.
//! - Cells `52..76` are the four private home lanes, six cells each,
//!   in `Color::ALL` order.
//!
//! ## Progress
//!
//! A piece's progress counts steps from its color's start cell:
//! `0..=50` on the shared track (50 is the re-entry point `end`),
//! `51..=56` in the home lane. Progress 56 finishes the piece.
//!
//! Everything here is a pure function of its arguments.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Position, SIX};

/// Cells on the shared circular track.
pub const TRACK_LEN: usize = 52;

/// Cells in each private home lane.
pub const HOME_LANE_LEN: usize = 6;

/// Total board cells (shared track plus four home lanes).
pub const CELL_COUNT: usize = TRACK_LEN + Color::ALL.len() * HOME_LANE_LEN;

/// Progress of a color's re-entry cell, the last shared-track cell it visits.
pub const LAST_TRACK_PROGRESS: usize = 50;

/// Progress of the final home-lane cell.
pub const FINAL_PROGRESS: usize = LAST_TRACK_PROGRESS + HOME_LANE_LEN;

/// Per-color path descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathSpec {
    /// Shared-track cell where pieces enter from base.
    pub start: usize,
    /// Shared-track cell after which pieces turn into the home lane.
    pub end: usize,
    /// First cell of the home lane.
    pub home_start: usize,
}

impl PathSpec {
    /// The path for a color.
    #[must_use]
    pub const fn for_color(color: Color) -> Self {
        let start = color.index() * (TRACK_LEN / 4);
        Self {
            start,
            end: (start + LAST_TRACK_PROGRESS) % TRACK_LEN,
            home_start: TRACK_LEN + color.index() * HOME_LANE_LEN,
        }
    }

    /// Last cell of the home lane. Landing here finishes a piece.
    #[must_use]
    pub const fn home_end(&self) -> usize {
        self.home_start + HOME_LANE_LEN - 1
    }

    /// Whether `cell` lies in this color's home lane.
    #[must_use]
    pub const fn in_home_lane(&self, cell: usize) -> bool {
        cell >= self.home_start && cell <= self.home_end()
    }

    /// Steps travelled from the start cell, or `None` for base and for
    /// cells this color never visits.
    #[must_use]
    pub fn progress(&self, position: Position) -> Option<usize> {
        let cell = position.cell()?;
        if self.in_home_lane(cell) {
            Some(LAST_TRACK_PROGRESS + 1 + (cell - self.home_start))
        } else if cell < TRACK_LEN {
            Some((cell + TRACK_LEN - self.start) % TRACK_LEN)
        } else {
            None
        }
    }

    /// Cell reached at a given progress, `None` past the end of the lane.
    #[must_use]
    pub fn cell_at_progress(&self, progress: usize) -> Option<usize> {
        if progress <= LAST_TRACK_PROGRESS {
            Some((self.start + progress) % TRACK_LEN)
        } else if progress <= FINAL_PROGRESS {
            Some(self.home_start + (progress - LAST_TRACK_PROGRESS - 1))
        } else {
            None
        }
    }

    /// Destination after moving `steps` from `current`.
    ///
    /// - From base only a six is valid, landing on `start`.
    /// - Inside the home lane, overshooting the last cell is invalid.
    /// - On the track, passing `end` diverts the remaining steps into the
    ///   home lane; otherwise the index wraps around the shared track.
    ///
    /// Returns `None` for any invalid move, including steps outside `1..=6`.
    #[must_use]
    pub fn next_position(&self, current: Position, steps: u8) -> Option<usize> {
        if !(1..=SIX).contains(&steps) {
            return None;
        }
        match current {
            Position::Base => (steps == SIX).then_some(self.start),
            Position::At(cell) if self.in_home_lane(cell) => {
                let next = cell + steps as usize;
                (next <= self.home_end()).then_some(next)
            }
            Position::At(cell) if cell < TRACK_LEN => {
                let progress = (cell + TRACK_LEN - self.start) % TRACK_LEN;
                self.cell_at_progress(progress + steps as usize)
            }
            Position::At(_) => None,
        }
    }
}

/// Destination for `color` after moving `steps` from `current`.
///
/// Free-function form of [`PathSpec::next_position`].
#[must_use]
pub fn next_position(current: Position, steps: u8, color: Color) -> Option<usize> {
    PathSpec::for_color(color).next_position(current, steps)
}

/// Forward distance along the shared track from `from` to `to`.
#[must_use]
pub const fn track_distance(from: usize, to: usize) -> usize {
    (to + TRACK_LEN - from) % TRACK_LEN
}

/// Whether `cell` lies in any home lane.
#[must_use]
pub const fn is_home_lane_cell(cell: usize) -> bool {
    cell >= TRACK_LEN && cell < CELL_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_layout() {
        assert_eq!(
            PathSpec::for_color(Color::Blue),
            PathSpec {
                start: 0,
                end: 50,
                home_start: 52,
            }
        );
        assert_eq!(
            PathSpec::for_color(Color::Red),
            PathSpec {
                start: 13,
                end: 11,
                home_start: 58,
            }
        );
        assert_eq!(
            PathSpec::for_color(Color::Green),
            PathSpec {
                start: 26,
                end: 24,
                home_start: 64,
            }
        );
        assert_eq!(
            PathSpec::for_color(Color::Yellow),
            PathSpec {
                start: 39,
                end: 37,
                home_start: 70,
            }
        );
        assert_eq!(CELL_COUNT, 76);
    }

    #[test]
    fn test_leave_base_only_on_six() {
        for color in Color::ALL {
            let path = PathSpec::for_color(color);
            assert_eq!(next_position(Position::Base, 6, color), Some(path.start));
            for steps in 1..6 {
                assert_eq!(next_position(Position::Base, steps, color), None);
            }
        }
    }

    #[test]
    fn test_track_wraps_for_non_zero_start() {
        // Red at 50 wraps past 51 back to the low cells.
        assert_eq!(next_position(Position::At(50), 4, Color::Red), Some(2));
        // Blue never wraps: it turns home after 50.
        assert_eq!(next_position(Position::At(45), 5, Color::Blue), Some(50));
    }

    #[test]
    fn test_enter_home_lane() {
        // Blue at 49 + 6 = raw 55, end 50 -> home_start + (55 - 50 - 1).
        assert_eq!(next_position(Position::At(49), 6, Color::Blue), Some(56));
        // Red at 8 + 5 crosses end 11 -> 58 + (13 - 11 - 1).
        assert_eq!(next_position(Position::At(8), 5, Color::Red), Some(59));
        // Landing exactly on end stays on the track.
        assert_eq!(next_position(Position::At(8), 3, Color::Red), Some(11));
    }

    #[test]
    fn test_home_lane_overshoot_is_invalid() {
        assert_eq!(next_position(Position::At(55), 2, Color::Blue), Some(57));
        assert_eq!(next_position(Position::At(55), 3, Color::Blue), None);
        assert_eq!(next_position(Position::At(57), 1, Color::Blue), None);
        // From the track, a roll that would skip past the lane end.
        assert_eq!(next_position(Position::At(50), 6, Color::Blue), Some(57));
        assert_eq!(next_position(Position::At(11), 6, Color::Red), Some(63));
    }

    #[test]
    fn test_foreign_home_lane_is_invalid() {
        assert_eq!(next_position(Position::At(60), 1, Color::Blue), None);
        assert_eq!(next_position(Position::At(CELL_COUNT), 1, Color::Blue), None);
    }

    #[test]
    fn test_steps_out_of_range() {
        assert_eq!(next_position(Position::At(3), 0, Color::Blue), None);
        assert_eq!(next_position(Position::At(3), 7, Color::Blue), None);
    }

    #[test]
    fn test_progress_roundtrip() {
        let path = PathSpec::for_color(Color::Green);
        for progress in 0..=FINAL_PROGRESS {
            let cell = path.cell_at_progress(progress).unwrap();
            assert_eq!(path.progress(Position::At(cell)), Some(progress));
        }
        assert_eq!(path.cell_at_progress(FINAL_PROGRESS + 1), None);
        assert_eq!(path.progress(Position::Base), None);
        assert_eq!(path.progress(Position::At(52)), None);
    }

    #[test]
    fn test_track_distance() {
        assert_eq!(track_distance(10, 14), 4);
        assert_eq!(track_distance(50, 2), 4);
        assert_eq!(track_distance(7, 7), 0);
    }
}
