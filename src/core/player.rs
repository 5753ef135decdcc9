//! Seats and players.
//!
//! ## Seat
//!
//! Type-safe identifier for the two seats at the table.
//!
//! ## SeatMap
//!
//! Fixed per-seat storage, indexable by `Seat`.
//!
//! ## Player
//!
//! Four pieces of one color plus the human/automated flag.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::Color;
use super::piece::{Piece, PieceId, PIECES_PER_PLAYER};
use crate::board::Board;

/// One of the two seats in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats, in turn order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// Raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.index())
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{Seat, SeatMap};
///
/// let mut rolls: SeatMap<u32> = SeatMap::new(|_| 0);
/// rolls[Seat::Second] += 1;
/// assert_eq!(rolls[Seat::First], 0);
/// assert_eq!(rolls[Seat::Second], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    /// Create a map from explicit values in seat order.
    pub fn from_array(data: [T; 2]) -> Self {
        Self { data }
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }
}

/// A player: one color, four pieces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    pub pieces: [Piece; PIECES_PER_PLAYER],
    pub is_automated: bool,
}

impl Player {
    /// Create a player with all pieces in base.
    #[must_use]
    pub fn new(color: Color, is_automated: bool) -> Self {
        Self {
            color,
            pieces: std::array::from_fn(|i| Piece::new(color, i as u8)),
            is_automated,
        }
    }

    /// The player wins once every piece has finished its home lane.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.pieces.iter().all(|p| p.done)
    }

    /// Number of finished pieces.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.done).count()
    }

    /// Look up one of this player's pieces.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        if id.color != self.color {
            return None;
        }
        self.pieces.get(id.index as usize)
    }

    /// Mutable lookup of one of this player's pieces.
    pub fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        if id.color != self.color {
            return None;
        }
        self.pieces.get_mut(id.index as usize)
    }

    /// Whether any piece can legally move `dice_value` steps.
    #[must_use]
    pub fn has_valid_moves(&self, dice_value: u8, board: &Board) -> bool {
        self.pieces.iter().any(|p| board.can_move(p, dice_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_other() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_seat_map_iter() {
        let map = SeatMap::from_array(['a', 'b']);
        let pairs: Vec<_> = map.iter().map(|(s, v)| (s, *v)).collect();
        assert_eq!(pairs, vec![(Seat::First, 'a'), (Seat::Second, 'b')]);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(Color::Green, true);
        assert!(player.is_automated);
        assert!(!player.is_winning());
        assert_eq!(player.finished_count(), 0);
        for (i, piece) in player.pieces.iter().enumerate() {
            assert_eq!(piece.index() as usize, i);
            assert_eq!(piece.color(), Color::Green);
            assert!(piece.is_in_base());
        }
    }

    #[test]
    fn test_piece_lookup_rejects_foreign_color() {
        let mut player = Player::new(Color::Blue, false);
        assert!(player.piece(PieceId::new(Color::Red, 0)).is_none());
        assert!(player.piece_mut(PieceId::new(Color::Blue, 4)).is_none());
        assert!(player.piece(PieceId::new(Color::Blue, 3)).is_some());
    }

    #[test]
    fn test_is_winning() {
        let mut player = Player::new(Color::Red, false);
        for piece in &mut player.pieces {
            piece.place(63, true);
        }
        assert!(player.is_winning());
        assert_eq!(player.finished_count(), 4);
    }
}
