//! The board: cells, paths, seated players, and the move rules.
//!
//! Pieces (held by the players) are the source of truth for positions.
//! Cell occupant lists are rebuilt from them by [`Board::sync_occupancy`]
//! after every change, so the two can never drift apart.
//!
//! Cells live in a persistent `im::Vector`: cloning a board is cheap and a
//! move only copies the chunks whose cells actually changed.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Occupants};
use super::geometry::{PathSpec, CELL_COUNT, TRACK_LEN};
use super::moves::{Move, MoveResult};
use crate::core::{
    Color, ConfigError, GameConfig, Piece, PieceId, Player, Position, Seat, SeatConfig, SeatMap,
};

/// Full board state for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<Cell>,
    paths: [PathSpec; 4],
    players: SeatMap<Player>,
    current: Seat,
}

impl Board {
    /// Create a board with both players' pieces in base. `Seat::First`
    /// moves first.
    ///
    /// Fails if both seats race the same color.
    pub fn new(first: SeatConfig, second: SeatConfig) -> Result<Self, ConfigError> {
        if first.color == second.color {
            return Err(ConfigError::DuplicateColor(first.color));
        }

        let paths = Color::ALL.map(PathSpec::for_color);
        let mut cells: Vector<Cell> = (0..CELL_COUNT).map(|_| Cell::new(None, false)).collect();

        for color in Color::ALL {
            let path = paths[color.index()];
            cells[path.start] = Cell::new(Some(color), true);
            for lane in path.home_start..=path.home_end() {
                cells[lane] = Cell::new(Some(color), true);
            }
        }

        Ok(Self {
            cells,
            paths,
            players: SeatMap::from_array([
                Player::new(first.color, first.automated),
                Player::new(second.color, second.automated),
            ]),
            current: Seat::First,
        })
    }

    /// Create a board from a validated game configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.seat(Seat::First), config.seat(Seat::Second))
    }

    // === Cells and Paths ===

    /// Get a cell, or `None` for an out-of-range index.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Iterate over all cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Path descriptor for a color.
    #[must_use]
    pub fn path(&self, color: Color) -> PathSpec {
        self.paths[color.index()]
    }

    /// Destination for a `color` piece moving `steps` from `current`.
    #[must_use]
    pub fn next_position(&self, current: Position, steps: u8, color: Color) -> Option<usize> {
        self.path(color).next_position(current, steps)
    }

    /// Steps a piece has travelled from its start cell.
    #[must_use]
    pub fn progress(&self, piece: &Piece) -> Option<usize> {
        self.path(piece.color()).progress(piece.position)
    }

    // === Players ===

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<Player> {
        &self.players
    }

    /// Seat racing `color`, if that color is in the game.
    #[must_use]
    pub fn seat_of(&self, color: Color) -> Option<Seat> {
        self.players.iter().find(|(_, p)| p.color == color).map(|(s, _)| s)
    }

    /// Look up a piece by identity.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.players[self.seat_of(id.color)?].piece(id)
    }

    /// Pass the turn to the other seat.
    pub fn switch_player(&mut self) {
        self.current = self.current.other();
    }

    /// Seat that has finished all four pieces, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.players.iter().find(|(_, p)| p.is_winning()).map(|(s, _)| s)
    }

    // === Move Rules ===

    /// Whether `piece` may legally move `steps`.
    ///
    /// The destination must exist (a piece in base needs a six) and no cell
    /// along the way, destination included, may hold an opposing block. An
    /// opposing block on the start cell keeps pieces in base.
    #[must_use]
    pub fn can_move(&self, piece: &Piece, steps: u8) -> bool {
        if piece.done {
            return false;
        }

        let path = self.path(piece.color());
        if path.next_position(piece.position, steps).is_none() {
            return false;
        }

        (1..=steps)
            .filter_map(|s| path.next_position(piece.position, s))
            .all(|cell| !self.cells.get(cell).is_some_and(|c| c.blocks(piece.color())))
    }

    /// All legal moves for a seat with the given roll, in piece order.
    #[must_use]
    pub fn get_valid_moves(&self, seat: Seat, dice_value: u8) -> Vec<Move> {
        self.players[seat]
            .pieces
            .iter()
            .filter(|p| self.can_move(p, dice_value))
            .map(|p| Move::new(p.id, dice_value))
            .collect()
    }

    /// Move a piece on this board in place.
    ///
    /// Returns `true` if an opposing piece was captured. Illegal moves leave
    /// the board untouched and return `false`.
    pub fn move_piece(&mut self, piece: PieceId, steps: u8) -> bool {
        let legal = self.piece(piece).is_some_and(|p| self.can_move(p, steps));
        if !legal {
            tracing::debug!(%piece, steps, "ignoring illegal move");
            return false;
        }
        self.apply(Move::new(piece, steps))
            .is_some_and(|result| result.captured.is_some())
    }

    /// Relocate a piece, resolving capture and completion.
    ///
    /// Only the destination is validated; block checks belong to move
    /// generation. Returns `None` (board unchanged) for unknown or finished
    /// pieces and invalid destinations.
    pub(crate) fn apply(&mut self, mv: Move) -> Option<MoveResult> {
        let seat = self.seat_of(mv.piece.color)?;
        let piece = *self.players[seat].piece(mv.piece)?;
        if piece.done {
            return None;
        }

        let path = self.path(piece.color());
        let to = path.next_position(piece.position, mv.steps)?;

        let captured = self.cells.get(to).and_then(|c| c.capturable_by(piece.color()));
        if let Some(victim) = captured {
            if let Some(victim_piece) = self
                .seat_of(victim.color)
                .and_then(|s| self.players[s].piece_mut(victim))
            {
                victim_piece.send_to_base();
            }
        }

        let finished = to == path.home_end();
        if let Some(moved) = self.players[seat].piece_mut(mv.piece) {
            moved.place(to, finished);
        }
        self.sync_occupancy();

        Some(MoveResult {
            mv,
            from: piece.position,
            to,
            captured,
            finished,
            winning: self.players[seat].is_winning(),
        })
    }

    /// Put a piece at an arbitrary position, e.g. to set up a scenario.
    ///
    /// A piece placed on the last cell of its home lane is marked done.
    /// Returns `false` if the piece is unknown or the cell is not on its path.
    pub fn arrange(&mut self, id: PieceId, position: Position) -> bool {
        let path = self.path(id.color);
        if let Position::At(cell) = position {
            if cell >= TRACK_LEN && !path.in_home_lane(cell) {
                return false;
            }
        }
        let Some(seat) = self.seat_of(id.color) else {
            return false;
        };
        let Some(piece) = self.players[seat].piece_mut(id) else {
            return false;
        };

        match position {
            Position::Base => piece.send_to_base(),
            Position::At(cell) => piece.place(cell, cell == path.home_end()),
        }
        self.sync_occupancy();
        true
    }

    /// Rebuild every cell's occupant list from piece positions.
    ///
    /// Finished pieces leave the board. Only cells whose occupants changed
    /// are written, keeping unchanged chunks shared with earlier copies.
    pub fn sync_occupancy(&mut self) {
        let mut desired: FxHashMap<usize, Occupants> = FxHashMap::default();
        for player in self.players.values() {
            for piece in player.pieces.iter().filter(|p| !p.done) {
                if let Some(cell) = piece.position.cell() {
                    desired.entry(cell).or_default().push(piece.id);
                }
            }
        }

        for index in 0..self.cells.len() {
            let wanted = desired.remove(&index).unwrap_or_default();
            if self.cells[index].occupants != wanted {
                if let Some(cell) = self.cells.get_mut(index) {
                    cell.occupants = wanted;
                }
            }
        }
    }
}
