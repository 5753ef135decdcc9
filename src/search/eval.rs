//! Static evaluation and move ordering heuristics.
//!
//! ## Evaluation
//!
//! Scores are always from one seat's point of view: its side score minus
//! the opponent's. Either side having finished all pieces short-circuits to
//! `±weights.win`.
//!
//! Per piece:
//! - finished: `done`
//! - in base: `base`
//! - on the board: progress fraction × `progress`, plus `safe` on a safe
//!   cell, minus `threat` per opposing piece close behind it on the shared
//!   track, plus `attack` per capturable opposing piece close ahead.
//!
//! ## Ordering
//!
//! Moves likely to matter are expanded first so alpha-beta cuts earlier.

use std::cmp::Reverse;

use super::config::EvalWeights;
use crate::board::{track_distance, Board, Move, FINAL_PROGRESS, LAST_TRACK_PROGRESS, TRACK_LEN};
use crate::core::{Piece, Player, Position, Seat, SIX};
use crate::state::GameState;

/// Cells behind or ahead within which pieces interact.
const REACH: usize = SIX as usize;

/// Evaluate `state` from `perspective`'s point of view.
#[must_use]
pub fn evaluate(state: &GameState, perspective: Seat, weights: &EvalWeights) -> f64 {
    evaluate_board(state.board(), perspective, weights)
}

/// Evaluate a bare board from `perspective`'s point of view.
#[must_use]
pub fn evaluate_board(board: &Board, perspective: Seat, weights: &EvalWeights) -> f64 {
    let me = board.player(perspective);
    let opponent = board.player(perspective.other());

    if me.is_winning() {
        return weights.win;
    }
    if opponent.is_winning() {
        return -weights.win;
    }

    side_score(board, me, opponent, weights) - side_score(board, opponent, me, weights)
}

fn side_score(board: &Board, player: &Player, opponent: &Player, weights: &EvalWeights) -> f64 {
    player
        .pieces
        .iter()
        .map(|piece| piece_score(board, piece, opponent, weights))
        .sum()
}

fn piece_score(board: &Board, piece: &Piece, opponent: &Player, weights: &EvalWeights) -> f64 {
    if piece.done {
        return weights.done;
    }
    let (Some(cell), Some(progress)) = (piece.position.cell(), board.progress(piece)) else {
        return weights.base;
    };

    let mut score = weights.progress * progress as f64 / FINAL_PROGRESS as f64;
    let safe = board.cell(cell).is_some_and(|c| c.is_safe);
    if safe {
        score += weights.safe;
    }
    if cell >= TRACK_LEN {
        return score;
    }

    for other in opponent.pieces.iter().filter(|p| p.is_active()) {
        let (Some(other_cell), Some(other_progress)) =
            (other.position.cell(), board.progress(other))
        else {
            continue;
        };
        if other_cell >= TRACK_LEN {
            continue;
        }

        // Only counts while the chaser stays on the track long enough to land.
        let behind = track_distance(other_cell, cell);
        if !safe
            && (1..=REACH).contains(&behind)
            && other_progress + behind <= LAST_TRACK_PROGRESS
        {
            score -= weights.threat * (REACH + 1 - behind) as f64;
        }

        let ahead = track_distance(cell, other_cell);
        let target_safe = board.cell(other_cell).is_some_and(|c| c.is_safe);
        if !target_safe && (1..=REACH).contains(&ahead) && progress + ahead <= LAST_TRACK_PROGRESS {
            score += weights.attack * (REACH + 1 - ahead) as f64;
        }
    }

    score
}

/// Sort moves best-first: leaving base, then deeper home-lane landings,
/// then pieces further along. The sort is stable, so generation order
/// breaks ties.
pub fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|mv| Reverse(ordering_key(board, *mv)));
}

fn ordering_key(board: &Board, mv: Move) -> (u8, usize) {
    let Some(piece) = board.piece(mv.piece) else {
        return (0, 0);
    };
    if piece.is_in_base() {
        return (3, 0);
    }

    let path = board.path(piece.color());
    match path.next_position(piece.position, mv.steps) {
        Some(to) if path.in_home_lane(to) => (2, to - path.home_start),
        Some(to) => (1, path.progress(Position::At(to)).unwrap_or(0)),
        None => (0, 0),
    }
}
