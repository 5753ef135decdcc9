//! Depth-bounded expectiminimax with alpha-beta pruning.
//!
//! ## Node kinds
//!
//! - `Max`: the searching seat picks a move.
//! - `Min`: the opponent picks a move.
//! - `Chance`: the next roll, averaged over all six faces.
//!
//! After every move the tree continues with a chance node; after every roll
//! it continues with a `Max` or `Min` node depending on who holds the dice,
//! so a six (which keeps the turn) is followed by another `Max` node.
//!
//! ## Pruning
//!
//! `Max`/`Min` nodes prune with plain alpha-beta. Chance nodes pass the
//! window on Star1-style: every score lies in `±score_bound`, so after some
//! faces are known each remaining face gets the narrowest window that can
//! still move the average across `alpha` or `beta`, and the node stops as
//! soon as the average is decided. Root moves are searched with a full
//! window, so their scores are exact.
//!
//! A win scores `score_bound` by default, so a decision node that finds one
//! stops at once.
//!
//! ## Depth
//!
//! Each level (move or roll) consumes one unit of depth. Leaves and
//! finished games are scored with [`evaluate`] from the searching seat's
//! perspective and clamped to `±score_bound`.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, trace};

use super::config::SearchConfig;
use super::eval::{evaluate, order_moves};
use super::stats::SearchStats;
use crate::board::Move;
use crate::core::{Dice, Seat};
use crate::state::GameState;

/// Kind of node in the search tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Max,
    Min,
    Chance,
}

/// Expectiminimax search engine.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
        }
    }

    /// Create an engine with default settings and a custom depth.
    pub fn with_depth(depth: u32) -> Self {
        Self::new(SearchConfig::default().with_depth(depth))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best move for the seat to move in `state`.
    ///
    /// Returns `None` when no roll is pending or no move is legal. Ties go to
    /// the first candidate in search order.
    pub fn find_best_move(&mut self, state: &Arc<GameState>) -> Option<Move> {
        let mut best: Option<(Move, f64)> = None;
        for (mv, score) in self.move_scores(state) {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            info!(
                %mv,
                score,
                nodes = self.stats.nodes,
                cutoffs = self.stats.cutoffs,
                time_us = self.stats.time_us,
                "best move selected"
            );
        }
        best.map(|(mv, _)| mv)
    }

    /// Searched value of every legal root move, in search order.
    ///
    /// Empty when no roll is pending or no move is legal.
    pub fn move_scores(&mut self, state: &Arc<GameState>) -> Vec<(Move, f64)> {
        let start = Instant::now();
        self.stats.reset();

        let mut moves = state.get_valid_moves();
        if moves.is_empty() {
            return Vec::new();
        }
        if self.config.order_moves {
            order_moves(state.board(), &mut moves);
        }

        let perspective = state.current_seat();
        let depth = self.config.depth.saturating_sub(1);
        let bound = self.config.score_bound;
        self.stats.nodes += 1;
        self.stats.max_nodes += 1;

        let mut scores = Vec::with_capacity(moves.len());
        for mv in moves {
            let child = state.apply_move(mv);
            let score = self.search(&child, depth, NodeKind::Chance, -bound, bound, perspective);
            debug!(%mv, score, "root move analysed");
            scores.push((mv, score));
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        scores
    }

    /// Value of `state` for `perspective`, searched `depth` levels deep.
    pub fn search(
        &mut self,
        state: &Arc<GameState>,
        depth: u32,
        node: NodeKind,
        alpha: f64,
        beta: f64,
        perspective: Seat,
    ) -> f64 {
        self.stats.nodes += 1;

        if depth == 0 || state.is_terminal() {
            self.stats.leaf_nodes += 1;
            return self.clamp(evaluate(state, perspective, &self.config.weights));
        }

        match node {
            NodeKind::Chance => self.chance_value(state, depth, alpha, beta, perspective),
            NodeKind::Max | NodeKind::Min => {
                self.choice_value(state, depth, node, alpha, beta, perspective)
            }
        }
    }

    fn chance_value(
        &mut self,
        state: &Arc<GameState>,
        depth: u32,
        alpha: f64,
        beta: f64,
        perspective: Seat,
    ) -> f64 {
        self.stats.chance_nodes += 1;
        let bound = self.config.score_bound;
        let faces = Dice::probabilities();

        let mut expected = 0.0;
        for (i, &(face, probability)) in faces.iter().enumerate() {
            // Probability mass of the faces not searched yet.
            let remaining: f64 = faces[i + 1..].iter().map(|&(_, p)| p).sum();
            let child_alpha = ((alpha - expected - bound * remaining) / probability).max(-bound);
            let child_beta = ((beta - expected + bound * remaining) / probability).min(bound);

            let rolled = state.apply_dice_roll(face);
            let kind = if rolled.current_seat() == perspective {
                NodeKind::Max
            } else {
                NodeKind::Min
            };
            let value = self.search(&rolled, depth - 1, kind, child_alpha, child_beta, perspective);
            expected += probability * value;

            if expected + bound * remaining <= alpha {
                if remaining > 0.0 {
                    self.stats.cutoffs += 1;
                }
                trace!(depth, alpha, "chance node fails low");
                return alpha;
            }
            if expected - bound * remaining >= beta {
                if remaining > 0.0 {
                    self.stats.cutoffs += 1;
                }
                trace!(depth, beta, "chance node fails high");
                return beta;
            }
        }

        trace!(depth, expected, "chance node");
        self.clamp(expected)
    }

    fn choice_value(
        &mut self,
        state: &Arc<GameState>,
        depth: u32,
        node: NodeKind,
        mut alpha: f64,
        mut beta: f64,
        perspective: Seat,
    ) -> f64 {
        let maximizing = node == NodeKind::Max;
        if maximizing {
            self.stats.max_nodes += 1;
        } else {
            self.stats.min_nodes += 1;
        }

        let mut moves = state.get_valid_moves();
        if moves.is_empty() {
            // Unusable roll: the turn resolves without a move.
            let passed = state.pass_turn();
            return self.search(&passed, depth - 1, NodeKind::Chance, alpha, beta, perspective);
        }
        if self.config.order_moves {
            order_moves(state.board(), &mut moves);
        }

        let bound = self.config.score_bound;
        let mut value = if maximizing { -bound } else { bound };
        for mv in moves {
            let child = state.apply_move(mv);
            let score =
                self.search(&child, depth - 1, NodeKind::Chance, alpha, beta, perspective);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        trace!(?node, depth, value, "decision node");
        value
    }

    fn clamp(&self, score: f64) -> f64 {
        score.clamp(-self.config.score_bound, self.config.score_bound)
    }
}
