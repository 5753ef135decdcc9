//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Every node visited, leaves included.
    pub nodes: u64,

    pub max_nodes: u64,
    pub min_nodes: u64,
    pub chance_nodes: u64,

    /// Nodes scored by the static evaluation.
    pub leaf_nodes: u64,

    /// Nodes that stopped before searching every child, at decision and
    /// chance nodes alike.
    pub cutoffs: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of interior nodes that stopped early.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        let interior = self.max_nodes + self.min_nodes + self.chance_nodes;
        if interior == 0 {
            0.0
        } else {
            self.cutoffs as f64 / interior as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.cutoff_rate(), 0.0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.nodes_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.cutoffs = 3;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_cutoff_rate_counts_chance_nodes() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.cutoff_rate(), 0.0);

        stats.max_nodes = 2;
        stats.min_nodes = 1;
        stats.chance_nodes = 5;
        stats.cutoffs = 2;
        assert_eq!(stats.cutoff_rate(), 0.25);
    }
}
