//! Result, progress and statistics types for the immune edge cover search.

use serde::{Deserialize, Serialize};

use super::Edge;

/// Fitness of an antibody.
///
/// Ordering is lexicographic: coverage deficit first, then edges used, so
/// smaller is better.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cost {
    /// Nodes not touched by any selected edge.
    pub coverage_deficit: usize,
    /// Number of selected edges.
    pub edges_used: usize,
}

impl Cost {
    /// True when every node is covered.
    #[inline]
    pub fn is_cover(&self) -> bool {
        self.coverage_deficit == 0
    }
}

/// The best edge subset found by a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Selected edges, in increasing edge-index order.
    pub selected_edges: Vec<Edge>,
    /// Indices of the selected edges, strictly increasing.
    pub selected_edge_indices: Vec<usize>,
}

// ============================================================================
// Progress and Result Types
// ============================================================================

/// Progress update emitted after initialization and after each generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProgress {
    /// Generations completed.
    pub generation: usize,
    /// Total generations planned.
    pub total_generations: usize,
    /// Current working population size.
    pub population_size: usize,
    /// Best cost of the latest selection, if one has run.
    pub best_cost: Option<Cost>,
    /// Per-generation history.
    pub history: SearchHistory,
    /// Current phase of the search.
    pub phase: SearchPhase,
}

/// Per-generation history for plotting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchHistory {
    /// Coverage deficit of the best selected antibody.
    pub best_deficit: Vec<usize>,
    /// Edges used by the best selected antibody.
    pub best_edges_used: Vec<usize>,
    /// Population size after clonal expansion.
    pub population_size: Vec<usize>,
}

impl SearchHistory {
    pub fn len(&self) -> usize {
        self.best_deficit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_deficit.is_empty()
    }

    pub(crate) fn record(&mut self, best: Cost, population_size: usize) {
        self.best_deficit.push(best.coverage_deficit);
        self.best_edges_used.push(best.edges_used);
        self.population_size.push(population_size);
    }
}

/// Current phase of the search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Generating the initial population.
    #[default]
    Initializing,
    /// Running select+mutate generations.
    Iterating,
    /// Final selection and decoding.
    Finalizing,
    /// Search complete.
    Complete,
    /// Search stopped early.
    Stopped,
}

/// Everything a completed run reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Decoded best antibody.
    pub result: SearchResult,
    /// Cost of the best antibody.
    pub best_cost: Cost,
    /// Run statistics.
    pub stats: SearchStats,
    /// Full history for analysis.
    pub history: SearchHistory,
}

/// Statistics from a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStats {
    /// Generations completed.
    pub generations: usize,
    /// Total cost evaluations performed.
    pub evaluations: u64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Reason for stopping.
    pub stop_reason: StopReason,
}

/// Reason a search stopped iterating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// Ran all configured generations.
    MaxIterations,
    /// Cancelled between generations.
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_ordering() {
        let covered = Cost {
            coverage_deficit: 0,
            edges_used: 5,
        };
        let lean = Cost {
            coverage_deficit: 1,
            edges_used: 1,
        };
        let leaner_cover = Cost {
            coverage_deficit: 0,
            edges_used: 2,
        };

        assert!(covered < lean);
        assert!(leaner_cover < covered);
        assert!(covered.is_cover());
        assert!(!lean.is_cover());
    }

    #[test]
    fn test_history_record() {
        let mut history = SearchHistory::default();
        assert!(history.is_empty());

        history.record(
            Cost {
                coverage_deficit: 2,
                edges_used: 3,
            },
            65,
        );

        assert_eq!(history.len(), 1);
        assert_eq!(history.best_deficit, vec![2]);
        assert_eq!(history.best_edges_used, vec![3]);
        assert_eq!(history.population_size, vec![65]);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = SearchOutcome {
            result: SearchResult {
                selected_edges: vec![Edge::new("0", "1")],
                selected_edge_indices: vec![0],
            },
            best_cost: Cost::default(),
            stats: SearchStats {
                generations: 1,
                evaluations: 10,
                elapsed_seconds: 0.5,
                stop_reason: StopReason::MaxIterations,
            },
            history: SearchHistory::default(),
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let parsed: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.result, outcome.result);
        assert_eq!(parsed.stats.stop_reason, StopReason::MaxIterations);
    }
}
