//! Configuration types for the immune edge cover search.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Graph, GraphError};

/// Parameters of a clonal selection search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Fraction of edge positions flipped in every clone (0.0-1.0).
    #[serde(default = "default_mutation_prob")]
    pub mutation_prob: f64,
    /// Size of the randomly generated initial population.
    #[serde(default = "default_pop_init")]
    pub pop_init: usize,
    /// Number of antibodies kept by selection each generation.
    #[serde(default = "default_pop_total")]
    pub pop_total: usize,
    /// Number of select+mutate generations.
    #[serde(default = "default_max_iterate")]
    pub max_iterate: usize,
    /// Capacity of the final selection; only the best survivor is decoded.
    #[serde(default = "default_final_capacity")]
    pub final_capacity: usize,
    /// Random seed. `None` draws fresh entropy for every run.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mutation_prob: default_mutation_prob(),
            pop_init: default_pop_init(),
            pop_total: default_pop_total(),
            max_iterate: default_max_iterate(),
            final_capacity: default_final_capacity(),
            random_seed: None,
        }
    }
}

fn default_mutation_prob() -> f64 {
    0.2
}
fn default_pop_init() -> usize {
    10
}
fn default_pop_total() -> usize {
    10
}
fn default_max_iterate() -> usize {
    50
}
fn default_final_capacity() -> usize {
    5
}

impl SearchConfig {
    /// Validate parameters against the graph they will run on.
    pub fn validate(&self, graph: &Graph) -> Result<(), SearchConfigError> {
        graph.validate()?;

        if self.pop_init == 0 {
            return Err(SearchConfigError::PopulationInitTooSmall);
        }
        if self.pop_total == 0 {
            return Err(SearchConfigError::PopulationTotalTooSmall);
        }
        if self.final_capacity == 0 {
            return Err(SearchConfigError::FinalCapacityTooSmall);
        }
        if !(0.0..=1.0).contains(&self.mutation_prob) {
            return Err(SearchConfigError::InvalidMutationProbability(
                self.mutation_prob,
            ));
        }

        Ok(())
    }

    /// Load search parameters from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Parameters for random tree generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of nodes in the generated tree.
    #[serde(default = "default_nodes")]
    pub nodes: usize,
    /// Random seed for reproducible graphs.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            random_seed: None,
        }
    }
}

fn default_nodes() -> usize {
    14
}

impl GeneratorConfig {
    /// A tree needs at least two nodes to have an edge.
    pub fn validate(&self) -> Result<(), GeneratorConfigError> {
        if self.nodes < 2 {
            return Err(GeneratorConfigError::TooFewNodes(self.nodes));
        }
        Ok(())
    }
}

/// Search configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchConfigError {
    #[error("Initial population size must be at least 1")]
    PopulationInitTooSmall,
    #[error("Selected population size must be at least 1")]
    PopulationTotalTooSmall,
    #[error("Final selection capacity must be at least 1")]
    FinalCapacityTooSmall,
    #[error("Mutation probability {0} is outside [0, 1]")]
    InvalidMutationProbability(f64),
    #[error("Graph validation failed: {0}")]
    Graph(#[from] GraphError),
}

/// Generator configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorConfigError {
    #[error("Tree generation needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),
}

/// Errors loading JSON inputs from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_edge() -> Graph {
        Graph::from_pairs(&["0", "1"], &[("0", "1")])
    }

    #[test]
    fn test_default_config_valid() {
        let config = SearchConfig::default();
        assert!(config.validate(&single_edge()).is_ok());
        assert_eq!(config.final_capacity, 5);
        assert!(config.random_seed.is_none());
    }

    #[test]
    fn test_rejects_empty_populations() {
        let graph = single_edge();

        let config = SearchConfig {
            pop_init: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(&graph),
            Err(SearchConfigError::PopulationInitTooSmall)
        ));

        let config = SearchConfig {
            pop_total: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(&graph),
            Err(SearchConfigError::PopulationTotalTooSmall)
        ));

        let config = SearchConfig {
            final_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(&graph),
            Err(SearchConfigError::FinalCapacityTooSmall)
        ));
    }

    #[test]
    fn test_rejects_mutation_probability_out_of_range() {
        let graph = single_edge();
        for p in [-0.1, 1.5, f64::NAN] {
            let config = SearchConfig {
                mutation_prob: p,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(&graph),
                Err(SearchConfigError::InvalidMutationProbability(_))
            ));
        }

        for p in [0.0, 1.0] {
            let config = SearchConfig {
                mutation_prob: p,
                ..Default::default()
            };
            assert!(config.validate(&graph).is_ok());
        }
    }

    #[test]
    fn test_rejects_invalid_graph() {
        let graph = Graph::from_pairs::<&str>(&["0"], &[]);
        assert!(matches!(
            SearchConfig::default().validate(&graph),
            Err(SearchConfigError::Graph(GraphError::NoEdges))
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"max_iterate": 3}"#).unwrap();
        assert_eq!(config.max_iterate, 3);
        assert_eq!(config.pop_init, 10);
        assert!((config.mutation_prob - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_generator_validate() {
        assert!(GeneratorConfig::default().validate().is_ok());
        let config = GeneratorConfig {
            nodes: 1,
            random_seed: None,
        };
        assert!(matches!(
            config.validate(),
            Err(GeneratorConfigError::TooFewNodes(1))
        ));
    }
}
