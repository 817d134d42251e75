//! Clonal selection search for small edge covers.
//!
//! A candidate edge subset is an [`Antibody`]: one bit per edge, set when the
//! edge is selected. Each generation ranks the population by cost, keeps the
//! best `pop_total`, and re-expands it by cloning with bit-flip mutation.
//!
//! # Overview
//!
//! - **Encoding** (`antibody`): bit vectors and decoding into edge lists
//! - **Cost** (`cost`): coverage deficit and edges used
//! - **Generation and Mutation** (`rng`): random initial population, clonal
//!   expansion with fixed-count flip masks
//! - **Selection** (`select`): deficit buckets ranked by edges used, truncated
//!   to a capacity
//! - **Driver** (`search`): initialize, then select+mutate for `max_iterate`
//!   generations, then a final selection
//!
//! # Example
//!
//! ```rust,no_run
//! use edge_cover_immune::schema::{Graph, SearchConfig};
//! use edge_cover_immune::compute::immune::ImmuneSearch;
//!
//! let graph = Graph::from_pairs(&["0", "1", "2", "3"], &[("0", "1"), ("1", "2"), ("2", "3")]);
//!
//! let mut engine = ImmuneSearch::new(&graph, SearchConfig::default()).unwrap();
//! let outcome = engine.run_with_callback(|progress| {
//!     if let Some(best) = progress.best_cost {
//!         println!("Generation {}: deficit {}", progress.generation, best.coverage_deficit);
//!     }
//! });
//!
//! println!("Selected edges: {:?}", outcome.result.selected_edge_indices);
//! ```

mod antibody;
mod cost;
mod rng;
mod search;
mod select;

pub use antibody::{Antibody, Population};
pub use cost::evaluate;
pub use rng::{AntibodyRng, expanded_size, flip_count};
pub use search::{ImmuneSearch, search};
pub use select::{cluster, evaluate_population, select, select_scored};
