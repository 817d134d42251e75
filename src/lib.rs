//! Edge cover search with a clonal selection artificial immune algorithm.
//!
//! Given an undirected graph, the search looks for a small subset of edges
//! such that every node is an endpoint of at least one selected edge. The
//! result is heuristic: no optimality guarantee is made.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Graph model, configuration, and result types
//! - `compute`: Tree generation and the immune search (encoding, cost,
//!   selection, mutation, driver)
//!
//! # Example
//!
//! ```rust,no_run
//! use edge_cover_immune::{
//!     compute::{generate_tree, search},
//!     schema::GeneratorConfig,
//! };
//!
//! // Generate a random 14-node tree
//! let graph = generate_tree(&GeneratorConfig::default()).unwrap();
//!
//! // Run 50 generations with mutation probability 0.2
//! let result = search(&graph, 0.2, 10, 10, 50).unwrap();
//!
//! println!("Selected edges: {:?}", result.selected_edge_indices);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{ImmuneSearch, search};
pub use schema::{Edge, Graph, Node, SearchConfig, SearchResult};
