//! Schema module - Graph, configuration and result types for the edge cover search.

mod config;
mod graph;
mod search;

pub use config::*;
pub use graph::*;
pub use search::*;
