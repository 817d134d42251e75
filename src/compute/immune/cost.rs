//! Cost evaluation for antibodies.

use std::collections::HashSet;

use crate::schema::{Cost, Graph};

use super::antibody::Antibody;

/// Evaluate an antibody against the graph.
///
/// Pure: the result depends only on the graph and the antibody.
pub fn evaluate(graph: &Graph, antibody: &Antibody) -> Cost {
    let mut covered: HashSet<&str> = HashSet::new();
    let mut edges_used = 0;

    for edge in antibody.selected_indices().filter_map(|i| graph.edge(i)) {
        edges_used += 1;
        covered.insert(edge.source.as_str());
        covered.insert(edge.target.as_str());
    }

    Cost {
        coverage_deficit: graph.node_count().saturating_sub(covered.len()),
        edges_used,
    }
}
