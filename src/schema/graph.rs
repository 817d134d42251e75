//! Graph model consumed by the edge cover search.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LoadError;

/// A node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier.
    pub id: String,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An undirected edge between two node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Read-only view of an undirected graph.
///
/// Edge order is significant: antibodies address edges by their position
/// in `links`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Unique node identifiers.
    pub nodes: Vec<Node>,
    /// Ordered edge list, indexed 0..E-1.
    #[serde(alias = "edges")]
    pub links: Vec<Edge>,
}

impl Graph {
    /// Build a graph from node ids and (source, target) pairs.
    pub fn from_pairs<S: AsRef<str>>(node_ids: &[S], pairs: &[(S, S)]) -> Self {
        Self {
            nodes: node_ids.iter().map(|id| Node::new(id.as_ref())).collect(),
            links: pairs
                .iter()
                .map(|(s, t)| Edge::new(s.as_ref(), t.as_ref()))
                .collect(),
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// Edge at position `index`.
    #[inline]
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.links.get(index)
    }

    /// Check that the graph can be searched: at least one edge, unique node
    /// ids, and every edge endpoint referencing an existing node.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.links.is_empty() {
            return Err(GraphError::NoEdges);
        }

        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        for (i, edge) in self.links.iter().enumerate() {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(GraphError::UnknownEndpoint {
                        edge: i,
                        node: endpoint.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Load a graph from a JSON file (`{"nodes": [...], "links": [...]}`).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Graph validation errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Graph must contain at least one edge")]
    NoEdges,
    #[error("Duplicate node id {0:?}")]
    DuplicateNode(String),
    #[error("Edge {edge} references unknown node {node:?}")]
    UnknownEndpoint { edge: usize, node: String },
}
