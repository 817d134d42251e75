//! Antibody encoding: a fixed-length bit vector over the edge set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{Graph, SearchResult};

/// Candidate edge subset. Bit `i` set means edge `i` is selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Antibody {
    bits: Vec<bool>,
}

/// An ordered sequence of antibodies. Duplicates are allowed.
pub type Population = Vec<Antibody>;

impl Antibody {
    /// All-zero antibody over `len` edges.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Antibody with exactly the given edge indices selected.
    /// Indices outside `0..len` are ignored.
    pub fn from_indices(len: usize, indices: &[usize]) -> Self {
        let mut antibody = Self::zeros(len);
        for &i in indices {
            antibody.set(i, true);
        }
        antibody
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Number of edge positions (always the graph's edge count).
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn is_selected(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    #[inline]
    pub fn set(&mut self, index: usize, selected: bool) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = selected;
        }
    }

    #[inline]
    pub fn flip(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// Count of selected edges.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Selected edge indices in increasing order.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Decode into the selected edges and their indices.
    pub fn decode(&self, graph: &Graph) -> SearchResult {
        let (selected_edges, selected_edge_indices) = self
            .selected_indices()
            .filter_map(|i| graph.edge(i).map(|edge| (edge.clone(), i)))
            .unzip();

        SearchResult {
            selected_edges,
            selected_edge_indices,
        }
    }
}

impl fmt::Display for Antibody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
