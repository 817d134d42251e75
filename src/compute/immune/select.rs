//! Cost-bucket clustering and rank-based truncation selection.

use std::collections::BTreeMap;

use log::trace;
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::schema::{Cost, Graph};

use super::antibody::{Antibody, Population};
use super::cost::evaluate;

/// Evaluate every antibody, preserving population order.
#[cfg(not(target_arch = "wasm32"))]
pub fn evaluate_population(graph: &Graph, population: &[Antibody]) -> Vec<Cost> {
    // Parallel evaluation
    population
        .par_iter()
        .map(|antibody| evaluate(graph, antibody))
        .collect()
}

#[cfg(target_arch = "wasm32")]
pub fn evaluate_population(graph: &Graph, population: &[Antibody]) -> Vec<Cost> {
    population
        .iter()
        .map(|antibody| evaluate(graph, antibody))
        .collect()
}

/// Group antibody indices by coverage deficit, each bucket ranked by edges
/// used (ascending). The sort is stable, so ties keep population order.
pub fn cluster(costs: &[Cost]) -> BTreeMap<usize, Vec<usize>> {
    let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (i, cost) in costs.iter().enumerate() {
        buckets.entry(cost.coverage_deficit).or_default().push(i);
    }

    for members in buckets.values_mut() {
        members.sort_by_key(|&i| costs[i].edges_used);
    }

    buckets
}

/// Rank the population and keep the best `capacity` antibodies together with
/// their costs, best first.
pub fn select_scored(
    graph: &Graph,
    population: Population,
    capacity: usize,
) -> Vec<(Antibody, Cost)> {
    let costs = evaluate_population(graph, &population);
    let buckets = cluster(&costs);

    trace!(
        "selection: {} antibodies in {} buckets, capacity {}",
        population.len(),
        buckets.len(),
        capacity
    );

    let mut ranked = Vec::with_capacity(population.len().min(capacity.saturating_add(1)));
    for members in buckets.values() {
        ranked.extend_from_slice(members);
        if ranked.len() > capacity {
            break;
        }
    }
    ranked.truncate(capacity);

    let mut slots: Vec<Option<Antibody>> = population.into_iter().map(Some).collect();
    ranked
        .into_iter()
        .filter_map(|i| slots[i].take().map(|antibody| (antibody, costs[i])))
        .collect()
}

/// Rank the population and keep the best `capacity` antibodies, best first.
///
/// Ordering is by coverage deficit, then edges used, then original position.
pub fn select(graph: &Graph, population: Population, capacity: usize) -> Population {
    select_scored(graph, population, capacity)
        .into_iter()
        .map(|(antibody, _)| antibody)
        .collect()
}
