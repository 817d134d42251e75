//! Clonal selection search driver.

use std::mem;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use log::{debug, info, warn};

use crate::schema::{
    Cost, Graph, SearchConfig, SearchConfigError, SearchHistory, SearchOutcome, SearchPhase,
    SearchProgress, SearchResult, SearchStats, StopReason,
};

use super::antibody::{Antibody, Population};
use super::cost::evaluate;
use super::rng::AntibodyRng;
use super::select::select_scored;

/// Search engine for a single run. Owns its population exclusively.
pub struct ImmuneSearch<'g> {
    graph: &'g Graph,
    config: SearchConfig,
    rng: AntibodyRng,
    population: Population,
    history: SearchHistory,
    generation: usize,
    best_cost: Option<Cost>,
    evaluations: u64,
    phase: SearchPhase,
    cancelled: Arc<AtomicBool>,
}

impl<'g> ImmuneSearch<'g> {
    /// Create a new search engine. Fails before any work if the graph or
    /// parameters are invalid.
    pub fn new(graph: &'g Graph, config: SearchConfig) -> Result<Self, SearchConfigError> {
        config.validate(graph)?;

        let rng = match config.random_seed {
            Some(seed) => AntibodyRng::new(seed),
            None => AntibodyRng::random(),
        };

        Ok(Self {
            graph,
            config,
            rng,
            population: Vec::new(),
            history: SearchHistory::default(),
            generation: 0,
            best_cost: None,
            evaluations: 0,
            phase: SearchPhase::Initializing,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Get cancellation handle. Checked between generations only.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Current working population.
    pub fn population(&self) -> &[Antibody] {
        &self.population
    }

    /// Initialize the population.
    pub fn initialize(&mut self) {
        self.population = self
            .rng
            .random_population(self.config.pop_init, self.graph.edge_count());
        self.history = SearchHistory::default();
        self.generation = 0;
        self.best_cost = None;
        self.evaluations = 0;
        self.phase = SearchPhase::Initializing;
    }

    /// Run a single select+mutate generation.
    pub fn step_generation(&mut self) {
        self.phase = SearchPhase::Iterating;

        let population = mem::take(&mut self.population);
        self.evaluations += population.len() as u64;

        let selected = select_scored(self.graph, population, self.config.pop_total);
        let best = selected.first().map(|(_, cost)| *cost);
        let survivors: Population = selected.into_iter().map(|(antibody, _)| antibody).collect();

        self.population = self
            .rng
            .clone_and_mutate(survivors, self.config.mutation_prob);

        if let Some(best) = best {
            self.history.record(best, self.population.len());
            debug!(
                "generation {}: best deficit {}, edges used {}, population {}",
                self.generation + 1,
                best.coverage_deficit,
                best.edges_used,
                self.population.len()
            );
        }
        self.best_cost = best;
        self.generation += 1;
    }

    /// Get current progress.
    pub fn progress(&self) -> SearchProgress {
        SearchProgress {
            generation: self.generation,
            total_generations: self.config.max_iterate,
            population_size: self.population.len(),
            best_cost: self.best_cost,
            history: self.history.clone(),
            phase: self.phase,
        }
    }

    /// Check if iteration should stop.
    fn should_stop(&self) -> Option<StopReason> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Some(StopReason::Cancelled);
        }

        if self.generation >= self.config.max_iterate {
            return Some(StopReason::MaxIterations);
        }

        None
    }

    /// Final selection: keep the best `final_capacity` antibodies and return
    /// the single best one with its cost.
    fn finalize(&mut self) -> (Antibody, Cost) {
        self.phase = SearchPhase::Finalizing;

        let population = mem::take(&mut self.population);
        self.evaluations += population.len() as u64;

        let finalists = select_scored(self.graph, population, self.config.final_capacity);
        let best = finalists.first().cloned().unwrap_or_else(|| {
            let empty = Antibody::zeros(self.graph.edge_count());
            let cost = evaluate(self.graph, &empty);
            (empty, cost)
        });

        self.population = finalists.into_iter().map(|(antibody, _)| antibody).collect();
        self.best_cost = Some(best.1);
        best
    }

    /// Run the search with a progress callback, invoked after initialization
    /// and after every generation.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> SearchOutcome
    where
        F: FnMut(&SearchProgress),
    {
        let start_time = Instant::now();

        info!(
            "starting search: {} nodes, {} edges, pop_init={}, pop_total={}, max_iterate={}, mutation_prob={}",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.config.pop_init,
            self.config.pop_total,
            self.config.max_iterate,
            self.config.mutation_prob
        );

        self.initialize();
        callback(&self.progress());

        let stop_reason = loop {
            if let Some(reason) = self.should_stop() {
                break reason;
            }

            self.step_generation();
            callback(&self.progress());
        };

        let (best, best_cost) = self.finalize();
        let result = best.decode(self.graph);

        self.phase = match stop_reason {
            StopReason::MaxIterations => SearchPhase::Complete,
            StopReason::Cancelled => SearchPhase::Stopped,
        };
        callback(&self.progress());

        let elapsed = start_time.elapsed().as_secs_f64();

        if best_cost.is_cover() {
            info!(
                "search finished after {} generations: {} edges cover all nodes",
                self.generation, best_cost.edges_used
            );
        } else {
            warn!(
                "search finished after {} generations with {} uncovered nodes",
                self.generation, best_cost.coverage_deficit
            );
        }

        SearchOutcome {
            result,
            best_cost,
            stats: SearchStats {
                generations: self.generation,
                evaluations: self.evaluations,
                elapsed_seconds: elapsed,
                stop_reason,
            },
            history: self.history.clone(),
        }
    }

    /// Run the search (blocking).
    pub fn run(&mut self) -> SearchOutcome {
        self.run_with_callback(|_| {})
    }
}

/// Find a small edge cover of `graph` with an unseeded clonal selection search.
pub fn search(
    graph: &Graph,
    mutation_prob: f64,
    pop_init: usize,
    pop_total: usize,
    max_iterate: usize,
) -> Result<SearchResult, SearchConfigError> {
    let config = SearchConfig {
        mutation_prob,
        pop_init,
        pop_total,
        max_iterate,
        ..Default::default()
    };

    let mut engine = ImmuneSearch::new(graph, config)?;
    Ok(engine.run().result)
}
