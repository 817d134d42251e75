//! Quick search performance and quality test

use edge_cover_immune::{
    ImmuneSearch,
    compute::generate_tree,
    schema::{GeneratorConfig, SearchConfig},
};
use std::time::Instant;

fn main() {
    println!("=== Search Performance Test ===\n");

    // Test different tree sizes
    for nodes in [14, 50, 200] {
        println!("Tree size: {} nodes", nodes);

        let graph = generate_tree(&GeneratorConfig {
            nodes,
            random_seed: Some(42),
        })
        .unwrap();

        let config = SearchConfig {
            mutation_prob: 0.2,
            pop_init: 10,
            pop_total: 10,
            max_iterate: 50,
            random_seed: Some(42),
            ..Default::default()
        };

        let start = Instant::now();
        let mut engine = ImmuneSearch::new(&graph, config).unwrap();
        let outcome = engine.run();
        let elapsed = start.elapsed();

        let evals_per_sec = outcome.stats.evaluations as f64 / elapsed.as_secs_f64();

        println!("  Generations:    {}", outcome.stats.generations);
        println!("  Evaluations:    {}", outcome.stats.evaluations);
        println!("  Elapsed:        {:.2}s", elapsed.as_secs_f64());
        println!("  Evals/sec:      {:.1}", evals_per_sec);
        println!("  Deficit:        {}", outcome.best_cost.coverage_deficit);
        println!("  Edges used:     {}", outcome.best_cost.edges_used);
        println!();
    }

    println!("=== Population Scaling (fixed 50-node tree) ===\n");

    let graph = generate_tree(&GeneratorConfig {
        nodes: 50,
        random_seed: Some(42),
    })
    .unwrap();

    // Test different selection sizes
    for pop_total in [5, 10, 20, 40] {
        let config = SearchConfig {
            pop_total,
            max_iterate: 30,
            random_seed: Some(42),
            ..Default::default()
        };

        let start = Instant::now();
        let mut engine = ImmuneSearch::new(&graph, config).unwrap();
        let outcome = engine.run();
        let elapsed = start.elapsed();

        println!(
            "pop_total {}: {} evals in {:.2}s, deficit {}, edges {}",
            pop_total,
            outcome.stats.evaluations,
            elapsed.as_secs_f64(),
            outcome.best_cost.coverage_deficit,
            outcome.best_cost.edges_used
        );
    }
}
