//! Edge cover CLI - Run the immune search on a JSON graph or a random tree.

use std::path::PathBuf;
use std::time::Instant;

use edge_cover_immune::{
    compute::{
        ImmuneSearch, generate_tree,
        immune::{Antibody, evaluate},
    },
    schema::{GeneratorConfig, Graph, SearchConfig, SearchPhase},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example();
        return;
    }

    let graph = if args[1] == "--generate" {
        let nodes = args
            .get(2)
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| GeneratorConfig::default().nodes);
        let generator = GeneratorConfig {
            nodes,
            random_seed: None,
        };
        generate_tree(&generator).unwrap_or_else(|e| {
            eprintln!("Error generating graph: {}", e);
            std::process::exit(1);
        })
    } else {
        Graph::from_json_file(PathBuf::from(&args[1])).unwrap_or_else(|e| {
            eprintln!("Error loading graph: {}", e);
            std::process::exit(1);
        })
    };

    let config_arg = if args[1] == "--generate" { 3 } else { 2 };
    let config = match args.get(config_arg) {
        Some(path) => SearchConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => SearchConfig::default(),
    };

    println!("Immune Edge Cover Search");
    println!("========================");
    println!(
        "Graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!("Mutation probability: {}", config.mutation_prob);
    println!(
        "Population: init {}, total {}",
        config.pop_init, config.pop_total
    );
    println!("Generations: {}", config.max_iterate);
    println!();

    let mut engine = ImmuneSearch::new(&graph, config.clone()).unwrap_or_else(|e| {
        eprintln!("Invalid search parameters: {}", e);
        std::process::exit(1);
    });

    println!("Running search...");
    let start = Instant::now();
    let report_every = (config.max_iterate / 10).max(1);

    let outcome = engine.run_with_callback(|progress| {
        if progress.phase != SearchPhase::Iterating || progress.generation % report_every != 0 {
            return;
        }
        if let Some(best) = progress.best_cost {
            println!(
                "  Generation {}/{}: deficit={}, edges={}, population={}, {:.2}s",
                progress.generation,
                progress.total_generations,
                best.coverage_deficit,
                best.edges_used,
                progress.population_size,
                start.elapsed().as_secs_f32()
            );
        }
    });

    println!();
    println!("Selected edges:");
    for (index, edge) in outcome
        .result
        .selected_edge_indices
        .iter()
        .zip(&outcome.result.selected_edges)
    {
        println!("  #{}: {} - {}", index, edge.source, edge.target);
    }

    // Re-check the decoded result against the graph.
    let check = evaluate(
        &graph,
        &Antibody::from_indices(graph.edge_count(), &outcome.result.selected_edge_indices),
    );

    println!();
    println!("Coverage deficit: {}", check.coverage_deficit);
    println!("Edges used: {}", check.edges_used);
    println!("Stop reason: {:?}", outcome.stats.stop_reason);
    println!(
        "Time: {:.2}s ({} evaluations)",
        outcome.stats.elapsed_seconds, outcome.stats.evaluations
    );
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <graph.json> [config.json]", program);
    eprintln!("       {} --generate [nodes] [config.json]", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Search for a small edge cover with a clonal selection algorithm.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  graph.json   Graph file with \"nodes\" and \"links\" arrays");
    eprintln!("  nodes        Size of the generated random tree (default: 14)");
    eprintln!("  config.json  Search parameters (defaults used when omitted)");
}

fn print_example() {
    let graph = Graph::from_pairs(&["0", "1", "2", "3"], &[("0", "1"), ("1", "2"), ("2", "3")]);
    let config = SearchConfig::default();

    println!("Example graph (graph.json):");
    match serde_json::to_string_pretty(&graph) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing graph: {}", e),
    }
    println!();
    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
