//! Benchmarks for the immune edge cover search.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use edge_cover_immune::{
    compute::{
        ImmuneSearch, generate_tree,
        immune::{AntibodyRng, select},
    },
    schema::{GeneratorConfig, SearchConfig},
};

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for nodes in [16, 64, 256] {
        let graph = generate_tree(&GeneratorConfig {
            nodes,
            random_seed: Some(42),
        })
        .unwrap();

        let mut rng = AntibodyRng::new(42);
        // Size of a population after one expansion with pop_total = 10
        let population = rng.random_population(65, graph.edge_count());

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_nodes", nodes)),
            &nodes,
            |b, _| {
                b.iter(|| select(&graph, black_box(population.clone()), 10));
            },
        );
    }

    group.finish();
}

fn bench_clonal_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("clonal_expansion");

    for pop_total in [5, 10, 20] {
        let mut rng = AntibodyRng::new(42);
        let population = rng.random_population(pop_total, 63);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("pop_{}", pop_total)),
            &pop_total,
            |b, _| {
                b.iter(|| rng.clone_and_mutate(black_box(population.clone()), 0.2));
            },
        );
    }

    group.finish();
}

fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_search");
    group.sample_size(10);

    for nodes in [14, 50] {
        let graph = generate_tree(&GeneratorConfig {
            nodes,
            random_seed: Some(7),
        })
        .unwrap();

        let config = SearchConfig {
            max_iterate: 20,
            random_seed: Some(7),
            ..Default::default()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_nodes", nodes)),
            &nodes,
            |b, _| {
                b.iter(|| {
                    let mut engine = ImmuneSearch::new(&graph, config.clone()).unwrap();
                    black_box(engine.run())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_selection,
    bench_clonal_expansion,
    bench_full_search
);
criterion_main!(benches);
