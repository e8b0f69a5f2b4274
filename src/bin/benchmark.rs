use std::time::{Duration, Instant};
use rand::{rngs::StdRng, SeedableRng};
use k_paths::graph::Graph;
use k_paths::{generate_random_graph, GeneratorConfig, KShortestPaths, SpurPolicy, Weight, WeightedDigraph};

const SEED: u64 = 42;

// Time every ordered pair query with the given policy
fn benchmark_queries(graph: &WeightedDigraph<Weight>, k: usize, policy: SpurPolicy) -> (Duration, usize) {
    let engine = KShortestPaths::new(graph).with_policy(policy);
    let n = graph.vertex_count();
    let mut paths_found = 0;

    let start = Instant::now();
    for source in 0..n {
        for target in 0..n {
            paths_found += engine.find_k_shortest_paths(source, target, k).len();
        }
    }

    (start.elapsed(), paths_found)
}

fn main() -> Result<(), k_paths::Error> {
    env_logger::init();

    let graph_sizes = vec![10, 25, 50, 100];
    let density = 0.2;
    let k = 3;

    println!("=====================================================");
    println!("Benchmark: Yen's k shortest paths (k = {})", k);
    println!("Edge density: {}, seed: {}", density, SEED);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        let mut rng = StdRng::seed_from_u64(SEED);
        let config = GeneratorConfig::new(size).with_density(density);
        let graph = generate_random_graph(&config, &mut rng)?;

        println!("\nGraph with {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (strict_time, strict_paths) = benchmark_queries(&graph, k, SpurPolicy::RootNodeExclusion);
        let (edge_time, edge_paths) = benchmark_queries(&graph, k, SpurPolicy::EdgeExclusionOnly);

        let start = Instant::now();
        KShortestPaths::new(&graph).all_pairs_k_cost_matrices(k)?;
        let matrix_time = start.elapsed();

        println!("  - root-node exclusion: {} paths in {:?}", strict_paths, strict_time);
        println!("  - edge exclusion only: {} paths in {:?}", edge_paths, edge_time);
        println!("  - parallel cost matrices in {:?}", matrix_time);

        results.push((size, strict_time, edge_time, matrix_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<15}", "Vertices", "Strict (ms)", "Edge-only (ms)", "Matrices (ms)");
    println!("-----------------------------------------------------");

    for (size, strict_time, edge_time, matrix_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15}",
            size,
            strict_time.as_millis(),
            edge_time.as_millis(),
            matrix_time.as_millis()
        );
    }

    Ok(())
}
