use std::cell::Cell;
use std::collections::HashSet;

use k_paths::algorithm::dijkstra::Dijkstra;
use k_paths::algorithm::{PathSearch, SearchConstraints, WeightedPath};
use k_paths::graph::{Graph, MutableGraph};
use k_paths::{generate_random_graph, GeneratorConfig, KShortestPaths, SpurPolicy, WeightedDigraph};
use ordered_float::OrderedFloat;
use rand::{rngs::StdRng, SeedableRng};

type W = OrderedFloat<f64>;
type TestGraph = WeightedDigraph<W>;

fn graph_from(n: usize, edges: &[(usize, usize, f64)]) -> TestGraph {
    WeightedDigraph::from_edges(n, edges.iter().map(|&(u, v, w)| (u, v, OrderedFloat(w))))
}

fn node_lists(paths: &[WeightedPath<W>]) -> Vec<Vec<usize>> {
    paths.iter().map(|p| p.nodes.clone()).collect()
}

fn costs(paths: &[WeightedPath<W>]) -> Vec<f64> {
    paths.iter().map(|p| p.cost.into_inner()).collect()
}

// Every simple path cost from source to target, by exhaustive search
fn brute_force_costs(graph: &TestGraph, source: usize, target: usize) -> Vec<f64> {
    fn walk(graph: &TestGraph, current: usize, target: usize, cost: f64, visited: &mut Vec<bool>, out: &mut Vec<f64>) {
        if current == target {
            out.push(cost);
            return;
        }
        for (next, weight) in graph.neighbors(current) {
            if !visited[next] {
                visited[next] = true;
                walk(graph, next, target, cost + weight.into_inner(), visited, out);
                visited[next] = false;
            }
        }
    }

    let mut visited = vec![false; graph.vertex_count()];
    visited[source] = true;
    let mut out = Vec::new();
    walk(graph, source, target, 0.0, &mut visited, &mut out);
    out.sort_by(|a, b| a.partial_cmp(b).unwrap());
    out
}

fn assert_well_formed(graph: &TestGraph, paths: &[WeightedPath<W>], source: usize, target: usize) {
    let mut seen = HashSet::new();
    for pair in paths.windows(2) {
        assert!(pair[0].cost <= pair[1].cost, "costs must be non-decreasing");
    }
    for path in paths {
        assert!(seen.insert(path.nodes.clone()), "duplicate path {:?}", path.nodes);
        assert!(path.is_simple(), "path {:?} repeats a node", path.nodes);
        assert_eq!(path.source(), Some(source));
        assert_eq!(path.target(), Some(target));
        assert_eq!(graph.path_cost(&path.nodes), Some(path.cost), "cost must match edges of {:?}", path.nodes);
    }
}

fn scenario_graph() -> TestGraph {
    graph_from(4, &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0), (2, 3, 5.0)])
}

// 0-1-2-3 is cheapest; the only way around (1, 2) from node 1 goes back through 0
fn revisiting_graph() -> TestGraph {
    graph_from(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (1, 0, 1.0), (0, 3, 10.0)])
}

#[test]
fn test_two_shortest_paths_scenario() {
    let graph = scenario_graph();
    let paths = KShortestPaths::new(&graph).find_k_shortest_paths(0, 3, 2);

    assert_eq!(node_lists(&paths), vec![vec![0, 2, 1, 3], vec![0, 1, 3]]);
    assert_eq!(costs(&paths), vec![3.0, 5.0]);
}

#[test]
fn test_all_paths_of_scenario() {
    let graph = scenario_graph();
    let paths = KShortestPaths::new(&graph).find_k_shortest_paths(0, 3, 10);

    assert_eq!(node_lists(&paths), vec![vec![0, 2, 1, 3], vec![0, 1, 3], vec![0, 2, 3]]);
    assert_eq!(costs(&paths), vec![3.0, 5.0, 6.0]);
    assert_well_formed(&graph, &paths, 0, 3);
}

#[test]
fn test_disconnected_pair_returns_nothing() {
    let graph = graph_from(4, &[(0, 1, 1.0), (1, 2, 1.0), (3, 0, 1.0)]);
    let engine = KShortestPaths::new(&graph);

    for k in [1, 2, 5] {
        assert!(engine.find_k_shortest_paths(0, 3, k).is_empty());
    }
}

#[test]
fn test_fewer_paths_than_requested() {
    let graph = graph_from(4, &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 2.0), (2, 3, 2.0)]);

    for policy in [SpurPolicy::RootNodeExclusion, SpurPolicy::EdgeExclusionOnly] {
        let paths = KShortestPaths::new(&graph).with_policy(policy).find_k_shortest_paths(0, 3, 5);
        assert_eq!(node_lists(&paths), vec![vec![0, 1, 3], vec![0, 2, 3]]);
        assert_eq!(costs(&paths), vec![2.0, 4.0]);
    }
}

#[test]
fn test_source_equals_target_returns_single_path() {
    let graph = scenario_graph();
    let engine = KShortestPaths::new(&graph);

    for k in [1, 2, 7] {
        let paths = engine.find_k_shortest_paths(2, 2, k);
        assert_eq!(paths, vec![WeightedPath::single(2)]);
        assert_eq!(paths[0].cost, OrderedFloat(0.0));
    }
}

#[test]
fn test_zero_k_and_invalid_indices() {
    let graph = scenario_graph();
    let engine = KShortestPaths::new(&graph);

    assert!(engine.find_k_shortest_paths(0, 3, 0).is_empty());
    assert!(engine.find_k_shortest_paths(0, 4, 2).is_empty());
    assert!(engine.find_k_shortest_paths(9, 3, 2).is_empty());
    assert!(engine.find_k_shortest_paths(9, 9, 2).is_empty());
}

#[test]
fn test_path_details_expand_edges() {
    let graph = scenario_graph();
    let details = KShortestPaths::new(&graph).path_details(0, 3, 2);

    assert_eq!(details.len(), 2);
    assert_eq!(
        details[0].edges,
        vec![
            (0, 2, OrderedFloat(1.0)),
            (2, 1, OrderedFloat(1.0)),
            (1, 3, OrderedFloat(1.0)),
        ]
    );
    assert_eq!(details[0].cost, OrderedFloat(3.0));
    assert_eq!(details[1].nodes, vec![0, 1, 3]);
    assert_eq!(details[1].edges, vec![(0, 1, OrderedFloat(4.0)), (1, 3, OrderedFloat(1.0))]);
}

#[test]
fn test_root_node_exclusion_keeps_paths_simple() {
    let graph = revisiting_graph();
    let engine = KShortestPaths::new(&graph);
    assert_eq!(engine.policy(), SpurPolicy::RootNodeExclusion);

    let paths = engine.find_k_shortest_paths(0, 3, 3);
    assert_eq!(node_lists(&paths), vec![vec![0, 1, 2, 3], vec![0, 3]]);
    assert_eq!(costs(&paths), vec![3.0, 10.0]);
    assert_well_formed(&graph, &paths, 0, 3);
}

#[test]
fn test_edge_exclusion_only_may_revisit_root_nodes() {
    let graph = revisiting_graph();
    let paths = KShortestPaths::new(&graph)
        .with_policy(SpurPolicy::EdgeExclusionOnly)
        .find_k_shortest_paths(0, 3, 3);

    assert_eq!(node_lists(&paths), vec![vec![0, 1, 2, 3], vec![0, 3], vec![0, 1, 0, 3]]);
    assert_eq!(costs(&paths), vec![3.0, 10.0, 12.0]);
    assert!(!paths[2].is_simple());
}

#[test]
fn test_matches_exhaustive_enumeration_on_random_graphs() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = GeneratorConfig::new(6).with_density(0.4).with_ensure_connected(seed % 2 == 0);
        let graph = generate_random_graph(&config, &mut rng).unwrap();
        let engine = KShortestPaths::new(&graph);

        for source in 0..graph.vertex_count() {
            for target in 0..graph.vertex_count() {
                if source == target {
                    continue;
                }
                let k = 4;
                let paths = engine.find_k_shortest_paths(source, target, k);
                let expected: Vec<f64> = brute_force_costs(&graph, source, target).into_iter().take(k).collect();

                assert_well_formed(&graph, &paths, source, target);
                assert_eq!(costs(&paths), expected, "seed {} pair {} -> {}", seed, source, target);
            }
        }
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = GeneratorConfig::new(12).with_density(0.35);
    let graph = generate_random_graph(&config, &mut rng).unwrap();
    let engine = KShortestPaths::new(&graph);

    let first = engine.find_k_shortest_paths(0, 11, 6);
    for _ in 0..5 {
        assert_eq!(engine.find_k_shortest_paths(0, 11, 6), first);
    }
}

#[test]
fn test_concurrent_queries_share_the_graph() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = generate_random_graph(&GeneratorConfig::new(15), &mut rng).unwrap();
    let expected = KShortestPaths::new(&graph).find_k_shortest_paths(1, 14, 5);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| KShortestPaths::new(&graph).find_k_shortest_paths(1, 14, 5)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    assert_eq!(graph.vertex_count(), 15);
}

#[test]
fn test_queries_leave_graph_untouched() {
    let mut graph = scenario_graph();
    let before = graph.edges();

    KShortestPaths::new(&graph).find_k_shortest_paths(0, 3, 5);
    assert_eq!(graph.edges(), before);

    // Mutations between queries are visible to the next query
    graph.remove_edge(2, 1);
    let paths = KShortestPaths::new(&graph).find_k_shortest_paths(0, 3, 5);
    assert_eq!(node_lists(&paths), vec![vec![0, 1, 3], vec![0, 2, 3]]);
}

// Dijkstra wrapper that counts sub-searches
#[derive(Debug, Default)]
struct CountingSearch {
    calls: Cell<usize>,
}

impl PathSearch<W, TestGraph> for &CountingSearch {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn find_path(&self, graph: &TestGraph, source: usize, target: usize, constraints: &SearchConstraints) -> Option<WeightedPath<W>> {
        self.calls.set(self.calls.get() + 1);
        Dijkstra::new().find_path(graph, source, target, constraints)
    }
}

#[test]
fn test_custom_search_is_used_for_every_sub_search() {
    let graph = scenario_graph();
    let counter = CountingSearch::default();
    let engine = KShortestPaths::new(&graph).with_search(&counter);

    let paths = engine.find_k_shortest_paths(0, 3, 2);
    assert_eq!(costs(&paths), vec![3.0, 5.0]);

    // One bootstrap search plus one spur search per non-final node of [0, 2, 1, 3]
    assert_eq!(counter.calls.get(), 4);
}
