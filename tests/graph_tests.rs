use k_paths::graph::{Graph, MutableGraph};
use k_paths::WeightedDigraph;
use ordered_float::OrderedFloat;

fn w(value: f64) -> OrderedFloat<f64> {
    OrderedFloat(value)
}

fn sample_graph() -> WeightedDigraph<OrderedFloat<f64>> {
    let mut graph = WeightedDigraph::new(4);
    graph.add_edge(0, 2, w(1.0));
    graph.add_edge(0, 1, w(4.0));
    graph.add_edge(2, 1, w(1.0));
    graph.add_edge(1, 3, w(1.0));
    graph
}

#[test]
fn test_add_edge_guards() {
    let mut graph = WeightedDigraph::new(3);

    assert!(graph.add_edge(0, 1, w(2.0)));
    assert!(!graph.add_edge(0, 3, w(1.0)), "target out of range");
    assert!(!graph.add_edge(5, 1, w(1.0)), "source out of range");
    assert!(!graph.add_edge(1, 1, w(1.0)), "self-loops are rejected");
    assert!(!graph.add_edge(1, 2, w(0.0)), "zero weight is rejected");
    assert!(!graph.add_edge(1, 2, w(-3.0)), "negative weight is rejected");
    assert!(!graph.add_edge(1, 2, w(f64::INFINITY)), "infinite weight is rejected");
    assert!(!graph.add_edge(1, 2, w(f64::NAN)), "NaN weight is rejected");

    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_overwrites_weight() {
    let mut graph = WeightedDigraph::new(2);
    assert!(graph.add_edge(0, 1, w(2.0)));
    assert!(graph.add_edge(0, 1, w(7.5)));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight(0, 1), w(7.5));
}

#[test]
fn test_remove_edge_is_idempotent() {
    let mut graph = sample_graph();

    assert!(graph.remove_edge(0, 1));
    assert!(graph.remove_edge(0, 1), "removing a missing edge still succeeds");
    assert!(!graph.remove_edge(0, 9), "out of range ids fail");

    assert!(!graph.has_edge(0, 1));
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.neighbors(0), vec![(2, w(1.0))]);
}

#[test]
fn test_weight_lookup() {
    let graph = sample_graph();

    assert_eq!(graph.weight(0, 2), w(1.0));
    assert_eq!(graph.get_edge_weight(0, 2), Some(w(1.0)));
    assert!(graph.weight(2, 0).into_inner().is_infinite());
    assert!(graph.weight(0, 0).into_inner().is_infinite(), "no self-edges are stored");
    assert!(graph.weight(0, 17).into_inner().is_infinite());
    assert_eq!(graph.get_edge_weight(17, 0), None);
}

#[test]
fn test_neighbors_are_ordered_by_id() {
    let mut graph = WeightedDigraph::new(5);
    graph.add_edge(2, 4, w(1.0));
    graph.add_edge(2, 0, w(3.0));
    graph.add_edge(2, 3, w(2.0));

    assert_eq!(graph.neighbors(2), vec![(0, w(3.0)), (3, w(2.0)), (4, w(1.0))]);
    assert!(graph.neighbors(1).is_empty());
    assert!(graph.neighbors(42).is_empty());
}

#[test]
fn test_edges_enumeration_order() {
    let graph = sample_graph();

    assert_eq!(
        graph.edges(),
        vec![(0, 1, w(4.0)), (0, 2, w(1.0)), (1, 3, w(1.0)), (2, 1, w(1.0))]
    );
}

#[test]
fn test_reachability_ignores_weights() {
    let graph = sample_graph();

    assert!(graph.reachable(0, 3));
    assert!(graph.reachable(2, 3));
    assert!(!graph.reachable(3, 0));
    assert!(graph.reachable(3, 3));
    assert!(!graph.reachable(0, 10));
}

#[test]
fn test_path_cost() {
    let graph = sample_graph();

    assert_eq!(graph.path_cost(&[0, 2, 1, 3]), Some(w(3.0)));
    assert_eq!(graph.path_cost(&[1]), Some(w(0.0)));
    assert_eq!(graph.path_cost(&[0, 3]), None);
    assert_eq!(graph.path_cost(&[]), None);
}

#[test]
fn test_adjacency_matrix_and_display() {
    let graph = WeightedDigraph::from_edges(2, vec![(0, 1, w(2.0))]);
    let matrix = graph.adjacency_matrix();

    assert_eq!(matrix.get(0, 0), w(0.0));
    assert_eq!(matrix.get(0, 1), w(2.0));
    assert!(matrix.get(1, 0).into_inner().is_infinite());

    let rendered = graph.to_string();
    assert!(rendered.starts_with("Graph with 2 nodes:"));
    assert!(rendered.contains("   0.0    2.0"));
    assert!(rendered.contains("   inf    0.0"));
}

#[test]
fn test_from_edges_skips_invalid_triples() {
    let graph = WeightedDigraph::from_edges(
        3,
        vec![(0, 1, w(1.0)), (1, 1, w(1.0)), (2, 7, w(1.0)), (1, 2, w(-1.0))],
    );

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
#[should_panic(expected = "overflows the weight grid")]
fn test_new_rejects_oversized_vertex_count() {
    WeightedDigraph::<OrderedFloat<f64>>::new(usize::MAX);
}
