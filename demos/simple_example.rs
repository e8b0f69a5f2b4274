use k_paths::graph::{Graph, MutableGraph};
use k_paths::{KShortestPaths, WeightedDigraph};
use ordered_float::OrderedFloat;

fn main() {
    // Create a simple directed graph with 5 vertices (0-4)
    let mut graph = WeightedDigraph::new(5);

    // Add edges with weights
    graph.add_edge(0, 1, OrderedFloat(10.0));
    graph.add_edge(0, 2, OrderedFloat(5.0));
    graph.add_edge(1, 3, OrderedFloat(1.0));
    graph.add_edge(2, 1, OrderedFloat(3.0));
    graph.add_edge(2, 3, OrderedFloat(9.0));
    graph.add_edge(2, 4, OrderedFloat(2.0));
    graph.add_edge(3, 4, OrderedFloat(4.0));
    graph.add_edge(4, 0, OrderedFloat(7.0));
    graph.add_edge(4, 3, OrderedFloat(6.0));

    println!("--- K shortest paths on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());
    println!("{}", graph);

    let engine = KShortestPaths::new(&graph);

    println!("Three shortest paths from 0 to 3:");
    for (rank, detail) in engine.path_details(0, 3, 3).iter().enumerate() {
        println!("  #{} cost {:.1}: {:?}", rank + 1, detail.cost.into_inner(), detail.nodes);
        for (from, to, weight) in &detail.edges {
            println!("      {} -> {} ({:.1})", from, to, weight.into_inner());
        }
    }

    match engine.all_pairs_k_cost_matrices(2) {
        Ok(matrices) => println!("\n{}", matrices),
        Err(err) => println!("Failed to build cost matrices: {}", err),
    }
}
