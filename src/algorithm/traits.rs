use std::collections::HashSet;
use std::fmt::Debug;
use num_traits::Float;
use crate::graph::Graph;

/// A path through a graph together with its total cost
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath<W>
where
    W: Float + Debug + Copy,
{
    /// Visited nodes in order, source first
    pub nodes: Vec<usize>,

    /// Sum of the edge weights along `nodes`
    pub cost: W,
}

impl<W> WeightedPath<W>
where
    W: Float + Debug + Copy,
{
    /// The zero-cost path that starts and ends at `node`
    pub fn single(node: usize) -> Self {
        WeightedPath {
            nodes: vec![node],
            cost: W::zero(),
        }
    }

    pub fn source(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<usize> {
        self.nodes.last().copied()
    }

    /// Number of edges traversed
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// True if no node appears twice
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        self.nodes.iter().all(|node| seen.insert(*node))
    }

    /// Expands the path into `(from, to, weight)` triples using `graph`'s weights.
    ///
    /// Hops that are not edges of `graph` report an infinite weight.
    pub fn edges<G: Graph<W>>(&self, graph: &G) -> Vec<(usize, usize, W)> {
        self.nodes
            .windows(2)
            .map(|hop| {
                let weight = graph.get_edge_weight(hop[0], hop[1]).unwrap_or_else(W::infinity);
                (hop[0], hop[1], weight)
            })
            .collect()
    }
}

/// A path expanded into edge-level detail for presentation
#[derive(Debug, Clone, PartialEq)]
pub struct PathDetail<W>
where
    W: Float + Debug + Copy,
{
    pub nodes: Vec<usize>,
    pub cost: W,
    pub edges: Vec<(usize, usize, W)>,
}

/// Edges and nodes a single search must treat as absent.
///
/// Constraints are consulted during relaxation; the graph itself is never
/// modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConstraints {
    /// Directed edges `(from, to)` that may not be traversed
    pub excluded_edges: HashSet<(usize, usize)>,
    /// Nodes that may not be entered
    pub excluded_nodes: HashSet<usize>,
}

impl SearchConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude_edge(&mut self, from: usize, to: usize) {
        self.excluded_edges.insert((from, to));
    }

    pub fn exclude_node(&mut self, node: usize) {
        self.excluded_nodes.insert(node);
    }

    /// True if stepping along `from -> to` is forbidden
    pub fn blocks(&self, from: usize, to: usize) -> bool {
        self.excluded_nodes.contains(&to) || self.excluded_edges.contains(&(from, to))
    }
}

/// Trait for single-pair shortest path searches
pub trait PathSearch<W, G>
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Finds the cheapest path from `source` to `target` that respects `constraints`.
    ///
    /// Returns `None` when the target is unreachable or either id is out of
    /// range. `source == target` yields the single-node path of cost zero.
    fn find_path(
        &self,
        graph: &G,
        source: usize,
        target: usize,
        constraints: &SearchConstraints,
    ) -> Option<WeightedPath<W>>;
}
