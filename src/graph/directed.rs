use crate::data_structures::CostMatrix;
use crate::graph::traits::{Graph, MutableGraph};
use num_traits::Float;
use std::collections::VecDeque;
use std::fmt::{self, Debug};

/// A weighted directed graph over a fixed set of nodes `0..n`.
///
/// Weights live in a dense `n * n` grid for O(1) lookup. Each node also keeps
/// its targets in a sorted list so neighbor iteration is ordered by id
/// without scanning a whole row.
#[derive(Debug, Clone)]
pub struct WeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Row-major weight grid: `weights[from * n + to]`
    weights: Vec<Option<W>>,

    /// Outgoing targets for each vertex, kept sorted ascending
    targets: Vec<Vec<usize>>,

    edge_count: usize,
}

impl<W> WeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a graph with `vertices` nodes and no edges
    ///
    /// # Panics
    ///
    /// Panics if `vertices * vertices` overflows `usize`.
    pub fn new(vertices: usize) -> Self {
        let slots = vertices
            .checked_mul(vertices)
            .unwrap_or_else(|| panic!("vertex count {} overflows the weight grid", vertices));
        WeightedDigraph {
            vertex_count: vertices,
            weights: vec![None; slots],
            targets: vec![Vec::new(); vertices],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, skipping invalid ones
    pub fn from_edges<I>(vertices: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    #[inline]
    fn slot(&self, from: usize, to: usize) -> usize {
        from * self.vertex_count + to
    }

    fn in_range(&self, from: usize, to: usize) -> bool {
        from < self.vertex_count && to < self.vertex_count
    }

    /// Weight of `from -> to`, or infinity when there is no such edge.
    ///
    /// Self pairs are infinite too: the graph stores no self-edges.
    pub fn weight(&self, from: usize, to: usize) -> W {
        self.get_edge_weight(from, to).unwrap_or_else(W::infinity)
    }

    /// All `(target, weight)` pairs reachable in one hop from `vertex`, ascending by target
    pub fn neighbors(&self, vertex: usize) -> Vec<(usize, W)> {
        self.outgoing_edges(vertex).collect()
    }

    /// Every edge as `(from, to, weight)`, ordered by `from` then `to`
    pub fn edges(&self) -> Vec<(usize, usize, W)> {
        (0..self.vertex_count)
            .flat_map(|from| self.outgoing_edges(from).map(move |(to, w)| (from, to, w)))
            .collect()
    }

    /// Breadth-first reachability ignoring weights. A node always reaches itself.
    pub fn reachable(&self, source: usize, target: usize) -> bool {
        if !self.in_range(source, target) {
            return false;
        }
        if source == target {
            return true;
        }

        let mut visited = vec![false; self.vertex_count];
        let mut queue = VecDeque::new();
        visited[source] = true;
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            for &next in &self.targets[current] {
                if next == target {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        false
    }

    /// Dense adjacency view: zero on the diagonal, infinity where there is no edge
    pub fn adjacency_matrix(&self) -> CostMatrix<W> {
        CostMatrix::adjacency(self)
    }
}

impl<W> Graph<W> for WeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.targets.get(vertex) {
            Some(targets) => Box::new(targets.iter().filter_map(move |&to| {
                self.weights[self.slot(vertex, to)].map(|w| (to, w))
            })),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if !self.in_range(from, to) || from == to {
            return None;
        }
        self.weights[self.slot(from, to)]
    }
}

impl<W> MutableGraph<W> for WeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.in_range(from, to) || from == to || !weight.is_finite() || weight <= W::zero() {
            return false;
        }

        let slot = self.slot(from, to);
        if self.weights[slot].replace(weight).is_none() {
            let targets = &mut self.targets[from];
            if let Err(pos) = targets.binary_search(&to) {
                targets.insert(pos, to);
            }
            self.edge_count += 1;
        }
        true
    }

    fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.in_range(from, to) {
            return false;
        }

        let slot = self.slot(from, to);
        if self.weights[slot].take().is_some() {
            let targets = &mut self.targets[from];
            if let Ok(pos) = targets.binary_search(&to) {
                targets.remove(pos);
            }
            self.edge_count -= 1;
        }
        true
    }
}

impl<W> fmt::Display for WeightedDigraph<W>
where
    W: Float + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph with {} nodes:", self.vertex_count)?;
        writeln!(f, "Adjacency matrix:")?;
        write!(f, "{}", self.adjacency_matrix())
    }
}
