use std::fmt::Debug;
use num_traits::Float;

/// Trait representing a weighted directed graph over node ids `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, ascending by target id
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Sums the weights along `path`, or `None` if a hop is not an edge.
    ///
    /// A single-node path costs zero.
    fn path_cost(&self, path: &[usize]) -> Option<W> {
        if path.is_empty() || !path.iter().all(|&v| self.has_vertex(v)) {
            return None;
        }
        path.windows(2).try_fold(W::zero(), |acc, hop| {
            self.get_edge_weight(hop[0], hop[1]).map(|w| acc + w)
        })
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Sets the weight of the directed edge `from -> to`.
    ///
    /// Returns false (and changes nothing) for out-of-range ids, self-loops
    /// and weights that are not strictly positive and finite.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool;

    /// Clears the edge `from -> to`; true whenever both ids are in range
    fn remove_edge(&mut self, from: usize, to: usize) -> bool;
}
