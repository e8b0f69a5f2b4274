use std::fmt::Debug;
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{PathSearch, SearchConstraints, WeightedPath};
use crate::data_structures::BinaryHeapWrapper;

/// Classic Dijkstra's algorithm, stopping as soon as the target is finalized
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> PathSearch<W, G> for Dijkstra
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(
        &self,
        graph: &G,
        source: usize,
        target: usize,
        constraints: &SearchConstraints,
    ) -> Option<WeightedPath<W>> {
        if !graph.has_vertex(source) || !graph.has_vertex(target) {
            return None;
        }
        if source == target {
            return Some(WeightedPath::single(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];

        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if finalized[u] {
                continue;
            }
            finalized[u] = true;

            if u == target {
                return Some(WeightedPath {
                    nodes: reconstruct_path(&predecessors, source, target),
                    cost: dist_u,
                });
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if finalized[v] || constraints.blocks(u, v) {
                    continue;
                }
                debug_assert!(weight >= W::zero(), "negative weight on edge {} -> {}", u, v);

                let new_dist = dist_u + weight;
                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        None
    }
}

/// Walks the predecessor chain back from `target`.
///
/// Only finalized nodes are ever recorded as predecessors, so the chain
/// reaches `source` without cycles.
fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match predecessors[current] {
            Some(pred) => {
                path.push(pred);
                current = pred;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
