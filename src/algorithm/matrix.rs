use std::fmt::{self, Debug};
use log::debug;
use num_traits::Float;
use rayon::prelude::*;

use crate::algorithm::yen::KShortestPaths;
use crate::algorithm::PathSearch;
use crate::data_structures::CostMatrix;
use crate::graph::Graph;
use crate::{Error, Result};

/// Largest rank supported by [`KShortestPaths::all_pairs_k_cost_matrices`]
pub const MAX_MATRIX_K: usize = 3;

/// All-pairs cost matrices for the 1st..k-th shortest paths
#[derive(Debug, Clone, PartialEq)]
pub struct KCostMatrices<W>
where
    W: Float + Debug + Copy,
{
    /// Direct edge weights: zero diagonal, infinity where there is no edge
    pub adjacency: CostMatrix<W>,

    /// `costs[r]` holds the cost of the `(r + 1)`-th shortest path per pair
    pub costs: Vec<CostMatrix<W>>,
}

impl<W> KCostMatrices<W>
where
    W: Float + Debug + Copy,
{
    pub fn k(&self) -> usize {
        self.costs.len()
    }

    /// Matrix for the `rank`-th shortest path, counting from 1
    pub fn cost(&self, rank: usize) -> Option<&CostMatrix<W>> {
        rank.checked_sub(1).and_then(|index| self.costs.get(index))
    }
}

impl<W> fmt::Display for KCostMatrices<W>
where
    W: Float + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(50);
        writeln!(f, "Adjacency matrix:\n{}\n{}", rule, self.adjacency)?;
        for (index, matrix) in self.costs.iter().enumerate() {
            writeln!(f, "Shortest path #{} costs:\n{}\n{}", index + 1, rule, matrix)?;
        }
        Ok(())
    }
}

impl<'g, W, G, S> KShortestPaths<'g, W, G, S>
where
    W: Float + Debug + Copy + Ord + Send + Sync,
    G: Graph<W> + Sync,
    S: PathSearch<W, G> + Sync,
{
    /// Computes, for every ordered pair, the cost of the 1st..k-th shortest path.
    ///
    /// `k` must be 1, 2 or 3. Cells stay infinite where fewer paths exist and
    /// the diagonal is zero in every matrix. Pairs share no state, so rows are
    /// computed in parallel; the result does not depend on scheduling.
    pub fn all_pairs_k_cost_matrices(&self, k: usize) -> Result<KCostMatrices<W>> {
        if k == 0 || k > MAX_MATRIX_K {
            return Err(Error::UnsupportedK(k));
        }

        let graph = self.graph();
        let n = graph.vertex_count();

        // rows[source][target] lists the ranked costs for that pair
        let rows: Vec<Vec<Vec<W>>> = (0..n)
            .into_par_iter()
            .map(|source| {
                (0..n)
                    .map(|target| {
                        self.find_k_shortest_paths(source, target, k)
                            .into_iter()
                            .map(|path| path.cost)
                            .collect::<Vec<W>>()
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let mut costs = vec![CostMatrix::filled(n, W::infinity()); k];
        for (source, row) in rows.iter().enumerate() {
            for (target, ranked) in row.iter().enumerate() {
                if source == target {
                    for matrix in costs.iter_mut() {
                        matrix.set(source, target, W::zero());
                    }
                    continue;
                }
                for (matrix, cost) in costs.iter_mut().zip(ranked) {
                    matrix.set(source, target, *cost);
                }
            }
        }

        debug!("computed {} cost matrices over {} nodes", k, n);

        Ok(KCostMatrices {
            adjacency: CostMatrix::adjacency(graph),
            costs,
        })
    }
}
