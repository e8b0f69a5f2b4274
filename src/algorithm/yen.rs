use std::collections::HashSet;
use std::fmt::Debug;
use std::marker::PhantomData;
use log::{debug, trace};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{PathDetail, PathSearch, SearchConstraints, WeightedPath};
use crate::data_structures::CandidatePool;
use crate::graph::Graph;

/// How a spur search is kept from regenerating known paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpurPolicy {
    /// Exclude the next edge of every known path sharing the root, and every
    /// root node other than the spur node. All returned paths are simple.
    #[default]
    RootNodeExclusion,
    /// Exclude only the next edge of every known path sharing the root.
    /// A spur path may then revisit a root node, producing a non-simple path.
    EdgeExclusionOnly,
}

/// Yen's algorithm for the K shortest paths between two nodes.
///
/// The engine borrows the graph and keeps no state between queries, so one
/// instance can serve any number of independent queries.
#[derive(Debug, Clone)]
pub struct KShortestPaths<'g, W, G, S = Dijkstra>
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
    S: PathSearch<W, G>,
{
    graph: &'g G,
    search: S,
    policy: SpurPolicy,
    _weight: PhantomData<W>,
}

impl<'g, W, G> KShortestPaths<'g, W, G, Dijkstra>
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Creates an engine over `graph` using Dijkstra for every sub-search
    pub fn new(graph: &'g G) -> Self {
        KShortestPaths {
            graph,
            search: Dijkstra::new(),
            policy: SpurPolicy::default(),
            _weight: PhantomData,
        }
    }
}

impl<'g, W, G, S> KShortestPaths<'g, W, G, S>
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
    S: PathSearch<W, G>,
{
    pub fn with_policy(mut self, policy: SpurPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the single-pair search used for the bootstrap and spur paths
    pub fn with_search<T>(self, search: T) -> KShortestPaths<'g, W, G, T>
    where
        T: PathSearch<W, G>,
    {
        KShortestPaths {
            graph: self.graph,
            search,
            policy: self.policy,
            _weight: PhantomData,
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn policy(&self) -> SpurPolicy {
        self.policy
    }

    /// Finds up to `k` distinct paths from `source` to `target`, cheapest first.
    ///
    /// An empty list means there is no path (or `k == 0`, or an id is out of
    /// range); fewer than `k` entries means the graph holds no more paths.
    /// `source == target` always yields the single zero-cost path.
    pub fn find_k_shortest_paths(&self, source: usize, target: usize, k: usize) -> Vec<WeightedPath<W>> {
        if k == 0 || !self.graph.has_vertex(source) || !self.graph.has_vertex(target) {
            return Vec::new();
        }
        if source == target {
            return vec![WeightedPath::single(source)];
        }

        let first = match self
            .search
            .find_path(self.graph, source, target, &SearchConstraints::default())
        {
            Some(path) => path,
            None => {
                debug!("no path from {} to {}", source, target);
                return Vec::new();
            }
        };

        let mut accepted_nodes: HashSet<Vec<usize>> = HashSet::new();
        accepted_nodes.insert(first.nodes.clone());
        let mut accepted = vec![first];
        let mut candidates: CandidatePool<W> = CandidatePool::new();

        while accepted.len() < k {
            let previous = accepted[accepted.len() - 1].nodes.clone();

            for spur_index in 0..previous.len() - 1 {
                let root = &previous[..=spur_index];
                let spur_node = previous[spur_index];

                let known_paths = accepted
                    .iter()
                    .map(|path| path.nodes.as_slice())
                    .chain(candidates.paths());
                let constraints = self.spur_constraints(root, known_paths);

                let spur_path = match self.search.find_path(self.graph, spur_node, target, &constraints) {
                    Some(path) => path,
                    None => continue,
                };

                let mut nodes = root[..spur_index].to_vec();
                nodes.extend_from_slice(&spur_path.nodes);

                // Re-summed along the whole path rather than root cost + spur cost.
                let cost = match self.graph.path_cost(&nodes) {
                    Some(cost) => cost,
                    None => continue,
                };

                if accepted_nodes.contains(&nodes) || candidates.contains(&nodes) {
                    continue;
                }
                trace!("candidate {:?} (cost {:?}) from spur node {}", nodes, cost, spur_node);
                candidates.push(cost, nodes);
            }

            match candidates.pop() {
                Some((cost, nodes)) => {
                    accepted_nodes.insert(nodes.clone());
                    accepted.push(WeightedPath { nodes, cost });
                }
                None => break,
            }
        }

        debug!(
            "found {} of {} requested paths from {} to {} ({} candidates left)",
            accepted.len(),
            k,
            source,
            target,
            candidates.len()
        );

        accepted
    }

    /// Same query as [`find_k_shortest_paths`](Self::find_k_shortest_paths),
    /// with each path expanded into `(from, to, weight)` edges
    pub fn path_details(&self, source: usize, target: usize, k: usize) -> Vec<PathDetail<W>> {
        self.find_k_shortest_paths(source, target, k)
            .into_iter()
            .map(|path| {
                let edges = path.edges(self.graph);
                PathDetail {
                    nodes: path.nodes,
                    cost: path.cost,
                    edges,
                }
            })
            .collect()
    }

    /// Builds the exclusions for a spur search rooted at `root`.
    ///
    /// The spur node is the last node of `root`. Any known path that shares
    /// the whole root loses the edge it takes next.
    fn spur_constraints<'p, I>(&self, root: &[usize], known_paths: I) -> SearchConstraints
    where
        I: IntoIterator<Item = &'p [usize]>,
    {
        let spur_index = root.len() - 1;
        let mut constraints = SearchConstraints::new();

        for path in known_paths {
            if path.len() > spur_index + 1 && path[..=spur_index] == *root {
                constraints.exclude_edge(path[spur_index], path[spur_index + 1]);
            }
        }

        if self.policy == SpurPolicy::RootNodeExclusion {
            for &node in &root[..spur_index] {
                constraints.exclude_node(node);
            }
        }

        constraints
    }
}
