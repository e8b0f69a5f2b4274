use crate::graph::{Graph, MutableGraph, WeightedDigraph};
use crate::{Error, Result, Weight};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Parameters for [`generate_random_graph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub node_count: usize,
    /// Probability that any absent ordered pair receives an edge
    pub density: f64,
    pub min_weight: u32,
    pub max_weight: u32,
    /// Chain every node into one shuffled path before adding random edges
    pub ensure_connected: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 10,
            density: 0.3,
            min_weight: 1,
            max_weight: 10,
            ensure_connected: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            ..Default::default()
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_weight_range(mut self, min_weight: u32, max_weight: u32) -> Self {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    pub fn with_ensure_connected(mut self, ensure_connected: bool) -> Self {
        self.ensure_connected = ensure_connected;
        self
    }

    /// Checks the parameters without building anything
    pub fn validate(&self) -> Result<()> {
        if self.node_count < 2 {
            return Err(Error::InvalidNodeCount(self.node_count));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity(self.density));
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(Error::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }
}

/// Generates a random weighted digraph with integral weights in `min_weight..=max_weight`.
///
/// With `ensure_connected` the nodes are shuffled and chained first, so the
/// result contains a Hamiltonian path; the density pass never overwrites
/// those edges. The caller owns the generator, so a seeded `StdRng` makes
/// the output reproducible.
pub fn generate_random_graph<R>(config: &GeneratorConfig, rng: &mut R) -> Result<WeightedDigraph<Weight>>
where
    R: Rng,
{
    config.validate()?;

    let n = config.node_count;
    let mut graph = WeightedDigraph::new(n);
    if config.ensure_connected {
        let mut nodes: Vec<usize> = (0..n).collect();
        nodes.shuffle(rng);
        for pair in nodes.windows(2) {
            let weight = random_weight(config, rng);
            graph.add_edge(pair[0], pair[1], weight);
        }
    }

    for from in 0..n {
        for to in 0..n {
            if from == to || graph.has_edge(from, to) {
                continue;
            }
            if rng.gen::<f64>() < config.density {
                let weight = random_weight(config, rng);
                graph.add_edge(from, to, weight);
            }
        }
    }

    log::debug!(
        "generated graph with {} nodes and {} edges (density {}, connected: {})",
        n,
        graph.edge_count(),
        config.density,
        config.ensure_connected
    );

    Ok(graph)
}

fn random_weight<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Weight {
    OrderedFloat(f64::from(rng.gen_range(config.min_weight..=config.max_weight)))
}
