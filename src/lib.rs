//! K Paths - K shortest simple paths over weighted directed graphs
//!
//! This library implements Yen's algorithm on top of a Dijkstra search that
//! accepts per-call edge and node exclusions. Given a graph and a node pair it
//! returns the K least-costly distinct paths in non-decreasing cost order,
//! and can aggregate those answers into all-pairs k-th cost matrices.
//!
//! Queries never mutate the graph, so independent threads may query the same
//! graph concurrently without locking.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra,
    matrix::KCostMatrices,
    yen::{KShortestPaths, SpurPolicy},
    PathDetail, PathSearch, SearchConstraints, WeightedPath,
};
pub use data_structures::CostMatrix;
/// Re-export main types for convenient use
pub use graph::directed::WeightedDigraph;
pub use graph::generators::{generate_random_graph, GeneratorConfig};

/// Weight type used by the web layer, binaries and most callers
pub type Weight = ordered_float::OrderedFloat<f64>;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid node count: {0} (at least 2 nodes are required)")]
    InvalidNodeCount(usize),

    #[error("Invalid edge density: {0} (must be within [0, 1])")]
    InvalidDensity(f64),

    #[error("Invalid weight range: {min}..={max} (weights must be positive and min <= max)")]
    InvalidWeightRange { min: u32, max: u32 },

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Unsupported k for cost matrices: {0} (expected 1, 2 or 3)")]
    UnsupportedK(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
