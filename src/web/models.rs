use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::yen::SpurPolicy;
use crate::graph::generators::GeneratorConfig;

/// Represents a node in the graph for web clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
}

/// Represents a directed edge for web clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    #[serde(default)]
    pub is_path: bool,
}

/// Represents a complete graph for web clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// Parameters for random graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    #[serde(flatten)]
    pub config: GeneratorConfig,
    /// Seed for the generator; a random one is drawn (and reported) when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// An explicit graph supplied by the client
#[derive(Debug, Deserialize)]
pub struct GraphUploadRequest {
    pub node_count: usize,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// Parameters for a k shortest paths query
#[derive(Debug, Deserialize)]
pub struct PathsRequest {
    pub source: usize,
    pub target: usize,
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default)]
    pub policy: SpurPolicy,
}

/// Parameters for the all-pairs cost matrices
#[derive(Debug, Deserialize)]
pub struct MatricesRequest {
    #[serde(default = "default_k")]
    pub k: usize,
}

fn default_k() -> usize { 2 }

/// One ranked path in a query response
#[derive(Debug, Clone, Serialize)]
pub struct WebPath {
    pub rank: usize,
    pub nodes: Vec<usize>,
    pub cost: f64,
    pub edges: Vec<WebEdge>,
}

/// Response containing the paths found for one pair
#[derive(Debug, Clone, Serialize)]
pub struct PathsResponse {
    pub execution_id: Uuid,
    pub source: usize,
    pub target: usize,
    pub k: usize,
    pub policy: SpurPolicy,
    pub execution_time_ms: f64,
    pub paths_found: usize,
    pub paths: Vec<WebPath>,
}

/// Dense matrix rows; `None` (JSON `null`) means no path
pub type WebMatrix = Vec<Vec<Option<f64>>>;

/// Response containing the all-pairs cost matrices
#[derive(Debug, Clone, Serialize)]
pub struct MatricesResponse {
    pub execution_id: Uuid,
    pub k: usize,
    pub execution_time_ms: f64,
    pub adjacency: WebMatrix,
    /// `costs[r]` is the matrix of (r + 1)-th shortest path costs
    pub costs: Vec<WebMatrix>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session containing graph data and the last query
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub last_result: Option<PathsResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph, seed: Option<u64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            seed,
            last_result: None,
            created_at: Utc::now(),
        }
    }
}
