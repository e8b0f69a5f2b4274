use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use ordered_float::OrderedFloat;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::yen::KShortestPaths;
use crate::algorithm::PathDetail;
use crate::graph::directed::WeightedDigraph;
use crate::graph::generators::generate_random_graph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::web::models::*;
use crate::{Error, Weight};

/// Largest graph the API will build, generated or uploaded
pub const MAX_NODES: usize = 1_000;

/// Largest graph the matrices endpoint will process, one query per ordered pair
pub const MAX_MATRIX_NODES: usize = 50;

/// Largest `k` accepted by the paths endpoint
pub const MAX_K: usize = 100;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "state_unavailable", "Session store is unavailable".to_string())
        })
    }

    fn session_graph(&self, session_id: Uuid) -> Result<WebGraph, ApiError> {
        self.sessions()?
            .get(&session_id)
            .map(|session| session.graph.clone())
            .ok_or_else(session_not_found)
    }

    fn insert(&self, session: Session) -> Result<(), ApiError> {
        self.sessions()?.insert(session.id, session);
        Ok(())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(upload_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/paths/:session_id", post(find_paths))
        .route("/api/matrices/:session_id", post(compute_matrices))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Generate a new random graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<Session>, ApiError> {
    if request.config.node_count > MAX_NODES {
        return Err(too_many_nodes(request.config.node_count));
    }

    let seed = request.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let graph = generate_random_graph(&request.config, &mut rng).map_err(invalid_parameters)?;

    let session = Session::new(convert_graph_to_web(&graph), Some(seed));
    state.insert(session.clone())?;
    log::info!(
        "session {} created from seed {} ({} nodes, {} edges)",
        session.id,
        seed,
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(Json(session))
}

/// Store a client-supplied graph
pub async fn upload_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphUploadRequest>,
) -> Result<Json<Session>, ApiError> {
    if request.node_count > MAX_NODES {
        return Err(too_many_nodes(request.node_count));
    }
    if request.node_count < 2 {
        return Err(invalid_parameters(Error::InvalidNodeCount(request.node_count)));
    }

    let web_graph = WebGraph {
        nodes: web_nodes(request.node_count),
        links: request.edges,
    };
    let graph = convert_web_graph_to_rust(&web_graph).map_err(invalid_parameters)?;

    let session = Session::new(convert_graph_to_web(&graph), None);
    state.insert(session.clone())?;
    log::info!("session {} created from upload ({} edges)", session.id, graph.edge_count());

    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    state.session_graph(session_id).map(Json)
}

/// Run a k shortest paths query on a session graph
pub async fn find_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathsRequest>,
) -> Result<Json<PathsResponse>, ApiError> {
    let graph = convert_web_graph_to_rust(&state.session_graph(session_id)?).map_err(conversion_failed)?;

    for vertex in [request.source, request.target] {
        if !graph.has_vertex(vertex) {
            return Err(invalid_parameters(Error::InvalidVertex(vertex)));
        }
    }
    if request.k == 0 || request.k > MAX_K {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_parameters",
            format!("k must be between 1 and {}, got {}", MAX_K, request.k),
        ));
    }

    let (source, target, k, policy) = (request.source, request.target, request.k, request.policy);
    let (details, elapsed) = tokio::task::spawn_blocking(move || {
        let start_time = Instant::now();
        let details = KShortestPaths::new(&graph)
            .with_policy(policy)
            .path_details(source, target, k);
        (details, start_time.elapsed())
    })
    .await
    .map_err(worker_failed)?;

    let paths: Vec<WebPath> = details
        .into_iter()
        .enumerate()
        .map(|(index, detail)| convert_detail_to_web(index + 1, detail))
        .collect();

    let response = PathsResponse {
        execution_id: Uuid::new_v4(),
        source,
        target,
        k,
        policy,
        execution_time_ms: elapsed.as_secs_f64() * 1000.0,
        paths_found: paths.len(),
        paths,
    };

    if let Some(session) = state.sessions()?.get_mut(&session_id) {
        session.last_result = Some(response.clone());
    }

    Ok(Json(response))
}

/// Compute the all-pairs k-th cost matrices of a session graph
pub async fn compute_matrices(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<MatricesRequest>,
) -> Result<Json<MatricesResponse>, ApiError> {
    let graph = convert_web_graph_to_rust(&state.session_graph(session_id)?).map_err(conversion_failed)?;
    if graph.vertex_count() > MAX_MATRIX_NODES {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_parameters",
            format!(
                "Matrices are limited to {} nodes, graph has {}",
                MAX_MATRIX_NODES,
                graph.vertex_count()
            ),
        ));
    }
    let k = request.k;

    let (matrices, elapsed) = tokio::task::spawn_blocking(move || {
        let start_time = Instant::now();
        let matrices = KShortestPaths::new(&graph).all_pairs_k_cost_matrices(k);
        (matrices, start_time.elapsed())
    })
    .await
    .map_err(worker_failed)?;
    let matrices = matrices.map_err(invalid_parameters)?;

    Ok(Json(MatricesResponse {
        execution_id: Uuid::new_v4(),
        k,
        execution_time_ms: elapsed.as_secs_f64() * 1000.0,
        adjacency: matrices.adjacency.to_finite_rows(),
        costs: matrices.costs.iter().map(|matrix| matrix.to_finite_rows()).collect(),
    }))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let mut session_ids: Vec<Uuid> = state.sessions()?.keys().cloned().collect();
    session_ids.sort();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = state.sessions()?;
    let session = sessions.get(&session_id).cloned().ok_or_else(session_not_found)?;
    Ok(Json(session))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn web_nodes(count: usize) -> Vec<WebNode> {
    (0..count)
        .map(|i| WebNode {
            id: i,
            label: format!("Node {}", i),
        })
        .collect()
}

pub fn convert_graph_to_web(graph: &WeightedDigraph<Weight>) -> WebGraph {
    let links = graph
        .edges()
        .into_iter()
        .map(|(source, target, weight)| WebEdge {
            source,
            target,
            weight: weight.into_inner(),
            is_path: false,
        })
        .collect();

    WebGraph {
        nodes: web_nodes(graph.vertex_count()),
        links,
    }
}

/// Rebuilds the library graph, rejecting any edge `add_edge` would ignore
pub fn convert_web_graph_to_rust(web_graph: &WebGraph) -> crate::Result<WeightedDigraph<Weight>> {
    let mut graph = WeightedDigraph::new(web_graph.nodes.len());

    for edge in &web_graph.links {
        if !graph.add_edge(edge.source, edge.target, OrderedFloat(edge.weight)) {
            return Err(Error::InvalidEdge(edge.source, edge.target));
        }
    }

    Ok(graph)
}

fn convert_detail_to_web(rank: usize, detail: PathDetail<Weight>) -> WebPath {
    WebPath {
        rank,
        nodes: detail.nodes,
        cost: detail.cost.into_inner(),
        edges: detail
            .edges
            .into_iter()
            .map(|(source, target, weight)| WebEdge {
                source,
                target,
                weight: weight.into_inner(),
                is_path: true,
            })
            .collect(),
    }
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn invalid_parameters(err: Error) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, "invalid_parameters", err.to_string())
}

fn conversion_failed(err: Error) -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "graph_conversion_failed",
        format!("Failed to convert graph: {}", err),
    )
}

fn worker_failed(err: tokio::task::JoinError) -> ApiError {
    log::error!("k paths worker failed: {}", err);
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "algorithm_execution_failed",
        format!("Algorithm execution failed: {}", err),
    )
}

fn too_many_nodes(count: usize) -> ApiError {
    api_error(
        StatusCode::BAD_REQUEST,
        "invalid_parameters",
        format!("Graphs are limited to {} nodes, got {}", MAX_NODES, count),
    )
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}
