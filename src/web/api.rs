use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;

use crate::algorithm::{AllPairs, WeightStrategy};
use crate::graph::{Graph, NodeSummary};
use crate::web::models::*;
use crate::Result;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Precomputed route tables, shared read-only by every request
#[derive(Debug)]
pub struct RouteTables {
    pub nodes: Vec<NodeSummary>,
    pub by_distance: AllPairs,
    pub by_time: AllPairs,
}

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub tables: Arc<RouteTables>,
}

impl AppState {
    /// Runs Dijkstra from every node for both strategies
    pub fn precompute(graph: &Graph) -> Result<Self> {
        let started = Instant::now();

        log::info!("Precomputing shortest paths (distance)...");
        let by_distance = graph.dijkstra_all(WeightStrategy::Distance)?;

        log::info!("Precomputing shortest paths (time)...");
        let by_time = graph.dijkstra_all(WeightStrategy::Time)?;

        log::info!(
            "Precomputation complete ({:.4}s)",
            started.elapsed().as_secs_f64()
        );

        Ok(AppState {
            tables: Arc::new(RouteTables {
                nodes: graph.all_nodes(),
                by_distance,
                by_time,
            }),
        })
    }

    fn routes(&self, strategy: WeightStrategy) -> &AllPairs {
        match strategy {
            WeightStrategy::Distance => &self.tables.by_distance,
            WeightStrategy::Time => &self.tables.by_time,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_nodes))
        .route("/route", get(get_route))
        .route("/health", get(health_check))
}

/// All nodes of the map
pub async fn list_nodes(State(state): State<AppState>) -> Json<Vec<NodeSummary>> {
    Json(state.tables.nodes.clone())
}

/// `?from=&to=B` counts as missing, not as a lookup of ""
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// `GET /route?from=A&to=B&strategy=distance|time`, an O(1) table lookup
pub async fn get_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> std::result::Result<Json<RouteResponse>, ApiError> {
    let (Some(from), Some(to)) = (non_empty(&query.from), non_empty(&query.to)) else {
        return Err(bad_request(
            "missing_parameters",
            "Parameters 'from' and 'to' are required",
        ));
    };

    let strategy = match query.strategy.as_deref() {
        None => WeightStrategy::default(),
        Some(raw) => raw.parse::<WeightStrategy>().map_err(|_| {
            bad_request(
                "invalid_strategy",
                "Strategy must be either 'distance' or 'time'",
            )
        })?,
    };

    match state
        .routes(strategy)
        .get(from)
        .and_then(|routes| routes.get(to))
    {
        Some(route) if route.is_reachable() => Ok(Json(RouteResponse {
            strategy,
            route: route.clone(),
        })),
        _ => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "route_not_found",
                format!("Route not found from '{}' to '{}'", from, to),
            )),
        )),
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        nodes: state.tables.nodes.len(),
    })
}

fn bad_request(error: &str, message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(error, message)),
    )
}
