use axum::{
    http::{header, Method},
    Router,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::graph::Graph;
use crate::web::api::{create_router, AppState};

/// Configuration for the route server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// JSON graph document to serve; `None` serves the built-in demo map
    pub graph_path: Option<PathBuf>,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5001,
            graph_path: None,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Reads `PORT` and `CAMPUS_GRAPH` from the environment, then lets the
    /// positional arguments `[graph.json] [port]` override them.
    pub fn from_env_and_args(args: impl IntoIterator<Item = String>) -> Self {
        Self::from_sources(args, |key| std::env::var(key).ok())
    }

    pub fn from_sources<F>(args: impl IntoIterator<Item = String>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(path) = env("CAMPUS_GRAPH").filter(|p| !p.is_empty()) {
            config.graph_path = Some(PathBuf::from(path));
        }
        if let Some(port) = env("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => log::warn!("Ignoring invalid PORT value '{}'", port),
            }
        }

        let mut args = args.into_iter();
        if let Some(path) = args.next() {
            config.graph_path = Some(PathBuf::from(path));
        }
        if let Some(port) = args.next() {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => log::warn!("Ignoring invalid port argument '{}'", port),
            }
        }

        config
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Assembles the router with its middleware
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let app = create_router();

    let app = if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE]);
        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    };

    app.with_state(state)
}

/// Precompute every route of `graph` and serve them until the process stops
pub async fn start_server(
    config: ServerConfig,
    graph: Graph,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!(
        "Serving graph '{}' ({} nodes, {} edges)",
        graph.name(),
        graph.node_count(),
        graph.edge_count()
    );

    // Both all-pairs sweeps are CPU bound
    let state = tokio::task::spawn_blocking(move || AppState::precompute(&graph)).await??;
    let app = build_app(state, &config);

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Route server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
