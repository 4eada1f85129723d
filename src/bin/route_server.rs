use campus_routes::graph::loader;
use campus_routes::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // route_server [graph.json] [port]
    let config = ServerConfig::from_env_and_args(env::args().skip(1));

    log::info!("Starting campus route server");
    log::info!("  address: {}", config.address());
    log::info!("  CORS enabled: {}", config.enable_cors);

    let graph = match &config.graph_path {
        Some(path) => loader::load_json(path)?,
        None => {
            log::info!("  no graph file given, serving the bundled campus map");
            loader::campus_demo()?
        }
    };

    start_server(config, graph).await?;

    Ok(())
}
