//! serietrack server binary

use serietrack_http::{HttpServer, HttpServerConfig};
use serietrack_mysql::{MySqlConfig, MySqlSeriesStore};
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let server_config = match HttpServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load server configuration: {}", e);
            process::exit(1);
        }
    };

    let db_config = match MySqlConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load database configuration: {}", e);
            process::exit(1);
        }
    };

    // An unreachable database at startup is fatal
    let store = match MySqlSeriesStore::connect(&db_config).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            process::exit(1);
        }
    };

    if server_config.seed_on_empty {
        match store.seed_if_empty().await {
            Ok(0) => {}
            Ok(n) => info!("Seeded {} example series", n),
            Err(e) => {
                error!("Failed to seed example data: {}", e);
                process::exit(1);
            }
        }
    }

    let server = HttpServer::new(server_config);
    if let Err(e) = server.serve(Arc::new(store)).await {
        error!("Server failed: {}", e);
        process::exit(1);
    }
}
