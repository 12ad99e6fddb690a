//! HTTP presentation layer for serietrack
//!
//! Exposes the series store as a JSON REST surface. Every route maps one
//! verb+path combination to a single store operation; the store itself is
//! injected as shared state so handlers carry no global connection.

use axum::http::{header, Method, StatusCode};
use axum::routing::{get, patch};
use axum::Router;
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use serietrack_core::prelude::*;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod handlers;
pub mod middleware;
pub mod models;

pub use models::*;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,
    /// Enable the cross-origin policy
    pub enable_cors: bool,
    /// Seed example rows when the table is empty on startup
    pub seed_on_empty: bool,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".parse().expect("static address"),
            enable_cors: true,
            seed_on_empty: false,
        }
    }
}

impl HttpServerConfig {
    /// Load configuration from the process environment
    /// (`SERIETRACK_BIND_ADDRESS`, `SERIETRACK_ENABLE_CORS`,
    /// `SERIETRACK_SEED_ON_EMPTY`).
    pub fn from_env() -> Result<Self, CoreError> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("SERIETRACK_"))
            .extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse server configuration: {}", e)))
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SeriesStore>,
}

/// HTTP presentation adapter
pub struct HttpServer {
    config: HttpServerConfig,
}

impl HttpServer {
    /// Create a new server with the given configuration
    pub fn new(config: HttpServerConfig) -> Self {
        Self { config }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self, store: Arc<dyn SeriesStore>) -> Router {
        let app_state = AppState { store };

        let mut router = Router::new()
            .route("/", get(handlers::root::hello))
            .route("/health", get(handlers::root::health))
            .route(
                "/api/series",
                get(handlers::series::list_series).post(handlers::series::create_series),
            )
            .route(
                "/api/series/:id",
                get(handlers::series::get_series)
                    .put(handlers::series::replace_series)
                    .delete(handlers::series::delete_series),
            )
            .route("/api/series/:id/episode", patch(handlers::series::advance_episode))
            .route("/api/series/:id/status", patch(handlers::series::update_status))
            .route("/api/series/:id/upvote", patch(handlers::series::upvote_series))
            .route("/api/series/:id/downvote", patch(handlers::series::downvote_series))
            .layer(axum::middleware::from_fn(middleware::request_logging))
            .with_state(app_state);

        if self.config.enable_cors {
            router = router.layer(cors_layer());
        }

        router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Bind the configured address and serve until the process exits
    pub async fn serve(&self, store: Arc<dyn SeriesStore>) -> Result<(), PresentationError> {
        info!("Starting serietrack server on {}", self.config.bind_address);

        let router = self.build_router(store);

        let listener = tokio::net::TcpListener::bind(&self.config.bind_address)
            .await
            .map_err(|e| {
                PresentationError::StartupFailed(format!(
                    "Failed to bind to {}: {}",
                    self.config.bind_address, e
                ))
            })?;

        info!("serietrack listening on {}", self.config.bind_address);

        axum::serve(listener, router)
            .await
            .map_err(|e| PresentationError::StartupFailed(format!("Server error: {}", e)))?;

        Ok(())
    }
}

/// Cross-origin policy: any origin (mirrored, so credentials stay allowed),
/// the full verb set, Content-Type and Authorization headers.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Map a storage failure to a plain-text 500
pub(crate) fn handle_store_error(err: StoreError) -> (StatusCode, String) {
    error!("Storage error: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Storage error".to_string())
}

/// Plain-text 404 for lookups and writes that matched zero rows
pub(crate) fn series_not_found(id: SeriesId) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Series {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpServerConfig::default();
        assert_eq!(config.bind_address.port(), 8080);
        assert!(config.enable_cors);
        assert!(!config.seed_on_empty);
    }

    #[test]
    fn test_not_found_body_names_the_id() {
        let (status, body) = series_not_found(SeriesId::new(12));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("12"));
    }
}
