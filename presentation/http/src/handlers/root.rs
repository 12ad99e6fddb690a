//! Root greeting and health check handlers

use crate::models::{HealthStatus, Message};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

/// `GET /` greeting
pub async fn hello() -> Json<Message> {
    Json(Message::new("Hello, World!"))
}

/// `GET /health` — pings the store and reports service liveness
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthStatus>, (StatusCode, String)> {
    match state.store.health_check().await {
        Ok(()) => Ok(Json(HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Store unhealthy: {}", e),
        )),
    }
}
