//! Health check endpoints

use axum::{http::StatusCode, routing::get, Json, Router};
use database::postgres::DatabaseConnection;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

fn health_response(status: &str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: status.to_string(),
        service: "catalog-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    health_response("healthy")
}

async fn ready(db: DatabaseConnection) -> Result<Json<HealthResponse>, StatusCode> {
    match database::postgres::check_health(&db).await {
        Ok(()) => Ok(health_response("ready")),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(move || ready(db)))
}
