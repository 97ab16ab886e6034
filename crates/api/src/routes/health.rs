//! Health check endpoint.

use axum::routing::get;
use axum::{Json, Router};

use service_b_common::types::{HealthStatus, SERVICE_NAME};

pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
