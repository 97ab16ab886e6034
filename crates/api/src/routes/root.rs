//! Service info endpoint.

use std::collections::BTreeMap;

use axum::routing::get;
use axum::{Json, Router};

use service_b_common::types::{SERVICE_NAME, ServiceInfo};

pub fn router() -> Router {
    Router::new().route("/", get(service_info))
}

/// GET / — service name, version, and a description of each endpoint.
async fn service_info() -> Json<ServiceInfo> {
    let endpoints = BTreeMap::from([
        ("/", "Service info"),
        ("/health", "Health check"),
        ("/hello", "Main endpoint"),
    ]);

    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}
