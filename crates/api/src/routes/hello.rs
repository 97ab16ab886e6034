//! Greeting endpoint.

use axum::routing::get;
use axum::{Json, Router};

use service_b_common::types::{Greeting, SERVICE_NAME, iso8601_now};

/// Fixed message returned by `GET /hello`.
const GREETING: &str = "Hello from Service B in Cluster 2!";

pub fn router() -> Router {
    Router::new().route("/hello", get(hello))
}

/// GET /hello — the greeting plus the current UTC timestamp.
async fn hello() -> Json<Greeting> {
    Json(Greeting {
        service: SERVICE_NAME,
        message: GREETING,
        timestamp: iso8601_now(),
    })
}
