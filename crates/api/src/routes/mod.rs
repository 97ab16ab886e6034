pub mod health;
pub mod hello;
pub mod root;

use axum::Router;
use axum::middleware::from_fn;

use crate::middleware::request_log::log_request;

/// Build the complete router with all routes and the request log layer.
///
/// The log layer lives here rather than in `main` so every request is
/// logged before dispatch no matter how the router is driven. Unmatched
/// paths fall through to Axum's default 404.
pub fn create_router() -> Router {
    Router::new()
        .merge(root::router())
        .merge(health::router())
        .merge(hello::router())
        .layer(from_fn(log_request))
}
