//! Per-request logging middleware.
//!
//! Emits one log line per incoming request, before dispatch, carrying the
//! HTTP method and path. The fmt subscriber stamps every line with the
//! current ISO-8601 time.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log the method and path of an incoming request, then dispatch it.
pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!(method = %req.method(), path = %req.uri().path(), "incoming request");
    next.run(req).await
}
