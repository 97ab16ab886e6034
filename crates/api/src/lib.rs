//! service-b, the Cluster 2 greeting microservice.
//!
//! Three static JSON endpoints behind a request-logging middleware:
//! - `GET /` for service info
//! - `GET /health` for the liveness probe
//! - `GET /hello` for the greeting with the current timestamp

pub mod middleware;
pub mod routes;
