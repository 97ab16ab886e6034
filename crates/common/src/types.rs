use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Name this service reports in every response body.
pub const SERVICE_NAME: &str = "service-b";

/// Body of `GET /`: service identity plus the registered endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// Body of `GET /hello`.
#[derive(Debug, Clone, Serialize)]
pub struct Greeting {
    pub service: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// Current UTC time in ISO-8601 with millisecond precision and a `Z` suffix
/// (`2024-01-01T00:00:00.000Z`).
pub fn iso8601_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
