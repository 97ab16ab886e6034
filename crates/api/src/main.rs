//! service-b server binary entrypoint.

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use service_b_common::config::ServiceConfig;
use service_b_common::types::SERVICE_NAME;

use service_b_api::routes::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("service_b_api=debug,service_b_common=debug,tower_http=debug")
        }))
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;

    // Build router
    let app = create_router().layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        "{} v{} listening on {}",
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
