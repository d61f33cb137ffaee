//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own, with OpenAPI/Swagger UI.
//!
//! ## Intended use
//! Useful for development and debugging. The workspace's main `feed-run` binary serves the same
//! router and is the usual entry point.

use api_rest::{router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the feed REST API server
///
/// # Environment Variables
/// - `FEED_REST_ADDR`: Server address (default: "0.0.0.0:8000")
/// - `UNSPLASH_ACCESS_KEY`, `UNSPLASH_API_URL`, `DISCOVER_TIMEOUT_SECS`: see [`AppState::from_env`]
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the discovery configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("feed_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("FEED_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let state = AppState::from_env()?;
    tracing::info!(
        discovery_configured = state.discovery.is_configured(),
        "-- Starting feed REST API on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
