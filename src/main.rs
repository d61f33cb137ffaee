use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};

/// Main entry point for the image feed backend
///
/// Loads `.env` if present, resolves configuration once, seeds the in-memory post store and
/// serves the REST API (with Swagger UI at `/swagger-ui`).
///
/// # Environment Variables
/// - `FEED_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `UNSPLASH_ACCESS_KEY`: upstream image API credential (discovery is disabled without it)
/// - `UNSPLASH_API_URL`: upstream base URL (default: "https://api.unsplash.com")
/// - `DISCOVER_TIMEOUT_SECS`: upstream timeout in seconds (default: 10)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, binding or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("feed_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("feed_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("FEED_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let state = AppState::from_env()?;
    tracing::info!("++ Starting feed REST on {}", rest_addr);
    tracing::info!(
        "++ Discovery {}",
        if state.discovery.is_configured() {
            "configured"
        } else {
            "not configured"
        }
    );
    tracing::info!(posts = state.post_service.count(), "++ Post store seeded");

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
