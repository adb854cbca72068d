//! ggm-festival-api server entry point.
//!
//! Starts the Axum HTTP server. `--openapi` prints the OpenAPI document
//! and exits.

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

use ggm_festival_api::api::{self, ApiDoc};
use ggm_festival_api::app_state::AppState;
use ggm_festival_api::config::{FestivalConfig, LogFormat};
use ggm_festival_api::persistence::SqliteStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::args().any(|arg| arg == "--openapi") {
        println!("{}", ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    // Load configuration
    let config = FestivalConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting ggm-festival-api");

    // Open the store
    let store = SqliteStore::connect(&config).await?;
    if config.database_bootstrap {
        store.bootstrap().await?;
        tracing::info!("database tables ensured");
    }

    // Build router
    let app = api::app(AppState::new(store)).layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
