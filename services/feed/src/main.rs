//! beacon feed server
//!
//! Serves the notification counter record and todo fixtures over HTTP for
//! client state stores to consume.

use anyhow::Result;
use beacon_feed::{api, config, fixtures::FixtureSet, state::AppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to BEACON_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting beacon feed server");

    let fixtures = FixtureSet::built_in();
    info!(todo_count = fixtures.todo_count(), "Fixtures loaded");

    let state = AppState::new(fixtures, config.todo_delay);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
                return;
            }
            info!("Received shutdown signal");
        })
        .await?;

    info!("Feed server shutdown complete");
    Ok(())
}
