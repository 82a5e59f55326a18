//! # User CRUD Server
//!
//! Binary entry point: logging, configuration, state, then the HTTP server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_crud_server::{config::Config, serve, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info for dependencies, debug for this crate and request traces.
    // RUST_LOG overrides.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_crud_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let state = AppState::in_memory();

    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server is running on http://{}", listener.local_addr()?);

    serve(listener, state).await?;

    Ok(())
}
