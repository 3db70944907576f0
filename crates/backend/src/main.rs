//! Rankr Backend Server
//!
//! Provides:
//! - IGDB proxy for the catalog page (`/api/games`, `/api/platforms`)
//! - Static file serving for the page itself

mod config;
mod error;
mod igdb;
mod routes;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::sync::Arc;
use crate::config::ServerConfig;

pub struct AppState {
    /// Shared upstream client; carries the request timeout
    pub http: reqwest::Client,
    pub config: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "rankr_backend=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    if config.igdb_credentials().is_none() {
        tracing::warn!("IGDB_CLIENT_ID / IGDB_ACCESS_TOKEN not set - catalog API will return errors");
    }
    tracing::info!(root = %config.static_root.display(), "Serving static files");

    let http = reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .build()?;

    let addr = config.bind_address.clone();
    let state = Arc::new(AppState { http, config });
    let app = routes::build_router(state);

    // Start server
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
