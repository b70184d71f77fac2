//! SmartVestor HTTP Server
//!
//! Axum-based server exposing the allocation recommendation engine together
//! with account endpoints and flat-file record storage.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smartvestor_accounts::{Accounts, JsonFileStore, TokenIssuer};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Record store
    let store = Arc::new(JsonFileStore::in_dir(&config.data_dir));
    store.ensure()?;
    tracing::info!("✓ Database at {}", store.path().display());

    let accounts = Accounts::new(store, TokenIssuer::new(&config.jwt_secret));
    let state = AppState::new(accounts);

    let app = routes::router(state, Some(&config.client_build_dir));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 SmartVestor server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /api/health           - Health check");
    tracing::info!("  POST /api/auth/register    - Create account");
    tracing::info!("  POST /api/auth/login       - Sign in");
    tracing::info!("  GET  /api/auth/me          - Current user");
    tracing::info!("  POST /api/auth/google-demo - Demo sign-in");
    tracing::info!("  POST /api/recommend        - Generate advice");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
