//! Invoice register API server binary
//!
//! # Usage
//!
//! ```bash
//! # Run against PostgreSQL
//! API_DATABASE_URL=postgres://... cargo run --bin invoice-api
//!
//! # Run with the in-memory store (no database needed)
//! API_STORE=memory cargo run --bin invoice-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_STORE` - Store adapter: `postgres` or `memory` (default: postgres)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_store::{connect_pool, MemoryStore, PgStore};
use interface_api::config::{ApiConfig, StoreMode};
use interface_api::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = ?config.store,
        "Starting invoice register API server"
    );

    let state = match config.store {
        StoreMode::Memory => {
            let store = Arc::new(MemoryStore::new());
            AppState {
                parties: store.clone(),
                invoices: store,
            }
        }
        StoreMode::Postgres => {
            let pool = connect_pool(&config.database_url).await?;
            let store = Arc::new(PgStore::new(pool));
            AppState {
                parties: store.clone(),
                invoices: store,
            }
        }
    };

    let app = create_router(state);
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables, falling back to
/// defaults for anything unset
fn load_config() -> ApiConfig {
    match ApiConfig::from_env() {
        Ok(config) => config,
        Err(_) => {
            let defaults = ApiConfig::default();
            ApiConfig {
                host: std::env::var("API_HOST").unwrap_or(defaults.host),
                port: std::env::var("API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                store: match std::env::var("API_STORE").as_deref() {
                    Ok("memory") => StoreMode::Memory,
                    _ => StoreMode::Postgres,
                },
                database_url: std::env::var("DATABASE_URL")
                    .or_else(|_| std::env::var("API_DATABASE_URL"))
                    .unwrap_or(defaults.database_url),
                log_level: std::env::var("API_LOG_LEVEL")
                    .or_else(|_| std::env::var("RUST_LOG"))
                    .unwrap_or(defaults.log_level),
            }
        }
    }
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
