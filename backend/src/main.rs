//! Receipt Tracker - Backend Server
//!
//! Serves the issuance and collection ledgers and the reconciliation reports
//! over HTTP, persisting both ledgers to CSV files.

use std::net::SocketAddr;

use receipt_tracker::{create_app, error::AppError, AppState, Config, LedgerStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "receipt_server=debug,receipt_tracker=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load().map_err(|e| AppError::Configuration(e.to_string()))?;

    tracing::info!("Starting Receipt Tracker Server");
    tracing::info!("Environment: {}", config.environment);

    // Load both ledgers into the session
    let store = LedgerStore::from_config(&config.storage);
    tracing::info!(
        "Ledger files: {} and {}",
        store.issuance_path().display(),
        store.collection_path().display()
    );
    let state = AppState::load(store).await?;

    // Build application
    let app = create_app(state);

    // Start server
    let ip: std::net::IpAddr = config
        .server
        .host
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid host {}", config.server.host)))?;
    let addr = SocketAddr::from((ip, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
