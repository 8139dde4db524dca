//! Receipt Tracker - Backend
//!
//! Tracks receipt books handed out to departments and the receipts they
//! return, and reports which serial numbers are still outstanding.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::Ledgers;
use tokio::sync::RwLock;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod storage;

pub use self::config::Config;
pub use storage::LedgerStore;

/// The operator session; one lock guards both ledgers
pub type SharedLedgers = Arc<RwLock<Ledgers>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ledgers: SharedLedgers,
    pub store: Arc<LedgerStore>,
}

impl AppState {
    pub fn new(ledgers: Ledgers, store: LedgerStore) -> Self {
        Self {
            ledgers: Arc::new(RwLock::new(ledgers)),
            store: Arc::new(store),
        }
    }

    /// Build the state from whatever the ledger files currently hold
    pub async fn load(store: LedgerStore) -> error::AppResult<Self> {
        let ledgers = store.load().await?;
        Ok(Self::new(ledgers, store))
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Receipt Tracker API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
