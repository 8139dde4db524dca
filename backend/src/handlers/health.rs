//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::{session::LedgerSizes, SessionService};
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ledgers: LedgerSizes,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = SessionService::new(state.ledgers.clone(), state.store.clone());

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ledgers: service.sizes().await,
    })
}
