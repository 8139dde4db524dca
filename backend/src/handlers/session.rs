//! Save-all handler

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::{session::LedgerSizes, SessionService};
use crate::AppState;

/// Write both ledgers to their files
pub async fn save_all(State(state): State<AppState>) -> AppResult<Json<LedgerSizes>> {
    let service = SessionService::new(state.ledgers, state.store);
    let sizes = service.save_all().await?;
    Ok(Json(sizes))
}
