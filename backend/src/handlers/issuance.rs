//! HTTP handlers for the issuance ledger

use axum::{extract::State, http::StatusCode, Json};
use shared::{IssuanceEdit, IssuanceRecord, NewIssuance};

use crate::error::AppResult;
use crate::services::IssuanceService;
use crate::AppState;

/// List all issued ranges
pub async fn list_issuances(State(state): State<AppState>) -> Json<Vec<IssuanceRecord>> {
    let service = IssuanceService::new(state.ledgers, state.store);
    Json(service.list().await)
}

/// Record an issued range
pub async fn create_issuance(
    State(state): State<AppState>,
    Json(input): Json<NewIssuance>,
) -> AppResult<(StatusCode, Json<IssuanceRecord>)> {
    let service = IssuanceService::new(state.ledgers, state.store);
    let record = service.record(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace the ledger with the edited grid rows
pub async fn replace_issuances(
    State(state): State<AppState>,
    Json(edits): Json<Vec<IssuanceEdit>>,
) -> AppResult<Json<Vec<IssuanceRecord>>> {
    let service = IssuanceService::new(state.ledgers, state.store);
    let records = service.replace(edits).await?;
    Ok(Json(records))
}
