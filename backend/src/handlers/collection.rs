//! HTTP handlers for the collection ledger

use axum::{extract::State, http::StatusCode, Json};
use shared::{CollectionEdit, CollectionRecord, NewCollection};

use crate::error::AppResult;
use crate::services::CollectionService;
use crate::AppState;

/// List all returned receipts
pub async fn list_collections(State(state): State<AppState>) -> Json<Vec<CollectionRecord>> {
    let service = CollectionService::new(state.ledgers, state.store);
    Json(service.list().await)
}

/// Record a returned receipt
pub async fn create_collection(
    State(state): State<AppState>,
    Json(input): Json<NewCollection>,
) -> AppResult<(StatusCode, Json<CollectionRecord>)> {
    let service = CollectionService::new(state.ledgers, state.store);
    let record = service.record(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn replace_collections(
    State(state): State<AppState>,
    Json(edits): Json<Vec<CollectionEdit>>,
) -> AppResult<Json<Vec<CollectionRecord>>> {
    let service = CollectionService::new(state.ledgers, state.store);
    let records = service.replace(edits).await?;
    Ok(Json(records))
}
