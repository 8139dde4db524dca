//! Route definitions for the Receipt Tracker

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Issued ranges (Verilenler)
        .merge(issuance_routes())
        // Returned receipts (Alınanlar)
        .merge(collection_routes())
        // Write both ledgers to disk
        .route("/save", post(handlers::save_all))
        .nest("/reports", report_routes())
}

fn issuance_routes() -> Router<AppState> {
    Router::new().route(
        "/issuances",
        get(handlers::list_issuances)
            .post(handlers::create_issuance)
            .put(handlers::replace_issuances),
    )
}

fn collection_routes() -> Router<AppState> {
    Router::new().route(
        "/collections",
        get(handlers::list_collections)
            .post(handlers::create_collection)
            .put(handlers::replace_collections),
    )
}

/// Report routes; all of them reconcile on every request
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handlers::get_status_report))
        .route("/summary", get(handlers::get_summary_report))
        .route("/daily", get(handlers::get_daily_report))
        .route("/filters", get(handlers::get_filter_options))
}
