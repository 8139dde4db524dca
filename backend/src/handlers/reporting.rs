//! Reporting handlers for the status list, summaries and data export

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{DailyBucket, FilterOptions, ReportFilter, SummaryReport};

use crate::error::{AppError, AppResult};
use crate::services::ReportingService;
use crate::AppState;

#[derive(Deserialize)]
pub struct StatusQuery {
    pub format: Option<String>, // "json" or "csv"
}

#[derive(Deserialize)]
pub struct SummaryQuery {
    /// Comma separated; present but empty selects no department
    pub departments: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl SummaryQuery {
    fn into_filter(self) -> AppResult<ReportFilter> {
        Ok(ReportFilter {
            departments: self.departments.map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(String::from)
                    .collect()
            }),
            start_date: parse_query_date("start_date", self.start_date)?,
            end_date: parse_query_date("end_date", self.end_date)?,
        })
    }
}

fn parse_query_date(name: &str, value: Option<String>) -> AppResult<Option<NaiveDate>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::ValidationError(format!("{} must be YYYY-MM-DD", name))),
    }
}

/// Get the per-serial status list
pub async fn get_status_report(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> AppResult<impl IntoResponse> {
    let service = ReportingService::new(state.ledgers);
    let data = service.status_rows().await;

    if query.format.as_deref() == Some("csv") {
        let csv = ReportingService::export_to_csv(&data)?;
        let headers = [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"durum_raporu.csv\"",
            ),
        ];
        Ok((headers, csv).into_response())
    } else {
        Ok(Json(data).into_response())
    }
}

/// Get the department summary, pending serials and monthly chart
pub async fn get_summary_report(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<SummaryReport>> {
    let filter = query.into_filter()?;
    let service = ReportingService::new(state.ledgers);
    Ok(Json(service.summary(&filter).await))
}

/// Get collected and pending counts per day
pub async fn get_daily_report(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<Vec<DailyBucket>>> {
    let filter = query.into_filter()?;
    let service = ReportingService::new(state.ledgers);
    Ok(Json(service.daily(&filter).await))
}

/// Get the default filter choices
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    let service = ReportingService::new(state.ledgers);
    Json(service.filter_options().await)
}
