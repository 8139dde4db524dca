//! Reporting service for the status list and summary views
//! Every call reconciles the current ledgers from scratch.

use serde::Serialize;
use shared::{
    daily_summary, filter_entries, filter_options, summarize, DailyBucket, FilterOptions,
    ReconciledEntry, ReportFilter, SummaryReport,
};

use crate::error::{AppError, AppResult};
use crate::SharedLedgers;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    ledgers: SharedLedgers,
}

impl ReportingService {
    pub fn new(ledgers: SharedLedgers) -> Self {
        Self { ledgers }
    }

    /// Per-serial status rows (Durum Raporu)
    pub async fn status_rows(&self) -> Vec<ReconciledEntry> {
        let entries = self.ledgers.read().await.reconcile();
        tracing::debug!("Reconciled {} serials", entries.len());
        entries
    }

    /// Department totals, pending serials and the monthly chart (Özet Rapor)
    pub async fn summary(&self, filter: &ReportFilter) -> SummaryReport {
        let entries = self.status_rows().await;
        summarize(&entries, filter)
    }

    /// Collected and pending counts per day and department
    pub async fn daily(&self, filter: &ReportFilter) -> Vec<DailyBucket> {
        let entries = self.status_rows().await;
        daily_summary(&filter_entries(&entries, filter))
    }

    /// Department choices and date span for the report filter
    pub async fn filter_options(&self) -> FilterOptions {
        filter_options(&self.status_rows().await)
    }

    /// Export report data as CSV
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record).map_err(|e| {
                AppError::Internal(format!("CSV serialization error: {}", e))
            })?;
        }
        let csv_data = String::from_utf8(wtr.into_inner().map_err(|e| {
            AppError::Internal(format!("CSV writer error: {}", e))
        })?)
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
