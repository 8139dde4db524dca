//! Per-serial reconciliation models

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whether an issued serial has come back
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CollectionStatus {
    Collected,
    Pending,
}

impl CollectionStatus {
    /// Label shown to store operators
    pub fn label_tr(&self) -> &'static str {
        match self {
            CollectionStatus::Collected => "Alındı",
            CollectionStatus::Pending => "Bekleniyor",
        }
    }

    pub fn is_collected(&self) -> bool {
        matches!(self, CollectionStatus::Collected)
    }
}

impl std::fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionStatus::Collected => write!(f, "Collected"),
            CollectionStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// One issued serial number and its collection status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReconciledEntry {
    pub issuance_id: i64,
    pub issued_date: Option<NaiveDate>,
    pub department: String,
    pub location: String,
    pub serial_number: i64,
    pub status: CollectionStatus,
    /// Operator-facing status text (`Alındı` / `Bekleniyor`)
    pub status_label: String,
    pub collected_date: Option<NaiveDate>,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl ReconciledEntry {
    /// `collected` is `Some(date)` when a collection record matched the serial;
    /// the inner date can still be missing if the stored row had none.
    pub fn new(
        issuance_id: i64,
        issued_date: Option<NaiveDate>,
        department: &str,
        location: &str,
        serial_number: i64,
        collected: Option<Option<NaiveDate>>,
    ) -> Self {
        let (status, collected_date) = match collected {
            Some(date) => (CollectionStatus::Collected, date),
            None => (CollectionStatus::Pending, None),
        };

        Self {
            issuance_id,
            issued_date,
            department: department.to_string(),
            location: location.to_string(),
            serial_number,
            status,
            status_label: status.label_tr().to_string(),
            collected_date,
            day: issued_date.map(|d| d.day()),
            month: issued_date.map(|d| d.month()),
            year: issued_date.map(|d| d.year()),
        }
    }
}
