//! Summary report models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Receipt totals for one department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentSummary {
    pub department: String,
    pub total: usize,
    pub collected: usize,
    pub pending: usize,
}

/// Serials a department still has to return
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingSerials {
    pub department: String,
    pub serial_numbers: Vec<i64>,
}

/// Collected receipts per month and department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyBucket {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub department: String,
    pub collected: usize,
}

impl MonthlyBucket {
    /// `YYYY-MM` label used on chart axes
    pub fn period_label(&self) -> String {
        match (self.year, self.month) {
            (Some(year), Some(month)) => format!("{}-{:02}", year, month),
            _ => "-".to_string(),
        }
    }
}

/// Collected and pending receipts per day and department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyBucket {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub department: String,
    pub collected: usize,
    pub pending: usize,
}

/// A bar in the monthly receipt chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartPoint {
    pub period: String,
    pub department: String,
    pub receipt_count: usize,
}

/// Everything the summary view renders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryReport {
    pub departments: Vec<DepartmentSummary>,
    pub pending: Vec<PendingSerials>,
    pub monthly: Vec<MonthlyBucket>,
    /// Absent when there is nothing to plot
    pub chart: Option<Vec<ChartPoint>>,
}

/// Defaults offered by the report filter
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub earliest: Option<NaiveDate>,
    pub latest: Option<NaiveDate>,
}
