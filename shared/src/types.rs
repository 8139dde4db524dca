//! Common types used across the tracker

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ReconciledEntry;

/// Report filter parameters
///
/// `None` fields do not constrain. `Some(vec![])` for departments selects
/// nothing, which yields empty summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportFilter {
    pub departments: Option<Vec<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ReportFilter {
    /// Whether an entry passes the department and inclusive date filters.
    /// Entries without an issue date fail any date bound.
    pub fn accepts(&self, entry: &ReconciledEntry) -> bool {
        if let Some(departments) = &self.departments {
            if !departments.iter().any(|d| *d == entry.department) {
                return false;
            }
        }

        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }

        match entry.issued_date {
            Some(date) => {
                self.start_date.map_or(true, |start| date >= start)
                    && self.end_date.map_or(true, |end| date <= end)
            }
            None => false,
        }
    }
}
