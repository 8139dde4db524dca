//! Receipt issuance models (Verilenler)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A range of receipt serial numbers handed out to a department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssuanceRecord {
    pub id: i64,
    /// Issue date; `None` only when a stored row carried an unreadable date
    pub date: Option<NaiveDate>,
    pub department: String,
    pub location: String,
    pub range_start: i64,
    pub range_end: i64,
    /// Person who signed for the receipt book
    pub recipient: Option<String>,
    pub note: Option<String>,
}

impl IssuanceRecord {
    /// Number of serials covered by the range (zero for a reversed range)
    pub fn serial_count(&self) -> u64 {
        if self.range_start > self.range_end {
            0
        } else {
            self.range_end.abs_diff(self.range_start).saturating_add(1)
        }
    }

    /// Whether the closed range contains the given serial
    pub fn covers(&self, serial_number: i64) -> bool {
        self.range_start <= serial_number && serial_number <= self.range_end
    }

    /// Whether this record was issued to the given department and location
    /// and its range contains the serial
    pub fn matches(&self, department: &str, location: &str, serial_number: i64) -> bool {
        self.department == department && self.location == location && self.covers(serial_number)
    }
}

/// Input for recording a new issuance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIssuance {
    pub date: NaiveDate,
    pub department: String,
    pub location: String,
    pub range_start: i64,
    pub range_end: i64,
    pub recipient: Option<String>,
    pub note: Option<String>,
}

/// A corrected issuance row, applied to the ledger by position.
/// The id column is not editable and is carried over from the existing row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuanceEdit {
    pub date: Option<NaiveDate>,
    pub department: String,
    pub location: String,
    pub range_start: i64,
    pub range_end: i64,
    pub recipient: Option<String>,
    pub note: Option<String>,
}

impl IssuanceEdit {
    pub fn into_record(self, id: i64) -> IssuanceRecord {
        IssuanceRecord {
            id,
            date: self.date,
            department: self.department,
            location: self.location,
            range_start: self.range_start,
            range_end: self.range_end,
            recipient: self.recipient,
            note: self.note,
        }
    }
}
