//! Receipt collection models (Alınanlar)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single receipt serial returned by a department
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionRecord {
    /// Issuance record whose range contained the serial at entry time
    pub issuance_id: i64,
    pub serial_number: i64,
    pub date: Option<NaiveDate>,
    pub department: String,
    pub location: String,
    pub note: Option<String>,
}

/// Input for recording a returned receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCollection {
    pub date: NaiveDate,
    pub serial_number: i64,
    pub department: String,
    pub location: String,
    pub note: Option<String>,
}

/// A corrected collection row, applied by position; the issuance id is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEdit {
    pub serial_number: i64,
    pub date: Option<NaiveDate>,
    pub department: String,
    pub location: String,
    pub note: Option<String>,
}

impl CollectionEdit {
    pub fn into_record(self, issuance_id: i64) -> CollectionRecord {
        CollectionRecord {
            issuance_id,
            serial_number: self.serial_number,
            date: self.date,
            department: self.department,
            location: self.location,
            note: self.note,
        }
    }
}
