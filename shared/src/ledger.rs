//! In-memory session over the issuance and collection ledgers
//!
//! Every mutation validates first and only then touches the tables, so a
//! rejected operation leaves both ledgers as they were.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    CollectionEdit, CollectionRecord, IssuanceEdit, IssuanceRecord, NewCollection, NewIssuance,
    ReconciledEntry,
};
use crate::reconciliation::reconcile;
use crate::validation::{
    validate_collection_edit, validate_issuance_edit, validate_new_collection,
    validate_new_issuance, FieldError,
};

/// Ledger operation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Validation error on {field}: {message}")]
    Validation {
        field: String,
        message: String,
    },

    /// No issuance record covers the serial for this department and location
    #[error("Serial {serial_number} was not issued to {department} / {location}")]
    LookupMiss {
        department: String,
        location: String,
        serial_number: i64,
    },

    /// Non-fatal: the serial is already on the collection ledger
    #[error("Serial {serial_number} of issuance {issuance_id} is already collected")]
    DuplicateCollection { issuance_id: i64, serial_number: i64 },
}

impl LedgerError {
    fn edit_row(row: usize, err: FieldError) -> Self {
        LedgerError::Validation {
            field: format!("rows[{}].{}", row, err.field),
            message: err.message.to_string(),
        }
    }

    fn row_count(expected: usize, actual: usize) -> Self {
        LedgerError::Validation {
            field: "rows".to_string(),
            message: format!("Expected {} rows, got {}", expected, actual),
        }
    }
}

impl From<FieldError> for LedgerError {
    fn from(err: FieldError) -> Self {
        LedgerError::Validation {
            field: err.field.to_string(),
            message: err.message.to_string(),
        }
    }
}

/// Both ledgers of one operator session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledgers {
    pub issuances: Vec<IssuanceRecord>,
    pub collections: Vec<CollectionRecord>,
}

impl Ledgers {
    pub fn new(issuances: Vec<IssuanceRecord>, collections: Vec<CollectionRecord>) -> Self {
        Self {
            issuances,
            collections,
        }
    }

    /// Next issuance id: one past the largest in use, or 1 for an empty ledger
    pub fn next_issuance_id(&self) -> i64 {
        self.issuances.iter().map(|r| r.id).max().map_or(1, |max| max + 1)
    }

    /// Record a new issued range and return its id
    pub fn append_issuance(&mut self, input: NewIssuance) -> Result<i64, LedgerError> {
        validate_new_issuance(&input)?;

        let id = self.next_issuance_id();
        self.issuances.push(IssuanceRecord {
            id,
            date: Some(input.date),
            department: input.department,
            location: input.location,
            range_start: input.range_start,
            range_end: input.range_end,
            recipient: input.recipient.filter(|s| !s.is_empty()),
            note: input.note.filter(|s| !s.is_empty()),
        });
        Ok(id)
    }

    /// First issuance (ledger order) for the department and location whose
    /// range contains the serial
    pub fn find_issuance(
        &self,
        department: &str,
        location: &str,
        serial_number: i64,
    ) -> Option<&IssuanceRecord> {
        self.issuances
            .iter()
            .find(|r| r.matches(department, location, serial_number))
    }

    pub fn is_collected(&self, issuance_id: i64, serial_number: i64) -> bool {
        self.collections
            .iter()
            .any(|c| c.issuance_id == issuance_id && c.serial_number == serial_number)
    }

    /// Record a returned serial against the issuance that covers it
    pub fn append_collection(
        &mut self,
        input: NewCollection,
    ) -> Result<CollectionRecord, LedgerError> {
        validate_new_collection(&input)?;

        let issuance_id = self
            .find_issuance(&input.department, &input.location, input.serial_number)
            .map(|r| r.id)
            .ok_or_else(|| LedgerError::LookupMiss {
                department: input.department.clone(),
                location: input.location.clone(),
                serial_number: input.serial_number,
            })?;

        if self.is_collected(issuance_id, input.serial_number) {
            return Err(LedgerError::DuplicateCollection {
                issuance_id,
                serial_number: input.serial_number,
            });
        }

        let record = CollectionRecord {
            issuance_id,
            serial_number: input.serial_number,
            date: Some(input.date),
            department: input.department,
            location: input.location,
            note: input.note.filter(|s| !s.is_empty()),
        };
        self.collections.push(record.clone());
        Ok(record)
    }

    /// Apply grid edits to the issuance ledger by position, keeping ids.
    /// Returns the ledger that was replaced.
    pub fn replace_issuances(
        &mut self,
        edits: Vec<IssuanceEdit>,
    ) -> Result<Vec<IssuanceRecord>, LedgerError> {
        if edits.len() != self.issuances.len() {
            return Err(LedgerError::row_count(self.issuances.len(), edits.len()));
        }
        for (row, edit) in edits.iter().enumerate() {
            validate_issuance_edit(edit).map_err(|e| LedgerError::edit_row(row, e))?;
        }

        let updated = self
            .issuances
            .iter()
            .zip(edits)
            .map(|(current, edit)| edit.into_record(current.id))
            .collect();
        Ok(std::mem::replace(&mut self.issuances, updated))
    }

    /// Apply grid edits to the collection ledger by position, keeping the
    /// issuance references. Returns the ledger that was replaced.
    pub fn replace_collections(
        &mut self,
        edits: Vec<CollectionEdit>,
    ) -> Result<Vec<CollectionRecord>, LedgerError> {
        if edits.len() != self.collections.len() {
            return Err(LedgerError::row_count(self.collections.len(), edits.len()));
        }
        for (row, edit) in edits.iter().enumerate() {
            validate_collection_edit(edit).map_err(|e| LedgerError::edit_row(row, e))?;
        }

        let updated = self
            .collections
            .iter()
            .zip(edits)
            .map(|(current, edit)| edit.into_record(current.issuance_id))
            .collect();
        Ok(std::mem::replace(&mut self.collections, updated))
    }

    /// Per-serial status rows for the current ledgers
    pub fn reconcile(&self) -> Vec<ReconciledEntry> {
        reconcile(&self.issuances, &self.collections)
    }
}
