//! Validation utilities for receipt entry
//!
//! Checks shared by the entry forms and the bulk edit path.

use crate::models::{CollectionEdit, IssuanceEdit, NewCollection, NewIssuance};

/// Validate that a required text field is not blank
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Field cannot be blank");
    }
    Ok(())
}

/// Largest number of serials a single issuance may cover
pub const MAX_SERIALS_PER_ISSUANCE: u64 = 100_000;

/// Validate that a serial range is not reversed and not wider than
/// [`MAX_SERIALS_PER_ISSUANCE`]
pub fn validate_serial_range(range_start: i64, range_end: i64) -> Result<(), &'static str> {
    if range_start > range_end {
        return Err("Range start cannot be greater than range end");
    }
    if range_end.abs_diff(range_start) >= MAX_SERIALS_PER_ISSUANCE {
        return Err("Range covers too many serials");
    }
    Ok(())
}

/// A failed check with the offending field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn check_required_fields(department: &str, location: &str) -> Result<(), FieldError> {
    validate_required(department).map_err(|m| FieldError::new("department", m))?;
    validate_required(location).map_err(|m| FieldError::new("location", m))?;
    Ok(())
}

fn check_range(range_start: i64, range_end: i64) -> Result<(), FieldError> {
    let field = if range_start > range_end {
        "range_start"
    } else {
        "range_end"
    };
    validate_serial_range(range_start, range_end).map_err(|m| FieldError::new(field, m))
}

/// Validate an issuance entry: department and location present, range ordered
pub fn validate_new_issuance(input: &NewIssuance) -> Result<(), FieldError> {
    check_required_fields(&input.department, &input.location)?;
    check_range(input.range_start, input.range_end)
}

pub fn validate_issuance_edit(edit: &IssuanceEdit) -> Result<(), FieldError> {
    check_required_fields(&edit.department, &edit.location)?;
    check_range(edit.range_start, edit.range_end)
}

/// Validate a collection entry: department and location present
pub fn validate_new_collection(input: &NewCollection) -> Result<(), FieldError> {
    check_required_fields(&input.department, &input.location)
}

pub fn validate_collection_edit(edit: &CollectionEdit) -> Result<(), FieldError> {
    check_required_fields(&edit.department, &edit.location)
}
