//! Shared types and logic for the Receipt Tracker
//!
//! This crate holds the ledger models, entry validation, the reconciliation
//! engine and the report aggregation. It performs no I/O; the backend owns
//! storage and the HTTP surface.

pub mod ledger;
pub mod models;
pub mod reconciliation;
pub mod reporting;
pub mod types;
pub mod validation;

pub use ledger::*;
pub use models::*;
pub use reconciliation::*;
pub use reporting::*;
pub use types::*;
pub use validation::*;
