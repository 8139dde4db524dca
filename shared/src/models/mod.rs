//! Domain models for the Receipt Tracker

mod collection;
mod issuance;
mod report;
mod status;

pub use collection::*;
pub use issuance::*;
pub use report::*;
pub use status::*;
