//! HTTP handlers for the Receipt Tracker API

pub mod collection;
pub mod health;
pub mod issuance;
pub mod reporting;
pub mod session;

pub use collection::*;
pub use health::*;
pub use issuance::*;
pub use reporting::*;
pub use session::*;
