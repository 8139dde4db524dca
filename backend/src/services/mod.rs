//! Business logic services for the Receipt Tracker

pub mod collection;
pub mod issuance;
pub mod reporting;
pub mod session;

pub use collection::CollectionService;
pub use issuance::IssuanceService;
pub use reporting::ReportingService;
pub use session::SessionService;
