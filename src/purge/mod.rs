pub mod delete;
pub mod enumerate;
pub mod manager;
pub mod models;

#[cfg(test)]
pub(crate) mod fake;


pub use delete::delete_all;
pub use enumerate::{enumerate, enumerate_with_report};
pub use manager::PurgeManager;
pub use models::{DeletionSummary, EnumerationReport, RunOutcome};
