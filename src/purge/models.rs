use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::models::Item;
use crate::core::error::PurgeError;


/// Items found under a collection, plus every failure that was contained
/// while walking it.
#[derive(Debug, Default)]
pub struct EnumerationReport {
    pub items: Vec<Item>,
    pub errors: Vec<PurgeError>,
}

impl EnumerationReport {
    pub fn failed(error: PurgeError) -> Self {
        Self {
            items: Vec::new(),
            errors: vec![error],
        }
    }

    pub fn extend(&mut self, other: EnumerationReport) {
        self.items.extend(other.items);
        self.errors.extend(other.errors);
    }

    pub fn malformed_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_malformed()).count()
    }
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Failures answered with 404, most likely already removed in cascade.
    pub not_found: usize,
    pub failed_items: Vec<Item>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl DeletionSummary {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            succeeded: 0,
            failed: 0,
            not_found: 0,
            failed_items: Vec::new(),
            started_at,
            finished_at: started_at,
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, item: Item, not_found: bool) {
        self.failed += 1;
        if not_found {
            self.not_found += 1;
        }
        self.failed_items.push(item);
    }

    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }
}


#[derive(Debug)]
pub enum RunOutcome {
    LoginFailed,
    NothingToDelete,
    DryRun { items: Vec<Item> },
    Completed(DeletionSummary),
}
