use chrono::Utc;
use tracing::{error, info};

use super::models::DeletionSummary;
use crate::api::base::MetabaseApi;
use crate::api::models::Item;
use crate::core::error::PurgeError;


/// Deletes `items` one by one, in order. Collections cannot be hard deleted
/// yet, so their deletes are expected to fail until the server supports it.
pub fn delete_all<A: MetabaseApi + ?Sized>(api: &A, items: &[Item]) -> DeletionSummary {
    let mut summary = DeletionSummary::new(Utc::now());

    for item in items {
        match api.delete_item(item) {
            Ok(204) => {
                info!("Successfully deleted {} with id {}", item.model, item.id);
                summary.record_success();
            }
            Ok(status) => {
                info!(
                    "Deleted {} with id {} (Status: {})",
                    item.model, item.id, status
                );
                summary.record_success();
            }
            Err(source) => {
                let not_found = source.is_not_found();
                let err = PurgeError::Delete {
                    item: *item,
                    source,
                };
                error!(
                    "{}, or {} has already been deleted in cascade.",
                    err, item.model
                );
                summary.record_failure(*item, not_found);
            }
        }
    }

    summary.finished_at = Utc::now();
    info!(
        "Deletion summary: {} succeeded, {} failed.",
        summary.succeeded, summary.failed
    );
    summary
}
