use tracing::{debug, error, warn};

use super::models::EnumerationReport;
use crate::api::base::MetabaseApi;
use crate::api::models::Item;
use crate::core::error::PurgeError;
use crate::utils::safe_truncate_ellipsis;

const MAX_LOGGED_ENTRY_CHARS: usize = 300;


pub fn enumerate<A: MetabaseApi + ?Sized>(api: &A, collection_id: i64) -> Vec<Item> {
    enumerate_with_report(api, collection_id).items
}

/// Walks `collection_id` depth-first. Every sub-collection is emitted after
/// all of its descendants. Listing failures and malformed entries are
/// logged and recorded, and never stop the walk.
pub fn enumerate_with_report<A: MetabaseApi + ?Sized>(
    api: &A,
    collection_id: i64,
) -> EnumerationReport {
    let entries = match api.list_collection_items(collection_id) {
        Ok(entries) => entries,
        Err(source) => {
            let err = PurgeError::List {
                collection_id,
                source,
            };
            error!("{}", err);
            return EnumerationReport::failed(err);
        }
    };

    let mut report = EnumerationReport::default();

    for entry in &entries {
        let Some(item) = Item::from_entry(entry) else {
            let err = PurgeError::MalformedItem {
                collection_id,
                raw: safe_truncate_ellipsis(&entry.to_string(), MAX_LOGGED_ENTRY_CHARS),
            };
            warn!("{}", err);
            report.errors.push(err);
            continue;
        };

        if item.model.is_collection() {
            debug!("Entering sub-collection {}...", item.id);
            report.extend(enumerate_with_report(api, item.id));
        }
        report.items.push(item);
    }

    report
}
