

pub mod api;
pub mod core;
pub mod purge;
pub mod utils;

pub use utils::safe_truncate_ellipsis;


pub use crate::core::config::PurgeConfig;
pub use crate::core::error::{PurgeError, Result};
pub use api::{ApiError, Item, ItemModel, MetabaseApi, MetabaseClient};
pub use purge::{DeletionSummary, EnumerationReport, PurgeManager, RunOutcome};


pub const DEFAULT_METABASE_HOST: &str = "https://localhost:8443";


pub const DEFAULT_USER: &str = "a@b.com";


pub const DEFAULT_PASSWORD: &str = "metabot1";

/// Collection 1 is the trash on a stock Metabase install.
pub const DEFAULT_ROOT_COLLECTION_ID: i64 = 1;


pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
