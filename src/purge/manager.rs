use tracing::{error, info, warn};

use super::delete::delete_all;
use super::enumerate::enumerate_with_report;
use super::models::RunOutcome;
use crate::api::base::MetabaseApi;
use crate::api::client::MetabaseClient;
use crate::core::config::PurgeConfig;
use crate::core::error::{PurgeError, Result};


pub struct PurgeManager<A: MetabaseApi> {
    api: A,
    root_collection_id: i64,
    dry_run: bool,
}

impl PurgeManager<MetabaseClient> {
    pub fn from_config(config: &PurgeConfig) -> Result<Self> {
        let client = MetabaseClient::new(config)
            .map_err(|e| PurgeError::config(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self::new(client, config.root_collection_id).with_dry_run(config.dry_run))
    }
}

impl<A: MetabaseApi> PurgeManager<A> {
    pub fn new(api: A, root_collection_id: i64) -> Self {
        info!(
            "Initializing PurgeManager for {} (root collection {})",
            api.base_url(),
            root_collection_id
        );
        Self {
            api,
            root_collection_id,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }


    pub fn login(&mut self) -> bool {
        match self.api.login() {
            Ok(()) => {
                info!("Successfully logged into Metabase.");
                true
            }
            Err(source) => {
                error!("{}", PurgeError::Auth(source));
                false
            }
        }
    }

    /// Logs in, collects everything under the root collection and deletes it.
    pub fn run(&mut self) -> RunOutcome {
        if !self.login() {
            return RunOutcome::LoginFailed;
        }

        info!(
            "Starting recursive fetch from root collection ID: {}",
            self.root_collection_id
        );
        let report = enumerate_with_report(&self.api, self.root_collection_id);

        if !report.errors.is_empty() {
            warn!(
                "{} problems while enumerating collection {} ({} malformed entries)",
                report.errors.len(),
                self.root_collection_id,
                report.malformed_count()
            );
        }

        let items = report.items;
        if items.is_empty() {
            info!("No items found to delete.");
            return RunOutcome::NothingToDelete;
        }

        info!("Found {} items (including nested) to delete.", items.len());

        if self.dry_run {
            info!("Dry run, nothing will be deleted. Items to delete:");
            for item in &items {
                info!("  - {} (ID: {})", item.model, item.id);
            }
            return RunOutcome::DryRun { items };
        }

        let summary = delete_all(&self.api, &items);
        info!("Deletion process finished.");
        RunOutcome::Completed(summary)
    }
}
