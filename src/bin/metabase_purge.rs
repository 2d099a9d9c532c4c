

use anyhow::Context;
use metabase_purge::{PurgeConfig, PurgeManager, RunOutcome};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("metabase_purge=info".parse()?))
        .init();

    // Failures are logged, never turned into a non-zero exit code.
    if let Err(e) = purge() {
        error!("{:#}", e);
    }
    Ok(())
}

fn purge() -> anyhow::Result<()> {
    let config = PurgeConfig::from_env();
    config.validate().context("invalid configuration")?;

    let mut manager = PurgeManager::from_config(&config)?;
    if let RunOutcome::Completed(summary) = manager.run() {
        if summary.not_found > 0 {
            info!(
                "{} of {} failures were not found, probably deleted in cascade",
                summary.not_found, summary.failed
            );
        }
    }
    Ok(())
}
