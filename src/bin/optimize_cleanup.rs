//! Resizes the accessory photos, then deletes the playeras originals.

use anyhow::Context;
use photo_optimizer_lib::utils::init_logging;
use photo_optimizer_lib::{AppConfig, ConsoleNotifier, optimize_cleanup};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();
    info!("=== optimize-cleanup starting ===");

    // Per-file failures are already reported; the exit status stays 0.
    if let Err(e) = run().await {
        error!("{:#}", e);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().await.context("Failed to load configuration")?;
    let (resized, purged) = optimize_cleanup(&config, ConsoleNotifier).await;

    if let Err(e) = resized {
        error!("Accessory optimization could not start: {}", e);
    }
    purged.context("Purging playeras originals failed")?;
    Ok(())
}
