//! Resizes every image in the playeras directory into `playeras/optimized`.

use anyhow::Context;
use photo_optimizer_lib::utils::init_logging;
use photo_optimizer_lib::{AppConfig, ConsoleNotifier, optimize_images};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();
    info!("=== optimize-images starting ===");

    // Per-file failures are already reported; the exit status stays 0.
    if let Err(e) = run().await {
        error!("{:#}", e);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load().await.context("Failed to load configuration")?;
    optimize_images(&config, ConsoleNotifier)
        .await
        .context("Playeras optimization could not start")?;
    Ok(())
}
