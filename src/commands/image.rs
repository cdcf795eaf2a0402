//! Entry-point operations shared by the binaries.

use tracing::info;
use crate::core::{AppConfig, BatchJob, BatchReport, Notifier};
use crate::processing::{BatchProcessor, CommandResizer, Resizer, purge_originals};
use crate::utils::OptimizerResult;

/// Resizes the files of `job` with `resizer`, constraining to `max_dimension`.
pub async fn resize_all<R: Resizer, N: Notifier>(
    job: &BatchJob,
    resizer: R,
    notifier: N,
    max_dimension: u32,
) -> OptimizerResult<BatchReport> {
    BatchProcessor::new(resizer, notifier, max_dimension)
        .resize_all(job)
        .await
}

/// Resizes every image in the playeras directory.
pub async fn optimize_images<N: Notifier>(config: &AppConfig, notifier: N) -> OptimizerResult<BatchReport> {
    let resizer = CommandResizer::from_config(&config.tool);
    info!("Optimizing playeras with {}", resizer.program());
    resize_all(&config.playeras_job(), resizer, notifier, config.tool.max_dimension).await
}

/// Resizes the accessory list, then deletes the playeras originals.
///
/// The purge still runs when the accessory pass cannot start.
pub async fn optimize_cleanup<N: Notifier>(
    config: &AppConfig,
    notifier: N,
) -> (OptimizerResult<BatchReport>, OptimizerResult<BatchReport>) {
    let resizer = CommandResizer::from_config(&config.tool);
    info!("Optimizing accessories with {}", resizer.program());
    let resized = resize_all(&config.accessories_job(), resizer, &notifier, config.tool.max_dimension).await;
    let purged = purge_originals(&config.playeras_purge(), &notifier).await;
    (resized, purged)
}
