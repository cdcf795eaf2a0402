use crate::core::{BatchJob, BatchReport, FileOutcome, ImageTask, Notifier};
use crate::processing::Resizer;
use crate::utils::{
    ImageFormat, OptimizerResult, create_dir_all, get_file_size, is_regular_file, list_image_names,
};
use tracing::{debug, info, warn};

/// Runs resize jobs one file at a time.
///
/// Failures stay with the file that caused them: every task yields exactly
/// one [`FileOutcome`], one notice, and the batch moves on.
pub struct BatchProcessor<R, N> {
    resizer: R,
    notifier: N,
    max_dimension: u32,
}

impl<R: Resizer, N: Notifier> BatchProcessor<R, N> {
    pub fn new(resizer: R, notifier: N, max_dimension: u32) -> Self {
        debug!("Creating BatchProcessor with max dimension {}", max_dimension);
        Self {
            resizer,
            notifier,
            max_dimension,
        }
    }

    /// Resizes every file of `job` into its output directory.
    ///
    /// The output directory is created first. Only setup problems are
    /// returned as errors: the output directory cannot be created, or the
    /// source directory cannot be listed when the job has no file list.
    pub async fn resize_all(&self, job: &BatchJob) -> OptimizerResult<BatchReport> {
        create_dir_all(&job.output_dir).await?;

        let names = match &job.file_list {
            Some(names) => names.clone(),
            None => list_image_names(&job.source_dir).await?,
        };
        let tasks = ImageTask::for_names(&job.source_dir, &job.output_dir, names);

        info!(
            "Processing batch of {} files from {} into {}",
            tasks.len(),
            job.source_dir.display(),
            job.output_dir.display()
        );

        let mut report = BatchReport::default();
        for task in &tasks {
            let outcome = self.process_task(task).await;
            self.notifier.notify(&outcome);
            report.push(outcome);
        }

        if report.failed() > 0 || report.missing() > 0 {
            warn!(
                "Batch processing completed with {} failed and {} missing out of {}",
                report.failed(),
                report.missing(),
                report.len()
            );
        } else {
            info!(
                "Batch processing completed successfully: {} files optimized, {} KB saved",
                report.optimized(),
                report.total_saved_bytes() / 1024
            );
        }

        Ok(report)
    }

    async fn process_task(&self, task: &ImageTask) -> FileOutcome {
        if !is_regular_file(&task.input_path).await {
            debug!("Skipping {}: not a regular file", task.input_path.display());
            return FileOutcome::NotFound {
                path: task.input_path.clone(),
            };
        }

        // Original size before the tool overwrites anything
        let original_size = get_file_size(&task.input_path).await.unwrap_or(0);
        debug!(
            "Resizing '{}' ({:?}, {} bytes)",
            task.name,
            ImageFormat::from_file_name(&task.name),
            original_size
        );

        match self
            .resizer
            .resize(&task.input_path, &task.output_path, self.max_dimension)
            .await
        {
            Ok(()) => {
                let optimized_size = get_file_size(&task.output_path).await.unwrap_or(0);
                let outcome = FileOutcome::Optimized {
                    name: task.name.clone(),
                    original_size,
                    optimized_size,
                };
                debug!(
                    "'{}' → {} bytes saved ({:.1}%)",
                    task.name,
                    outcome.saved_bytes().unwrap_or(0),
                    outcome.compression_ratio().unwrap_or(0.0)
                );
                outcome
            }
            Err(e) => {
                warn!("Image optimization failed for {}: {}", task.input_path.display(), e);
                FileOutcome::Failed {
                    name: task.name.clone(),
                    detail: e.to_string(),
                }
            }
        }
    }
}
