// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;

// Public exports for the binaries and integration tests
pub use crate::core::{
    AppConfig, BatchJob, BatchReport, ConsoleNotifier, FileOutcome, ImageTask, Notifier, PurgeJob,
};
pub use crate::processing::{BatchProcessor, CommandResizer, Resizer};
pub use crate::utils::{OptimizerError, OptimizerResult};
pub use crate::commands::*;
