//! Core application types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`AppConfig`]: Photo layout and resize tool settings
//! - [`ImageTask`]: One source file and its destination
//! - [`FileOutcome`] / [`BatchReport`]: What happened to each entry
//! - [`Notifier`]: Where per-file notices go

mod config;
mod progress;
mod task;
mod types;

pub use config::{AppConfig, BatchJob, PurgeJob, ResizeToolConfig, CONFIG_ENV_VAR};
pub use progress::{ConsoleNotifier, Notifier, RecordingNotifier};
pub use task::ImageTask;
pub use types::{BatchReport, FileOutcome};
