//! Per-file outcomes and batch reports.

use std::fmt;
use std::path::PathBuf;

/// What happened to one entry of a batch.
///
/// The `Display` impl renders the console notice for the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The resize tool succeeded
    Optimized {
        name: String,
        original_size: u64,
        optimized_size: u64,
    },
    /// The input path was not a regular file
    NotFound { path: PathBuf },
    /// The resize tool failed or could not be started
    Failed { name: String, detail: String },
    /// An original was removed by the purge pass
    Deleted { name: String },
}

impl FileOutcome {
    /// Bytes saved by an optimization (negative if the file grew).
    pub fn saved_bytes(&self) -> Option<i64> {
        match self {
            Self::Optimized { original_size, optimized_size, .. } => {
                Some(*original_size as i64 - *optimized_size as i64)
            }
            _ => None,
        }
    }

    /// Compression ratio as a percentage of the original size.
    pub fn compression_ratio(&self) -> Option<f64> {
        match self {
            Self::Optimized { original_size, .. } if *original_size > 0 => self
                .saved_bytes()
                .map(|saved| saved as f64 / *original_size as f64 * 100.0),
            Self::Optimized { .. } => Some(0.0),
            _ => None,
        }
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimized { name, .. } => write!(f, "Optimized: {name}"),
            Self::NotFound { path } => write!(f, "File not found: {}", path.display()),
            Self::Failed { name, detail } => write!(f, "Error optimizing {name}: {detail}"),
            Self::Deleted { name } => write!(f, "Deleted original: {name}"),
        }
    }
}

/// Ordered outcomes of one pass over a job.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn optimized(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Optimized { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NotFound { .. }))
    }

    pub fn deleted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Deleted { .. }))
    }

    /// Total bytes saved across all optimized files.
    pub fn total_saved_bytes(&self) -> i64 {
        self.outcomes.iter().filter_map(FileOutcome::saved_bytes).sum()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
