//! Notice delivery for per-file outcomes.

use std::sync::Mutex;
use crate::core::FileOutcome;

/// Receives one notice per processed entry, in processing order.
pub trait Notifier {
    fn notify(&self, outcome: &FileOutcome);
}

/// Prints each notice as a line on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, outcome: &FileOutcome) {
        println!("{outcome}");
    }
}

/// Keeps the rendered notice lines in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    lines: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, outcome: &FileOutcome) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(outcome.to_string());
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, outcome: &FileOutcome) {
        (**self).notify(outcome);
    }
}
