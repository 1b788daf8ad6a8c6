//! Progress snapshots and end-of-run summaries for corpus extraction.

use serde::Serialize;

/// Point-in-time view of an extraction run, handed to progress callbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub lines: u64,
    pub bytes_read: u64,
    pub total_bytes: u64,
    pub tokens: u64,
}

impl Progress {
    /// Share of the input consumed so far; 0 for an empty input.
    pub fn percent(&self) -> f64 {
        if self.total_bytes == 0 {
            0.0
        } else {
            self.bytes_read as f64 * 100.0 / self.total_bytes as f64
        }
    }
}

/// Totals returned once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractSummary {
    pub lines: u64,
    pub skipped: u64,
    pub tokens: u64,
    pub bytes_read: u64,
}

impl ExtractSummary {
    pub fn report(&self) -> String {
        format!(
            "Completed {} lines; total tokens: {}",
            self.lines, self.tokens
        )
    }
}

/// Counts lines and fires a callback every `interval` lines.
pub struct LineTicker<'a> {
    interval: u64,
    callback: Option<&'a mut dyn FnMut(&Progress)>,
}

impl<'a> LineTicker<'a> {
    pub fn new(interval: u64, callback: Option<&'a mut dyn FnMut(&Progress)>) -> Self {
        Self { interval, callback }
    }

    /// Call after `progress.lines` has been advanced for the current line.
    pub fn tick(&mut self, progress: &Progress) {
        if self.interval == 0 || progress.lines % self.interval != 0 {
            return;
        }
        if let Some(cb) = self.callback.as_mut() {
            cb(progress);
        }
    }
}
