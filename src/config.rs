/// Default number of input lines between progress reports.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Run length at which a surface token is considered corrupted.
pub const MAX_RUN: usize = 4;

/// Parameters for one corpus extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Zero-based index of the tab-separated column to read.
    pub column: usize,
    /// Treat each hyphen-separated fragment as its own candidate.
    pub split_hyphens: bool,
    /// Remove `'` before the alphabetic check.
    pub strip_apostrophes: bool,
    /// Drop tokens containing a run of `max_run` identical characters.
    pub reject_long_runs: bool,
    pub max_run: usize,
    /// Lines between progress callbacks; 0 disables them.
    pub progress_interval: u64,
}

impl ExtractConfig {
    /// Surface forms: column 2, hyphen split, run filter.
    pub fn surface() -> Self {
        Self {
            column: 1,
            split_hyphens: true,
            reject_long_runs: true,
            ..Self::default()
        }
    }

    /// Lemma forms: column 3, whole field, no run filter.
    pub fn lemma() -> Self {
        Self {
            column: 2,
            ..Self::default()
        }
    }

    /// Number of columns a record needs before it is considered.
    pub fn min_columns(&self) -> usize {
        self.column + 1
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            column: 0,
            split_hyphens: false,
            strip_apostrophes: true,
            reject_long_runs: false,
            max_run: MAX_RUN,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}
