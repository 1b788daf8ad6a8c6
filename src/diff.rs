//! Two-way set difference between word lists.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::io_utils::{read_word_lines, write_lines};
use crate::Result;

pub const MISSING_FILE: &str = "miss.txt";
pub const EXTRA_FILE: &str = "extra.txt";

/// Both differences, each in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDiff {
    pub left_words: usize,
    pub right_words: usize,
    /// In the left list only.
    pub missing: BTreeSet<String>,
    /// In the right list only.
    pub extra: BTreeSet<String>,
}

#[derive(Debug, Serialize)]
pub struct DiffCounts {
    pub left_words: usize,
    pub right_words: usize,
    pub missing: usize,
    pub extra: usize,
}

impl ListDiff {
    pub fn compute<L, R>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = String>,
        R: IntoIterator<Item = String>,
    {
        let left: BTreeSet<String> = left.into_iter().collect();
        let right: BTreeSet<String> = right.into_iter().collect();
        Self {
            left_words: left.len(),
            right_words: right.len(),
            missing: left.difference(&right).cloned().collect(),
            extra: right.difference(&left).cloned().collect(),
        }
    }

    pub fn counts(&self) -> DiffCounts {
        DiffCounts {
            left_words: self.left_words,
            right_words: self.right_words,
            missing: self.missing.len(),
            extra: self.extra.len(),
        }
    }

    /// The four-line console summary.
    pub fn summary(&self, left: &Path, right: &Path) -> String {
        format!(
            "{}: {} words\n{}: {} words\nMissing in {}: {} (written to {MISSING_FILE})\nExtra in {}: {} (written to {EXTRA_FILE})",
            left.display(),
            self.left_words,
            right.display(),
            self.right_words,
            right.display(),
            self.missing.len(),
            right.display(),
            self.extra.len(),
        )
    }
}

/// Read both lists; nothing is written if either is unreadable.
pub fn diff_files(left: &Path, right: &Path) -> Result<ListDiff> {
    let left_words = read_word_lines(left)?;
    let right_words = read_word_lines(right)?;
    Ok(ListDiff::compute(left_words, right_words))
}

/// Write `miss.txt` and `extra.txt` into `dir`.
pub fn write_diff(diff: &ListDiff, dir: &Path) -> Result<()> {
    write_lines(&dir.join(MISSING_FILE), &diff.missing)?;
    write_lines(&dir.join(EXTRA_FILE), &diff.extra)?;
    log::info!(
        "wrote {} missing and {} extra words",
        diff.missing.len(),
        diff.extra.len()
    );
    Ok(())
}
