//! Word list preparation from tab-separated lexicon corpora.
//!
//! Each tool under `src/bin` is a thin wrapper around one module here:
//! [`extract`] for corpus token extraction, [`truncate`] for copying the
//! head of a list, [`diff`] for comparing two lists and [`convert`] for
//! emitting a list as an array literal.

pub mod cli;
pub mod config;
pub mod convert;
pub mod diff;
pub mod error;
pub mod extract;
pub mod io_utils;
pub mod progress;
pub mod token;
pub mod truncate;

pub use config::ExtractConfig;
pub use convert::{convert_file, render, OutputFormat};
pub use diff::{diff_files, write_diff, ListDiff};
pub use error::{LexlistError, Result};
pub use extract::{extract_file, extract_tokens};
pub use progress::{ExtractSummary, Progress};
pub use truncate::{copy_lines, head_file, parse_count};
