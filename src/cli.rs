//! Shared command-line plumbing for the extractor binaries.

use std::path::PathBuf;

use clap::Args;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::io_utils::CliError;
use crate::{extract_file, ExtractConfig, ExtractSummary, Progress};

pub const DEFAULT_INPUT: &str = "source.txt";

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Tab-separated corpus to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Word list to write; defaults to the tool's own file name
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
    /// Print the final summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Install the `RUST_LOG` driven logger. Safe to call once per process.
pub fn init_logging() {
    pretty_env_logger::init();
}

fn make_progress_bar(total_bytes: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {percent}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb
}

/// Run one extraction with progress on stderr and the summary at the end.
pub fn run_extractor(
    args: ExtractArgs,
    default_output: &str,
    config: &ExtractConfig,
) -> Result<ExtractSummary, CliError> {
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_output));
    let total = std::fs::metadata(&args.input).map(|m| m.len()).unwrap_or(0);
    let pb = make_progress_bar(total, args.quiet);
    // indicatif draws nothing off a terminal; fall back to plain lines
    let echo = !args.quiet && pb.is_hidden();

    let mut on_progress = |p: &Progress| {
        let msg = format!(
            "Processed {} lines ({:.1}%); tokens: {}",
            p.lines,
            p.percent(),
            p.tokens
        );
        if echo {
            eprintln!("{msg}");
        }
        pb.set_position(p.bytes_read);
        pb.set_message(msg);
    };
    let result = extract_file(&args.input, &output, config, Some(&mut on_progress));
    pb.finish_and_clear();
    let summary = result?;

    eprintln!("{}", summary.report());
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary)
                .map_err(|e| crate::io_utils::simple_cli_error(&e.to_string()))?
        );
    }
    Ok(summary)
}
