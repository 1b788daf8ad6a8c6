use clap::Parser;
use lexlist::io_utils::lexlist_cli_error;
use lexlist::{diff_files, write_diff};
use std::path::{Path, PathBuf};

/// Compare two word-list files and output missing and extra words.
#[derive(Parser)]
struct Args {
    /// First input file
    file1: PathBuf,
    /// Second input file
    file2: PathBuf,
    /// Also print the counts as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    lexlist::cli::init_logging();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let diff = diff_files(&args.file1, &args.file2).map_err(lexlist_cli_error)?;
    write_diff(&diff, Path::new(".")).map_err(lexlist_cli_error)?;

    println!("{}", diff.summary(&args.file1, &args.file2));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&diff.counts())?);
    }
    Ok(())
}
