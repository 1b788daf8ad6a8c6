use clap::Parser;
use lexlist::io_utils::lexlist_cli_error;
use lexlist::{head_file, parse_count};
use std::path::PathBuf;

/// Export the first N lines from an input file to an output file.
#[derive(Parser)]
struct Args {
    /// Path to the input file
    infile: PathBuf,
    /// Path to the output file
    outfile: PathBuf,
    /// Number of lines to export
    #[arg(allow_negative_numbers = true)]
    num: i64,
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
    let limit = parse_count(args.num).map_err(lexlist_cli_error)?;
    let copied = head_file(&args.infile, &args.outfile, limit).map_err(lexlist_cli_error)?;
    println!("Exported {copied} lines to '{}'.", args.outfile.display());
    Ok(())
}
