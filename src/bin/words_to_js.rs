use clap::Parser;
use lexlist::convert::DEFAULT_NAME;
use lexlist::io_utils::lexlist_cli_error;
use lexlist::{convert_file, OutputFormat};
use std::path::PathBuf;

/// Convert a newline-separated word list into a JS array constant.
#[derive(Parser)]
struct Args {
    /// Path to the input file containing one word per line
    infile: PathBuf,
    /// Path to the output file
    outfile: PathBuf,
    /// Output syntax
    #[arg(long, value_enum, default_value_t = OutputFormat::Js)]
    format: OutputFormat,
    /// Name of the declared constant
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,
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
    let count = convert_file(&args.infile, &args.outfile, args.format, &args.name)
        .map_err(lexlist_cli_error)?;
    println!("Wrote {count} words to '{}'.", args.outfile.display());
    Ok(())
}
