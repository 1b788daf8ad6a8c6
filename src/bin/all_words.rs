//! Every surface form in `source.txt`, hyphen-split and cleaned, into
//! `all.txt`.

use clap::Parser;
use lexlist::cli::{init_logging, run_extractor, ExtractArgs};
use lexlist::ExtractConfig;

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    extract: ExtractArgs,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run_extractor(args.extract, "all.txt", &ExtractConfig::surface())?;
    Ok(())
}
