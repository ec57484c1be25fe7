//! # chatstitch CLI
//!
//! Command-line entry point for the chatstitch library.

use std::process;

use clap::Parser;

use chatstitch::StitchError;
use chatstitch::cli::Args;
use chatstitch::pipeline::{RunConfig, run};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn try_main() -> Result<(), StitchError> {
    let args = Args::parse();
    let config: RunConfig = args.into();

    let summary = run(&config)?;

    println!(
        "Combined {} messages from {} files into {} ({} lines)",
        summary.messages,
        summary.files,
        config.output_path.display(),
        summary.lines
    );

    Ok(())
}
