//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the CLI argument structure. Every flag is
//! optional: when omitted, the input directory defaults to `./JSON Files`
//! and the output file to `./Output/output.txt`, matching the layout the
//! DiscordChatExporter workflow conventionally produces.
//!
//! The parsed arguments are converted into a
//! [`RunConfig`](crate::pipeline::RunConfig) once at startup and threaded
//! through the pipeline; nothing reads them as globals afterwards.

use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::RunConfig;

/// Default input directory when `--input` is omitted.
pub const DEFAULT_INPUT_DIR: &str = "./JSON Files";

/// Default output file when `--output` is omitted.
pub const DEFAULT_OUTPUT_FILE: &str = "./Output/output.txt";

/// Combine DiscordChatExporter JSON exports into a single plain-text
/// transcript.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstitch")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstitch
    chatstitch -i ~/Downloads/exports
    chatstitch -i ~/Downloads/exports -o ~/Downloads/transcript.txt
    chatstitch -v")]
pub struct Args {
    /// Directory containing the .json export files
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Path to the combined output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Print per-stage progress and statistics
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> RunConfig {
        RunConfig::new(args.input, args.output).with_verbose(args.verbose)
    }
}
