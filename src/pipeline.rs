//! Pipeline driver.
//!
//! Runs the four stages in order — discover, extract, normalize, write —
//! with each stage consuming the full output of the previous one. Control
//! flows strictly forward; no stage calls back into an earlier one, and the
//! only side effect is the writer's output file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::discover::{EXPORT_EXTENSION, discover_exports};
use crate::error::{Result, StitchError};
use crate::extract::extract_records;
use crate::normalize::normalize_records;
use crate::report::Reporter;
use crate::writer::write_transcript;

/// Resolved configuration for one run.
///
/// Defaults are resolved once at startup (by the CLI layer) and threaded
/// through as parameters; no component reads ambient global state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding the `.json` export files.
    pub input_dir: PathBuf,

    /// Destination path for the combined transcript.
    pub output_path: PathBuf,

    /// Enable per-stage diagnostics on stdout.
    pub verbose: bool,
}

impl RunConfig {
    /// Creates a run configuration.
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            verbose: false,
        }
    }

    /// Enables or disables verbose diagnostics.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Counts produced by a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Export files discovered and parsed.
    pub files: usize,

    /// Messages extracted across all files.
    pub messages: usize,

    /// Line records written to the transcript.
    pub lines: usize,
}

/// Runs the full pipeline against `config`.
///
/// # Errors
///
/// - [`StitchError::InputDirNotFound`] if the input directory is missing
/// - [`StitchError::NoExportsFound`] if it contains no `.json` files
/// - [`StitchError::InvalidFormat`] / [`StitchError::Parse`] on the first
///   malformed document (the run aborts, no partial output is produced)
/// - [`StitchError::Io`] on any read or write failure
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    if !config.input_dir.is_dir() {
        return Err(StitchError::input_dir_not_found(&config.input_dir));
    }

    let reporter = Reporter::new(config.verbose);
    reporter.stage("Running the program...");

    let stage_start = Instant::now();
    let paths = discover_exports(&config.input_dir, EXPORT_EXTENSION)?;
    reporter.discovered(&config.input_dir, &paths, stage_start.elapsed());
    if paths.is_empty() {
        return Err(StitchError::no_exports_found(&config.input_dir));
    }

    reporter.stage("Getting the data from the JSON files...");
    let stage_start = Instant::now();
    let records = extract_records(&paths)?;
    reporter.extracted(&records, stage_start.elapsed());

    reporter.stage("Converting the data to the required format...");
    let stage_start = Instant::now();
    let lines = normalize_records(&records);
    reporter.normalized(&records, &lines, stage_start.elapsed());

    reporter.stage("Writing the data to a text file...");
    let stage_start = Instant::now();
    write_transcript(&lines, &config.output_path)?;
    reporter.written(&lines, &config.output_path, stage_start.elapsed());

    reporter.finished();

    Ok(RunSummary {
        files: paths.len(),
        messages: records.len(),
        lines: lines.len(),
    })
}

/// Convenience wrapper: runs the pipeline with the given paths and
/// verbosity off.
pub fn run_quiet(input_dir: &Path, output_path: &Path) -> Result<RunSummary> {
    run(&RunConfig::new(input_dir, output_path))
}
