//! Verbose run reporting.
//!
//! Diagnostics are cross-cutting and orthogonal to the data transform, so
//! they live here as an observer the pipeline driver invokes after each
//! stage. The reporter only reads the already-computed intermediate lists;
//! it never mutates them. With verbosity off every call is a no-op.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::record::RawRecord;

/// Stage observer that prints progress and statistics to stdout.
///
/// # Example
///
/// ```rust
/// use chatstitch::report::Reporter;
///
/// let reporter = Reporter::new(true);
/// reporter.stage("Parsing exports...");
/// ```
#[derive(Debug)]
pub struct Reporter {
    verbose: bool,
    started: Instant,
}

impl Reporter {
    /// Creates a reporter; with `verbose` false all output is suppressed.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            started: Instant::now(),
        }
    }

    /// Returns whether verbose output is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a stage banner.
    pub fn stage(&self, message: &str) {
        if self.verbose {
            println!("{}", "-".repeat(40));
            println!("{message}");
        }
    }

    /// Reports the outcome of file discovery.
    pub fn discovered(&self, dir: &Path, paths: &[PathBuf], elapsed: Duration) {
        if !self.verbose {
            return;
        }
        println!("Loading JSON files from {}", dir.display());
        println!("Total JSON files found: {}", paths.len());
        for path in paths {
            println!("  {}", path.display());
        }
        println!("Discovery took {:.2}s", elapsed.as_secs_f64());
    }

    /// Reports the outcome of extraction, including author statistics.
    ///
    /// Author identities are the deduplication key here: messages with the
    /// same `name___discriminator` string group together.
    pub fn extracted(&self, records: &[RawRecord], elapsed: Duration) {
        if !self.verbose {
            return;
        }
        println!("Total messages extracted: {}", records.len());
        println!("Extraction took {:.2}s", elapsed.as_secs_f64());

        let per_author = messages_per_author(records);
        println!("Number of authors: {}", per_author.len());
        for (author, count) in &per_author {
            println!("Messages from {author}: {count}");
        }
        if !per_author.is_empty() {
            let avg = records.len() as f64 / per_author.len() as f64;
            println!("Average messages per author: {avg:.2}");
        }
    }

    /// Reports the outcome of normalization.
    pub fn normalized(&self, records: &[RawRecord], lines: &[String], elapsed: Duration) {
        if !self.verbose {
            return;
        }
        println!("Total lines produced: {}", lines.len());
        println!("Normalization took {:.2}s", elapsed.as_secs_f64());
        if records.len() > lines.len() {
            println!("Records without output lines: {}", records.len() - lines.len());
        }
    }

    /// Reports the outcome of the write stage.
    pub fn written(&self, lines: &[String], path: &Path, elapsed: Duration) {
        if !self.verbose {
            return;
        }
        println!("Total lines written: {}", lines.len());
        println!("Output file path: {}", path.display());
        println!("Write took {:.2}s", elapsed.as_secs_f64());
    }

    /// Prints the closing banner with total elapsed time.
    pub fn finished(&self) {
        if self.verbose {
            println!("{}", "-".repeat(40));
            println!(
                "Total time taken: {:.2}s",
                self.started.elapsed().as_secs_f64()
            );
            println!("Program finished successfully!");
        }
    }
}

/// Counts messages per author identity, sorted by identity.
pub fn messages_per_author(records: &[RawRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.author().to_string()).or_insert(0) += 1;
    }
    counts
}
