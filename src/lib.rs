//! # Chatstitch
//!
//! A Rust library and CLI for combining DiscordChatExporter JSON exports
//! into a single plain-text transcript.
//!
//! ## Overview
//!
//! Chatstitch reads every `.json` export in a directory, pulls out each
//! message's author (`name___discriminator`) and text content, and writes
//! one combined text file where every surviving content line has the form:
//!
//! ```text
//! AUTHOR_NAME___DISCRIMINATOR: line of text
//! ```
//!
//! The work happens in four strictly sequential stages, each consuming the
//! full output of the previous one:
//!
//! 1. [`discover`] — enumerate `.json` files in the input directory
//! 2. [`extract`] — parse each export and project `(author, content)` pairs
//! 3. [`normalize`] — split content on newlines and format the output lines
//! 4. [`writer`] — write the transcript, one blank line between entries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstitch::pipeline::{RunConfig, run};
//!
//! fn main() -> chatstitch::Result<()> {
//!     let config = RunConfig::new("./JSON Files", "./Output/output.txt")
//!         .with_verbose(true);
//!     let summary = run(&config)?;
//!     println!("Wrote {} lines from {} files", summary.lines, summary.files);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`pipeline`] — the driver: [`RunConfig`](pipeline::RunConfig),
//!   [`RunSummary`](pipeline::RunSummary), [`run`](pipeline::run)
//! - [`discover`] — export file discovery
//! - [`extract`] — export parsing and record extraction
//! - [`normalize`] — line splitting and formatting
//! - [`writer`] — transcript output
//! - [`record`] — [`RawRecord`] and author identity derivation
//! - [`report`] — optional verbose diagnostics
//! - [`cli`] — clap argument types
//! - [`error`] — unified error types ([`StitchError`], [`Result`])

pub mod cli;
pub mod discover;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod writer;

// Re-export the main types at the crate root for convenience
pub use error::{Result, StitchError};
pub use record::RawRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstitch::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::RawRecord;

    // Error types
    pub use crate::error::{Result, StitchError};

    // Pipeline driver
    pub use crate::pipeline::{RunConfig, RunSummary, run};

    // Stage functions
    pub use crate::discover::discover_exports;
    pub use crate::extract::{extract_records, extract_str};
    pub use crate::normalize::normalize_records;
    pub use crate::writer::write_transcript;

    // Identity helpers
    pub use crate::record::{AUTHOR_SEPARATOR, author_identity};
}
