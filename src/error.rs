//! Unified error types for chatstitch.
//!
//! This module provides a single [`StitchError`] enum that covers all error
//! cases in the library: configuration problems (missing input directory),
//! the empty-input condition, schema violations in export documents, JSON
//! parse failures, and I/O errors.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! No component catches and suppresses errors: every failure surfaces to the
//! caller and terminates the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstitch operations.
///
/// # Example
///
/// ```rust
/// use chatstitch::error::Result;
/// use chatstitch::RawRecord;
///
/// fn my_function() -> Result<Vec<RawRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, StitchError>;

/// The error type for all chatstitch operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StitchError {
    /// The configured input directory does not exist.
    ///
    /// Raised before any pipeline stage runs.
    #[error("Input directory not found: {}", path.display())]
    InputDirNotFound {
        /// The directory that was checked
        path: PathBuf,
    },

    /// The input directory exists but contains no matching export files.
    ///
    /// An empty batch is an error, not zero work done successfully.
    #[error("No .json export files found in {}", path.display())]
    NoExportsFound {
        /// The directory that was searched
        path: PathBuf,
    },

    /// The export document does not match the expected schema.
    ///
    /// This occurs when a file parses as JSON but is missing the top-level
    /// `messages` array that every DiscordChatExporter export carries.
    #[error("Invalid export format{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    InvalidFormat {
        /// Description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// Failed to parse an export file as JSON.
    ///
    /// Contains the underlying parse error and the file path. Also covers
    /// messages missing the `author.name`, `author.discriminator`, or
    /// `content` fields, which serde reports as missing-field errors.
    #[error("Failed to parse export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - An export file cannot be read
    /// - Permission denied
    /// - Disk is full (when writing the transcript)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl StitchError {
    /// Creates an input-directory-not-found error.
    pub fn input_dir_not_found(path: impl Into<PathBuf>) -> Self {
        StitchError::InputDirNotFound { path: path.into() }
    }

    /// Creates a no-exports-found error.
    pub fn no_exports_found(path: impl Into<PathBuf>) -> Self {
        StitchError::NoExportsFound { path: path.into() }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        StitchError::InvalidFormat {
            message: message.into(),
            path,
        }
    }

    /// Creates a parse error for an export file.
    pub fn parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        StitchError::Parse { source, path }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, StitchError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, StitchError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, StitchError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a configuration error (missing input dir).
    pub fn is_input_dir_not_found(&self) -> bool {
        matches!(self, StitchError::InputDirNotFound { .. })
    }

    /// Returns `true` if this is the empty-input condition.
    pub fn is_no_exports_found(&self) -> bool {
        matches!(self, StitchError::NoExportsFound { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
