//! Transcript sink writer.
//!
//! Serializes the ordered line records to the destination file. Parent
//! directories are created as needed and an existing file at the destination
//! is truncated, never appended to.
//!
//! Each line record already ends in one `'\n'`; the writer appends a second
//! one after every record, so the on-disk file carries a blank line between
//! entries. This doubled-newline layout is a compatibility contract with the
//! reference output format and is reproduced exactly.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Writes line records to the transcript file at `path`.
///
/// Creates missing parent directories, truncates any existing file, and
/// writes each record followed by an extra newline separator.
///
/// # Errors
///
/// Any failure to create directories, open the file, or write is fatal and
/// propagates unchanged.
pub fn write_transcript(lines: &[String], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
