//! Message extraction from DiscordChatExporter JSON exports.
//!
//! Handles the documented export shape produced by DiscordChatExporter.
//! Only three fields are consumed per message: `author.name`,
//! `author.discriminator`, and `content`. Everything else the tool writes
//! (guild, channel, date range, attachments, embeds, stickers, reactions,
//! mentions, message count) is present in real exports but never read.
//!
//! A document without a top-level `messages` array is a schema violation and
//! aborts the whole run; there is no per-file recovery.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StitchError};
use crate::record::{RawRecord, author_identity};

/// Raw export document structure for deserialization.
///
/// `messages` is optional here so its absence can be reported as a schema
/// error distinct from a JSON syntax error.
#[derive(Debug, Deserialize)]
struct ExportDocument {
    messages: Option<Vec<ExportMessage>>,
}

/// Raw message structure for deserialization.
#[derive(Debug, Deserialize)]
struct ExportMessage {
    author: ExportAuthor,
    content: String,
}

/// Raw author structure for deserialization.
#[derive(Debug, Deserialize)]
struct ExportAuthor {
    name: String,
    discriminator: String,
}

/// Extracts raw records from a list of export files.
///
/// Records preserve file-list order, then in-document message order. Empty
/// `content` values pass through unchanged; filtering happens in
/// normalization.
///
/// # Errors
///
/// Fails on the first unreadable file, JSON parse error, or document missing
/// the `messages` array. No partial result is returned.
pub fn extract_records(paths: &[impl AsRef<Path>]) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for path in paths {
        extract_file(path.as_ref(), &mut records)?;
    }
    Ok(records)
}

/// Extracts raw records from a single export file, appending to `records`.
pub fn extract_file(path: &Path, records: &mut Vec<RawRecord>) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let document: ExportDocument = serde_json::from_str(&content)
        .map_err(|e| StitchError::parse(e, Some(path.to_path_buf())))?;

    let Some(messages) = document.messages else {
        return Err(StitchError::invalid_format(
            "missing `messages` array",
            Some(path.to_path_buf()),
        ));
    };

    records.reserve(messages.len());
    for msg in messages {
        let author = author_identity(&msg.author.name, &msg.author.discriminator);
        records.push(RawRecord::new(author, msg.content));
    }

    Ok(())
}

/// Extracts raw records from export content held in a string.
///
/// Useful for tests and callers that already have the document in memory.
pub fn extract_str(content: &str) -> Result<Vec<RawRecord>> {
    let document: ExportDocument =
        serde_json::from_str(content).map_err(|e| StitchError::parse(e, None))?;

    let Some(messages) = document.messages else {
        return Err(StitchError::invalid_format(
            "missing `messages` array",
            None,
        ));
    };

    Ok(messages
        .into_iter()
        .map(|msg| {
            let author = author_identity(&msg.author.name, &msg.author.discriminator);
            RawRecord::new(author, msg.content)
        })
        .collect())
}
