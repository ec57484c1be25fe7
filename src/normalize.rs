//! Line normalization.
//!
//! Turns raw records into line records: content is split on `'\n'`, exactly
//! empty substrings are dropped, and every surviving substring becomes
//! `"<identity>: <line>\n"`.
//!
//! The boundary rule is deliberate and pinned by tests: only the exact empty
//! string is discarded. A substring consisting solely of whitespace survives
//! as its own line record. Output order preserves input order, and lines
//! derived from one record keep their order of appearance in the content.

use crate::record::RawRecord;

/// Normalizes a batch of raw records into line records.
///
/// Each returned string has the form `"<identity>: <line>\n"`. A record with
/// empty content, or content made entirely of newlines, contributes zero
/// line records.
///
/// # Example
///
/// ```rust
/// use chatstitch::RawRecord;
/// use chatstitch::normalize::normalize_records;
///
/// let records = vec![RawRecord::new("Alice___0001", "line1\n\nline2")];
/// let lines = normalize_records(&records);
/// assert_eq!(lines, vec![
///     "Alice___0001: line1\n".to_string(),
///     "Alice___0001: line2\n".to_string(),
/// ]);
/// ```
pub fn normalize_records(records: &[RawRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    for record in records {
        normalize_record(record, &mut lines);
    }
    lines
}

/// Normalizes one raw record, appending its line records to `lines`.
fn normalize_record(record: &RawRecord, lines: &mut Vec<String>) {
    for part in record.content().split('\n') {
        // Exact empty strings only; whitespace-only lines are kept.
        if !part.is_empty() {
            lines.push(format!("{}: {}\n", record.author(), part));
        }
    }
}
