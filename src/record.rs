//! The raw record type produced by extraction.
//!
//! This module provides [`RawRecord`], the `(author identity, raw content)`
//! pair that extraction projects out of every export message, and
//! [`author_identity`], the function that derives the identity string.
//!
//! # Author Identity
//!
//! Discord usernames are only unique together with their discriminator, so
//! the identity string joins the two with a fixed `___` separator:
//!
//! ```
//! use chatstitch::record::author_identity;
//!
//! assert_eq!(author_identity("Alice", "0001"), "Alice___0001");
//! ```
//!
//! The identity is recomputed per message rather than interned; two messages
//! with the same name and discriminator always produce the same string, which
//! is what the verbose statistics group on.

use serde::{Deserialize, Serialize};

/// Separator between author name and discriminator in an identity string.
pub const AUTHOR_SEPARATOR: &str = "___";

/// Derives the author identity string from a name and discriminator.
///
/// # Example
///
/// ```rust
/// use chatstitch::record::author_identity;
///
/// let id = author_identity("Alice", "0001");
/// assert_eq!(id, "Alice___0001");
/// ```
pub fn author_identity(name: &str, discriminator: &str) -> String {
    format!("{name}{AUTHOR_SEPARATOR}{discriminator}")
}

/// One extracted message: author identity plus raw content.
///
/// Raw records preserve source order (file order, then in-document message
/// order) and carry content through unchanged, including empty strings and
/// embedded newlines. Splitting and filtering happen later, in normalization.
///
/// # Example
///
/// ```rust
/// use chatstitch::RawRecord;
///
/// let rec = RawRecord::new("Alice___0001", "hello\nworld");
/// assert_eq!(rec.author(), "Alice___0001");
/// assert_eq!(rec.content(), "hello\nworld");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Derived `name___discriminator` identity of the message author.
    pub author: String,

    /// Raw text content of the message. May be empty or multiline.
    pub content: String,
}

impl RawRecord {
    /// Creates a new raw record.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
        }
    }

    /// Returns the author identity string.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the raw message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if the content is the empty string.
    ///
    /// Note that whitespace-only content is NOT considered empty; the
    /// pipeline only drops exact empty strings.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
