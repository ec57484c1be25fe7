//! Export file discovery.
//!
//! Enumerates export files directly inside the input directory. The walk is
//! non-recursive and the result order is whatever the filesystem yields; the
//! pipeline makes no ordering promise across files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File extension for DiscordChatExporter JSON exports (without dot).
pub const EXPORT_EXTENSION: &str = "json";

/// Returns the paths of all files with the given extension directly inside
/// `dir`.
///
/// Matching is ASCII case-insensitive, so `chat.JSON` is found alongside
/// `chat.json`. Subdirectories are not entered. An empty result is not an
/// error at this layer; the pipeline driver decides that an empty batch is
/// fatal.
///
/// # Errors
///
/// Returns [`StitchError::Io`](crate::StitchError::Io) if the directory
/// cannot be read. Callers are expected to have checked that `dir` exists.
pub fn discover_exports(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension() {
            if ext.eq_ignore_ascii_case(extension) {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_discover_finds_json_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.json")).unwrap();
        File::create(dir.path().join("b.json")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let found = discover_exports(dir.path(), EXPORT_EXTENSION).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| {
            p.extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        }));
    }

    #[test]
    fn test_discover_case_insensitive_extension() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("upper.JSON")).unwrap();

        let found = discover_exports(dir.path(), EXPORT_EXTENSION).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_discover_empty_dir_is_ok() {
        let dir = tempdir().unwrap();
        let found = discover_exports(dir.path(), EXPORT_EXTENSION).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_is_non_recursive() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        File::create(sub.join("inner.json")).unwrap();
        File::create(dir.path().join("outer.json")).unwrap();

        let found = discover_exports(dir.path(), EXPORT_EXTENSION).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("outer.json"));
    }

    #[test]
    fn test_discover_ignores_extensionless_files() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("README")).unwrap();

        let found = discover_exports(dir.path(), EXPORT_EXTENSION).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_missing_dir_is_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = discover_exports(&missing, EXPORT_EXTENSION).unwrap_err();
        assert!(err.is_io());
    }
}
