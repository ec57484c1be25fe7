//! Integration tests for the full pipeline.
//!
//! These run discover → extract → normalize → write against real files in a
//! temporary directory and check the on-disk transcript byte for byte.

use std::fs;
use std::path::{Path, PathBuf};

use chatstitch::pipeline::{RunConfig, run};
use tempfile::{TempDir, tempdir};

// ============================================================================
// Fixtures
// ============================================================================

/// Creates an input directory populated with the given (name, body) exports.
fn setup_inputs(exports: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("JSON Files");
    fs::create_dir(&input).unwrap();
    for (name, body) in exports {
        fs::write(input.join(name), body).unwrap();
    }
    (dir, input)
}

fn run_pipeline(input: &Path, output: &Path) -> chatstitch::Result<chatstitch::pipeline::RunSummary> {
    run(&RunConfig::new(input, output))
}

// ============================================================================
// Spec scenarios
// ============================================================================

#[test]
fn single_message_produces_doubled_newline_entry() {
    // Scenario: one file, one message with content "hello"
    let (dir, input) = setup_inputs(&[(
        "chat.json",
        r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "hello"}]}"#,
    )]);
    let output = dir.path().join("out.txt");

    run_pipeline(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "Alice___0001: hello\n\n");
}

#[test]
fn multiline_content_drops_embedded_empty_line() {
    // content "line1\n\nline2" yields exactly two entries
    let (dir, input) = setup_inputs(&[(
        "chat.json",
        r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "line1\n\nline2"}]}"#,
    )]);
    let output = dir.path().join("out.txt");

    run_pipeline(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "Alice___0001: line1\n\nAlice___0001: line2\n\n");
}

#[test]
fn empty_content_contributes_no_lines() {
    let (dir, input) = setup_inputs(&[(
        "chat.json",
        r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": ""}]}"#,
    )]);
    let output = dir.path().join("out.txt");

    let summary = run_pipeline(&input, &output).unwrap();
    assert_eq!(summary.messages, 1);
    assert_eq!(summary.lines, 0);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.is_empty());
}

#[test]
fn empty_input_dir_reports_error_and_writes_nothing() {
    let (dir, input) = setup_inputs(&[]);
    let output = dir.path().join("out.txt");

    let err = run_pipeline(&input, &output).unwrap_err();
    assert!(err.is_no_exports_found());
    assert!(!output.exists());
}

#[test]
fn missing_messages_field_aborts_before_output() {
    let (dir, input) = setup_inputs(&[(
        "bad.json",
        r#"{"guild": {"id": "1", "name": "Server"}, "channel": {"id": "2"}}"#,
    )]);
    let output = dir.path().join("out.txt");

    let err = run_pipeline(&input, &output).unwrap_err();
    assert!(err.is_invalid_format());
    assert!(!output.exists());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn empty_messages_array_contributes_zero_records() {
    let (dir, input) = setup_inputs(&[("empty.json", r#"{"messages": []}"#)]);
    let output = dir.path().join("out.txt");

    let summary = run_pipeline(&input, &output).unwrap();
    assert_eq!(summary.messages, 0);
    assert_eq!(summary.lines, 0);
}

#[test]
fn pipeline_is_idempotent() {
    let (dir, input) = setup_inputs(&[(
        "chat.json",
        r#"{"messages": [
            {"author": {"name": "Alice", "discriminator": "0001"}, "content": "one\ntwo"},
            {"author": {"name": "Bob", "discriminator": "1234"}, "content": "three"},
            {"author": {"name": "Alice", "discriminator": "0001"}, "content": ""}
        ]}"#,
    )]);
    let output = dir.path().join("out.txt");

    run_pipeline(&input, &output).unwrap();
    let first = fs::read(&output).unwrap();
    run_pipeline(&input, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn output_overwrites_rather_than_appends() {
    let (dir, input) = setup_inputs(&[(
        "chat.json",
        r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "hi"}]}"#,
    )]);
    let output = dir.path().join("out.txt");
    fs::write(&output, "stale content from a previous run\n").unwrap();

    run_pipeline(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "Alice___0001: hi\n\n");
}

#[test]
fn same_author_in_different_files_maps_to_same_identity() {
    let (dir, input) = setup_inputs(&[
        (
            "a.json",
            r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "from a"}]}"#,
        ),
        (
            "b.json",
            r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "from b"}]}"#,
        ),
    ]);
    let output = dir.path().join("out.txt");

    run_pipeline(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let identities: Vec<_> = content
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.split(": ").next().unwrap())
        .collect();
    assert_eq!(identities, vec!["Alice___0001", "Alice___0001"]);
}

#[test]
fn whitespace_only_line_survives_normalization() {
    let (dir, input) = setup_inputs(&[(
        "chat.json",
        r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "  "}]}"#,
    )]);
    let output = dir.path().join("out.txt");

    let summary = run_pipeline(&input, &output).unwrap();
    assert_eq!(summary.lines, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "Alice___0001:   \n\n");
}

#[test]
fn parent_directories_are_created_for_output() {
    let (dir, input) = setup_inputs(&[(
        "chat.json",
        r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "hi"}]}"#,
    )]);
    let output = dir.path().join("Output").join("nested").join("out.txt");

    run_pipeline(&input, &output).unwrap();
    assert!(output.exists());
}

#[test]
fn non_json_files_are_ignored() {
    let (dir, input) = setup_inputs(&[
        (
            "chat.json",
            r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "hi"}]}"#,
        ),
        ("notes.txt", "not an export"),
        ("data.csv", "also,not,an,export"),
    ]);
    let output = dir.path().join("out.txt");

    let summary = run_pipeline(&input, &output).unwrap();
    assert_eq!(summary.files, 1);
}

#[test]
fn unicode_content_passes_through() {
    let (dir, input) = setup_inputs(&[(
        "chat.json",
        r#"{"messages": [{"author": {"name": "Алиса", "discriminator": "0001"}, "content": "Привет! 🎉"}]}"#,
    )]);
    let output = dir.path().join("out.txt");

    run_pipeline(&input, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, "Алиса___0001: Привет! 🎉\n\n");
}

#[test]
fn malformed_json_aborts_whole_run() {
    let (dir, input) = setup_inputs(&[
        (
            "good.json",
            r#"{"messages": [{"author": {"name": "Alice", "discriminator": "0001"}, "content": "hi"}]}"#,
        ),
        ("broken.json", "{ not valid json"),
    ]);
    let output = dir.path().join("out.txt");

    let err = run_pipeline(&input, &output).unwrap_err();
    assert!(err.is_parse());
    assert!(!output.exists());
}
