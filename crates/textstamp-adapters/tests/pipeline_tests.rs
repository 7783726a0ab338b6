//! End-to-end pipeline tests: provider + orchestrator + real adapters.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use textstamp_adapters::{MemoryTextFileSystem, TransformOrchestratorProvider};
use textstamp_core::prelude::*;

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .unwrap()
}

fn kind_of(err: ApplicationError) -> FileSystemErrorKind {
    match err {
        ApplicationError::FileSystem(e) => e.kind(),
        other => panic!("unexpected error: {other:?}"),
    }
}

// ── local filesystem ─────────────────────────────────────────────────────────

#[test]
fn multi_line_file_is_numbered() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, "first line\nsecond line\nthird line").unwrap();
    let output_dir = dir.path().join("output");
    std::fs::create_dir(&output_dir).unwrap();

    let context = TransformContext::new(&input, &output_dir, at(2024, 12, 26, 15, 30, 45));
    let result = TransformOrchestratorProvider::new()
        .provide()
        .orchestrate(&context)
        .unwrap();

    assert_eq!(result, TransformResult::new(3, 4));
    assert_eq!(
        std::fs::read_to_string(output_dir.join("input.txt")).unwrap(),
        "2024-12-26 15:30:45\n1: first line\n2: second line\n3: third line"
    );
}

#[test]
fn empty_file_yields_timestamp_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    std::fs::write(&input, "").unwrap();
    let output_dir = dir.path().join("output");

    let context = TransformContext::new(&input, &output_dir, at(2025, 1, 15, 10, 20, 30));
    let result = TransformOrchestratorProvider::new()
        .provide()
        .orchestrate(&context)
        .unwrap();

    assert_eq!(result.src_length, 0);
    assert_eq!(result.dst_length, 1);
    assert_eq!(
        std::fs::read_to_string(output_dir.join("empty.txt")).unwrap(),
        "2025-01-15 10:20:30"
    );
}

#[test]
fn single_line_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("single.txt");
    std::fs::write(&input, "only one line").unwrap();
    let output_dir = dir.path().join("output");

    let context = TransformContext::new(&input, &output_dir, at(2024, 6, 1, 8, 15, 0));
    let result = TransformOrchestratorProvider::new()
        .provide()
        .orchestrate(&context)
        .unwrap();

    assert_eq!(result.src_length, 1);
    assert_eq!(
        std::fs::read_to_string(output_dir.join("single.txt")).unwrap(),
        "2024-06-01 08:15:00\n1: only one line"
    );
}

#[test]
fn non_ascii_file_keeps_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("japanese.txt");
    std::fs::write(&input, "これは1行目\nこれは2行目").unwrap();
    let output_dir = dir.path().join("output");

    let context = TransformContext::new(&input, &output_dir, at(2024, 3, 20, 14, 30, 0));
    let result = TransformOrchestratorProvider::new()
        .provide()
        .orchestrate(&context)
        .unwrap();

    assert_eq!(result.src_length, 2);
    assert_eq!(
        std::fs::read_to_string(output_dir.join("japanese.txt")).unwrap(),
        "2024-03-20 14:30:00\n1: これは1行目\n2: これは2行目"
    );
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");

    let context = TransformContext::new(
        dir.path().join("non_existent.txt"),
        &output_dir,
        at(2024, 1, 1, 0, 0, 0),
    );
    let err = TransformOrchestratorProvider::new()
        .provide()
        .orchestrate(&context)
        .unwrap_err();

    assert_eq!(kind_of(err), FileSystemErrorKind::NotFound);
    assert!(!output_dir.exists());
}

#[test]
fn existing_directory_at_output_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    std::fs::write(&input, "x").unwrap();
    let output_dir = dir.path().join("output");
    std::fs::create_dir_all(output_dir.join("input.txt")).unwrap();

    let context = TransformContext::new(&input, &output_dir, at(2024, 1, 1, 0, 0, 0));
    let err = TransformOrchestratorProvider::new()
        .provide()
        .orchestrate(&context)
        .unwrap_err();

    assert_eq!(kind_of(err), FileSystemErrorKind::IsADirectory);
}

// ── in-memory filesystem ─────────────────────────────────────────────────────

#[test]
fn memory_filesystem_drives_the_same_pipeline() {
    let fs = MemoryTextFileSystem::new().with_file("/src/docs/a.md", "a\nb\nc");
    let context = TransformContext::new("/src/docs/a.md", "/tmp", at(2024, 12, 26, 15, 30, 45));

    let result = TransformOrchestratorProvider::new()
        .with_filesystem(fs.clone())
        .orchestrate(&context)
        .unwrap();

    assert_eq!(result, TransformResult::new(3, 4));
    assert_eq!(
        fs.read_file(Path::new("/tmp/a.md")).as_deref(),
        Some("2024-12-26 15:30:45\n1: a\n2: b\n3: c")
    );
}

#[test]
fn memory_filesystem_missing_source() {
    let fs = MemoryTextFileSystem::new();
    let context = TransformContext::new("/nowhere.txt", "/tmp", at(2024, 1, 1, 0, 0, 0));

    let err = TransformOrchestratorProvider::new()
        .with_filesystem(fs.clone())
        .orchestrate(&context)
        .unwrap_err();

    assert_eq!(kind_of(err), FileSystemErrorKind::NotFound);
    assert!(fs.list_files().is_empty());
}
