// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_helpers::{Fixture, ScriptedRunner};
use std::fs;
use std::path::PathBuf;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake image";

fn engine(fixture: &Fixture) -> ChecksumComparison {
    ChecksumComparison::new(fixture.writer(ScriptedRunner::succeeding()))
}

fn compare(engine: &ChecksumComparison, test_file: &Path, args: &ResultArguments) -> Verdict {
    engine
        .compare(test_file, &DriverProcess::new(7), b"", args, BuildTarget::Release)
        .unwrap()
}

/// Check in generic checksum and image baselines next to the test.
fn check_in(test_file: &Path, checksum: &str, image: &[u8]) {
    fs::write(test_file.with_file_name("foo-expected.checksum"), checksum).unwrap();
    fs::write(test_file.with_file_name("foo-expected.png"), image).unwrap();
}

fn actual_image(fixture: &Fixture) -> PathBuf {
    let path = fixture.dir.path().join("actual.png");
    fs::write(&path, PNG).unwrap();
    path
}

#[test]
fn test_matching_checksum_passes() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("images/foo.html");
    check_in(&test_file, "abc123\n", PNG);
    let args = ResultArguments::new().with_content_hash(Some("abc123".to_string()));

    assert!(compare(&engine(&fixture), &test_file, &args).is_empty());
    assert!(!fixture.output.join("images/foo-actual.checksum").exists());
}

#[test]
fn test_mismatch_writes_checksums_and_images() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("images/foo.html");
    check_in(&test_file, "abc123", b"expected image");
    let args = ResultArguments::new()
        .with_content_hash(Some("def456".to_string()))
        .with_artifact_path(Some(actual_image(&fixture)));

    let verdict = compare(&engine(&fixture), &test_file, &args);

    assert_eq!(
        verdict,
        vec![TestFailure::ChecksumMismatch {
            expected: "abc123".to_string(),
            actual: "def456".to_string(),
        }]
    );
    let out = fixture.output.join("images");
    assert_eq!(fs::read(out.join("foo-actual.checksum")).unwrap(), b"def456");
    assert_eq!(fs::read(out.join("foo-expected.checksum")).unwrap(), b"abc123");
    assert!(!out.join("foo-diff.checksum").exists());
    assert_eq!(fs::read(out.join("foo-actual.png")).unwrap(), PNG);
    assert_eq!(fs::read(out.join("foo-expected.png")).unwrap(), b"expected image");
}

#[test]
fn test_hash_computed_from_artifact() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("images/foo.html");
    let expected = hex::encode(Sha256::digest(PNG));
    check_in(&test_file, &expected, PNG);
    let args = ResultArguments::new().with_artifact_path(Some(actual_image(&fixture)));

    assert!(compare(&engine(&fixture), &test_file, &args).is_empty());
}

#[test]
fn test_missing_expected_image() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("images/foo.html");
    fs::write(test_file.with_file_name("foo-expected.checksum"), "abc").unwrap();
    let args = ResultArguments::new().with_content_hash(Some("abc".to_string()));

    let verdict = compare(&engine(&fixture), &test_file, &args);

    assert_eq!(verdict, vec![TestFailure::MissingImage]);
    assert!(fixture.output.join("images/foo-actual.checksum").exists());
    assert!(!fixture.output.join("images/foo-expected.png").exists());
}

#[test]
fn test_missing_expected_checksum() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("images/foo.html");
    fs::write(test_file.with_file_name("foo-expected.png"), PNG).unwrap();
    let args = ResultArguments::new().with_content_hash(Some("abc".to_string()));

    let verdict = compare(&engine(&fixture), &test_file, &args);

    assert_eq!(verdict, vec![TestFailure::MissingChecksum]);
    assert!(fixture.output.join("images/foo-actual.checksum").exists());
    assert!(!fixture.output.join("images/foo-expected.checksum").exists());
}

#[test]
fn test_no_actual_checksum() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("images/foo.html");

    let verdict = compare(&engine(&fixture), &test_file, &ResultArguments::new());

    assert_eq!(verdict, vec![TestFailure::MissingActualChecksum]);
}

#[test]
fn test_new_baseline_saves_checksum_and_image() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("images/foo.html");
    let args = ResultArguments::new()
        .with_new_baseline(true)
        .with_content_hash(Some("abc123".to_string()))
        .with_artifact_path(Some(actual_image(&fixture)));

    let engine = engine(&fixture);
    assert!(compare(&engine, &test_file, &args).is_empty());

    assert_eq!(
        fs::read(fixture.platform_baseline("images/foo-expected.checksum")).unwrap(),
        b"abc123"
    );
    assert_eq!(
        fs::read(fixture.platform_baseline("images/foo-expected.png")).unwrap(),
        PNG
    );

    let rerun = ResultArguments::new().with_content_hash(Some("abc123".to_string()));
    assert!(compare(&engine, &test_file, &rerun).is_empty());
}

#[test]
fn test_unreadable_artifact_is_fatal() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("images/foo.html");
    let args = ResultArguments::new()
        .with_artifact_path(Some(fixture.dir.path().join("missing.png")));

    let result = engine(&fixture).compare(
        &test_file,
        &DriverProcess::detached(),
        b"",
        &args,
        BuildTarget::Release,
    );

    assert!(matches!(result, Err(ResultsError::Io { .. })));
}
