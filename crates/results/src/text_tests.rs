// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_helpers::{Fixture, ScriptedRunner};
use std::fs;

fn engine(fixture: &Fixture) -> TextComparison {
    TextComparison::new(fixture.writer(ScriptedRunner::succeeding()))
}

fn compare(engine: &TextComparison, test_file: &Path, output: &[u8], args: &ResultArguments) -> Verdict {
    engine
        .compare(test_file, &DriverProcess::detached(), output, args, BuildTarget::Release)
        .unwrap()
}

#[test]
fn test_matching_output_passes_without_artifacts() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("fast/foo.html");
    fs::write(test_file.with_file_name("foo-expected.txt"), "hello\n").unwrap();

    let verdict = compare(&engine(&fixture), &test_file, b"hello\n", &ResultArguments::new());

    assert!(verdict.is_empty());
    assert!(!fixture.output.join("fast/foo-actual.txt").exists());
}

#[test]
fn test_mismatch_writes_results() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("fast/foo.html");
    fs::write(test_file.with_file_name("foo-expected.txt"), "a\nb\n").unwrap();

    let verdict = compare(&engine(&fixture), &test_file, b"a\nc\n", &ResultArguments::new());

    assert_eq!(verdict, vec![TestFailure::TextMismatch { word_diff: false }]);
    assert_eq!(fs::read(fixture.output.join("fast/foo-actual.txt")).unwrap(), b"a\nc\n");
    assert_eq!(fs::read(fixture.output.join("fast/foo-expected.txt")).unwrap(), b"a\nb\n");
    assert!(fixture.output.join("fast/foo-diff.txt").exists());
    assert!(!fixture.output.join("fast/foo-wdiff.html").exists());
}

#[test]
fn test_mismatch_with_word_diff() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("fast/foo.html");
    fs::write(test_file.with_file_name("foo-expected.txt"), "a b\n").unwrap();
    let args = ResultArguments::new().with_word_diff(true);

    let verdict = compare(&engine(&fixture), &test_file, b"a c\n", &args);

    assert_eq!(verdict, vec![TestFailure::TextMismatch { word_diff: true }]);
    assert!(fixture.output.join("fast/foo-wdiff.html").exists());
}

#[test]
fn test_platform_baseline_takes_precedence() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("fast/foo.html");
    fs::write(test_file.with_file_name("foo-expected.txt"), "generic\n").unwrap();
    let platform = fixture.platform_baseline("fast/foo-expected.txt");
    fs::create_dir_all(platform.parent().unwrap()).unwrap();
    fs::write(&platform, "platform\n").unwrap();

    let engine = engine(&fixture);
    assert!(compare(&engine, &test_file, b"platform\n", &ResultArguments::new()).is_empty());
    assert!(!compare(&engine, &test_file, b"generic\n", &ResultArguments::new()).is_empty());
}

#[test]
fn test_missing_baseline_reports_missing_text() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("fast/new.html");

    let verdict = compare(&engine(&fixture), &test_file, b"output\n", &ResultArguments::new());

    assert_eq!(verdict, vec![TestFailure::MissingText]);
    assert!(fixture.output.join("fast/new-actual.txt").exists());
    assert!(!fixture.output.join("fast/new-expected.txt").exists());
    assert!(!fixture.output.join("fast/new-diff.txt").exists());
}

#[test]
fn test_new_baseline_saves_and_passes() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("fast/foo.html");
    fs::write(test_file.with_file_name("foo-expected.txt"), "old\n").unwrap();
    let args = ResultArguments::new().with_new_baseline(true);

    let engine = engine(&fixture);
    let verdict = compare(&engine, &test_file, b"new\n", &args);

    assert!(verdict.is_empty());
    let saved = fixture.platform_baseline("fast/foo-expected.txt");
    assert_eq!(fs::read(&saved).unwrap(), b"new\n");
    // The new platform baseline is used from now on
    assert!(compare(&engine, &test_file, b"new\n", &ResultArguments::new()).is_empty());
}

#[test]
fn test_unreadable_baseline_is_fatal() {
    let fixture = Fixture::new();
    let test_file = fixture.test_file("fast/foo.html");
    // A directory where the baseline should be
    fs::create_dir_all(test_file.with_file_name("foo-expected.txt")).unwrap();
    let platform = fixture.platform_baseline("fast/foo-expected.txt");
    fs::create_dir_all(&platform).unwrap();

    let result = engine(&fixture).compare(
        &test_file,
        &DriverProcess::detached(),
        b"x",
        &ResultArguments::new(),
        BuildTarget::Debug,
    );

    assert!(matches!(result, Err(ResultsError::Io { .. })));
}

#[test]
fn test_engine_name() {
    let fixture = Fixture::new();
    assert_eq!(engine(&fixture).name(), "text");
}
