// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration tests for the rebaseline command.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rebaseline(dir: &TempDir, suffix: &str, content: &[u8]) -> assert_cmd::assert::Assert {
    let actual = dir.path().join("actual.out");
    fs::write(&actual, content).unwrap();

    Command::cargo_bin("layout-results")
        .unwrap()
        .env_remove("LAYOUT_RESULTS_CONFIG")
        .args(["rebaseline", "fast/dom/b.html", "--platform", "mac", "--suffix", suffix])
        .arg("--actual")
        .arg(&actual)
        .arg("--layout-tests")
        .arg(dir.path().join("LayoutTests"))
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .assert()
}

#[test]
fn test_rebaseline_writes_platform_baseline() {
    let dir = TempDir::new().unwrap();
    let expected = dir
        .path()
        .join("LayoutTests/platform/mac/fast/dom/b-expected.txt");

    rebaseline(&dir, ".txt", b"new text\n")
        .success()
        .stdout(predicate::str::contains("b-expected.txt"));

    assert_eq!(fs::read(&expected).unwrap(), b"new text\n");
}

#[test]
fn test_rebaseline_replaces_existing() {
    let dir = TempDir::new().unwrap();
    rebaseline(&dir, ".png", b"first").success();
    rebaseline(&dir, ".png", b"second").success();

    let expected = dir
        .path()
        .join("LayoutTests/platform/mac/fast/dom/b-expected.png");
    assert_eq!(fs::read(expected).unwrap(), b"second");
}

#[test]
fn test_rebaseline_missing_actual() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("layout-results")
        .unwrap()
        .env_remove("LAYOUT_RESULTS_CONFIG")
        .args(["rebaseline", "a.html", "--platform", "mac", "--actual"])
        .arg(dir.path().join("missing.txt"))
        .arg("--layout-tests")
        .arg(dir.path())
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read actual output"));
}
