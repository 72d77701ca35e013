// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact text comparison against `-expected.txt` baselines.

use crate::arguments::ResultArguments;
use crate::engine::{ArtifactWriter, BuildTarget, ComparisonEngine, DiffOptions, DriverProcess};
use crate::error::ResultsError;
use crate::failure::{TestFailure, Verdict};
use std::path::Path;

/// Extension of text results and baselines.
pub const TEXT_EXTENSION: &str = ".txt";

/// Compares a test's text dump byte-for-byte with its baseline.
#[derive(Clone, Debug)]
pub struct TextComparison {
    artifacts: ArtifactWriter,
}

impl TextComparison {
    pub fn new(artifacts: ArtifactWriter) -> Self {
        Self { artifacts }
    }

    /// Contents of the expected baseline, empty when none is checked in.
    fn expected_text(&self, test_file: &Path, show_sources: bool) -> Result<Vec<u8>, ResultsError> {
        let path = self.artifacts.context().resolver().expected_baseline(
            test_file,
            self.artifacts.platform(),
            TEXT_EXTENSION,
        );
        if show_sources {
            tracing::info!(test = %test_file.display(), baseline = %path.display(), "expected text");
        }
        read_optional(&path)
    }
}

impl ComparisonEngine for TextComparison {
    fn compare(
        &self,
        test_file: &Path,
        _process: &DriverProcess,
        output: &[u8],
        args: &ResultArguments,
        _target: BuildTarget,
    ) -> Result<Verdict, ResultsError> {
        if args.new_baseline {
            self.artifacts
                .save_baseline(test_file, output, TEXT_EXTENSION)?;
            return Ok(Vec::new());
        }

        let expected = self.expected_text(test_file, args.show_sources)?;
        if expected == output {
            return Ok(Vec::new());
        }

        self.artifacts.write_results(
            test_file,
            "",
            TEXT_EXTENSION,
            Some(output),
            Some(&expected),
            DiffOptions::default().with_word_diff(args.word_diff),
        )?;

        if expected.is_empty() {
            Ok(vec![TestFailure::MissingText])
        } else {
            Ok(vec![TestFailure::TextMismatch {
                word_diff: args.word_diff,
            }])
        }
    }

    fn artifacts(&self) -> &ArtifactWriter {
        &self.artifacts
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Read a baseline file, treating a missing file as empty.
pub(crate) fn read_optional(path: &Path) -> Result<Vec<u8>, ResultsError> {
    match std::fs::read(path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(ResultsError::io(path, e)),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
