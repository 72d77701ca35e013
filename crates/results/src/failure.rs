// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure descriptors reported by comparison engines.

use serde::{Deserialize, Serialize};

/// A single reason a test did not match its baseline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TestFailure {
    /// Text output differs from the expected text
    TextMismatch {
        /// Whether a word-diff artifact was requested for this failure
        word_diff: bool,
    },
    /// No expected text baseline exists
    MissingText,
    /// Image checksum differs from the expected checksum
    ChecksumMismatch { expected: String, actual: String },
    /// No expected checksum baseline exists
    MissingChecksum,
    /// No expected image baseline exists
    MissingImage,
    /// The driver produced neither a checksum nor an image to hash
    MissingActualChecksum,
}

impl TestFailure {
    /// One-line description for reports.
    pub fn message(&self) -> String {
        match self {
            TestFailure::TextMismatch { word_diff: true } => {
                "text diff mismatch (word diff written)".to_string()
            }
            TestFailure::TextMismatch { word_diff: false } => "text diff mismatch".to_string(),
            TestFailure::MissingText => "no expected text result".to_string(),
            TestFailure::ChecksumMismatch { expected, actual } => {
                format!("image checksum mismatch: expected {expected}, got {actual}")
            }
            TestFailure::MissingChecksum => "no expected image checksum".to_string(),
            TestFailure::MissingImage => "no expected image result".to_string(),
            TestFailure::MissingActualChecksum => "test produced no image checksum".to_string(),
        }
    }

    /// Whether the failure means a baseline is absent rather than different.
    pub fn is_missing_baseline(&self) -> bool {
        matches!(
            self,
            TestFailure::MissingText | TestFailure::MissingChecksum | TestFailure::MissingImage
        )
    }
}

impl std::fmt::Display for TestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Ordered failures for one test; empty means the test passed.
pub type Verdict = Vec<TestFailure>;

/// Whether a verdict is a pass.
pub fn is_pass(verdict: &[TestFailure]) -> bool {
    verdict.is_empty()
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
