// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-test optional parameters handed to a comparison engine.

use std::path::PathBuf;

/// Optional arguments for a single comparison.
///
/// Built fresh by the runner for every test invocation; engines only read it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultArguments {
    /// Save the actual output as the new baseline instead of comparing.
    pub new_baseline: bool,

    /// Path to a binary artifact produced by the test (e.g. a rendered PNG).
    pub artifact_path: Option<PathBuf>,

    /// Content hash reported by the driver for the artifact.
    pub content_hash: Option<String>,

    /// Produce word-level HTML diffs with the external tool.
    pub word_diff: bool,

    /// Report which baseline files were used.
    pub show_sources: bool,
}

impl ResultArguments {
    /// Create arguments with every option off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set baseline-update mode
    pub fn with_new_baseline(mut self, new_baseline: bool) -> Self {
        self.new_baseline = new_baseline;
        self
    }

    /// Set the generated artifact path
    pub fn with_artifact_path(mut self, path: Option<PathBuf>) -> Self {
        self.artifact_path = path;
        self
    }

    /// Set the content hash
    pub fn with_content_hash(mut self, hash: Option<String>) -> Self {
        self.content_hash = hash;
        self
    }

    /// Set word diff generation
    pub fn with_word_diff(mut self, word_diff: bool) -> Self {
        self.word_diff = word_diff;
        self
    }

    /// Set baseline source reporting
    pub fn with_show_sources(mut self, show_sources: bool) -> Self {
        self.show_sources = show_sources;
        self
    }
}
