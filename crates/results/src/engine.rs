// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison contract and shared artifact persistence.
//!
//! Each test type (text, checksum, ...) implements [`ComparisonEngine`] and
//! owns an [`ArtifactWriter`] for the filesystem side: output directories,
//! artifact naming, baseline promotion and actual/expected/diff files.
//!
//! Artifact names for a test `fast/dom/foo.html` with tag `T` and extension
//! `.txt`, under the run's output root:
//!
//! | Artifact  | File                         |
//! |-----------|------------------------------|
//! | actual    | `fast/dom/fooT-actual.txt`   |
//! | expected  | `fast/dom/fooT-expected.txt` |
//! | diff      | `fast/dom/fooT-diff.txt`     |
//! | word diff | `fast/dom/fooT-wdiff.html`   |
//!
//! Promoted baselines are named `foo-expected.txt` (no tag) and live under
//! the platform baseline directory instead.

use crate::arguments::ResultArguments;
use crate::context::RunContext;
use crate::diff::write_unified_diff;
use crate::error::ResultsError;
use crate::failure::Verdict;
use crate::paths::expected_file_name;
use crate::wdiff::{classify_spawn_error, word_diff_command_args, SpawnFailure, WordDiffPage};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Filename piece for actual output.
pub const SUFFIX_ACTUAL: &str = "-actual";
/// Filename piece for expected output.
pub const SUFFIX_EXPECTED: &str = "-expected";
/// Filename piece for unified diffs.
pub const SUFFIX_DIFF: &str = "-diff";
/// Full suffix for word diffs.
pub const SUFFIX_WDIFF: &str = "-wdiff.html";

/// Build configuration of the driver that produced the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    Debug,
    #[default]
    Release,
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildTarget::Debug => f.write_str("debug"),
            BuildTarget::Release => f.write_str("release"),
        }
    }
}

impl std::str::FromStr for BuildTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildTarget::Debug),
            "release" => Ok(BuildTarget::Release),
            other => Err(format!("unknown build target: {other}")),
        }
    }
}

/// Handle to the driver process that produced a test's output.
///
/// Passed through to engines untouched; the core never inspects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverProcess {
    pid: Option<u32>,
    exit_code: Option<i32>,
}

impl DriverProcess {
    /// Handle for a live driver process.
    pub fn new(pid: u32) -> Self {
        Self {
            pid: Some(pid),
            exit_code: None,
        }
    }

    /// Handle for output that was not produced by a process in this run.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_exit_code(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }

    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }
}

/// A test type that can judge a test's output against its baseline.
pub trait ComparisonEngine: Send + Sync {
    /// Compare `output` for `test_file` against its baseline.
    ///
    /// Returns the failures found; an empty verdict means the test passed.
    /// Engines write their own artifacts through [`Self::artifacts`].
    fn compare(
        &self,
        test_file: &Path,
        process: &DriverProcess,
        output: &[u8],
        args: &ResultArguments,
        target: BuildTarget,
    ) -> Result<Verdict, ResultsError>;

    /// Writer used for this engine's artifacts and baselines.
    fn artifacts(&self) -> &ArtifactWriter;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("engine")
    }
}

/// Which diff artifacts [`ArtifactWriter::write_results`] should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffOptions {
    /// Write a unified line diff. Off for non-text results.
    pub diff: bool,
    /// Write a word-level HTML diff with the external tool.
    pub word_diff: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            diff: true,
            word_diff: false,
        }
    }
}

impl DiffOptions {
    /// Only actual and expected files.
    pub fn none() -> Self {
        Self {
            diff: false,
            word_diff: false,
        }
    }

    pub fn with_word_diff(mut self, word_diff: bool) -> Self {
        self.word_diff = word_diff;
        self
    }
}

/// Files written for one test, type and extension.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    pub actual: Option<PathBuf>,
    pub expected: Option<PathBuf>,
    pub diff: Option<PathBuf>,
    pub word_diff: Option<PathBuf>,
}

impl ArtifactSet {
    /// Paths written, in actual/expected/diff/word-diff order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        [&self.actual, &self.expected, &self.diff, &self.word_diff]
            .into_iter()
            .filter_map(|p| p.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.paths().next().is_none()
    }
}

/// Persists results for one platform into one output root.
#[derive(Clone, Debug)]
pub struct ArtifactWriter {
    platform: String,
    root_output_dir: PathBuf,
    context: Arc<RunContext>,
}

impl ArtifactWriter {
    pub fn new(
        platform: impl Into<String>,
        root_output_dir: impl Into<PathBuf>,
        context: Arc<RunContext>,
    ) -> Self {
        Self {
            platform: platform.into(),
            root_output_dir: root_output_dir.into(),
            context,
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn root_output_dir(&self) -> &Path {
        &self.root_output_dir
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    /// Output path for `test_file` with its extension replaced by `modifier`.
    ///
    /// `/src/LayoutTests/fast/dom/foo.html` with `-expected.txt` becomes
    /// `<root>/fast/dom/foo-expected.txt`.
    ///
    /// A test that resolves to the layout-tests root itself has no name of
    /// its own, so its artifacts are named by `modifier` alone inside the root.
    pub fn output_filename(&self, test_file: &Path, modifier: &str) -> PathBuf {
        let relative = self.context.resolver().relative_test_path(test_file);
        if relative.as_os_str().is_empty() {
            return self.root_output_dir.join(modifier);
        }
        let mut path = OsString::from(self.root_output_dir.join(relative).with_extension(""));
        path.push(modifier);
        PathBuf::from(path)
    }

    /// Create the directory that holds `test_file`'s artifacts.
    pub fn ensure_output_directory(&self, test_file: &Path) -> Result<(), ResultsError> {
        let relative = self.context.resolver().relative_test_path(test_file);
        let dir = match relative.parent() {
            Some(parent) => self.root_output_dir.join(parent),
            None => self.root_output_dir.clone(),
        };
        self.context
            .resolver()
            .ensure_directory(&dir)
            .map_err(|e| ResultsError::io(&dir, e))
    }

    /// Write `data` as the new platform baseline for `test_file`.
    ///
    /// The file is `<stem>-expected<modifier>` under the platform baseline
    /// directory. An existing baseline is replaced.
    pub fn save_baseline(
        &self,
        test_file: &Path,
        data: &[u8],
        modifier: &str,
    ) -> Result<PathBuf, ResultsError> {
        let resolver = self.context.resolver();
        let relative = resolver.relative_test_path(test_file);
        let output_dir = resolver
            .platform_baseline_root(&self.platform)
            .join(relative.parent().unwrap_or(Path::new("")));
        resolver
            .ensure_directory(&output_dir)
            .map_err(|e| ResultsError::io(&output_dir, e))?;

        let output_path = output_dir.join(expected_file_name(test_file, modifier));
        tracing::debug!(path = %output_path.display(), "writing new baseline");
        write_file(&output_path, data)?;
        Ok(output_path)
    }

    /// Write actual and expected output plus the requested diffs.
    ///
    /// Empty actual or expected content is not written, and without both
    /// sides no diff of either kind is produced.
    pub fn write_results(
        &self,
        test_file: &Path,
        test_type: &str,
        file_type: &str,
        actual: Option<&[u8]>,
        expected: Option<&[u8]>,
        options: DiffOptions,
    ) -> Result<ArtifactSet, ResultsError> {
        self.ensure_output_directory(test_file)?;

        let actual_path =
            self.output_filename(test_file, &format!("{test_type}{SUFFIX_ACTUAL}{file_type}"));
        let expected_path =
            self.output_filename(test_file, &format!("{test_type}{SUFFIX_EXPECTED}{file_type}"));

        let actual = actual.filter(|data| !data.is_empty());
        let expected = expected.filter(|data| !data.is_empty());
        let mut written = ArtifactSet::default();

        if let Some(data) = actual {
            write_file(&actual_path, data)?;
            written.actual = Some(actual_path.clone());
        }
        if let Some(data) = expected {
            write_file(&expected_path, data)?;
            written.expected = Some(expected_path.clone());
        }

        let (Some(actual), Some(expected)) = (actual, expected) else {
            return Ok(written);
        };

        if options.diff {
            let diff_path =
                self.output_filename(test_file, &format!("{test_type}{SUFFIX_DIFF}{file_type}"));
            let mut diff = Vec::new();
            write_unified_diff(
                &mut diff,
                expected,
                actual,
                &expected_path.to_string_lossy(),
                &actual_path.to_string_lossy(),
            )
            .map_err(|e| ResultsError::io(&diff_path, e))?;
            write_file(&diff_path, &diff)?;
            written.diff = Some(diff_path);
        }

        if options.word_diff {
            let page = self.word_diff_page(&expected_path, &actual_path)?;
            let wdiff_path = self.output_filename(test_file, &format!("{test_type}{SUFFIX_WDIFF}"));
            write_file(&wdiff_path, page.to_html().as_bytes())?;
            written.word_diff = Some(wdiff_path);
        }

        Ok(written)
    }

    /// Run the word-diff tool, falling back to an explanatory page.
    fn word_diff_page(
        &self,
        expected_path: &Path,
        actual_path: &Path,
    ) -> Result<WordDiffPage, ResultsError> {
        let availability = self.context.word_diff();
        if !availability.is_available() {
            return Ok(WordDiffPage::NotInstalled);
        }

        let tool = self.context.resolver().word_diff_tool_path();
        let args = word_diff_command_args(expected_path, actual_path);
        match self.context.tool_runner().run(&tool, &args) {
            Ok(stdout) => Ok(WordDiffPage::from_output(&stdout)),
            Err(e) => match classify_spawn_error(&e) {
                SpawnFailure::Unavailable => {
                    if availability.mark_unavailable() {
                        tracing::warn!(
                            tool = %tool.display(),
                            error = %e,
                            "word-diff tool unavailable, skipping word diffs for this run"
                        );
                    }
                    Ok(WordDiffPage::NotInstalled)
                }
                SpawnFailure::Transient => {
                    tracing::warn!(tool = %tool.display(), error = %e, "word-diff spawn failed");
                    Ok(WordDiffPage::ConcurrentFailure)
                }
                SpawnFailure::Fatal => Err(ResultsError::WordDiffTool { tool, source: e }),
            },
        }
    }
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), ResultsError> {
    tracing::debug!(path = %path.display(), bytes = data.len(), "writing artifact");
    std::fs::write(path, data).map_err(|e| ResultsError::io(path, e))
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
