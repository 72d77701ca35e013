// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path resolution for tests, baselines and external tools.
//!
//! [`PathResolver`] is the seam engines use to find where a test lives
//! relative to the layout-tests tree and where its platform baselines go.
//! [`LayoutTestPaths`] is the filesystem-backed implementation.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Suffix that marks a checked-in baseline file.
pub const EXPECTED_SUFFIX: &str = "-expected";

/// Default word-diff executable, looked up on `PATH`.
pub const DEFAULT_WDIFF: &str = "wdiff";

/// Maps test files to relative paths and baseline locations.
pub trait PathResolver: Send + Sync {
    /// Path of `test_file` relative to the layout-tests root.
    ///
    /// Must only contain normal components so that joining it onto an output
    /// root never escapes that root.
    fn relative_test_path(&self, test_file: &Path) -> PathBuf;

    /// Directory holding baselines specific to `platform`.
    fn platform_baseline_root(&self, platform: &str) -> PathBuf;

    /// Create `dir` and its ancestors. Succeeds if it already exists.
    fn ensure_directory(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::create_dir_all(dir)
    }

    /// Executable used for word-level diffs.
    fn word_diff_tool_path(&self) -> PathBuf;

    /// Location of the checked-in `<name>-expected<suffix>` baseline.
    ///
    /// The platform directory wins over the generic baseline next to the
    /// test. When neither exists the platform location is returned.
    fn expected_baseline(&self, test_file: &Path, platform: &str, suffix: &str) -> PathBuf {
        let name = expected_file_name(test_file, suffix);
        let relative = self.relative_test_path(test_file);
        let relative_dir = relative.parent().unwrap_or(Path::new(""));

        let platform_candidate = self
            .platform_baseline_root(platform)
            .join(relative_dir)
            .join(&name);
        if platform_candidate.is_file() {
            return platform_candidate;
        }

        let generic = test_file.with_file_name(&name);
        if generic.is_file() {
            generic
        } else {
            platform_candidate
        }
    }
}

/// `<stem>-expected<suffix>` for a test file, without any directory.
pub fn expected_file_name(test_file: &Path, suffix: &str) -> OsString {
    let mut name = test_file.file_stem().map(OsString::from).unwrap_or_default();
    name.push(EXPECTED_SUFFIX);
    name.push(suffix);
    name
}

/// Drop root, prefix, `.` and `..` components from a path.
pub fn normal_components(path: &Path) -> PathBuf {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// Filesystem-backed resolver rooted at a layout-tests checkout.
#[derive(Clone, Debug)]
pub struct LayoutTestPaths {
    layout_tests_dir: PathBuf,
    baseline_dir: PathBuf,
    word_diff_tool: Option<PathBuf>,
}

impl LayoutTestPaths {
    /// Resolver for `layout_tests_dir` with baselines under `<dir>/platform`.
    pub fn new(layout_tests_dir: impl Into<PathBuf>) -> Self {
        let layout_tests_dir = layout_tests_dir.into();
        let baseline_dir = layout_tests_dir.join("platform");
        Self {
            layout_tests_dir,
            baseline_dir,
            word_diff_tool: None,
        }
    }

    /// Use a different root for platform baseline directories.
    pub fn with_baseline_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.baseline_dir = dir.into();
        self
    }

    /// Use a specific word-diff executable.
    pub fn with_word_diff_tool(mut self, tool: Option<PathBuf>) -> Self {
        self.word_diff_tool = tool;
        self
    }

    pub fn layout_tests_dir(&self) -> &Path {
        &self.layout_tests_dir
    }

    pub fn baseline_dir(&self) -> &Path {
        &self.baseline_dir
    }
}

impl PathResolver for LayoutTestPaths {
    fn relative_test_path(&self, test_file: &Path) -> PathBuf {
        let relative = test_file
            .strip_prefix(&self.layout_tests_dir)
            .unwrap_or(test_file);
        normal_components(relative)
    }

    fn platform_baseline_root(&self, platform: &str) -> PathBuf {
        self.baseline_dir.join(platform)
    }

    fn word_diff_tool_path(&self) -> PathBuf {
        self.word_diff_tool
            .clone()
            .or_else(crate::env::wdiff_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WDIFF))
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
