// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration loaded from TOML.
//!
//! ```toml
//! platform = "chromium-linux"
//! layout_tests_dir = "/src/third_party/LayoutTests"
//! output_dir = "/tmp/layout-test-results"
//! baseline_dir = "/src/third_party/LayoutTests/platform"  # optional
//! word_diff_tool = "/usr/local/bin/wdiff"                 # optional
//! target = "debug"                                         # default: release
//! ```

use crate::engine::BuildTarget;
use crate::paths::LayoutTestPaths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

/// Settings for one comparison run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Platform key selecting the baseline directory (e.g. "chromium-mac")
    pub platform: String,

    /// Root of the layout-tests checkout
    pub layout_tests_dir: PathBuf,

    /// Directory receiving actual/expected/diff artifacts
    pub output_dir: PathBuf,

    /// Root of platform baseline directories (default: `<layout_tests_dir>/platform`)
    #[serde(default)]
    pub baseline_dir: Option<PathBuf>,

    /// Word-diff executable (default: `$LAYOUT_RESULTS_WDIFF`, then `wdiff`)
    #[serde(default)]
    pub word_diff_tool: Option<PathBuf>,

    /// Driver build configuration
    #[serde(default)]
    pub target: BuildTarget,
}

impl RunConfig {
    pub fn new(
        platform: impl Into<String>,
        layout_tests_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            platform: platform.into(),
            layout_tests_dir: layout_tests_dir.into(),
            output_dir: output_dir.into(),
            baseline_dir: None,
            word_diff_tool: None,
            target: BuildTarget::default(),
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Path resolver for this configuration.
    pub fn paths(&self) -> LayoutTestPaths {
        let paths = LayoutTestPaths::new(&self.layout_tests_dir)
            .with_word_diff_tool(self.word_diff_tool.clone());
        match &self.baseline_dir {
            Some(dir) => paths.with_baseline_dir(dir),
            None => paths,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
