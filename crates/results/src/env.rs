// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Use these accessors instead of calling `std::env::var()` directly.

use std::path::PathBuf;

/// Path to a run configuration file.
pub const LAYOUT_RESULTS_CONFIG: &str = "LAYOUT_RESULTS_CONFIG";
/// Override for the word-diff executable.
pub const LAYOUT_RESULTS_WDIFF: &str = "LAYOUT_RESULTS_WDIFF";

/// `LAYOUT_RESULTS_CONFIG`: Run configuration file.
pub fn config_path() -> Option<PathBuf> {
    var_path(LAYOUT_RESULTS_CONFIG)
}

/// `LAYOUT_RESULTS_WDIFF`: Word-diff executable override.
pub fn wdiff_path() -> Option<PathBuf> {
    var_path(LAYOUT_RESULTS_WDIFF)
}

fn var_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
