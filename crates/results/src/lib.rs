// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result comparison and artifact writing for layout tests.
//!
//! Given a test's actual output and its checked-in baseline, a
//! [`ComparisonEngine`] decides pass/fail and uses an [`ArtifactWriter`] to
//! persist actual, expected, diff and word-diff files into a results
//! directory. In baseline-update mode the same writer promotes the actual
//! output to become the new baseline.
//!
//! Run-wide state (path resolution, the external tool runner and the sticky
//! word-diff availability flag) lives in a [`RunContext`] shared by every
//! engine of a run.

pub mod arguments;
pub mod checksum;
pub mod config;
pub mod context;
pub mod diff;
pub mod engine;
pub mod env;
pub mod error;
pub mod failure;
pub mod log;
pub mod paths;
pub mod text;
pub mod wdiff;

#[cfg(test)]
mod test_helpers;

pub use arguments::ResultArguments;
pub use checksum::ChecksumComparison;
pub use config::{ConfigError, RunConfig};
pub use context::{RunContext, WordDiffAvailability};
pub use engine::{
    ArtifactSet, ArtifactWriter, BuildTarget, ComparisonEngine, DiffOptions, DriverProcess,
};
pub use error::ResultsError;
pub use failure::{is_pass, TestFailure, Verdict};
pub use log::{RecordedResult, ResultsLog};
pub use paths::{LayoutTestPaths, PathResolver};
pub use text::TextComparison;
pub use wdiff::{SpawnFailure, SystemToolRunner, ToolRunner, WordDiffPage};
