// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that abort processing of the current test.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal filesystem or environment failure.
///
/// Missing outputs and an absent or flaky word-diff tool are handled inside
/// the writer and never show up here.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run word-diff tool {}: {source}", tool.display())]
    WordDiffTool {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResultsError {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResultsError::Io {
            path: path.into(),
            source,
        }
    }
}
