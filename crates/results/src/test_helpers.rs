// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared fixtures for unit tests.

use crate::context::RunContext;
use crate::engine::ArtifactWriter;
use crate::paths::LayoutTestPaths;
use crate::wdiff::ToolRunner;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

pub const PLATFORM: &str = "test-platform";

/// Tool runner replaying scripted outcomes, then succeeding with `fallback`.
pub struct ScriptedRunner {
    outcomes: Mutex<VecDeque<io::Result<Vec<u8>>>>,
    fallback: Vec<u8>,
    calls: AtomicUsize,
    last_args: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(outcomes: Vec<io::Result<Vec<u8>>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            fallback: b"##WDIFF_ADD##ok##WDIFF_END##".to_vec(),
            calls: AtomicUsize::new(0),
            last_args: Mutex::new(Vec::new()),
        })
    }

    pub fn succeeding() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_args(&self) -> Vec<String> {
        self.last_args.lock().clone()
    }
}

impl ToolRunner for ScriptedRunner {
    fn run(&self, _program: &Path, args: &[String]) -> io::Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_args.lock() = args.to_vec();
        match self.outcomes.lock().pop_front() {
            Some(outcome) => outcome,
            None => Ok(self.fallback.clone()),
        }
    }
}

/// A layout-tests checkout and results directory in a temp dir.
pub struct Fixture {
    pub dir: TempDir,
    pub layout_tests: PathBuf,
    pub output: PathBuf,
    pub paths: LayoutTestPaths,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let layout_tests = dir.path().join("LayoutTests");
        let output = dir.path().join("results");
        std::fs::create_dir_all(&layout_tests).unwrap();
        let paths = LayoutTestPaths::new(&layout_tests);
        Self {
            dir,
            layout_tests,
            output,
            paths,
        }
    }

    /// Create a test file under the layout-tests root.
    pub fn test_file(&self, relative: &str) -> PathBuf {
        let path = self.layout_tests.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "<html></html>").unwrap();
        path
    }

    pub fn context(&self, runner: Arc<dyn ToolRunner>) -> Arc<RunContext> {
        Arc::new(RunContext::new(Arc::new(self.paths.clone())).with_tool_runner(runner))
    }

    pub fn writer(&self, runner: Arc<dyn ToolRunner>) -> ArtifactWriter {
        ArtifactWriter::new(PLATFORM, &self.output, self.context(runner))
    }

    /// Platform baseline path for a relative test path and suffix.
    pub fn platform_baseline(&self, relative: &str) -> PathBuf {
        self.layout_tests.join("platform").join(PLATFORM).join(relative)
    }
}

pub fn not_found() -> io::Error {
    io::Error::from(io::ErrorKind::NotFound)
}

pub fn would_block() -> io::Error {
    io::Error::from(io::ErrorKind::WouldBlock)
}
