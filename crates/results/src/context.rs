// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-scoped state shared by every comparison engine.

use crate::paths::PathResolver;
use crate::wdiff::{SystemToolRunner, ToolRunner};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Whether the word-diff tool may still be spawned in this run.
///
/// Starts available and only ever moves to unavailable. Concurrent callers
/// may both observe "available" and each attempt one doomed spawn; that is
/// the only consequence of racing on it.
#[derive(Debug)]
pub struct WordDiffAvailability {
    available: AtomicBool,
}

impl WordDiffAvailability {
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
        }
    }

    /// Whether the tool should be attempted.
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Record that the tool is missing. Returns true for the call that made
    /// the transition.
    pub fn mark_unavailable(&self) -> bool {
        self.available.swap(false, Ordering::AcqRel)
    }
}

impl Default for WordDiffAvailability {
    fn default() -> Self {
        Self::new()
    }
}

/// Collaborators and shared flags for one test run.
pub struct RunContext {
    resolver: Arc<dyn PathResolver>,
    tool_runner: Arc<dyn ToolRunner>,
    word_diff: WordDiffAvailability,
}

impl RunContext {
    /// Context spawning real processes for external tools.
    pub fn new(resolver: Arc<dyn PathResolver>) -> Self {
        Self {
            resolver,
            tool_runner: Arc::new(SystemToolRunner),
            word_diff: WordDiffAvailability::new(),
        }
    }

    /// Replace the tool runner.
    pub fn with_tool_runner(mut self, runner: Arc<dyn ToolRunner>) -> Self {
        self.tool_runner = runner;
        self
    }

    pub fn resolver(&self) -> &dyn PathResolver {
        self.resolver.as_ref()
    }

    pub fn tool_runner(&self) -> &dyn ToolRunner {
        self.tool_runner.as_ref()
    }

    pub fn word_diff(&self) -> &WordDiffAvailability {
        &self.word_diff
    }
}

impl std::fmt::Debug for RunContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunContext")
            .field("word_diff", &self.word_diff)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
