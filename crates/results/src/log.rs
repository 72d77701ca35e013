// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-wide record of comparison outcomes.

use crate::failure::TestFailure;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Outcome of one comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedResult {
    /// Order in which the result was recorded
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    /// Milliseconds since the log was created
    pub elapsed_ms: u64,
    pub test: PathBuf,
    /// Engine that produced the verdict
    pub engine: String,
    /// Empty when the test passed
    pub failures: Vec<TestFailure>,
}

impl RecordedResult {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Log of comparison outcomes, optionally mirrored to a JSONL file.
///
/// Clones share the same underlying log.
pub struct ResultsLog {
    start: Instant,
    results: Arc<Mutex<Vec<RecordedResult>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl ResultsLog {
    /// Create a new in-memory log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            results: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a log that also appends JSONL records to `path`
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            start: Instant::now(),
            results: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a verdict for a test
    pub fn record(
        &self,
        test: &Path,
        engine: &str,
        failures: &[TestFailure],
    ) -> std::io::Result<RecordedResult> {
        let mut results = self.results.lock();
        let result = RecordedResult {
            seq: results.len() as u64,
            timestamp: Utc::now(),
            elapsed_ms: self.start.elapsed().as_millis() as u64,
            test: test.to_path_buf(),
            engine: engine.to_string(),
            failures: failures.to_vec(),
        };
        results.push(result.clone());

        if let Some(ref writer) = self.file_writer {
            let json = serde_json::to_string(&result)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            let mut w = writer.lock();
            writeln!(w, "{}", json)?;
            w.flush()?;
        }

        Ok(result)
    }

    /// All recorded results
    pub fn results(&self) -> Vec<RecordedResult> {
        self.results.lock().clone()
    }

    /// Results with at least one failure
    pub fn failures(&self) -> Vec<RecordedResult> {
        self.results
            .lock()
            .iter()
            .filter(|r| !r.passed())
            .cloned()
            .collect()
    }

    /// The last N results
    pub fn last(&self, n: usize) -> Vec<RecordedResult> {
        let all = self.results.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.results.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.lock().is_empty()
    }

    pub fn clear(&self) {
        self.results.lock().clear();
    }
}

impl Default for ResultsLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ResultsLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            results: Arc::clone(&self.results),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
