// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution.

use crate::cli::{CompareArgs, EngineKind, RebaselineArgs, RunArgs};
use crate::diagnostic::print_warning;
use anyhow::{bail, Context as _, Result};
use layout_results::{
    ArtifactWriter, ChecksumComparison, ComparisonEngine, DriverProcess, ResultArguments,
    ResultsLog, RunConfig, RunContext, TestFailure, TextComparison,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A resolved configuration plus the writer shared by every engine.
struct Session {
    config: RunConfig,
    writer: ArtifactWriter,
}

impl Session {
    fn open(run: &RunArgs) -> Result<Self> {
        let config = run.resolve()?;
        let context = Arc::new(RunContext::new(Arc::new(config.paths())));
        let writer = ArtifactWriter::new(&config.platform, &config.output_dir, context);
        tracing::debug!(
            platform = %config.platform,
            output = %config.output_dir.display(),
            target = %config.target,
            "run configured"
        );
        Ok(Self { config, writer })
    }

    /// Tests named relative to the checkout are anchored in it.
    fn test_file(&self, test: &Path) -> PathBuf {
        if test.is_absolute() {
            test.to_path_buf()
        } else {
            self.config.layout_tests_dir.join(test)
        }
    }
}

/// Run `compare`. Returns whether the test passed.
pub fn compare(args: &CompareArgs) -> Result<bool> {
    let session = Session::open(&args.run)?;
    let test_file = session.test_file(&args.test);

    let output = match (&args.actual, args.engine) {
        (Some(path), _) => std::fs::read(path)
            .with_context(|| format!("Failed to read actual output {}", path.display()))?,
        (None, EngineKind::Text) => bail!("--actual is required for the text engine"),
        (None, EngineKind::Checksum) => Vec::new(),
    };

    let result_args = ResultArguments::new()
        .with_new_baseline(args.new_baseline)
        .with_artifact_path(args.image.clone())
        .with_content_hash(args.hash.clone())
        .with_word_diff(args.wdiff)
        .with_show_sources(args.show_sources);

    let engine: Box<dyn ComparisonEngine> = match args.engine {
        EngineKind::Text => Box::new(TextComparison::new(session.writer.clone())),
        EngineKind::Checksum => Box::new(ChecksumComparison::new(session.writer.clone())),
    };

    let failures = engine.compare(
        &test_file,
        &DriverProcess::detached(),
        &output,
        &result_args,
        session.config.target,
    )?;

    if let Some(path) = &args.run.results_log {
        let log = ResultsLog::with_file(path)
            .with_context(|| format!("Failed to open results log {}", path.display()))?;
        log.record(&args.test, engine.name(), &failures)
            .with_context(|| format!("Failed to write results log {}", path.display()))?;
    }

    report(&args.test, &failures);
    Ok(failures.is_empty())
}

/// Run `rebaseline`. Returns the baseline path written.
pub fn rebaseline(args: &RebaselineArgs) -> Result<PathBuf> {
    let session = Session::open(&args.run)?;
    let test_file = session.test_file(&args.test);
    let data = std::fs::read(&args.actual)
        .with_context(|| format!("Failed to read actual output {}", args.actual.display()))?;
    let path = session.writer.save_baseline(&test_file, &data, &args.suffix)?;
    println!("{}", path.display());
    Ok(path)
}

fn report(test: &Path, failures: &[TestFailure]) {
    if failures.is_empty() {
        println!("PASS {}", test.display());
        return;
    }
    for failure in failures {
        println!("FAIL {}: {}", test.display(), failure.message());
    }
    if failures.iter().any(TestFailure::is_missing_baseline) {
        print_warning(format!(
            "{} has no baseline; rerun with --new-baseline to create one",
            test.display()
        ));
    }
}
