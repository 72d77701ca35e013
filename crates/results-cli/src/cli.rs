// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};
use layout_results::{env, BuildTarget, ConfigError, RunConfig};
use std::path::PathBuf;

/// Compare layout test output against baselines and write result artifacts
#[derive(Parser, Debug)]
#[command(name = "layout-results", version)]
pub struct Cli {
    /// Log debug detail to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare a test's output with its baseline
    Compare(CompareArgs),
    /// Promote a test's output to be its new platform baseline
    Rebaseline(RebaselineArgs),
}

/// Which comparison engine to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Exact text comparison against -expected.txt
    Text,
    /// Image checksum comparison against -expected.checksum
    Checksum,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Test file, inside the layout-tests directory
    pub test: PathBuf,

    /// File holding the test's text output
    #[arg(long)]
    pub actual: Option<PathBuf>,

    /// Comparison engine
    #[arg(long, value_enum, default_value = "text")]
    pub engine: EngineKind,

    /// Checksum reported by the driver for the rendered image
    #[arg(long)]
    pub hash: Option<String>,

    /// Rendered image produced by the test
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Also write word-level HTML diffs
    #[arg(long)]
    pub wdiff: bool,

    /// Report which baseline files were used
    #[arg(long)]
    pub show_sources: bool,

    /// Save the output as the new baseline instead of comparing
    #[arg(long)]
    pub new_baseline: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Args, Debug)]
pub struct RebaselineArgs {
    /// Test file, inside the layout-tests directory
    pub test: PathBuf,

    /// File to promote
    #[arg(long)]
    pub actual: PathBuf,

    /// Baseline extension, e.g. ".txt" or ".png"
    #[arg(long, default_value = ".txt")]
    pub suffix: String,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Settings shared by every command. Flags override the config file.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// TOML run configuration (default: $LAYOUT_RESULTS_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Platform whose baselines are used
    #[arg(long)]
    pub platform: Option<String>,

    /// Root of the layout-tests checkout
    #[arg(long)]
    pub layout_tests: Option<PathBuf>,

    /// Directory receiving result artifacts
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Root of platform baseline directories
    #[arg(long)]
    pub baseline_dir: Option<PathBuf>,

    /// Word-diff executable
    #[arg(long)]
    pub wdiff_path: Option<PathBuf>,

    /// Driver build configuration
    #[arg(long)]
    pub target: Option<BuildTarget>,

    /// Append results to this JSONL file
    #[arg(long)]
    pub results_log: Option<PathBuf>,
}

impl RunArgs {
    /// Merge flags over the config file into a complete configuration.
    pub fn resolve(&self) -> Result<RunConfig, ConfigError> {
        let base = self
            .config
            .clone()
            .or_else(env::config_path)
            .map(|path| RunConfig::load(&path))
            .transpose()?;

        let platform = self
            .platform
            .clone()
            .or_else(|| base.as_ref().map(|c| c.platform.clone()))
            .ok_or(ConfigError::Missing("platform"))?;
        let layout_tests_dir = self
            .layout_tests
            .clone()
            .or_else(|| base.as_ref().map(|c| c.layout_tests_dir.clone()))
            .ok_or(ConfigError::Missing("layout_tests_dir"))?;
        let output_dir = self
            .output_dir
            .clone()
            .or_else(|| base.as_ref().map(|c| c.output_dir.clone()))
            .ok_or(ConfigError::Missing("output_dir"))?;

        let mut config = RunConfig::new(platform, layout_tests_dir, output_dir);
        config.baseline_dir = self
            .baseline_dir
            .clone()
            .or_else(|| base.as_ref().and_then(|c| c.baseline_dir.clone()));
        config.word_diff_tool = self
            .wdiff_path
            .clone()
            .or_else(|| base.as_ref().and_then(|c| c.word_diff_tool.clone()));
        config.target = self
            .target
            .or_else(|| base.as_ref().map(|c| c.target))
            .unwrap_or_default();
        Ok(config)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
