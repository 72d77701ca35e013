// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! layout-results: compare layout test output against checked-in baselines.

mod cli;
mod diagnostic;
mod run;

use clap::Parser;
use cli::{Cli, Command};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Process exit codes.
mod exit_codes {
    pub const SUCCESS: u8 = 0;
    /// The comparison produced at least one failure.
    pub const FAILED: u8 = 1;
    /// Configuration, I/O or usage error.
    pub const ERROR: u8 = 2;
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(default_level(&cli));

    let outcome = match &cli.command {
        Command::Compare(args) => run::compare(args),
        Command::Rebaseline(args) => run::rebaseline(args).map(|_| true),
    };

    match outcome {
        Ok(true) => ExitCode::from(exit_codes::SUCCESS),
        Ok(false) => ExitCode::from(exit_codes::FAILED),
        Err(e) => {
            diagnostic::print_error(format!("{e:#}"));
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn default_level(cli: &Cli) -> &'static str {
    match &cli.command {
        _ if cli.verbose => "debug",
        Command::Compare(args) if args.show_sources => "info",
        _ => "warn",
    }
}

fn init_tracing(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
