// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External word-diff tool invocation and HTML rendering.
//!
//! The tool is optional. A spawn failure is sorted into one of three
//! outcomes by [`classify_spawn_error`]:
//!
//! - [`SpawnFailure::Unavailable`]: the executable is missing or cannot be
//!   run. The caller flips the run-wide availability flag and never tries
//!   again.
//! - [`SpawnFailure::Transient`]: the spawn lost a race with other parallel
//!   invocations. Only this artifact is affected.
//! - [`SpawnFailure::Fatal`]: anything else, surfaced to the runner.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Marker inserted by the tool before deleted words.
pub const DELETE_START: &str = "##WDIFF_DEL##";
/// Marker inserted by the tool before inserted words.
pub const INSERT_START: &str = "##WDIFF_ADD##";
/// Marker closing either kind of change.
pub const CHANGE_END: &str = "##WDIFF_END##";

const NOT_INSTALLED_MESSAGE: &str = "wdiff not installed.<br/> \
    On macOS, you can install it via Homebrew or MacPorts.<br/>\
    On Debian or Ubuntu, you can run 'sudo apt-get install wdiff'.";

const CONCURRENT_FAILURE_MESSAGE: &str =
    "wdiff failed, most likely due to many comparisons running in parallel.";

const STYLE_HEAD: &str =
    "<head><style>.del { background: #faa; } .add { background: #afa; }</style></head>";

/// Runs an external program and captures its standard output.
pub trait ToolRunner: Send + Sync {
    /// Run `program` with `args` to completion.
    ///
    /// The exit status is not an error: diff tools exit non-zero when their
    /// inputs differ. Only a failure to spawn or reap the child is.
    fn run(&self, program: &Path, args: &[String]) -> io::Result<Vec<u8>>;
}

/// Runs tools as real child processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemToolRunner;

impl ToolRunner for SystemToolRunner {
    fn run(&self, program: &Path, args: &[String]) -> io::Result<Vec<u8>> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()?;
        Ok(output.stdout)
    }
}

/// Arguments passed to the word-diff tool, in order.
pub fn word_diff_command_args(expected: &Path, actual: &Path) -> Vec<String> {
    vec![
        format!("--start-delete={DELETE_START}"),
        format!("--end-delete={CHANGE_END}"),
        format!("--start-insert={INSERT_START}"),
        format!("--end-insert={CHANGE_END}"),
        expected.to_string_lossy().into_owned(),
        actual.to_string_lossy().into_owned(),
    ]
}

/// How a failed spawn of the word-diff tool should be treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnFailure {
    /// Tool missing or not executable; stays unavailable for the run.
    Unavailable,
    /// Lost a race with concurrent spawns; retry on the next artifact.
    Transient,
    /// Broken environment; propagate.
    Fatal,
}

/// Sort a spawn error into a [`SpawnFailure`].
pub fn classify_spawn_error(err: &io::Error) -> SpawnFailure {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => SpawnFailure::Unavailable,
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted => SpawnFailure::Transient,
        _ => err
            .raw_os_error()
            .map_or(SpawnFailure::Fatal, classify_os_error),
    }
}

#[cfg(unix)]
fn classify_os_error(code: i32) -> SpawnFailure {
    use nix::errno::Errno;

    const UNAVAILABLE: [Errno; 3] = [Errno::ENOENT, Errno::EACCES, Errno::ECHILD];
    // fork/exec contention: process or descriptor limits hit by parallel
    // spawns, or exec racing a sibling that still holds the file open.
    const TRANSIENT: [Errno; 5] = [
        Errno::EAGAIN,
        Errno::EINTR,
        Errno::EMFILE,
        Errno::ENFILE,
        Errno::ETXTBSY,
    ];

    if UNAVAILABLE.iter().any(|e| *e as i32 == code) {
        SpawnFailure::Unavailable
    } else if TRANSIENT.iter().any(|e| *e as i32 == code) {
        SpawnFailure::Transient
    } else {
        SpawnFailure::Fatal
    }
}

#[cfg(not(unix))]
fn classify_os_error(_code: i32) -> SpawnFailure {
    SpawnFailure::Fatal
}

/// Body of a word-diff artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordDiffPage {
    /// Marked-up tool output
    Rendered(String),
    /// The tool is not available in this run
    NotInstalled,
    /// The tool could not be spawned for this artifact only
    ConcurrentFailure,
}

impl WordDiffPage {
    /// Build a page from raw tool output.
    pub fn from_output(stdout: &[u8]) -> Self {
        WordDiffPage::Rendered(String::from_utf8_lossy(stdout).into_owned())
    }

    /// HTML written to the `-wdiff.html` artifact.
    pub fn to_html(&self) -> String {
        match self {
            WordDiffPage::NotInstalled => NOT_INSTALLED_MESSAGE.to_string(),
            WordDiffPage::ConcurrentFailure => CONCURRENT_FAILURE_MESSAGE.to_string(),
            WordDiffPage::Rendered(text) => {
                let marked = escape_html(text)
                    .replace(DELETE_START, "<span class=del>")
                    .replace(INSERT_START, "<span class=add>")
                    .replace(CHANGE_END, "</span>");
                format!("{STYLE_HEAD}<pre>{marked}</pre>")
            }
        }
    }
}

/// Escape text for embedding in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "wdiff_tests.rs"]
mod tests;
