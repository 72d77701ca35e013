// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error and warning output with terminal color detection.

use std::io::{self, IsTerminal, Write};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_tagged(&mut io::stderr(), "Error", "31", msg, is_tty);
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_tagged(&mut io::stderr(), "Warning", "33", msg, is_tty);
}

fn write_tagged<W: Write>(
    writer: &mut W,
    tag: &str,
    color: &str,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[{color}m{tag}: {msg}\x1b[0m");
    } else {
        let _ = writeln!(writer, "{tag}: {msg}");
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;
