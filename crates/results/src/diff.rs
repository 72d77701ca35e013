// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unified line diffs between expected and actual output.

use similar::TextDiff;
use std::io::{self, Write};

/// Lines of context around each hunk.
pub const CONTEXT_LINES: usize = 3;

/// Write the unified diff from `expected` to `actual` into `w`.
///
/// Lines are copied byte for byte, so output that is not UTF-8 survives
/// unchanged. The two sides are labelled with the given names in the
/// `---`/`+++` headers. Identical inputs write nothing, headers included.
pub fn write_unified_diff<W: Write>(
    mut w: W,
    expected: &[u8],
    actual: &[u8],
    expected_label: &str,
    actual_label: &str,
) -> io::Result<()> {
    let diff = TextDiff::from_lines(expected, actual);
    let mut unified = diff.unified_diff();
    unified
        .context_radius(CONTEXT_LINES)
        .missing_newline_hint(false);

    for (idx, hunk) in unified.iter_hunks().enumerate() {
        if idx == 0 {
            writeln!(w, "--- {expected_label}")?;
            writeln!(w, "+++ {actual_label}")?;
        }
        hunk.to_writer(&mut w)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
