//! Plain-text forms of a diff result, for copying and exporting.

use std::fmt::Write;

use crate::line::{Line, LineKind, SplitView};

/// The one-character marker of a line: `+`, `-`, space, or `<`/`>` for the
/// source/target of a move
pub fn marker(line: &Line) -> char {
    match line.kind() {
        LineKind::Added => '+',
        LineKind::Deleted => '-',
        LineKind::Unchanged => ' ',
        LineKind::Moved if line.moved_to().is_some() => '<',
        LineKind::Moved => '>',
    }
}

/// Render a unified sequence as marker-prefixed text, one line per entry
pub fn unified_text(lines: &[Line]) -> String {
    let mut out = String::new();
    for line in lines {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}{}", marker(line), line.content());
    }
    out
}

/// A row of a side-by-side layout
pub type SplitRow<'a> = (Option<&'a Line>, Option<&'a Line>);

/// Align the two sides of a split view into rows.
///
/// Unchanged lines share a row. A line that only exists on the left is put
/// next to the following right-only line when there is one, otherwise it
/// gets a row to itself.
pub fn split_rows(split: &SplitView) -> Vec<SplitRow<'_>> {
    let mut rows = Vec::with_capacity(split.left.len().max(split.right.len()));
    let mut left = split.left.iter().peekable();
    let mut right = split.right.iter().peekable();

    loop {
        let left_only = left.peek().map(|line| line.kind() != LineKind::Unchanged);
        let right_only = right.peek().map(|line| line.kind() != LineKind::Unchanged);

        let row = match (left_only, right_only) {
            (None, None) => break,
            (Some(_), None) | (Some(true), Some(false)) => (left.next(), None),
            (None, Some(_)) | (Some(false), Some(true)) => (None, right.next()),
            (Some(_), Some(_)) => (left.next(), right.next()),
        };
        rows.push(row);
    }

    rows
}
