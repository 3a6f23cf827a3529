use log::debug;
use ropey::Rope;
use similar::{capture_diff_slices_deadline, DiffTag};

use crate::error::{Result, Side};
use crate::normalize::normalize_line;
use crate::options::{Budget, DiffOptions};

/// The classification of a run of lines in the line-level edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Added,
    Removed,
    Unchanged,
}

/// A run of consecutive lines sharing one classification.
///
/// Lines keep their original text. `old` holds the original-side lines of
/// removed and unchanged parts, `new` the modified-side lines of added and
/// unchanged parts. For unchanged parts both have the same length and line
/// up pairwise; they can differ in text when normalization is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLinePart<'a> {
    pub kind: PartKind,
    pub old: Vec<&'a str>,
    pub new: Vec<&'a str>,
}

impl<'a> RawLinePart<'a> {
    /// The lines this part shows: the original side unless it was added
    pub fn lines(&self) -> &[&'a str] {
        match self.kind {
            PartKind::Added => &self.new,
            PartKind::Removed | PartKind::Unchanged => &self.old,
        }
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// The part's lines joined with newlines
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// Split text into lines on `\n`, `\r\n` and `\r`.
///
/// Line terminators are not part of the returned lines. A trailing empty
/// line left over by a final terminator is dropped, so `""` has no lines
/// and `"a\n"` has one.
pub fn split_lines(text: &str) -> Vec<&str> {
    let rope = Rope::from_str(text);
    let count = rope.len_lines();
    let mut lines = Vec::with_capacity(count);

    for index in 0..count {
        let start = rope.line_to_byte(index);
        let end = if index + 1 < count {
            rope.line_to_byte(index + 1)
        } else {
            text.len()
        };
        lines.push(strip_terminator(&text[start..end]));
    }

    if lines.last() == Some(&"") {
        lines.pop();
    }

    lines
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}

/// Compute the line-level edit script between two texts.
///
/// Lines are matched on their normalized keys and reported with their
/// original text. A replaced block is reported as its removed part
/// followed by its added part.
pub fn diff_lines<'a>(
    original: &'a str,
    modified: &'a str,
    options: &DiffOptions,
) -> Vec<RawLinePart<'a>> {
    // An unlimited budget can never fail
    diff_lines_within(original, modified, options, &Budget::unlimited()).unwrap_or_default()
}

pub(crate) fn diff_lines_within<'a>(
    original: &'a str,
    modified: &'a str,
    options: &DiffOptions,
    budget: &Budget,
) -> Result<Vec<RawLinePart<'a>>> {
    let old_lines = split_lines(original);
    let new_lines = split_lines(modified);
    budget.check_lines(Side::Original, old_lines.len())?;
    budget.check_lines(Side::Modified, new_lines.len())?;

    let old_keys: Vec<_> = old_lines
        .iter()
        .map(|line| normalize_line(line, options))
        .collect();
    let new_keys: Vec<_> = new_lines
        .iter()
        .map(|line| normalize_line(line, options))
        .collect();

    let ops = capture_diff_slices_deadline(
        budget.algorithm(),
        &old_keys,
        &new_keys,
        budget.deadline(),
    );
    budget.check_deadline()?;

    let mut parts = Vec::with_capacity(ops.len());
    for op in &ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        let old = old_lines[old_range].to_vec();
        let new = new_lines[new_range].to_vec();

        match tag {
            DiffTag::Equal => parts.push(RawLinePart {
                kind: PartKind::Unchanged,
                old,
                new,
            }),
            DiffTag::Delete => parts.push(RawLinePart {
                kind: PartKind::Removed,
                old,
                new: Vec::new(),
            }),
            DiffTag::Insert => parts.push(RawLinePart {
                kind: PartKind::Added,
                old: Vec::new(),
                new,
            }),
            DiffTag::Replace => {
                parts.push(RawLinePart {
                    kind: PartKind::Removed,
                    old,
                    new: Vec::new(),
                });
                parts.push(RawLinePart {
                    kind: PartKind::Added,
                    old: Vec::new(),
                    new,
                });
            }
        }
    }

    debug!(
        "line diff: {} old lines, {} new lines, {} parts",
        old_lines.len(),
        new_lines.len(),
        parts.len()
    );

    Ok(parts)
}
