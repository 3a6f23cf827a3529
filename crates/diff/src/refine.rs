//! Word-level refinement of adjacent deleted/added line pairs.

use log::trace;
use similar::{capture_diff_slices_deadline, DiffTag};

use crate::error::Result;
use crate::line::{Line, LineKind, Segment};
use crate::options::Budget;

/// Split a line into alternating runs of whitespace and non-whitespace.
///
/// The tokens are contiguous and concatenate back to the input.
pub fn split_words(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (offset, ch) in line.char_indices() {
        let is_whitespace = ch.is_whitespace();
        match in_whitespace {
            Some(previous) if previous != is_whitespace => {
                tokens.push(&line[start..offset]);
                start = offset;
            }
            _ => {}
        }
        in_whitespace = Some(is_whitespace);
    }

    if start < line.len() {
        tokens.push(&line[start..]);
    }

    tokens
}

/// Segments of both sides of a replaced line, computed from a word diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDiff {
    pub deleted: Vec<Segment>,
    pub added: Vec<Segment>,
}

/// Diff two lines word by word.
///
/// The deleted side gets the unchanged and removed spans, the added side
/// the unchanged and inserted spans. Changed spans are highlighted.
pub fn diff_words(deleted: &str, added: &str) -> WordDiff {
    // An unlimited budget can never fail
    diff_words_within(deleted, added, &Budget::unlimited()).unwrap_or_default()
}

pub(crate) fn diff_words_within(deleted: &str, added: &str, budget: &Budget) -> Result<WordDiff> {
    let old_tokens = split_words(deleted);
    let new_tokens = split_words(added);
    let old_offsets = token_offsets(&old_tokens);
    let new_offsets = token_offsets(&new_tokens);

    let ops = capture_diff_slices_deadline(
        budget.algorithm(),
        &old_tokens,
        &new_tokens,
        budget.deadline(),
    );
    budget.check_deadline()?;

    let mut diff = WordDiff::default();
    for op in &ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        let old_span = old_offsets[old_range.start]..old_offsets[old_range.end];
        let new_span = new_offsets[new_range.start]..new_offsets[new_range.end];

        match tag {
            DiffTag::Equal => {
                push_segment(&mut diff.deleted, deleted, old_span, false);
                push_segment(&mut diff.added, added, new_span, false);
            }
            DiffTag::Delete => push_segment(&mut diff.deleted, deleted, old_span, true),
            DiffTag::Insert => push_segment(&mut diff.added, added, new_span, true),
            DiffTag::Replace => {
                push_segment(&mut diff.deleted, deleted, old_span, true);
                push_segment(&mut diff.added, added, new_span, true);
            }
        }
    }

    Ok(diff)
}

/// Byte offset of every token boundary, including the end of the line
fn token_offsets(tokens: &[&str]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(tokens.len() + 1);
    let mut offset = 0;
    offsets.push(offset);
    for token in tokens {
        offset += token.len();
        offsets.push(offset);
    }
    offsets
}

fn push_segment(
    segments: &mut Vec<Segment>,
    line: &str,
    span: std::ops::Range<usize>,
    highlighted: bool,
) {
    if span.is_empty() {
        return;
    }

    // Merge with the previous span when the highlighting matches
    if let Some(last) = segments.last_mut() {
        if last.highlighted == highlighted && last.end == span.start {
            last.text.push_str(&line[span.clone()]);
            last.end = span.end;
            return;
        }
    }

    segments.push(Segment::new(&line[span.clone()], highlighted, span.start));
}

/// Attach word-level segments to every adjacent deleted/added pair.
///
/// The scan pairs a line with its successor when their kinds are opposite
/// and then skips past both, so a line is refined at most once. Lines
/// without such a neighbour keep no segments.
pub fn refine_segments(lines: &mut [Line]) {
    // An unlimited budget can never fail
    refine_segments_within(lines, &Budget::unlimited()).unwrap_or_default()
}

pub(crate) fn refine_segments_within(lines: &mut [Line], budget: &Budget) -> Result<()> {
    let mut index = 0;
    let mut pairs = 0;

    while index + 1 < lines.len() {
        if !lines[index].kind().is_opposite_of(lines[index + 1].kind()) {
            index += 1;
            continue;
        }

        let (head, tail) = lines.split_at_mut(index + 1);
        let (deleted, added) = match head[index].kind() {
            LineKind::Deleted => (&mut head[index], &mut tail[0]),
            _ => (&mut tail[0], &mut head[index]),
        };

        let diff = diff_words_within(deleted.content(), added.content(), budget)?;
        trace!(
            "refined pair at {}: {} deleted segments, {} added segments",
            index,
            diff.deleted.len(),
            diff.added.len()
        );
        deleted.set_segments(diff.deleted);
        added.set_segments(diff.added);

        pairs += 1;
        index += 2;
    }

    if pairs > 0 {
        trace!("refined {} line pairs", pairs);
    }

    Ok(())
}
