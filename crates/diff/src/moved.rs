//! Detection of lines that moved rather than changed.
//!
//! A deleted line and an added line whose trimmed contents are identical
//! are relabelled as a moved pair. Deleted lines are matched in order: the
//! earliest unmatched deleted line with the same content is taken first.

use log::debug;
use std::collections::{HashMap, VecDeque};

use crate::line::{Line, LineKind, MoveLink, SplitView};

/// Pair deleted lines with added lines of identical trimmed content.
///
/// Returns `(deleted_index, added_index)` pairs in the order the added
/// lines appear.
fn pair_moves<'a>(
    deleted: impl Iterator<Item = (usize, &'a str)>,
    added: impl Iterator<Item = (usize, &'a str)>,
) -> Vec<(usize, usize)> {
    let mut queues: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (index, content) in deleted {
        queues.entry(content.trim()).or_default().push_back(index);
    }

    let mut pairs = Vec::new();
    for (index, content) in added {
        if let Some(from) = queues
            .get_mut(content.trim())
            .and_then(|queue| queue.pop_front())
        {
            pairs.push((from, index));
        }
    }

    pairs
}

fn lines_of_kind(lines: &[Line], kind: LineKind) -> impl Iterator<Item = (usize, &str)> {
    lines
        .iter()
        .enumerate()
        .filter(move |(_, line)| line.kind() == kind)
        .map(|(index, line)| (index, line.content()))
}

/// Relabel moved lines within one sequence.
///
/// Both lines of a pair point at each other's index in `lines`. Returns
/// the number of pairs found.
pub fn detect_moved(lines: &mut [Line]) -> usize {
    let pairs = pair_moves(
        lines_of_kind(lines, LineKind::Deleted),
        lines_of_kind(lines, LineKind::Added),
    );

    for &(deleted, added) in &pairs {
        lines[deleted].mark_moved(MoveLink::To(added));
        lines[added].mark_moved(MoveLink::From(deleted));
    }

    if !pairs.is_empty() {
        debug!("detected {} moved lines", pairs.len());
    }

    pairs.len()
}

/// Relabel moved lines across the two sides of a split view.
///
/// Deleted lines on the left are paired with added lines on the right. A
/// left line's link indexes into `right` and a right line's link indexes
/// into `left`. Returns the number of pairs found.
pub fn detect_moved_split(split: &mut SplitView) -> usize {
    let pairs = pair_moves(
        lines_of_kind(&split.left, LineKind::Deleted),
        lines_of_kind(&split.right, LineKind::Added),
    );

    for &(deleted, added) in &pairs {
        split.left[deleted].mark_moved(MoveLink::To(added));
        split.right[added].mark_moved(MoveLink::From(deleted));
    }

    if !pairs.is_empty() {
        debug!("detected {} moved lines across split sides", pairs.len());
    }

    pairs.len()
}
