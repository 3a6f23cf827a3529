//! Projection of the line-level edit script into unified and split views.

use crate::line::{Line, LineKind, SplitView};
use crate::line_diff::{PartKind, RawLinePart};

/// Build the single-column view.
///
/// Unchanged lines are numbered with one counter; added and deleted lines
/// carry no number.
pub fn project_unified(parts: &[RawLinePart]) -> Vec<Line> {
    let mut unified = Vec::with_capacity(parts.iter().map(RawLinePart::len).sum());
    let mut line_number = 1;

    for part in parts {
        for &content in part.lines() {
            let line = match part.kind {
                PartKind::Added => Line::new(LineKind::Added, content, None),
                PartKind::Removed => Line::new(LineKind::Deleted, content, None),
                PartKind::Unchanged => {
                    let line = Line::new(LineKind::Unchanged, content, Some(line_number));
                    line_number += 1;
                    line
                }
            };
            unified.push(line);
        }
    }

    unified
}

/// Build the side-by-side view.
///
/// Each side has its own counter. Unchanged lines go to both sides, each
/// showing its own side's text.
pub fn project_split(parts: &[RawLinePart]) -> SplitView {
    let mut split = SplitView::default();
    let mut left_line_number = 1;
    let mut right_line_number = 1;

    for part in parts {
        match part.kind {
            PartKind::Removed => {
                for &content in &part.old {
                    split
                        .left
                        .push(Line::new(LineKind::Deleted, content, Some(left_line_number)));
                    left_line_number += 1;
                }
            }
            PartKind::Added => {
                for &content in &part.new {
                    split
                        .right
                        .push(Line::new(LineKind::Added, content, Some(right_line_number)));
                    right_line_number += 1;
                }
            }
            PartKind::Unchanged => {
                for (&old, &new) in part.old.iter().zip(&part.new) {
                    split
                        .left
                        .push(Line::new(LineKind::Unchanged, old, Some(left_line_number)));
                    split
                        .right
                        .push(Line::new(LineKind::Unchanged, new, Some(right_line_number)));
                    left_line_number += 1;
                    right_line_number += 1;
                }
            }
        }
    }

    split
}
