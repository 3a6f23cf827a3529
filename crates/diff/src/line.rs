use derive_more::Display;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the status of a line in a diff view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineKind {
    /// The line only exists in the modified text
    #[display(fmt = "Added")]
    Added,

    /// The line only exists in the original text
    #[display(fmt = "Deleted")]
    Deleted,

    /// The line exists in both texts
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// A deleted or added line that is paired with an identical line on
    /// the other side of the edit
    #[display(fmt = "Moved")]
    Moved,
}

impl LineKind {
    /// Whether `self` and `other` are a deleted/added pair, in either order
    pub fn is_opposite_of(self, other: LineKind) -> bool {
        matches!(
            (self, other),
            (LineKind::Deleted, LineKind::Added) | (LineKind::Added, LineKind::Deleted)
        )
    }
}

/// The link from a moved line to its partner.
///
/// In the unified view the index points into the same sequence. In the
/// split view a source on the left points into the right sequence and a
/// target on the right points into the left sequence.
///
/// Serialized as a single `movedTo` or `movedFrom` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveLink {
    /// This line was deleted here and reappears at the index
    #[cfg_attr(feature = "serde", serde(rename = "movedTo"))]
    To(usize),

    /// This line was added here and came from the index
    #[cfg_attr(feature = "serde", serde(rename = "movedFrom"))]
    From(usize),
}

/// A contiguous sub-span of a line produced by the word-level refinement
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// The text of the span
    pub text: String,

    /// Whether the span differs from the paired line
    pub highlighted: bool,

    /// Byte offset of the span in the line's content
    pub start: usize,

    /// Byte offset one past the span
    pub end: usize,
}

impl Segment {
    pub fn new(text: impl Into<String>, highlighted: bool, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            text,
            highlighted,
            start,
            end,
        }
    }

    /// The byte range of this segment within its line
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A line of a diff view
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Line {
    content: String,
    kind: LineKind,
    line_number: Option<usize>,
    segments: Option<Vec<Segment>>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    move_link: Option<MoveLink>,
}

impl Line {
    /// Create a line. Moved lines are only produced by move detection, so a
    /// `Moved` kind here is rejected in debug builds.
    pub fn new(kind: LineKind, content: impl Into<String>, line_number: Option<usize>) -> Self {
        debug_assert!(kind != LineKind::Moved, "moved lines need a move link");
        Self {
            content: content.into(),
            kind,
            line_number,
            segments: None,
            move_link: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// 1-based line number, absent for added/deleted lines in the unified view
    pub fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    /// Word-level segments, present only on lines that were refined
    pub fn segments(&self) -> Option<&[Segment]> {
        self.segments.as_deref()
    }

    pub fn move_link(&self) -> Option<MoveLink> {
        self.move_link
    }

    /// Index of the partner this line moved to (set on the deleted side)
    pub fn moved_to(&self) -> Option<usize> {
        match self.move_link {
            Some(MoveLink::To(index)) => Some(index),
            _ => None,
        }
    }

    /// Index of the partner this line moved from (set on the added side)
    pub fn moved_from(&self) -> Option<usize> {
        match self.move_link {
            Some(MoveLink::From(index)) => Some(index),
            _ => None,
        }
    }

    /// Whether this line is on the original side of the edit
    pub fn is_old_side(&self) -> bool {
        match self.kind {
            LineKind::Deleted | LineKind::Unchanged => true,
            LineKind::Moved => self.moved_to().is_some(),
            LineKind::Added => false,
        }
    }

    /// Whether this line is on the modified side of the edit
    pub fn is_new_side(&self) -> bool {
        match self.kind {
            LineKind::Added | LineKind::Unchanged => true,
            LineKind::Moved => self.moved_from().is_some(),
            LineKind::Deleted => false,
        }
    }

    pub(crate) fn set_segments(&mut self, segments: Vec<Segment>) {
        self.segments = Some(segments);
    }

    pub(crate) fn mark_moved(&mut self, link: MoveLink) {
        self.kind = LineKind::Moved;
        self.move_link = Some(link);
    }
}

/// The two sides of a side-by-side view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitView {
    /// Deleted and unchanged lines in original order
    pub left: Vec<Line>,

    /// Added and unchanged lines in modified order
    pub right: Vec<Line>,
}

/// The result of comparing two texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffResult {
    /// Single interleaved sequence of both texts
    pub unified: Vec<Line>,

    /// Side-by-side sequences
    pub split: SplitView,
}

impl DiffResult {
    /// Check if the comparison found any difference
    pub fn has_changes(&self) -> bool {
        self.unified
            .iter()
            .any(|line| line.kind() != LineKind::Unchanged)
    }

    /// Check if there are no lines at all
    pub fn is_empty(&self) -> bool {
        self.unified.is_empty()
    }
}
