// Text comparison engine for Shams
// This crate computes line diffs, word-level highlights and moved lines

mod error;
mod line;
mod line_diff;
mod moved;
mod normalize;
mod options;
mod project;
mod refine;
mod render;
mod stats;
mod text_diff;

pub use error::{DiffError, Exhaustion, Result, Side};
pub use line::{DiffResult, Line, LineKind, MoveLink, Segment, SplitView};
pub use line_diff::{diff_lines, split_lines, PartKind, RawLinePart};
pub use moved::{detect_moved, detect_moved_split};
pub use normalize::{normalize, normalize_line};
pub use options::{DiffConfig, DiffOptions, DEFAULT_MAX_LINES, DEFAULT_TIMEOUT};
pub use project::{project_split, project_unified};
pub use refine::{diff_words, refine_segments, split_words, WordDiff};
pub use render::{marker, split_rows, unified_text, SplitRow};
pub use stats::DiffStats;
pub use text_diff::{compare, TextDiff};

pub use similar::Algorithm;
