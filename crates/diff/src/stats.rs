use crate::line::{DiffResult, Line, LineKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line counts of a diff, as shown in a viewer header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Lines only in the modified text, moved lines excluded
    pub added: usize,

    /// Lines only in the original text, moved lines excluded
    pub deleted: usize,

    /// Lines present in both texts
    pub unchanged: usize,

    /// Moved pairs
    pub moved: usize,
}

impl DiffStats {
    /// Count the lines of a unified sequence
    pub fn from_lines(lines: &[Line]) -> Self {
        let mut stats = Self::default();
        for line in lines {
            match line.kind() {
                LineKind::Added => stats.added += 1,
                LineKind::Deleted => stats.deleted += 1,
                LineKind::Unchanged => stats.unchanged += 1,
                // Count each pair once, from its source line
                LineKind::Moved if line.moved_to().is_some() => stats.moved += 1,
                LineKind::Moved => {}
            }
        }
        stats
    }

    pub fn has_changes(&self) -> bool {
        self.added + self.deleted + self.moved > 0
    }

    /// Total number of lines in the original text
    pub fn original_lines(&self) -> usize {
        self.deleted + self.unchanged + self.moved
    }

    /// Total number of lines in the modified text
    pub fn modified_lines(&self) -> usize {
        self.added + self.unchanged + self.moved
    }
}

impl DiffResult {
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_lines(&self.unified)
    }
}
