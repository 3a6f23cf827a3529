use derive_more::Display;
use std::time::Duration;
use thiserror::Error;

/// Which input document a limit was measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Side {
    #[display(fmt = "original")]
    Original,

    #[display(fmt = "modified")]
    Modified,
}

/// The resource a comparison ran out of
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Exhaustion {
    /// One of the inputs has more lines than the configured maximum
    #[display(fmt = "{} text has {} lines, limit is {}", side, lines, limit)]
    LineLimit {
        side: Side,
        lines: usize,
        limit: usize,
    },

    /// The time budget elapsed before the comparison finished
    #[display(fmt = "time budget of {:?} elapsed", _0)]
    Deadline(Duration),
}

/// Errors produced by a comparison.
///
/// Diffing arbitrary text never fails on its own; the only failure is
/// running out of one of the budgets set on [`crate::DiffConfig`]. A failed
/// comparison yields no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    #[error("comparison failed: {0}")]
    ResourceExhausted(Exhaustion),
}

impl DiffError {
    pub fn is_resource_exhausted(&self) -> bool {
        matches!(self, DiffError::ResourceExhausted(_))
    }

    /// The exhausted resource
    pub fn exhaustion(&self) -> &Exhaustion {
        match self {
            DiffError::ResourceExhausted(exhaustion) => exhaustion,
        }
    }
}

pub type Result<T, E = DiffError> = std::result::Result<T, E>;
