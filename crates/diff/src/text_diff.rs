use log::debug;
use std::time::Instant;

use crate::error::Result;
use crate::line::DiffResult;
use crate::line_diff::diff_lines_within;
use crate::moved::{detect_moved, detect_moved_split};
use crate::options::{DiffConfig, DiffOptions};
use crate::project::{project_split, project_unified};
use crate::refine::refine_segments_within;
use crate::render;

/// Wrapper around text comparison operations
pub struct TextDiff;

impl TextDiff {
    /// Compare two texts with the given options and the default resource limits
    pub fn compare(original: &str, modified: &str, options: DiffOptions) -> Result<DiffResult> {
        DiffConfig::new(options).compare(original, modified)
    }

    /// Start configuring a comparison
    pub fn configure() -> DiffConfig {
        DiffConfig::default()
    }

    /// Generate a marker-prefixed unified diff string
    pub fn unified_text(original: &str, modified: &str, options: DiffOptions) -> Result<String> {
        let result = Self::compare(original, modified, options)?;
        Ok(render::unified_text(&result.unified))
    }
}

/// Compare two texts.
///
/// The texts are split into lines and matched on their normalized form;
/// the returned lines carry the original text. The unified view and both
/// sides of the split view are refined word by word, then, if requested,
/// moved lines are paired up.
///
/// Inputs longer than [`DEFAULT_MAX_LINES`](crate::DEFAULT_MAX_LINES) lines
/// or comparisons running past [`DEFAULT_TIMEOUT`](crate::DEFAULT_TIMEOUT)
/// fail with [`DiffError::ResourceExhausted`](crate::DiffError::ResourceExhausted).
pub fn compare(original: &str, modified: &str, options: DiffOptions) -> Result<DiffResult> {
    TextDiff::compare(original, modified, options)
}

pub(crate) fn run(config: &DiffConfig, original: &str, modified: &str) -> Result<DiffResult> {
    let started = Instant::now();
    let options = config.get_options();
    let budget = config.budget();

    let parts = diff_lines_within(original, modified, options, &budget)?;

    let mut unified = project_unified(&parts);
    let mut split = project_split(&parts);

    refine_segments_within(&mut unified, &budget)?;
    refine_segments_within(&mut split.left, &budget)?;
    refine_segments_within(&mut split.right, &budget)?;

    if options.detect_moved {
        detect_moved(&mut unified);
        detect_moved_split(&mut split);
    }

    debug!(
        "compared {} unified lines ({} left, {} right) in {:?}",
        unified.len(),
        split.left.len(),
        split.right.len(),
        started.elapsed()
    );

    Ok(DiffResult { unified, split })
}
