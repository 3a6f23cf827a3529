use log::warn;
use similar::Algorithm;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DiffError, Exhaustion, Result, Side};
use crate::line::DiffResult;

/// Comparison switches supplied once per call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffOptions {
    /// Collapse whitespace runs to one space and trim before comparing
    pub ignore_whitespace: bool,

    /// Case-fold before comparing
    pub ignore_case: bool,

    /// Relabel matching deleted/added lines as moved pairs
    pub detect_moved: bool,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    pub fn detect_moved(mut self, detect: bool) -> Self {
        self.detect_moved = detect;
        self
    }

    /// Whether any normalization applies to the comparison basis
    pub fn normalizes(&self) -> bool {
        self.ignore_whitespace || self.ignore_case
    }
}

/// Line limit per side used unless configured otherwise
pub const DEFAULT_MAX_LINES: usize = 100_000;

/// Time budget of a comparison unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for a comparison: the options plus resource limits.
///
/// By default a comparison refuses texts longer than [`DEFAULT_MAX_LINES`]
/// and fails once it runs longer than [`DEFAULT_TIMEOUT`]. Use
/// [`DiffConfig::unbounded`] to lift both limits.
///
/// ```
/// use shams_diff::DiffConfig;
///
/// let result = DiffConfig::default()
///     .ignore_case(true)
///     .compare("Hello", "hello")
///     .unwrap();
/// assert!(!result.has_changes());
/// ```
#[derive(Debug, Clone)]
pub struct DiffConfig {
    options: DiffOptions,
    algorithm: Algorithm,
    max_lines: Option<usize>,
    timeout: Option<Duration>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            options: DiffOptions::default(),
            algorithm: Algorithm::Myers,
            max_lines: Some(DEFAULT_MAX_LINES),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl DiffConfig {
    pub fn new(options: DiffOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    pub fn ignore_whitespace(mut self, ignore: bool) -> Self {
        self.options.ignore_whitespace = ignore;
        self
    }

    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.options.ignore_case = ignore;
        self
    }

    pub fn detect_moved(mut self, detect: bool) -> Self {
        self.options.detect_moved = detect;
        self
    }

    /// Set the LCS algorithm used for both the line diff and word sub-diffs
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Refuse inputs with more lines than this
    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Fail the comparison if it runs longer than this
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Remove the line limit and the time budget
    pub fn unbounded(mut self) -> Self {
        self.max_lines = None;
        self.timeout = None;
        self
    }

    pub fn get_options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn get_algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn get_max_lines(&self) -> Option<usize> {
        self.max_lines
    }

    pub fn get_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Compare two texts with this configuration
    pub fn compare(&self, original: &str, modified: &str) -> Result<DiffResult> {
        crate::text_diff::run(self, original, modified)
    }

    pub(crate) fn budget(&self) -> Budget {
        Budget::new(self.algorithm, self.max_lines, self.timeout)
    }
}

/// Per-call resource budget, created fresh for every comparison
#[derive(Debug, Clone, Copy)]
pub(crate) struct Budget {
    algorithm: Algorithm,
    max_lines: Option<usize>,
    timeout: Option<Duration>,
    deadline: Option<Instant>,
}

impl Budget {
    pub(crate) fn new(algorithm: Algorithm, max_lines: Option<usize>, timeout: Option<Duration>) -> Self {
        Self {
            algorithm,
            max_lines,
            timeout,
            deadline: timeout.and_then(|timeout| Instant::now().checked_add(timeout)),
        }
    }

    pub(crate) fn unlimited() -> Self {
        Self::new(Algorithm::Myers, None, None)
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(crate) fn check_lines(&self, side: Side, lines: usize) -> Result<()> {
        match self.max_lines {
            Some(limit) if lines > limit => {
                warn!("{} text has {} lines, limit is {}", side, lines, limit);
                Err(DiffError::ResourceExhausted(Exhaustion::LineLimit {
                    side,
                    lines,
                    limit,
                }))
            }
            _ => Ok(()),
        }
    }

    /// Fails once the deadline has passed. The LCS primitive degrades to a
    /// non-minimal script instead of stopping at its deadline, so every
    /// stage checks in afterwards.
    pub(crate) fn check_deadline(&self) -> Result<()> {
        match (self.deadline, self.timeout) {
            (Some(deadline), Some(timeout)) if Instant::now() >= deadline => {
                warn!("comparison exceeded its time budget of {:?}", timeout);
                Err(DiffError::ResourceExhausted(Exhaustion::Deadline(timeout)))
            }
            _ => Ok(()),
        }
    }
}
