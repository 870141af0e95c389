//! Error type shared by the sorting and counting entry points.
//!
//! Every variant carries the values that caused it, so a caller can report
//! the offending range or pivot without re-deriving it.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error returned by the range-taking entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// `start..end` is empty, reversed, or runs past the end of the slice.
    InvalidRange {
        /// Requested start index (inclusive).
        start: usize,
        /// Requested end index (exclusive).
        end: usize,
        /// Length of the slice the range was applied to.
        len: usize,
    },

    /// The pivot index given to `partition` lies outside `start..end`.
    InvalidPivotIndex {
        /// Requested pivot index.
        pivot: usize,
        /// Range start (inclusive).
        start: usize,
        /// Range end (exclusive).
        end: usize,
    },

    /// A pivot strategy name that is not `first`, `last` or `random`.
    InvalidPivotStrategy(String),

    /// Partitioning reported a pivot position outside the range it was given.
    ///
    /// This indicates a logic defect rather than bad input.
    PostconditionViolation {
        /// Pivot position reported by partition.
        pivot: usize,
        /// Range start (inclusive).
        start: usize,
        /// Range end (exclusive).
        end: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::InvalidRange { start, end, len } => write!(
                f,
                "Invalid range: {}..{} for a sequence of length {}",
                start, end, len
            ),
            SortError::InvalidPivotIndex { pivot, start, end } => write!(
                f,
                "Invalid pivot index: {} is not in {}..{}",
                pivot, start, end
            ),
            SortError::InvalidPivotStrategy(name) => write!(
                f,
                "Invalid pivot strategy: '{}' (expected first, last or random)",
                name
            ),
            SortError::PostconditionViolation { pivot, start, end } => write!(
                f,
                "Postcondition violated: partition returned {} outside {}..{}",
                pivot, start, end
            ),
        }
    }
}

impl Error for SortError {}
