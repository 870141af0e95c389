//! Half-open range validation shared by every entry point.

use std::ops::Range;

use log::debug;

use crate::error::SortError;

/// Check that `range` is a non-empty, in-bounds window into a slice of `len`
/// elements.
pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<(), SortError> {
    if range.start >= range.end || range.end > len {
        debug!(
            "rejecting range {}..{} for length {}",
            range.start, range.end, len
        );
        return Err(SortError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

/// Midpoint used to split `range` for divide-and-conquer.
#[inline]
pub(crate) fn midpoint(range: &Range<usize>) -> usize {
    range.start + (range.end - range.start) / 2
}
