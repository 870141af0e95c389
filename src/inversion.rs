//! Inversion Counting
//!
//! An inversion is a pair of positions `i < j` with `data[i] > data[j]`.
//!
//! - `inversions_fast`: divide and conquer. Each half is counted recursively,
//!   then sorted copies of the two halves are walked merge-style to count the
//!   pairs that straddle the split. The input is only ever read.
//! - `inversion_slow`: the O(n²) double loop, kept as a reference oracle for
//!   validating the fast counter.

use std::ops::Range;

use crate::error::SortError;
use crate::merge_sort::merge_sort;
use crate::range::{check_range, midpoint};

/// Count the inversions of the whole slice by divide and conquer.
pub fn inversions_fast<T: Ord + Clone>(data: &[T]) -> u64 {
    if data.len() < 2 {
        return 0;
    }
    count_range(data, 0..data.len())
}

/// Count the inversions within `data[range]`.
///
/// An empty slice has no inversions whatever `range` says. Otherwise `range`
/// must be non-empty and lie within the slice.
///
/// # Example
///
/// ```
/// let data = vec![5, 4, 3, 2, 1];
/// assert_eq!(inversort::inversions_fast_range(&data, 0..5).unwrap(), 10);
/// assert_eq!(inversort::inversions_fast_range(&data, 1..3).unwrap(), 1);
/// ```
pub fn inversions_fast_range<T: Ord + Clone>(
    data: &[T],
    range: Range<usize>,
) -> Result<u64, SortError> {
    if data.is_empty() {
        return Ok(0);
    }
    check_range(&range, data.len())?;
    Ok(count_range(data, range))
}

fn count_range<T: Ord + Clone>(data: &[T], range: Range<usize>) -> u64 {
    let (start, end) = (range.start, range.end);
    match end - start {
        0 | 1 => 0,
        2 => u64::from(data[start] > data[end - 1]),
        _ => {
            let mid = midpoint(&range);
            let within = count_range(data, start..mid) + count_range(data, mid..end);

            let mut left = data[start..mid].to_vec();
            let mut right = data[mid..end].to_vec();
            merge_sort(&mut left);
            merge_sort(&mut right);

            within + count_split(&left, &right)
        }
    }
}

/// Count pairs `(a, b)` with `a` from `left`, `b` from `right` and `b < a`.
/// Both inputs must be sorted.
fn count_split<T: Ord>(left: &[T], right: &[T]) -> u64 {
    let (mut i, mut j) = (0, 0);
    let mut count = 0u64;

    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            // right[j] is smaller than every remaining element of left
            count += (left.len() - i) as u64;
            j += 1;
        } else {
            i += 1;
        }
    }

    count
}

/// Count inversions by checking every pair. O(n²) time, O(1) extra space.
pub fn inversion_slow<T: Ord>(data: &[T]) -> u64 {
    let mut count = 0u64;
    for (i, a) in data.iter().enumerate() {
        for b in &data[i + 1..] {
            if a > b {
                count += 1;
            }
        }
    }
    count
}
