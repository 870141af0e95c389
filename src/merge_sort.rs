//! Top-down Merge Sort
//!
//! Recursively sorts both halves of a range, then merges them back through
//! temporary copies of each half. The copies cost O(n) extra space per merge
//! level but keep the merge simple and stable: on ties the left half wins,
//! so equal elements keep their original relative order.
//!
//! Complexity: O(n log n) comparisons in every case.

use std::ops::Range;

use crate::error::SortError;
use crate::range::{check_range, midpoint};

/// Sort the whole slice in place, ascending and stable.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() > 1 {
        sort_range(data, 0..data.len());
    }
}

/// Sort `data[range]` in place, ascending and stable.
///
/// An empty slice is a no-op whatever `range` says. Otherwise `range` must be
/// non-empty and lie within the slice.
///
/// # Example
///
/// ```
/// let mut data = vec![9, 5, 4, 3, 1];
/// inversort::merge_sort_range(&mut data, 1..4).unwrap();
/// assert_eq!(data, vec![9, 3, 4, 5, 1]);
/// ```
pub fn merge_sort_range<T: Ord + Clone>(
    data: &mut [T],
    range: Range<usize>,
) -> Result<(), SortError> {
    if data.is_empty() {
        return Ok(());
    }
    check_range(&range, data.len())?;
    sort_range(data, range);
    Ok(())
}

fn sort_range<T: Ord + Clone>(data: &mut [T], range: Range<usize>) {
    let (start, end) = (range.start, range.end);
    match end - start {
        0 | 1 => {}
        2 => {
            if data[start] > data[end - 1] {
                data.swap(start, end - 1);
            }
        }
        _ => {
            let mid = midpoint(&range);
            sort_range(data, start..mid);
            sort_range(data, mid..end);
            merge(data, start, mid, end);
        }
    }
}

/// Merge the sorted runs `data[start..mid]` and `data[mid..end]` back into
/// `data[start..end]`.
fn merge<T: Ord + Clone>(data: &mut [T], start: usize, mid: usize, end: usize) {
    let left = data[start..mid].to_vec();
    let right = data[mid..end].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in &mut data[start..end] {
        // Take from the left on ties to keep the merge stable
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
