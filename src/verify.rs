//! Result checks for sorted output.
//!
//! Used by the demo binary to verify every run, and by the unit tests.

/// Check if a slice is sorted in non-decreasing order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Check if `data` holds exactly the same multiset of elements as `original`.
pub fn is_permutation_of<T: Ord + Clone>(data: &[T], original: &[T]) -> bool {
    if data.len() != original.len() {
        return false;
    }
    let mut a = data.to_vec();
    let mut b = original.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
