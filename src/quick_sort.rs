//! Quicksort with a Selectable Pivot
//!
//! `partition` is a Hoare-style scheme anchored on the pivot value: the pivot
//! is parked at the front of the range, two cursors close in from both ends
//! swapping misplaced pairs, and the anchor is finally swapped into the slot
//! where the right cursor stopped.
//!
//! `quick_sort` picks a pivot per [`PivotStrategy`], partitions, and handles
//! the two sides. It recurses into the smaller side and loops on the larger
//! one, so stack depth stays O(log n) even when `First` or `Last` meet
//! already-sorted input. Running time on such input is still O(n²).
//!
//! Not stable.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use log::{debug, trace};
use rand::Rng;

use crate::error::SortError;
use crate::range::check_range;

/// Which index of a range seeds partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PivotStrategy {
    /// The first element of the range.
    First,
    /// The last element of the range.
    Last,
    /// A uniformly sampled element of the range.
    #[default]
    Random,
}

impl PivotStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [PivotStrategy; 3] = [
        PivotStrategy::First,
        PivotStrategy::Last,
        PivotStrategy::Random,
    ];

    /// Pick the pivot index for `start..end`. Only `Random` touches `rng`.
    fn select<R: Rng + ?Sized>(self, start: usize, end: usize, rng: &mut R) -> usize {
        match self {
            PivotStrategy::First => start,
            PivotStrategy::Last => end - 1,
            PivotStrategy::Random => rng.gen_range(start..end),
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PivotStrategy::First => "first",
            PivotStrategy::Last => "last",
            PivotStrategy::Random => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for PivotStrategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(PivotStrategy::First),
            "last" => Ok(PivotStrategy::Last),
            "random" => Ok(PivotStrategy::Random),
            _ => Err(SortError::InvalidPivotStrategy(s.to_string())),
        }
    }
}

/// Rearrange `data[range]` around the value at `pivot` and return the index
/// where that value ends up.
///
/// Afterwards every element left of the returned index is `<=` the pivot and
/// every element right of it is `>=` the pivot. Ties may be reordered.
///
/// # Example
///
/// ```
/// let mut data = vec![4, 9, 1, 7, 3];
/// let k = inversort::partition(&mut data, 0..5, 0).unwrap();
/// assert_eq!(data[k], 4);
/// assert!(data[..k].iter().all(|&x| x <= 4));
/// assert!(data[k + 1..].iter().all(|&x| x >= 4));
/// ```
pub fn partition<T: Ord>(
    data: &mut [T],
    range: Range<usize>,
    pivot: usize,
) -> Result<usize, SortError> {
    check_range(&range, data.len())?;
    if !range.contains(&pivot) {
        debug!(
            "rejecting pivot {} outside {}..{}",
            pivot,
            range.start,
            range.end
        );
        return Err(SortError::InvalidPivotIndex {
            pivot,
            start: range.start,
            end: range.end,
        });
    }

    let index = partition_unchecked(data, range.start, range.end, pivot);
    trace!(
        "partition {}..{}: pivot {} -> {}",
        range.start,
        range.end,
        pivot,
        index
    );
    Ok(index)
}

/// Core of [`partition`]; the caller guarantees `start <= pivot < end <= data.len()`.
fn partition_unchecked<T: Ord>(data: &mut [T], start: usize, end: usize, pivot: usize) -> usize {
    data.swap(pivot, start);

    let mut left = start;
    let mut right = end - 1;

    while left < right {
        while left < end && data[left] <= data[start] {
            left += 1;
        }
        // Stops at `start` at the latest, since the anchor is not greater than itself
        while data[right] > data[start] {
            right -= 1;
        }
        if left < right {
            data.swap(left, right);
        }
    }

    data.swap(start, right);
    right
}

/// Sort the whole slice in place using random pivots from the thread RNG.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_with(data, PivotStrategy::Random, &mut rand::thread_rng());
}

/// Sort the whole slice in place with the given strategy.
///
/// `rng` is only consulted by [`PivotStrategy::Random`].
pub fn quick_sort_with<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    strategy: PivotStrategy,
    rng: &mut R,
) {
    if data.len() > 1 {
        sort_range(data, 0, data.len(), strategy, rng);
    }
}

/// Sort `data[range]` in place with the given strategy.
///
/// An empty slice is a no-op whatever `range` says. Otherwise `range` must be
/// non-empty and lie within the slice.
///
/// # Example
///
/// ```
/// use inversort::{quick_sort_range, PivotStrategy};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let mut data = vec![9, 5, 4, 3, 1];
/// quick_sort_range(&mut data, 1..4, PivotStrategy::Last, &mut rng).unwrap();
/// assert_eq!(data, vec![9, 3, 4, 5, 1]);
///
/// assert!(quick_sort_range(&mut data, 2..6, PivotStrategy::First, &mut rng).is_err());
/// ```
pub fn quick_sort_range<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    range: Range<usize>,
    strategy: PivotStrategy,
    rng: &mut R,
) -> Result<(), SortError> {
    if data.is_empty() {
        return Ok(());
    }
    check_range(&range, data.len())?;
    sort_range(data, range.start, range.end, strategy, rng);
    Ok(())
}

fn sort_range<T: Ord, R: Rng + ?Sized>(
    data: &mut [T],
    mut start: usize,
    mut end: usize,
    strategy: PivotStrategy,
    rng: &mut R,
) {
    loop {
        match end - start {
            0 | 1 => return,
            2 => {
                if data[start] > data[end - 1] {
                    data.swap(start, end - 1);
                }
                return;
            }
            _ => {}
        }

        let pivot = strategy.select(start, end, rng);
        trace!("{} pivot for {}..{}: {}", strategy, start, end, pivot);
        let pivot = partition_unchecked(data, start, end, pivot);
        assert!(
            (start..end).contains(&pivot),
            "{}",
            SortError::PostconditionViolation { pivot, start, end }
        );

        // Recurse into the smaller side, continue with the larger one
        let (left, right) = ((start, pivot), (pivot + 1, end));
        let (small, large) = if pivot - start <= end - pivot - 1 {
            (left, right)
        } else {
            (right, left)
        };
        if small.1 - small.0 > 1 {
            sort_range(data, small.0, small.1, strategy, rng);
        }
        (start, end) = large;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::{is_permutation_of, is_sorted};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn assert_partitioned(data: &[i32], k: usize) {
        for (i, x) in data.iter().enumerate() {
            if i < k {
                assert!(*x <= data[k], "{:?} left of {} is greater", data, k);
            } else if i > k {
                assert!(*x >= data[k], "{:?} right of {} is smaller", data, k);
            }
        }
    }

    #[test]
    fn test_partition_mixed() {
        let mut data = vec![1, 4, 8, 95, 20, 40, 83, 65, 0, 111, 4444, 3];
        let original = data.clone();
        let k = partition(&mut data, 0..12, 3).unwrap();
        assert_eq!(data[k], 95);
        assert_partitioned(&data, k);
        assert!(is_permutation_of(&data, &original));
    }

    #[test]
    fn test_partition_every_pivot() {
        let original = vec![5, 3, 8, 3, 9, 1, 5, 7, 2, 5];
        for pivot in 0..original.len() {
            let mut data = original.clone();
            let k = partition(&mut data, 0..original.len(), pivot).unwrap();
            assert_eq!(data[k], original[pivot]);
            assert_partitioned(&data, k);
        }
    }

    #[test]
    fn test_partition_single_element() {
        let mut data = vec![7, 3, 9];
        assert_eq!(partition(&mut data, 1..2, 1), Ok(1));
        assert_eq!(data, vec![7, 3, 9]);
    }

    #[test]
    fn test_partition_subrange() {
        let mut data = vec![100, 6, 2, 9, 4, 1, -100];
        let k = partition(&mut data, 1..6, 4).unwrap();
        assert!((1..6).contains(&k));
        assert_eq!(data[k], 4);
        assert_eq!(data[0], 100);
        assert_eq!(data[6], -100);
        assert!(data[1..k].iter().all(|&x| x <= 4));
        assert!(data[k + 1..6].iter().all(|&x| x >= 4));
    }

    #[test]
    fn test_partition_all_equal() {
        let mut data = vec![3; 8];
        let k = partition(&mut data, 0..8, 2).unwrap();
        assert!(k < 8);
        assert_eq!(data, vec![3; 8]);
    }

    #[test]
    fn test_partition_invalid_arguments() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(
            partition(&mut empty, 0..0, 0),
            Err(SortError::InvalidRange {
                start: 0,
                end: 0,
                len: 0
            })
        );

        let mut data = vec![3, 1, 2];
        assert!(matches!(
            partition(&mut data, 0..4, 0),
            Err(SortError::InvalidRange { .. })
        ));
        assert_eq!(
            partition(&mut data, 0..2, 2),
            Err(SortError::InvalidPivotIndex {
                pivot: 2,
                start: 0,
                end: 2
            })
        );
        assert_eq!(data, vec![3, 1, 2]);
    }

    #[test]
    fn test_quick_sort_tiny_inputs() {
        let mut data: Vec<u32> = vec![];
        quick_sort(&mut data);
        assert!(data.is_empty());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(quick_sort_range(&mut data, 0..0, PivotStrategy::First, &mut rng).is_ok());

        let mut data = vec![42u32];
        quick_sort(&mut data);
        assert_eq!(data, vec![42]);

        let mut data = vec![2, 1];
        quick_sort(&mut data);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_quick_sort_every_strategy() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for strategy in PivotStrategy::ALL {
            let mut data = vec![64, 34, 25, 12, 22, 11, 90];
            quick_sort_with(&mut data, strategy, &mut rng);
            assert_eq!(data, vec![11, 12, 22, 25, 34, 64, 90], "{}", strategy);

            for _ in 0..50 {
                let size = rng.gen_range(10..=100);
                let original: Vec<i32> = (0..size).map(|_| rng.gen_range(0..=1000)).collect();
                let mut data = original.clone();
                quick_sort_with(&mut data, strategy, &mut rng);
                assert!(is_sorted(&data));
                assert!(is_permutation_of(&data, &original));
            }
        }
    }

    #[test]
    fn test_quick_sort_large_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<u32> = (0..10_000).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort_unstable();
        quick_sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_quick_sort_sorted_input_first_and_last() {
        // Worst case for First/Last; must finish without exhausting the stack
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for strategy in [PivotStrategy::First, PivotStrategy::Last] {
            let mut data: Vec<u32> = (0..5_000).collect();
            quick_sort_with(&mut data, strategy, &mut rng);
            assert!(is_sorted(&data));

            let mut data: Vec<u32> = (0..5_000).rev().collect();
            quick_sort_with(&mut data, strategy, &mut rng);
            assert!(is_sorted(&data));
        }
    }

    #[test]
    fn test_quick_sort_duplicates() {
        let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        quick_sort_with(&mut data, PivotStrategy::Last, &mut rng);
        assert_eq!(data, vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);

        let mut data = vec![5u8; 1000];
        quick_sort_with(&mut data, PivotStrategy::First, &mut rng);
        assert_eq!(data, vec![5u8; 1000]);
    }

    #[test]
    fn test_quick_sort_seeded_is_deterministic() {
        let original: Vec<i32> = (0..200).map(|i| (i * 37) % 101).collect();
        let mut a = original.clone();
        let mut b = original.clone();
        quick_sort_with(&mut a, PivotStrategy::Random, &mut ChaCha8Rng::seed_from_u64(9));
        quick_sort_with(&mut b, PivotStrategy::Random, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(is_sorted(&a));
    }

    #[test]
    fn test_quick_sort_range() {
        let mut data = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        quick_sort_range(&mut data, 2..7, PivotStrategy::Random, &mut rng).unwrap();
        assert_eq!(data, vec![9, 8, 3, 4, 5, 6, 7, 2, 1]);

        assert!(matches!(
            quick_sort_range(&mut data, 5..10, PivotStrategy::First, &mut rng),
            Err(SortError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_pivot_strategy_parse() {
        assert_eq!("first".parse::<PivotStrategy>(), Ok(PivotStrategy::First));
        assert_eq!(" LAST ".parse::<PivotStrategy>(), Ok(PivotStrategy::Last));
        assert_eq!("Random".parse::<PivotStrategy>(), Ok(PivotStrategy::Random));
        assert_eq!(
            "median".parse::<PivotStrategy>(),
            Err(SortError::InvalidPivotStrategy("median".to_string()))
        );
        for strategy in PivotStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<PivotStrategy>(), Ok(strategy));
        }
        assert_eq!(PivotStrategy::default(), PivotStrategy::Random);
    }
}
