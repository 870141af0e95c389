//! Comparison-based sorting and inversion counting.
//!
//! - [`merge_sort`]: stable top-down merge sort through temporary half buffers
//! - [`quick_sort`]: in-place quicksort with a [`PivotStrategy`] of first, last or random
//! - [`partition`]: the Hoare-style partition step quicksort is built on
//! - [`inversions_fast`] / [`inversion_slow`]: divide-and-conquer inversion count and
//!   the O(n²) oracle it is validated against
//!
//! Every operation works on a caller-owned slice of a totally ordered type.
//! The `*_range` variants address a half-open window `start..end` and report
//! an out-of-bounds or empty window as [`SortError::InvalidRange`]; an empty
//! slice is always a no-op.
//!
//! ```
//! use inversort::{inversion_slow, inversions_fast, merge_sort};
//!
//! let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
//! assert_eq!(inversions_fast(&data), inversion_slow(&data));
//!
//! merge_sort(&mut data);
//! assert_eq!(inversions_fast(&data), 0);
//! ```

pub mod error;
pub mod inversion;
pub mod merge_sort;
pub mod quick_sort;
mod range;
pub mod verify;

pub use error::SortError;
pub use inversion::{inversion_slow, inversions_fast, inversions_fast_range};
pub use merge_sort::{merge_sort, merge_sort_range};
pub use quick_sort::{partition, quick_sort, quick_sort_range, quick_sort_with, PivotStrategy};
pub use verify::{is_permutation_of, is_sorted};
