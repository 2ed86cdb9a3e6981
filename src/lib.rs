//! Classical array algorithms over totally ordered elements.
//!
//! Four in-place sorts ([`bubble`], [`insertion`], [`selection`], [`quick`]) borrow the caller's
//! slice mutably and leave it sorted. [`merge`](mod@merge) sort borrows its input immutably and
//! allocates the result, so the input is preserved. [`binary_search`] finds an element in already
//! sorted input.

/// Implements `sort_test_tools::Sort` for the `sort` and `sort_by` functions of the calling module.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod algorithm;
pub mod binary_search;
pub mod bubble;
mod error;
pub mod insertion;
pub mod merge;
pub mod observe;
pub mod quick;
pub mod selection;

pub use algorithm::{Algorithm, Complexity};
pub use binary_search::{binary_search_iterative, binary_search_recursive};
pub use error::Error;
pub use merge::merge;
pub use quick::partition;

/// Sorts `v` in place with [`bubble::sort`] and hands it back.
pub fn bubble_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    bubble::sort(v);
    v
}

/// Sorts `v` in place with [`insertion::sort`] and hands it back.
pub fn insertion_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    insertion::sort(v);
    v
}

/// Sorts `v` in place with [`selection::sort`] and hands it back.
pub fn selection_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    selection::sort(v);
    v
}

/// Sorts `v` in place with [`quick::sort`] and hands it back.
pub fn quick_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    quick::sort(v);
    v
}

/// Returns a sorted copy of `v`, see [`merge::sort`]. `v` itself is left untouched.
pub fn merge_sort<T: Ord + Clone>(v: &[T]) -> Vec<T> {
    merge::sort(v)
}
