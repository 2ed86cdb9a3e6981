use std::cmp::Ordering;

/// An in-place sort under test.
///
/// Implementations whose `name` ends in `_unstable` are exempt from the stability suites.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

/// A search over sorted input, returning any index holding `target`.
pub trait Search {
    fn name() -> String;

    fn search<T>(arr: &[T], target: &T) -> Option<usize>
    where
        T: Ord;
}

/// Partitions the whole of `arr` around its last element and returns the pivot's final index.
pub trait Partition {
    fn name() -> String;

    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord;
}

pub mod patterns;

#[doc(hidden)]
pub use paste;
