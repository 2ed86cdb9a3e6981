//! Binary search over sorted slices, in an iterative and a recursive form.
//!
//! Both forms narrow the same inclusive bounds `[low, high]`, starting at `[0, len - 1]`, and
//! probe `mid = low + (high - low) / 2`, so they inspect the same elements and return the same
//! result for any input.
//!
//! The input must be sorted ascending. This is not checked: on unsorted input the result is
//! unspecified, though it is never an index that does not hold an element equal to the target.
//! If several elements match, any one of their indices may be returned.

use std::cmp::Ordering;

use crate::Error;

/// Returns the index of an element equal to `target` in the sorted slice `v`, or `None`.
///
/// *O*(log(*n*)) comparisons, *O*(1) auxiliary memory.
#[inline]
pub fn binary_search_iterative<T: Ord>(v: &[T], target: &T) -> Option<usize> {
    binary_search_iterative_by(v, |probe| probe.cmp(target))
}

/// Iterative binary search with a comparator function.
///
/// `f` returns the ordering of the probed element relative to the target, i.e. `Less` if the
/// target lies to the right of the probe. This matches [`slice::binary_search_by`].
pub fn binary_search_iterative_by<T, F>(v: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = v.len().checked_sub(1)?;

    while low <= high {
        let mid = low + (high - low) / 2;

        match f(&v[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            // Nothing left of index 0, the bounds have crossed.
            Ordering::Greater => high = mid.checked_sub(1)?,
        }
    }

    None
}

/// Returns the index of an element equal to `target` in the sorted slice `v`, or `None`.
///
/// Recursive counterpart of [`binary_search_iterative`] with identical results.
/// *O*(log(*n*)) comparisons and recursion depth.
#[inline]
pub fn binary_search_recursive<T: Ord>(v: &[T], target: &T) -> Option<usize> {
    binary_search_recursive_by(v, |probe| probe.cmp(target))
}

/// Recursive binary search with a comparator function, see [`binary_search_iterative_by`].
pub fn binary_search_recursive_by<T, F>(v: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let high = v.len().checked_sub(1)?;
    search_between(v, &mut f, 0, high)
}

/// Recursive binary search restricted to the inclusive range `v[low..=high]`.
///
/// Returned indices are relative to `v`. `low > high` denotes an empty range and finds nothing.
/// Fails with [`Error::RangeOutOfBounds`] if a non-empty range reaches past the end of `v`.
pub fn binary_search_range<T: Ord>(
    v: &[T],
    target: &T,
    low: usize,
    high: usize,
) -> Result<Option<usize>, Error> {
    if low > high {
        return Ok(None);
    }

    if high >= v.len() {
        return Err(Error::RangeOutOfBounds {
            low,
            high,
            len: v.len(),
        });
    }

    Ok(search_between(v, &mut |probe| probe.cmp(target), low, high))
}

fn search_between<T, F>(v: &[T], f: &mut F, low: usize, high: usize) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    if low > high {
        return None;
    }

    let mid = low + (high - low) / 2;

    match f(&v[mid]) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_between(v, f, mid + 1, high),
        Ordering::Greater => search_between(v, f, low, mid.checked_sub(1)?),
    }
}

pub struct IterativeImpl;

impl sort_test_tools::Search for IterativeImpl {
    fn name() -> String {
        "binary_search_iterative".into()
    }

    fn search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
        binary_search_iterative(arr, target)
    }
}

pub struct RecursiveImpl;

impl sort_test_tools::Search for RecursiveImpl {
    fn name() -> String {
        "binary_search_recursive".into()
    }

    fn search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
        binary_search_recursive(arr, target)
    }
}
