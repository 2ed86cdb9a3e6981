use std::cmp::Ordering;

use crate::Error;

sort_impl!("quick_sort_unstable");

/// Sorts the slice in place, but might not preserve the order of equal elements.
///
/// Quicksort with a Lomuto [`partition`] around the last element of each range. The pivot rule is
/// fixed: already sorted, reverse sorted and all-equal input each degrade to *O*(*n*²)
/// comparisons. Randomized or median-of-three pivots are not used.
///
/// *O*(*n* \* log(*n*)) comparisons on average. The shorter side of every partition is sorted
/// recursively and the longer one iteratively, which keeps the recursion depth within
/// *O*(log(*n*)) even for degenerate input. Does not allocate.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator must define a total order for the elements in the slice, otherwise the
/// resulting order is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive range `v[low..=high]`, leaving the rest of `v` untouched.
///
/// `low > high` denotes an empty range and is a no-op. Fails with
/// [`Error::RangeOutOfBounds`] if a non-empty range reaches past the end of `v`.
pub fn sort_range<T: Ord>(v: &mut [T], low: usize, high: usize) -> Result<(), Error> {
    if low > high {
        return Ok(());
    }

    check_bounds(v.len(), low, high)?;
    quicksort(&mut v[low..=high], &mut |a, b| a.lt(b));

    Ok(())
}

/// Partitions the inclusive range `v[low..=high]` around its last element, `v[high]`.
///
/// Afterwards every element of the range left of the pivot is `<=` the pivot and every element
/// right of it is `>` the pivot. Returns the pivot's final index in `v`.
///
/// ```text
/// let mut v = [64, 34, 25, 12, 22, 11, 90];
/// partition(&mut v, 0, 6) == Ok(6)
/// ```
///
/// Fails with [`Error::EmptyRange`] if `low > high`, and with [`Error::RangeOutOfBounds`] if
/// `high` is not a valid index of `v`.
pub fn partition<T: Ord>(v: &mut [T], low: usize, high: usize) -> Result<usize, Error> {
    if low > high {
        return Err(Error::EmptyRange { low, high });
    }

    check_bounds(v.len(), low, high)?;
    let pivot_pos = partition_lomuto(&mut v[low..=high], &mut |a, b| a.lt(b));

    Ok(low + pivot_pos)
}

pub struct PartitionImpl;

impl sort_test_tools::Partition for PartitionImpl {
    fn name() -> String {
        "partition_lomuto".into()
    }

    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord,
    {
        partition_lomuto(arr, &mut |a, b| a.lt(b))
    }
}

// --- IMPL ---

fn check_bounds(len: usize, low: usize, high: usize) -> Result<(), Error> {
    if high >= len {
        return Err(Error::RangeOutOfBounds { low, high, len });
    }

    Ok(())
}

/// Sorts `v` recursively.
fn quicksort<'a, T, F>(mut v: &'a mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_pos = partition_lomuto(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        // Both sides are independent, so the order they are sorted in does not change the result.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Lomuto partition of `v` around its last element.
///
/// Elements not greater than the pivot are gathered at the front in scan order, then the pivot is
/// swapped in right behind them. Returns the pivot's final position. An empty `v` yields 0.
fn partition_lomuto<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(pivot_pos) = v.len().checked_sub(1) else {
        return 0;
    };

    let (rest, pivot) = v.split_at_mut(pivot_pos);
    let pivot = &pivot[0];

    // `rest[..num_le]` holds the elements <= pivot seen so far.
    let mut num_le = 0;
    for i in 0..rest.len() {
        if !is_less(pivot, &rest[i]) {
            rest.swap(num_le, i);
            num_le += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(num_le, pivot_pos);

    num_le
}
