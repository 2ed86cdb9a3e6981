use std::cmp::Ordering;

/// Returns a sorted copy of `v`, preserving the order of equal elements. `v` is not modified.
///
/// Top-down merge sort: split at `len / 2`, sort both halves recursively and [`merge`] them.
/// Slices of length 0 or 1 are already sorted and copied as is.
///
/// *O*(*n* \* log(*n*)) comparisons in every case, *O*(*n*) auxiliary memory and *O*(log(*n*))
/// recursion depth. Every element is cloned exactly once.
#[inline]
pub fn sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_sort(v, &mut |a, b| a.lt(b))
}

/// Returns a sorted copy of `v` using a comparator function, preserving the order of equal
/// elements. `v` is not modified.
///
/// The comparator must define a total order for the elements in the slice, otherwise the
/// resulting order is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

/// Merges two sorted slices into a new sorted vector.
///
/// On ties the element from `left` comes first. Neither input is re-sorted: if one of them is not
/// sorted the result is unspecified, though it still holds every element of both inputs.
///
/// ```text
/// merge(&[1, 3, 5], &[2, 4, 6]) == [1, 2, 3, 4, 5, 6]
/// ```
pub fn merge<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_owned(left.to_vec(), right.to_vec(), &mut |a, b| a.lt(b))
}

/// [`merge`] with a comparator function.
pub fn merge_by<T, F>(left: &[T], right: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_owned(left.to_vec(), right.to_vec(), &mut |a, b| {
        compare(a, b) == Ordering::Less
    })
}

pub struct SortImpl;

impl sort_test_tools::Sort for SortImpl {
    fn name() -> String {
        "merge_sort_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone,
    {
        let sorted = sort(arr);
        write_back(arr, sorted);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let sorted = sort_by(arr, compare);
        write_back(arr, sorted);
    }
}

/// Moves the elements of `sorted` into `v`. Both must have the same length.
pub(crate) fn write_back<T>(v: &mut [T], sorted: Vec<T>) {
    debug_assert_eq!(v.len(), sorted.len());

    for (slot, elem) in v.iter_mut().zip(sorted) {
        *slot = elem;
    }
}

// --- IMPL ---

fn merge_sort<T, F>(v: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return v.to_vec();
    }

    let (left, right) = v.split_at(v.len() / 2);
    let left = merge_sort(left, is_less);
    let right = merge_sort(right, is_less);

    merge_owned(left, right, is_less)
}

fn merge_owned<T, F>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Take from the right only if strictly smaller, ties go to the left.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => is_less(r, l),
            _ => break,
        };

        let next = if take_right {
            right.next()
        } else {
            left.next()
        };
        out.extend(next);
    }

    // At most one side has elements left.
    out.extend(left);
    out.extend(right);

    out
}
