use std::cmp::Ordering;

sort_impl!("insertion_sort_stable");

/// Sorts the slice in place, preserving the order of equal elements.
///
/// Grows a sorted prefix one element at a time: the element after the prefix is inserted behind
/// the last prefix element not greater than it.
///
/// *O*(*n*²) worst-case, *O*(*n*) if `v` is already sorted. Does not allocate.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    insertion_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice in place with a comparator function, preserving the order of equal elements.
///
/// The comparator must define a total order for the elements in the slice, otherwise the
/// resulting order is unspecified.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Moves the last element of `v` into the sorted prefix `v[..len - 1]`.
///
/// Every prefix element strictly greater than the tail shifts one position to the right, so equal
/// elements stay ahead of it.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = v.len() - 1;

    let mut gap = tail;
    while gap > 0 && is_less(&v[tail], &v[gap - 1]) {
        gap -= 1;
    }

    // Shifts v[gap..tail] right by one and drops the tail into the gap.
    v[gap..].rotate_right(1);
}
