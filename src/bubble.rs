use std::cmp::Ordering;

use crate::observe::{Event, Ignore, Observer};

sort_impl!("bubble_sort_stable");

/// Sorts the slice in place, preserving the order of equal elements.
///
/// Each pass walks the unsorted prefix and swaps every adjacent pair that is out of order, which
/// carries the largest remaining element to the end of the prefix. A pass without any swap ends
/// the sort early.
///
/// *O*(*n*²) comparisons worst-case, *O*(*n*) if `v` is already sorted. Does not allocate.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    bubble_sort(v, &mut |a, b| a.lt(b), &mut Ignore);
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
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, &mut Ignore);
}

/// Like [`sort`], reporting every comparison and swap to `observer`.
///
/// Every completed pass settles the last position of the prefix it scanned. A pass without swaps
/// settles the whole remaining prefix, last position first.
pub fn sort_observed<T, O>(v: &mut [T], observer: &mut O)
where
    T: Ord,
    O: Observer<T>,
{
    bubble_sort(v, &mut |a, b| a.lt(b), observer);
}

fn bubble_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();

    for pass in 0..len {
        // `end` is the last position of the unsorted prefix.
        let end = len - pass - 1;
        let mut swapped = false;

        for i in 0..end {
            observer.observe(Event::Compare(i, i + 1), v);

            // Only strictly smaller successors move, equal neighbours keep their order.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                observer.observe(Event::Swap(i, i + 1), v);
                swapped = true;
            }
        }

        observer.observe(Event::Settled(end), v);

        if !swapped {
            for i in (0..end).rev() {
                observer.observe(Event::Settled(i), v);
            }
            break;
        }
    }

    observer.observe(Event::Done, v);
}
