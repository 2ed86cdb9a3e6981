use std::cmp::Ordering;

use crate::observe::{Event, Ignore, Observer};

sort_impl!("selection_sort_unstable");

/// Sorts the slice in place, but might not preserve the order of equal elements.
///
/// For every position the minimum of the remaining suffix is swapped into place. That swap can
/// carry an element past others equal to it, which is what makes this sort unstable.
///
/// Always *O*(*n*²) comparisons, but at most *n* - 1 swaps. Does not allocate.
#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    selection_sort(v, &mut |a, b| a.lt(b), &mut Ignore);
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
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less, &mut Ignore);
}

/// Like [`sort`], reporting every comparison and swap to `observer`.
///
/// Positions are settled front to back, one per outer iteration. A swap is only reported when the
/// minimum was not already in place.
pub fn sort_observed<T, O>(v: &mut [T], observer: &mut O)
where
    T: Ord,
    O: Observer<T>,
{
    selection_sort(v, &mut |a, b| a.lt(b), observer);
}

fn selection_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    let len = v.len();

    for i in 0..len {
        let mut min = i;

        for j in (i + 1)..len {
            observer.observe(Event::Compare(j, min), v);

            // Strictly less, the first of several equal minima wins.
            if is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            v.swap(i, min);
            observer.observe(Event::Swap(i, min), v);
        }

        observer.observe(Event::Settled(i), v);
    }

    observer.observe(Event::Done, v);
}
