use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{bubble, insertion, merge, quick, selection, Error};

/// Asymptotic cost of an algorithm, as written in big-O notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    /// Auxiliary memory, including recursion.
    pub space: &'static str,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "best {}, average {}, worst {}, space {}",
            self.best, self.average, self.worst, self.space
        )
    }
}

/// Cost of [`binary_search_iterative`](crate::binary_search_iterative). The recursive form needs
/// *O*(log(*n*)) space for its call depth.
pub const BINARY_SEARCH_COMPLEXITY: Complexity = Complexity {
    best: "O(1)",
    average: "O(log n)",
    worst: "O(log n)",
    space: "O(1)",
};

/// One of the sorting algorithms of this crate, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Quick => "quick_sort",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge => true,
            Algorithm::Selection | Algorithm::Quick => false,
        }
    }

    /// Whether the algorithm sorts the caller's slice without allocating a copy of it. Merge sort
    /// returns a new vector and leaves its input untouched.
    pub fn is_in_place(self) -> bool {
        !matches!(self, Algorithm::Merge)
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Algorithm::Bubble | Algorithm::Insertion => Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Selection => Complexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Merge => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::Quick => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
        }
    }

    /// Sorts `v` with this algorithm.
    ///
    /// For [`Algorithm::Merge`] the sorted copy is moved back into `v`, which is the only way to
    /// observe merge sort through a mutable slice.
    pub fn sort<T: Ord + Clone>(self, v: &mut [T]) {
        match self {
            Algorithm::Bubble => bubble::sort(v),
            Algorithm::Insertion => insertion::sort(v),
            Algorithm::Selection => selection::sort(v),
            Algorithm::Merge => {
                let sorted = merge::sort(v);
                merge::write_back(v, sorted);
            }
            Algorithm::Quick => quick::sort(v),
        }
    }

    /// Sorts `v` with this algorithm and a comparator function, see [`Algorithm::sort`].
    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Bubble => bubble::sort_by(v, compare),
            Algorithm::Insertion => insertion::sort_by(v, compare),
            Algorithm::Selection => selection::sort_by(v, compare),
            Algorithm::Merge => {
                let sorted = merge::sort_by(v, compare);
                merge::write_back(v, sorted);
            }
            Algorithm::Quick => quick::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts `bubble`, `bubble_sort`, `Bubble Sort`, `bubblesort` and the like, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let base = normalized.strip_suffix("sort").unwrap_or(&normalized);

        match base {
            "bubble" => Ok(Algorithm::Bubble),
            "insertion" => Ok(Algorithm::Insertion),
            "selection" => Ok(Algorithm::Selection),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
