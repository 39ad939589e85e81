//! Locating the smallest and largest collection in a list.
//!
//! Multi-set intersection only ever needs to scan its smallest operand, so
//! [`Set::intersection`](crate::Set::intersection) calls [`find_extremes`]
//! to choose that operand before doing any membership work.

use std::collections::{BTreeSet, HashSet};

use crate::Set;

/// Anything whose number of elements can be read in O(1).
pub trait Cardinality {
    /// Returns the number of elements.
    fn cardinality(&self) -> usize;
}

impl<T, S> Cardinality for Set<T, S> {
    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T, S> Cardinality for HashSet<T, S> {
    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> Cardinality for BTreeSet<T> {
    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<C: Cardinality + ?Sized> Cardinality for &C {
    #[inline]
    fn cardinality(&self) -> usize {
        (**self).cardinality()
    }
}

/// Positions of the smallest and largest entries found by [`find_extremes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizeExtremes {
    /// Index of an entry with the lowest cardinality.
    pub smallest: usize,
    /// Index of an entry with the highest cardinality.
    pub largest: usize,
}

/// Finds the index of a smallest and of a largest entry in one pass.
///
/// Comparisons are strict, so when several entries share the extreme
/// cardinality the first one wins.
///
/// An empty slice yields `SizeExtremes { smallest: 0, largest: 0 }`. Those
/// indices do not point at anything, so callers must only rely on the result
/// for non-empty input.
///
/// # Complexity
///
/// O(n) in the number of entries; element counts are read, never iterated.
///
/// # Examples
///
/// ```rust
/// use uniset::{find_extremes, set, SizeExtremes};
///
/// let sets = [set![1, 2, 3], set![4], set![5, 6, 7, 8], set![9]];
/// assert_eq!(
///     find_extremes(&sets),
///     SizeExtremes { smallest: 1, largest: 2 }
/// );
/// ```
#[must_use]
pub fn find_extremes<C: Cardinality>(sets: &[C]) -> SizeExtremes {
    let mut extremes = SizeExtremes::default();
    let Some(first) = sets.first() else {
        return extremes;
    };

    let mut smallest_size = first.cardinality();
    let mut largest_size = smallest_size;

    for (index, set) in sets.iter().enumerate().skip(1) {
        let size = set.cardinality();
        if size < smallest_size {
            smallest_size = size;
            extremes.smallest = index;
        } else if size > largest_size {
            largest_size = size;
            extremes.largest = index;
        }
    }

    extremes
}
