//! A mutable hash set with fluent mutation and multi-set algebra.
//!
//! This module provides [`Set`], a thin owner of a
//! [`std::collections::HashSet`] that adds the operations the standard
//! collection does not offer directly:
//!
//! - fluent, chainable mutators ([`Set::add`], [`Set::remove`], [`Set::merge`])
//! - intersection and difference against any number of other sets
//! - [`Set::pop`] to take out an arbitrary member
//!
//! Iteration order is whatever the underlying table yields and must not be
//! relied upon.
//!
//! # Examples
//!
//! ```rust
//! use uniset::{set, Set};
//!
//! let mut primes = Set::new();
//! primes.add([2, 3, 5]).add([7, 7, 11]);
//! assert_eq!(primes.len(), 5);
//!
//! let odd = set![1, 3, 5, 7, 9, 11];
//! let small = set![1, 2, 3, 4, 5];
//! let both = primes.intersection([&odd, &small]);
//! assert_eq!(both, set![3, 5]);
//!
//! let rest = primes.diff([&odd]);
//! assert_eq!(rest, set![2]);
//! ```
//!
//! # Concurrency
//!
//! `Set` has no internal synchronization. Every mutator takes `&mut self`,
//! so sharing one set between threads for writing needs an external lock
//! such as `std::sync::Mutex`.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::extremes::find_extremes;
use crate::hasher::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique values.
///
/// Membership is indexed by a native hash set, so `T` must be `Hash + Eq`.
/// The hash builder `S` defaults to [`DefaultHashBuilder`].
///
/// # Time Complexity
///
/// | Operation              | Complexity                              |
/// |------------------------|-----------------------------------------|
/// | `add` / `remove`       | O(k) for k items                        |
/// | `has`                  | O(1) expected                           |
/// | `len`                  | O(1)                                    |
/// | `is_disjoint`          | O(min(n, m))                            |
/// | `is_subset`            | O(n)                                    |
/// | `equal`                | O(1) on size mismatch, O(n) otherwise   |
/// | `merge`                | O(sum of the others' sizes)             |
/// | `intersection`         | O(smallest size * number of sets)       |
/// | `diff`                 | O(n * number of others)                 |
/// | `pop`                  | O(capacity) per call                    |
/// | `drain`                | O(capacity) for the whole set           |
///
/// # Examples
///
/// ```rust
/// use uniset::Set;
///
/// let mut set = Set::with_capacity(8);
/// set.add([1, 1, 2, 3]);
///
/// assert!(set.has(&1));
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_string().len(), "[3]{1,2,3}".len());
/// ```
#[derive(Clone)]
pub struct Set<T, S = DefaultHashBuilder> {
    inner: HashSet<T, S>,
}

impl<T> Set<T, DefaultHashBuilder> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity_hint` elements.
    ///
    /// The hint only pre-allocates; the set behaves exactly like one made by
    /// [`Set::new`] and grows past the hint as needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut set = Set::with_capacity(0);
    /// set.add([1, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::with_capacity_and_hasher(capacity_hint, DefaultHashBuilder::default())
    }
}

impl<T: Hash + Eq + Clone> Set<T, DefaultHashBuilder> {
    /// Builds a set from the distinct values of a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set = Set::from_slice(&["a", "b", "a"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        let mut set = Self::with_capacity(values.len());
        set.add(values.iter().cloned());
        set
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set that will hash with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Creates an empty set with room for `capacity_hint` elements that
    /// will hash with `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity_hint: usize, hasher: S) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity_hint, hasher),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }

    /// Removes every element and yields it, keeping the allocated capacity.
    ///
    /// Elements not consumed before the iterator is dropped are removed
    /// anyway.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let mut set = set![1, 2, 3];
    /// let mut drained: Vec<i32> = set.drain().collect();
    /// drained.sort_unstable();
    ///
    /// assert_eq!(drained, vec![1, 2, 3]);
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> std::collections::hash_set::Drain<'_, T> {
        self.inner.drain()
    }

    /// Returns an iterator over the elements in unspecified order.
    #[inline]
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns every element as a `Vec`, in unspecified order.
    ///
    /// The order is the table's iteration order and may differ between
    /// calls on different sets holding the same elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let mut list = set![3, 1, 2].to_list();
    /// list.sort_unstable();
    /// assert_eq!(list, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.iter().cloned().collect()
    }

    /// Calls `visitor` once per element, in unspecified order.
    ///
    /// The set stays borrowed for the whole visit, so the visitor cannot
    /// mutate it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let mut total = 0;
    /// set![1, 2, 3].for_each(|element| total += element);
    /// assert_eq!(total, 6);
    /// ```
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.inner.iter().for_each(visitor);
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    /// Inserts every item, ignoring those already present.
    ///
    /// Returns the same set so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut set = Set::new();
    /// set.add([1, 1, 2]).add(vec![2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn add<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.extend(items);
        self
    }

    /// Removes every item that is present; absent items are skipped.
    ///
    /// Returns the same set so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let mut set = set![1, 2, 3];
    /// set.remove([2, 9]);
    /// assert_eq!(set, set![1, 3]);
    /// ```
    pub fn remove<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.inner.remove(&item);
        }
        self
    }

    /// Removes and returns the element equal to `element`, if any.
    ///
    /// Unlike [`Set::remove`], this takes a borrowed key and reports what
    /// was removed.
    pub fn take<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.take(element)
    }

    /// Returns `true` if `element` is a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let names = set!["ada".to_string(), "grace".to_string()];
    /// assert!(names.has("ada"));
    /// assert!(!names.has("alan"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Returns `true` if the two sets share no element.
    ///
    /// Only the smaller set is iterated; each of its elements is probed in
    /// the larger one.
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    #[must_use]
    pub fn is_disjoint<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool {
        if self.len() <= other.len() {
            self.iter().all(|element| !other.has(element))
        } else {
            other.iter().all(|element| !self.has(element))
        }
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// This always walks `self`, even when it is larger than `other`.
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    #[must_use]
    pub fn is_subset<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool {
        self.iter().all(|element| other.has(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if both sets hold exactly the same elements.
    ///
    /// Sets of different sizes are rejected before any element is looked at.
    #[must_use]
    pub fn equal<S2: BuildHasher>(&self, other: &Set<T, S2>) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    /// Removes and returns an arbitrary element, or `None` if the set is
    /// empty.
    ///
    /// Which element comes out is unspecified.
    ///
    /// Each call scans the table from its start, so emptying a set with
    /// repeated `pop` is quadratic. Use [`Set::drain`] or `into_iter` to take
    /// every element out.
    ///
    /// # Complexity
    ///
    /// O(capacity) per call
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let mut set = set![1, 2];
    /// let first = set.pop().unwrap();
    /// let second = set.pop().unwrap();
    /// assert_ne!(first, second);
    /// assert_eq!(set.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.inner.extract_if(|_| true).next()
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Clone> Set<T, S> {
    /// Adds every element of every set in `others` to `self`.
    ///
    /// The other sets are left untouched. Passing no sets is a no-op.
    /// Returns the same set so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let mut set = set![0, 1];
    /// set.merge([&set![2, 3], &set![3, 4]]);
    /// assert_eq!(set, set![0, 1, 2, 3, 4]);
    /// ```
    pub fn merge<'a, I>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        for other in others {
            self.inner.extend(other.iter().cloned());
        }
        self
    }

    /// Returns a new set of the elements present in `self` and in every set
    /// of `others`.
    ///
    /// The smallest of all the sets involved seeds the scan: only its
    /// elements are tested, each against the remaining sets. The work is
    /// therefore bounded by the smallest size times the number of sets, and
    /// an empty operand gives an empty result immediately.
    ///
    /// The sets are scanned as `others` in order followed by `self`, and on
    /// a tie for the smallest size the first one scanned wins. A set from
    /// `others` is therefore walked in preference to an equally sized
    /// `self`.
    ///
    /// Passing no sets returns a copy of `self`. No input is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let source = set![1, 2, 3];
    /// assert!(source
    ///     .intersection([&set![3], &set![1, 3], &set![2, 4]])
    ///     .is_empty());
    /// assert_eq!(source.intersection([&set![1, 2, 3]]), source);
    /// ```
    #[must_use]
    pub fn intersection<'a, I>(&'a self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut candidates: Vec<&Self> = others.into_iter().collect();
        candidates.push(self);

        let seed = candidates.remove(find_extremes(&candidates).smallest);

        let mut result = Self::with_capacity_and_hasher(seed.len(), self.hasher().clone());
        result.inner.extend(
            seed.iter()
                .filter(|element| candidates.iter().all(|set| set.has(*element)))
                .cloned(),
        );
        result
    }

    /// Returns a new set of the elements of `self` found in none of
    /// `others`.
    ///
    /// Only `self` is walked; for each element the scan stops at the first
    /// other set containing it. Passing no sets returns a copy of `self`.
    /// No input is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let difference = set![1, 2, 3].diff([&set![1, 4, 5], &set![3, 6, 7], &set![4]]);
    /// assert_eq!(difference, set![2]);
    /// ```
    #[must_use]
    pub fn diff<'a, I>(&'a self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let others: Vec<&Self> = others.into_iter().collect();

        let mut result = Self::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.inner.extend(
            self.iter()
                .filter(|element| !others.iter().any(|other| other.has(*element)))
                .cloned(),
        );
        result
    }

    /// Returns a new set of the elements in exactly one of `self` and
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::set;
    ///
    /// let symmetric = set![1, 2, 3].symmetric_difference(&set![2, 3, 4]);
    /// assert_eq!(symmetric, set![1, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.diff([other]);
        result.inner.extend(
            other
                .iter()
                .filter(|element| !self.has(*element))
                .cloned(),
        );
        result
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for Set<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: HashSet::from_iter(iter),
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T, DefaultHashBuilder> {
    fn from(values: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.add(values);
        set
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T, DefaultHashBuilder> {
    fn from(values: Vec<T>) -> Self {
        let mut set = Self::with_capacity(values.len());
        set.add(values);
        set
    }
}

impl<T, S> From<HashSet<T, S>> for Set<T, S> {
    #[inline]
    fn from(inner: HashSet<T, S>) -> Self {
        Self { inner }
    }
}

impl<T, S> From<Set<T, S>> for HashSet<T, S> {
    #[inline]
    fn from(set: Set<T, S>) -> Self {
        set.inner
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, S: BuildHasher> Extend<&'a T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `[<count>]{e1,e2,...}`, elements in iteration order.
impl<T: fmt::Display, S> fmt::Display for Set<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}]{{", self.len())?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ",")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone, Default);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for Set<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> SetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for SetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = Set<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // The length prefix is untrusted input.
        let capacity = seq.size_hint().unwrap_or(0).min(4096);
        let mut set = Set::with_capacity_and_hasher(capacity, S::default());
        while let Some(element) = seq.next_element()? {
            set.inner.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for Set<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
