//! The `set!` macro for building a [`Set`](crate::Set) from literal values.

/// Creates a [`Set`](crate::Set) containing the given values.
///
/// Duplicates collapse, so `set![1, 1, 2]` holds two elements.
///
/// # Syntax
///
/// - `set![]` - An empty set
/// - `set![a, b, c]` - A set of the distinct values among `a`, `b`, `c`
///
/// # Examples
///
/// ```
/// use uniset::{set, Set};
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
///
/// let numbers = set![1, 2, 2, 3];
/// assert_eq!(numbers.len(), 3);
/// assert!(numbers.has(&2));
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Set::from([$($element),+])
    };
}
