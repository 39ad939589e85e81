//! # uniset
//!
//! A generic hash-backed set with fluent mutation and multi-set algebra.
//!
//! ## Overview
//!
//! [`Set`] keeps a collection of unique `Hash + Eq` values and offers:
//!
//! - **Mutation**: [`add`](Set::add), [`remove`](Set::remove),
//!   [`merge`](Set::merge) and [`pop`](Set::pop), each chaining on `&mut Set`
//! - **Queries**: [`has`](Set::has), [`is_subset`](Set::is_subset),
//!   [`is_disjoint`](Set::is_disjoint), [`equal`](Set::equal)
//! - **Derived sets**: [`intersection`](Set::intersection) and
//!   [`diff`](Set::diff) against any number of sets at once
//!
//! Multi-set intersection starts from its smallest operand, located with
//! [`find_extremes`].
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Set`] as a sequence
//! - `fxhash`: use `rustc-hash` as the default hasher
//! - `ahash`: use `ahash` as the default hasher
//! - `full`: Enable all non-hasher features
//!
//! ## Example
//!
//! ```rust
//! use uniset::prelude::*;
//!
//! let mut set = set![1, 2, 3];
//! set.add([4]).remove([1]);
//!
//! let common = set.intersection([&set![2, 4, 6], &set![4, 2]]);
//! assert_eq!(common, set![2, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use uniset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::extremes::{Cardinality, SizeExtremes, find_extremes};
    pub use crate::hasher::DefaultHashBuilder;
    pub use crate::set;
    pub use crate::unique_set::Set;
}

pub mod extremes;
pub mod hasher;
mod macros;
mod unique_set;

pub use extremes::{Cardinality, SizeExtremes, find_extremes};
pub use hasher::DefaultHashBuilder;
pub use unique_set::Set;
