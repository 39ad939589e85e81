//! Hash builder selection.
//!
//! [`Set`](crate::Set) is generic over its hash builder, and this module
//! picks the one used when none is given:
//!
//! | Feature  | `DefaultHashBuilder`                |
//! |----------|-------------------------------------|
//! | (none)   | [`std::hash::RandomState`] (SipHash) |
//! | `fxhash` | `rustc_hash::FxBuildHasher`         |
//! | `ahash`  | `ahash::RandomState`                |
//!
//! When both `fxhash` and `ahash` are enabled, `ahash` wins.

/// The hash builder used by [`Set`](crate::Set) when no other is specified.
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by [`Set`](crate::Set) when no other is specified.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by [`Set`](crate::Set) when no other is specified.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;
