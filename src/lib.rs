#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/nonempty_wrapper/0.1.0")]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::wildcard_imports)]

//! A generic wrapper that guarantees the collection it holds is never empty.
//!
//! [`Nonempty<C>`] moves "this collection has at least one element" out of
//! ad-hoc runtime checks and into signatures. A function taking a
//! `Nonempty<Vec<f64>>` can compute an average without deciding what the
//! average of nothing is:
//!
//! ```
//! use nonempty_wrapper::Nonempty;
//!
//! fn average(values: &Nonempty<Vec<f64>>) -> f64 {
//!     values.iter().sum::<f64>() / values.len().get() as f64
//! }
//!
//! let values = Nonempty::require(vec![1.0, 2.0, 6.0])?;
//! assert_eq!(average(&values), 3.0);
//! # Ok::<(), nonempty_wrapper::EmptyCollectionError>(())
//! ```
//!
//! The wrapper only exposes read access to its content. Operations that are
//! total *because* the collection is not empty, such as an unwrapped
//! [`first`](Projected::first) or a [`map`](Projected::map) that stays
//! nonempty, live on the view returned by [`Nonempty::nonempty`]. Growth that
//! cannot empty the collection lives on [`Nonempty::nonempty_mut`].
//!
//! What a collection supports is described by the capability traits in
//! [`collection`]: [`Collection`], [`BidirectionalCollection`],
//! [`RandomAccessCollection`] and [`GrowableCollection`].

#[cfg(all(feature = "alloc", feature = "std"))]
compile_error!("`nonempty_wrapper` cannot have both `alloc` and `std` features enabled");

pub mod collection;
mod failure;
mod imports;
mod iter;
mod keyed;
mod projected;
mod sequence;
mod text;
mod wrapper;

pub use collection::{
    BidirectionalCollection, Collection, GrowableCollection, Indices, RandomAccessCollection,
};
pub use iter::{CollectionExt, IteratorExt};
pub use projected::{Projected, ProjectedMut};
pub use wrapper::Nonempty;

use core::{
    any::{self, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

/// The prelude imports for `nonempty_wrapper`. The intention is so you can
/// include `use nonempty_wrapper::prelude::*` and have easy access to this
/// crate's types and traits.
pub mod prelude {
    #[cfg(any(feature = "alloc", feature = "std"))]
    #[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
    #[doc(inline)]
    pub use super::nonempty;
    #[doc(inline)]
    pub use super::CollectionExt as NonemptyCollectionExt;
    // The name is made verbose as to not collide with other iterator extension
    // traits in scope.
    #[doc(inline)]
    pub use super::IteratorExt as NonemptyIteratorExt;
    #[doc(inline)]
    pub use super::{Nonempty, Projected, ProjectedMut};
}

#[cfg(any(feature = "alloc", feature = "std"))]
#[doc(hidden)]
#[allow(unused_imports)]
pub mod __private {
    #[cfg(feature = "alloc")]
    extern crate alloc;
    #[cfg(feature = "alloc")]
    pub use alloc::vec;
    #[cfg(feature = "std")]
    pub use std::vec;
}

/// Creates a [`Nonempty<Vec<_>>`](Nonempty) containing the arguments.
///
/// # Panics
///
/// When using the form `nonempty![E; N]`, if `N` is a non-literal expression
/// that resolves to `0`, the program panics exactly like
/// [`Nonempty::assert`]. A literal `0` is a compiler error.
///
/// # Examples
///
/// ```
/// use nonempty_wrapper::nonempty;
///
/// let values = nonempty![1, 2, 3];
/// assert_eq!(values.content(), &vec![1, 2, 3]);
///
/// let repeated = nonempty![1; 3];
/// assert_eq!(repeated.content(), &vec![1, 1, 1]);
/// ```
///
/// All of the following are compiler errors:
///
/// ```compile_fail
/// // error: cannot initialize a nonempty vector with zero length
/// nonempty_wrapper::nonempty![1; 0];
/// ```
///
/// ```compile_fail
/// // error: cannot initialize a nonempty vector with zero length
/// let values: nonempty_wrapper::Nonempty<Vec<i32>> = nonempty_wrapper::nonempty![];
/// ```
///
/// A length of zero only known at runtime halts:
///
/// ```should_panic
/// let n = 0;
///
/// // panic: the alloc::vec::Vec<i32> collection passed was empty
/// nonempty_wrapper::nonempty![10; n];
/// ```
#[macro_export]
#[cfg(any(feature = "alloc", feature = "std"))]
#[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
macro_rules! nonempty {
    () => {{
        compile_error!("cannot initialize a nonempty vector with zero length")
    }};
    ($elem:expr; 0) => {{
        compile_error!("cannot initialize a nonempty vector with zero length");
    }};
    ($elem:expr; 0usize) => {{
        compile_error!("cannot initialize a nonempty vector with zero length");
    }};
    ($elem:expr; $n:expr) => {{
        $crate::Nonempty::assert($crate::__private::vec![$elem; $n])
    }};
    ($($x:expr),+ $(,)?) => {{
        $crate::Nonempty::assert($crate::__private::vec![$($x),+])
    }};
}

/// The type of a collection, as carried by [`EmptyCollectionError`].
///
/// Two values are equal when they were created for the same type. The type name
/// is kept for display only.
///
/// ```
/// use nonempty_wrapper::ContentType;
///
/// assert_eq!(ContentType::of::<Vec<i32>>(), ContentType::of::<Vec<i32>>());
/// assert_ne!(ContentType::of::<Vec<i32>>(), ContentType::of::<Vec<u32>>());
/// assert!(ContentType::of::<String>().is::<String>());
/// assert!(ContentType::of::<&str>().is::<&'static str>());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ContentType {
    id: TypeId,
    name: &'static str,
}

impl ContentType {
    /// Returns the content type of `C`.
    #[must_use]
    #[inline]
    pub fn of<C: ?Sized>() -> Self {
        ContentType { id: typeid::of::<C>(), name: any::type_name::<C>() }
    }

    /// Returns the name of the type, as reported by [`core::any::type_name`].
    ///
    /// Distinct types may share a name, so compare `ContentType`s rather than
    /// their names.
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Returns `true` if this is the content type of `C`.
    #[must_use]
    #[inline]
    pub fn is<C: ?Sized>(self) -> bool {
        self == Self::of::<C>()
    }
}

impl PartialEq for ContentType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContentType {}

impl Hash for ContentType {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ContentType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An error returned when a collection required to be nonempty was empty.
///
/// The error carries the [`ContentType`] of the offending collection.
///
/// ```
/// use nonempty_wrapper::{EmptyCollectionError, Nonempty};
///
/// let error = Nonempty::require(Vec::<i32>::new()).unwrap_err();
/// assert_eq!(error, EmptyCollectionError::of::<Vec<i32>>());
/// assert!(error.content().is::<Vec<i32>>());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EmptyCollectionError {
    content: ContentType,
}

impl EmptyCollectionError {
    /// Creates an error for a collection of the given content type.
    #[must_use]
    #[inline]
    pub const fn new(content: ContentType) -> Self {
        EmptyCollectionError { content }
    }

    /// Creates an error for an empty `C`.
    #[must_use]
    #[inline]
    pub fn of<C: ?Sized>() -> Self {
        EmptyCollectionError::new(ContentType::of::<C>())
    }

    /// The type of the empty collection that was provided.
    #[must_use]
    #[inline]
    pub const fn content(&self) -> ContentType {
        self.content
    }
}

impl fmt::Display for EmptyCollectionError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the {} collection passed was empty", self.content)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
impl std::error::Error for EmptyCollectionError {}
