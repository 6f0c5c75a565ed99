use crate::{Collection, EmptyCollectionError, Nonempty};

/// Extends [`Iterator`] with a method for collecting into a [`Nonempty`]
/// collection, as a stop-gap to retain a failable [`Iterator::collect`]
/// functionality.
pub trait IteratorExt: Iterator {
    /// Transforms an iterator into a [`Nonempty<C>`].
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyCollectionError`] naming `C` if the iterator yields
    /// no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use nonempty_wrapper::{nonempty, IteratorExt, Nonempty};
    ///
    /// # fn main() -> Result<(), nonempty_wrapper::EmptyCollectionError> {
    /// let array = [1, 2, 3];
    /// let doubled: Nonempty<Vec<_>> = array.iter().map(|&x| x * 2).collect_nonempty()?;
    /// assert_eq!(doubled, nonempty![2, 4, 6]);
    ///
    /// let odd = array.iter().filter(|&&x| x % 2 == 1).collect_nonempty::<BTreeSet<_>>()?;
    /// assert_eq!(odd.len().get(), 2);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    #[must_use = "if you really need to exhaust the iterator, consider `.for_each(drop)` instead"]
    fn collect_nonempty<C>(self) -> Result<Nonempty<C>, EmptyCollectionError>
    where
        Self: Sized,
        C: Collection + FromIterator<Self::Item>,
    {
        Nonempty::require(self.collect())
    }
}

impl<I> IteratorExt for I where I: Iterator {}

/// Extends every [`Collection`] with methods for wrapping it in a
/// [`Nonempty`].
///
/// This is sugar for the constructors on [`Nonempty`], reading left to right
/// at the end of a chain.
pub trait CollectionExt: Collection + Sized {
    /// See [`Nonempty::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::CollectionExt;
    ///
    /// assert!(vec![1].into_nonempty().is_some());
    /// assert!(String::new().into_nonempty().is_none());
    /// ```
    #[must_use]
    #[inline]
    fn into_nonempty(self) -> Option<Nonempty<Self>> {
        Nonempty::new(self)
    }

    /// See [`Nonempty::require`].
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyCollectionError`] naming `Self` if the collection is
    /// empty.
    #[inline]
    fn require_nonempty(self) -> Result<Nonempty<Self>, EmptyCollectionError> {
        Nonempty::require(self)
    }

    /// See [`Nonempty::assert`].
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty.
    #[must_use]
    #[inline]
    #[track_caller]
    fn assert_nonempty(self) -> Nonempty<Self> {
        Nonempty::assert(self)
    }
}

impl<C> CollectionExt for C where C: Collection {}
