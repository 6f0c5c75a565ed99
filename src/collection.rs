//! Capability traits describing what [`Nonempty`](crate::Nonempty) needs from
//! the collection it wraps.
//!
//! Consumers that only wrap the collections this crate already supports do not
//! need to be concerned with these traits. Implementors of custom collections
//! implement [`Collection`] and whichever of the refinements apply:
//!
//! * [`BidirectionalCollection`] - positions can step backwards.
//! * [`RandomAccessCollection`] - stepping and measuring are constant time.
//! * [`GrowableCollection`] - elements can be appended and inserted in place.
//!
//! The projected views only offer an operation when the wrapped collection
//! implements the capability that operation needs.
//!
//! # Positions
//!
//! Every collection has a position type, [`Collection::Index`]. Valid
//! positions run from [`start_index`](Collection::start_index) up to, but
//! excluding, [`end_index`](Collection::end_index). Collections without
//! native positions, such as sets and maps, use the ordinal of an element in
//! iteration order; these stay valid for as long as the collection is not
//! mutated.

use core::{
    fmt,
    iter::{FusedIterator, Skip, Take},
    mem,
    ops::Range,
};

/// A finite collection that can be traversed forwards, any number of times.
///
/// # Examples
///
/// ```
/// use nonempty_wrapper::Collection;
///
/// let text = "añb";
/// let second = text.index_after(&text.start_index());
/// assert_eq!(text.at(&second), 'ñ');
/// assert_eq!(text.distance(&second, &text.end_index()), 2);
/// ```
pub trait Collection {
    /// What iteration and positional access yield.
    type Element<'a>
    where
        Self: 'a;

    /// A position within the collection.
    type Index: Clone + PartialEq + fmt::Debug;

    /// The iterator returned by [`iter`](Collection::iter).
    type Iter<'a>: Iterator<Item = Self::Element<'a>>
    where
        Self: 'a;

    /// A contiguous run of the collection, as returned by
    /// [`slice`](Collection::slice).
    type SubSequence<'a>
    where
        Self: 'a;

    /// Returns `true` if the collection has no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Iterates over the elements. Every call starts from the first element.
    fn iter(&self) -> Self::Iter<'_>;

    /// The position of the first element, equal to
    /// [`end_index`](Collection::end_index) when empty.
    fn start_index(&self) -> Self::Index;

    /// The position one past the last element.
    fn end_index(&self) -> Self::Index;

    /// Returns the position immediately after `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the end position or not a valid position.
    fn index_after(&self, index: &Self::Index) -> Self::Index;

    /// Returns the position `distance` steps after `index`.
    ///
    /// # Panics
    ///
    /// Panics if that would step past the end position.
    #[track_caller]
    fn index_offset(&self, index: Self::Index, distance: usize) -> Self::Index {
        let mut index = index;
        for _ in 0..distance {
            index = self.index_after(&index);
        }
        index
    }

    /// Returns the position `distance` steps after `index`, or `None` if the
    /// walk would step over `limit`. Landing exactly on `limit` is fine.
    #[track_caller]
    fn index_offset_limited(
        &self,
        index: Self::Index,
        distance: usize,
        limit: &Self::Index,
    ) -> Option<Self::Index> {
        let mut index = index;
        for _ in 0..distance {
            if index == *limit {
                return None;
            }
            index = self.index_after(&index);
        }
        Some(index)
    }

    /// Returns the number of steps from `start` to `end`.
    ///
    /// `start` must not be after `end`.
    #[track_caller]
    fn distance(&self, start: &Self::Index, end: &Self::Index) -> usize {
        let mut index = start.clone();
        let mut distance = 0;
        while index != *end {
            index = self.index_after(&index);
            distance += 1;
        }
        distance
    }

    /// Returns the element at `index`, or `None` if there is none.
    fn get_at(&self, index: &Self::Index) -> Option<Self::Element<'_>>;

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if there is no element at `index`.
    #[track_caller]
    fn at(&self, index: &Self::Index) -> Self::Element<'_> {
        match self.get_at(index) {
            Some(element) => element,
            None => position_out_of_bounds(index),
        }
    }

    /// Returns the elements from `range.start` up to, but excluding,
    /// `range.end`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or reaches outside the collection.
    fn slice(&self, range: Range<Self::Index>) -> Self::SubSequence<'_>;

    /// Iterates over every valid position, in order.
    fn indices(&self) -> Indices<'_, Self>
    where
        Self: Sized,
    {
        Indices {
            collection: self,
            next: self.start_index(),
            end: self.end_index(),
        }
    }
}

/// A collection whose positions can also step backwards.
pub trait BidirectionalCollection: Collection {
    /// Returns the position immediately before `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the start position or not a valid position.
    fn index_before(&self, index: &Self::Index) -> Self::Index;
}

/// A collection whose offsets and distances are computed in constant time.
///
/// This is what makes reaching the last element cheap enough for
/// [`Projected::last`](crate::Projected::last).
pub trait RandomAccessCollection: BidirectionalCollection {}

/// A collection that can grow in place.
///
/// None of these operations can remove elements, which is what lets
/// [`ProjectedMut`](crate::ProjectedMut) expose them.
pub trait GrowableCollection: Collection {
    /// The owned element type accepted by the growth operations.
    type Item;

    /// Adds `item` after the last element.
    fn append(&mut self, item: Self::Item);

    /// Adds every item of `items` after the last element, in order.
    fn append_contents<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Self::Item>;

    /// Inserts `item` at `at`, shifting the elements from `at` onwards.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not a valid position or the end position.
    fn insert(&mut self, item: Self::Item, at: Self::Index);

    /// Inserts every item of `items` at `at`, in order.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not a valid position or the end position.
    fn insert_contents<I>(&mut self, items: I, at: Self::Index)
    where
        I: IntoIterator<Item = Self::Item>;
}

/// An iterator over the positions of a collection.
///
/// This `struct` is created by [`Collection::indices`].
pub struct Indices<'a, C>
where
    C: Collection,
{
    collection: &'a C,
    next: C::Index,
    end: C::Index,
}

impl<C> Clone for Indices<'_, C>
where
    C: Collection,
{
    #[inline]
    fn clone(&self) -> Self {
        Indices {
            collection: self.collection,
            next: self.next.clone(),
            end: self.end.clone(),
        }
    }
}

impl<C> fmt::Debug for Indices<'_, C>
where
    C: Collection,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Indices")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish()
    }
}

impl<C> Iterator for Indices<'_, C>
where
    C: Collection,
{
    type Item = C::Index;

    #[inline]
    fn next(&mut self) -> Option<C::Index> {
        if self.next == self.end {
            return None;
        }

        let after = self.collection.index_after(&self.next);
        Some(mem::replace(&mut self.next, after))
    }
}

impl<C> FusedIterator for Indices<'_, C> where C: Collection {}

/// The elements of a set or map between two ordinals, as returned by
/// [`Collection::slice`].
///
/// ```
/// use std::collections::BTreeSet;
///
/// use nonempty_wrapper::collection::{Collection, Window};
///
/// let set = BTreeSet::from([1, 2, 3]);
/// let window: Window<_> = set.slice(1..3);
/// assert!(window.eq([&2, &3]));
/// ```
pub type Window<I> = Take<Skip<I>>;

#[cold]
#[track_caller]
pub(crate) fn position_out_of_bounds(position: &dyn fmt::Debug) -> ! {
    panic!("position {position:?} is out of bounds")
}

/// `index + distance`, unless that steps over `limit` from at or before it.
#[inline]
pub(crate) fn offset_limited(index: usize, distance: usize, limit: usize) -> Option<usize> {
    match index.checked_add(distance) {
        Some(target) if index <= limit && target > limit => None,
        Some(target) => Some(target),
        None if index <= limit => None,
        None => position_out_of_bounds(&index),
    }
}

#[inline]
#[track_caller]
pub(crate) fn ordinal_before(index: usize) -> usize {
    match index.checked_sub(1) {
        Some(before) => before,
        None => position_out_of_bounds(&index),
    }
}

/// Positions for collections indexed by the ordinal of each element.
macro_rules! ordinal_positions {
    () => {
        type Index = usize;

        #[inline]
        fn start_index(&self) -> usize {
            0
        }

        #[inline]
        fn end_index(&self) -> usize {
            $crate::Collection::len(self)
        }

        #[inline]
        #[track_caller]
        fn index_after(&self, index: &usize) -> usize {
            if *index >= $crate::Collection::len(self) {
                $crate::collection::position_out_of_bounds(index);
            }
            index + 1
        }

        #[inline]
        #[track_caller]
        fn index_offset(&self, index: usize, distance: usize) -> usize {
            match index.checked_add(distance) {
                Some(target) if target <= $crate::Collection::len(self) => target,
                _ => $crate::collection::position_out_of_bounds(&index),
            }
        }

        #[inline]
        fn index_offset_limited(&self, index: usize, distance: usize, limit: &usize) -> Option<usize> {
            $crate::collection::offset_limited(index, distance, *limit)
        }

        #[inline]
        #[track_caller]
        fn distance(&self, start: &usize, end: &usize) -> usize {
            match end.checked_sub(*start) {
                Some(distance) => distance,
                None => $crate::collection::position_out_of_bounds(end),
            }
        }
    };
}

pub(crate) use ordinal_positions;
