//! Views over a [`Nonempty`] exposing what only nonemptiness makes total.

#[cfg(any(feature = "alloc", feature = "std"))]
use crate::imports::*;
use crate::{
    failure, Collection, ContentType, GrowableCollection, Nonempty, RandomAccessCollection,
};

use core::{cmp::Ordering, fmt};

/// A shared view of a [`Nonempty`], returned by [`Nonempty::nonempty`].
///
/// Every extremal accessor here returns an element rather than an
/// [`Option`].
pub struct Projected<'a, C> {
    pub(crate) nonempty: &'a Nonempty<C>,
}

impl<'a, C> Projected<'a, C>
where
    C: Collection + 'a,
{
    /// The wrapper this view projects.
    #[must_use]
    #[inline]
    pub fn content(self) -> &'a Nonempty<C> {
        self.nonempty
    }

    /// The first element together with the iterator positioned after it.
    #[inline]
    #[track_caller]
    fn split(self) -> (C::Element<'a>, C::Iter<'a>) {
        let content: &'a C = &self.nonempty.inner;
        let mut elements = content.iter();
        match elements.next() {
            Some(first) => (first, elements),
            None => failure::emptied(ContentType::of::<C>()),
        }
    }

    /// Returns the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let set = Nonempty::assert(BTreeSet::from([3, 1, 2]));
    /// assert_eq!(set.nonempty().first(), &1);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn first(self) -> C::Element<'a> {
        self.split().0
    }

    /// Returns the first element for which no other element compares
    /// greater under `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::nonempty;
    ///
    /// let words = nonempty!["bb", "a", "cc"];
    /// assert_eq!(words.nonempty().max_by(|a, b| a.len().cmp(&b.len())), &"bb");
    /// ```
    #[must_use]
    #[track_caller]
    pub fn max_by<F>(self, mut compare: F) -> C::Element<'a>
    where
        F: FnMut(&C::Element<'a>, &C::Element<'a>) -> Ordering,
    {
        let (mut max, rest) = self.split();
        for element in rest {
            if compare(&max, &element) == Ordering::Less {
                max = element;
            }
        }
        max
    }

    /// Returns the first element for which no other element compares less
    /// under `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::nonempty;
    ///
    /// let words = nonempty!["bb", "a", "c"];
    /// assert_eq!(words.nonempty().min_by(|a, b| a.len().cmp(&b.len())), &"a");
    /// ```
    #[must_use]
    #[track_caller]
    pub fn min_by<F>(self, mut compare: F) -> C::Element<'a>
    where
        F: FnMut(&C::Element<'a>, &C::Element<'a>) -> Ordering,
    {
        let (mut min, rest) = self.split();
        for element in rest {
            if compare(&element, &min) == Ordering::Less {
                min = element;
            }
        }
        min
    }

    /// Returns the first element with the greatest key.
    #[must_use]
    #[track_caller]
    pub fn max_by_key<K, F>(self, mut key: F) -> C::Element<'a>
    where
        K: Ord,
        F: FnMut(&C::Element<'a>) -> K,
    {
        let (mut max, rest) = self.split();
        let mut max_key = key(&max);
        for element in rest {
            let element_key = key(&element);
            if max_key < element_key {
                max = element;
                max_key = element_key;
            }
        }
        max
    }

    /// Returns the first element with the least key.
    #[must_use]
    #[track_caller]
    pub fn min_by_key<K, F>(self, mut key: F) -> C::Element<'a>
    where
        K: Ord,
        F: FnMut(&C::Element<'a>) -> K,
    {
        let (mut min, rest) = self.split();
        let mut min_key = key(&min);
        for element in rest {
            let element_key = key(&element);
            if element_key < min_key {
                min = element;
                min_key = element_key;
            }
        }
        min
    }

    /// Returns the greatest element, the first one if several are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let text = Nonempty::assert("nonempty");
    /// assert_eq!(text.nonempty().max(), 'y');
    /// assert_eq!(text.nonempty().min(), 'e');
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn max(self) -> C::Element<'a>
    where
        C::Element<'a>: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Returns the least element, the first one if several are equal.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn min(self) -> C::Element<'a>
    where
        C::Element<'a>: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Splits off the first element. The rest may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let text = Nonempty::assert("héllo");
    /// assert_eq!(text.nonempty().separating_first(), ('h', "éllo"));
    ///
    /// let single = Nonempty::assert([42]);
    /// assert_eq!(single.nonempty().separating_first(), (&42, &[][..]));
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn separating_first(self) -> (C::Element<'a>, C::SubSequence<'a>) {
        let content: &'a C = &self.nonempty.inner;
        let first = self.first();
        let rest = content.index_after(&content.start_index());
        (first, content.slice(rest..content.end_index()))
    }

    /// Collects `f` applied to every element, in order, into a nonempty
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::{nonempty, Nonempty};
    ///
    /// let text = Nonempty::assert("abc");
    /// assert_eq!(text.nonempty().map(|c| c.to_ascii_uppercase()), nonempty!['A', 'B', 'C']);
    /// ```
    #[cfg(any(feature = "alloc", feature = "std"))]
    #[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
    #[must_use]
    #[inline]
    pub fn map<X, F>(self, f: F) -> Nonempty<Vec<X>>
    where
        F: FnMut(C::Element<'a>) -> X,
    {
        let content: &'a C = &self.nonempty.inner;
        Nonempty::new_unchecked(content.iter().map(f).collect())
    }
}

impl<'a, C> Projected<'a, C>
where
    C: RandomAccessCollection + 'a,
{
    /// Returns the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let values = Nonempty::assert(vec![1, 2, 3]);
    /// assert_eq!(values.nonempty().last(), &3);
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn last(self) -> C::Element<'a> {
        let content: &'a C = &self.nonempty.inner;
        content.at(&self.last_index())
    }

    /// Splits off the last element. The prefix may be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let values = Nonempty::assert(vec![1, 2, 3]);
    /// assert_eq!(values.nonempty().separating_last(), (&[1, 2][..], &3));
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn separating_last(self) -> (C::SubSequence<'a>, C::Element<'a>) {
        let content: &'a C = &self.nonempty.inner;
        let last = self.last_index();
        (content.slice(content.start_index()..last.clone()), content.at(&last))
    }

    #[inline]
    #[track_caller]
    fn last_index(self) -> C::Index {
        let content: &'a C = &self.nonempty.inner;
        let end = content.end_index();
        if content.start_index() == end {
            failure::emptied(ContentType::of::<C>());
        }
        content.index_before(&end)
    }
}

impl<C> Clone for Projected<'_, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Projected<'_, C> {}

impl<C> fmt::Debug for Projected<'_, C>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Projected").field(self.nonempty).finish()
    }
}

/// An exclusive view of a [`Nonempty`], returned by
/// [`Nonempty::nonempty_mut`].
///
/// The view can only grow the collection. After every operation the content
/// is checked again, and a collection that somehow ended up empty halts the
/// program with a message naming the operation.
pub struct ProjectedMut<'a, C> {
    pub(crate) nonempty: &'a mut Nonempty<C>,
}

impl<'a, C> ProjectedMut<'a, C>
where
    C: Collection + 'a,
{
    /// Reborrows this view as a shared one.
    #[must_use]
    #[inline]
    pub fn as_projected(&self) -> Projected<'_, C> {
        Projected {
            nonempty: &*self.nonempty,
        }
    }

    /// Converts this view into a shared one for the rest of the borrow.
    #[must_use]
    #[inline]
    pub fn into_projected(self) -> Projected<'a, C> {
        Projected {
            nonempty: self.nonempty,
        }
    }

    /// The wrapper this view projects.
    #[must_use]
    #[inline]
    pub fn content(&self) -> &Nonempty<C> {
        &*self.nonempty
    }
}

impl<'a, C> ProjectedMut<'a, C>
where
    C: GrowableCollection + 'a,
{
    /// Adds `item` after the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let mut text = Nonempty::assert(String::from("ab"));
    /// text.nonempty_mut().append('c');
    /// assert_eq!(text.content(), "abc");
    /// ```
    #[inline]
    #[track_caller]
    pub fn append(&mut self, item: C::Item) {
        GrowableCollection::append(&mut self.nonempty.inner, item);
        self.nonempty.revalidate("append");
    }

    /// Adds every item of `items` after the last element, in order.
    #[inline]
    #[track_caller]
    pub fn append_contents<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = C::Item>,
    {
        GrowableCollection::append_contents(&mut self.nonempty.inner, items);
        self.nonempty.revalidate("append_contents");
    }

    /// Inserts `item` at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not a valid position or the end position.
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, item: C::Item, at: C::Index) {
        GrowableCollection::insert(&mut self.nonempty.inner, item, at);
        self.nonempty.revalidate("insert");
    }

    /// Inserts every item of `items` at `at`, in order.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not a valid position or the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::VecDeque;
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let mut queue = Nonempty::assert(VecDeque::from([1, 4]));
    /// queue.nonempty_mut().insert_contents([2, 3], 1);
    /// assert_eq!(queue.content(), &VecDeque::from([1, 2, 3, 4]));
    /// ```
    #[inline]
    #[track_caller]
    pub fn insert_contents<I>(&mut self, items: I, at: C::Index)
    where
        I: IntoIterator<Item = C::Item>,
    {
        GrowableCollection::insert_contents(&mut self.nonempty.inner, items, at);
        self.nonempty.revalidate("insert_contents");
    }
}

impl<C> fmt::Debug for ProjectedMut<'_, C>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProjectedMut").field(&*self.nonempty).finish()
    }
}
