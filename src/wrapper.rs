#[cfg(all(feature = "quickcheck", feature = "std"))]
use crate::imports::*;
use crate::{
    failure, BidirectionalCollection, Collection, ContentType, EmptyCollectionError, Indices,
    Projected, ProjectedMut,
};

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    num::NonZeroUsize,
    ops::Range,
};

/// A collection that is guaranteed to not be empty.
///
/// The wrapper owns exactly one `C` and only ever hands out shared access to
/// it. Everything that needs the guarantee, such as an unwrapped
/// [`first`](Projected::first), goes through [`nonempty`](Nonempty::nonempty)
/// and [`nonempty_mut`](Nonempty::nonempty_mut).
///
/// # Construction
///
/// | Constructor | Empty input |
/// |---|---|
/// | [`Nonempty::new`] | `None` |
/// | [`Nonempty::require`] | [`EmptyCollectionError`] |
/// | [`Nonempty::assert`] | panics |
///
/// Copying a wrapper is just [`Clone`]; passing a `Nonempty<C>` where a
/// `Nonempty<C>` is expected goes through the identity [`From`] and never
/// nests.
///
/// # Layout
///
/// The layout of a [`Nonempty<C>`] is *identical* to `C`.
///
/// # Examples
///
/// ```
/// use nonempty_wrapper::Nonempty;
///
/// # fn main() -> Result<(), nonempty_wrapper::EmptyCollectionError> {
/// let names = Nonempty::require(vec!["ada", "grace"])?;
/// assert_eq!(names.nonempty().first(), &"ada");
/// assert_eq!(names.len().get(), 2);
///
/// assert!(Nonempty::new(Vec::<&str>::new()).is_none());
/// # Ok(())
/// # }
/// ```
#[repr(transparent)]
pub struct Nonempty<C> {
    pub(crate) inner: C,
}

impl<C> Nonempty<C>
where
    C: Collection,
{
    /// Wraps `content` if it is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::Nonempty;
    ///
    /// assert!(Nonempty::new("text").is_some());
    /// assert!(Nonempty::new("").is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn new(content: C) -> Option<Self> {
        (!Collection::is_empty(&content)).then_some(Nonempty { inner: content })
    }

    /// Wraps `content`, failing if it is empty.
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyCollectionError`] naming `C` if `content` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::{ContentType, Nonempty};
    ///
    /// let error = Nonempty::require(Vec::<u8>::new()).unwrap_err();
    /// assert_eq!(error.content(), ContentType::of::<Vec<u8>>());
    /// ```
    #[inline]
    pub fn require(content: C) -> Result<Self, EmptyCollectionError> {
        if Collection::is_empty(&content) {
            let kind = ContentType::of::<C>();

            #[cfg(feature = "tracing")]
            tracing::debug!(content = %kind, "rejected an empty collection");

            return Err(EmptyCollectionError::new(kind));
        }

        Ok(Nonempty { inner: content })
    }

    /// Wraps `content`, which the caller asserts is not empty.
    ///
    /// # Panics
    ///
    /// Panics if `content` is empty, with a message naming `C`. This never
    /// returns a wrapper around an empty collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let digits = Nonempty::assert(0..10);
    /// assert_eq!(digits.nonempty().last(), 9);
    /// ```
    ///
    /// ```should_panic
    /// use nonempty_wrapper::Nonempty;
    ///
    /// // panic: the &str collection passed was empty
    /// let _ = Nonempty::assert("");
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn assert(content: C) -> Self {
        if Collection::is_empty(&content) {
            failure::assertion_failed(ContentType::of::<C>());
        }

        Nonempty { inner: content }
    }

    /// Wraps `content` for callers that already know it is not empty.
    #[inline]
    #[track_caller]
    #[cfg_attr(not(any(feature = "alloc", feature = "std")), allow(dead_code))]
    pub(crate) fn new_unchecked(content: C) -> Self {
        debug_assert!(
            !Collection::is_empty(&content),
            "nonempty wrapper initialized with an empty collection"
        );
        Nonempty { inner: content }
    }

    /// [`Nonempty::assert`], except that an empty `content` is handed to the
    /// failure handler installed on this thread and an error is returned.
    ///
    /// Without an installed handler this halts exactly like
    /// [`Nonempty::assert`].
    #[cfg(all(test, feature = "std"))]
    #[track_caller]
    pub(crate) fn assert_reporting(content: C) -> Result<Self, EmptyCollectionError> {
        if Collection::is_empty(&content) {
            let kind = ContentType::of::<C>();
            failure::report(kind);
            return Err(EmptyCollectionError::new(kind));
        }

        Ok(Nonempty { inner: content })
    }

    /// Always returns `false`.
    ///
    /// It's incredibly likely that, if you are using this check, it is
    /// absolutely unnecessary.
    #[must_use]
    #[inline]
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of elements in the collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::num::NonZeroUsize;
    /// use nonempty_wrapper::Nonempty;
    ///
    /// let text = Nonempty::assert("añb");
    /// assert_eq!(text.len(), NonZeroUsize::new(3).unwrap());
    /// ```
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn len(&self) -> NonZeroUsize {
        match NonZeroUsize::new(Collection::len(&self.inner)) {
            Some(len) => len,
            None => failure::emptied(ContentType::of::<C>()),
        }
    }

    /// Iterates over the elements of the collection.
    #[inline]
    pub fn iter(&self) -> C::Iter<'_> {
        Collection::iter(&self.inner)
    }

    /// Iterates over every valid position of the collection.
    #[inline]
    pub fn indices(&self) -> Indices<'_, C> {
        Collection::indices(&self.inner)
    }

    /// See [`Collection::start_index`].
    #[must_use]
    #[inline]
    pub fn start_index(&self) -> C::Index {
        Collection::start_index(&self.inner)
    }

    /// See [`Collection::end_index`].
    #[must_use]
    #[inline]
    pub fn end_index(&self) -> C::Index {
        Collection::end_index(&self.inner)
    }

    /// See [`Collection::index_after`].
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn index_after(&self, index: &C::Index) -> C::Index {
        Collection::index_after(&self.inner, index)
    }

    /// See [`Collection::index_offset`].
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn index_offset(&self, index: C::Index, distance: usize) -> C::Index {
        Collection::index_offset(&self.inner, index, distance)
    }

    /// See [`Collection::index_offset_limited`].
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn index_offset_limited(
        &self,
        index: C::Index,
        distance: usize,
        limit: &C::Index,
    ) -> Option<C::Index> {
        Collection::index_offset_limited(&self.inner, index, distance, limit)
    }

    /// See [`Collection::distance`].
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn distance(&self, start: &C::Index, end: &C::Index) -> usize {
        Collection::distance(&self.inner, start, end)
    }

    /// See [`Collection::get_at`].
    #[must_use]
    #[inline]
    pub fn get_at(&self, index: &C::Index) -> Option<C::Element<'_>> {
        Collection::get_at(&self.inner, index)
    }

    /// See [`Collection::at`].
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn at(&self, index: &C::Index) -> C::Element<'_> {
        Collection::at(&self.inner, index)
    }

    /// See [`Collection::slice`].
    ///
    /// The result may be empty.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn slice(&self, range: Range<C::Index>) -> C::SubSequence<'_> {
        Collection::slice(&self.inner, range)
    }

    /// Returns the view of the operations that are only total because the
    /// collection is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::nonempty;
    ///
    /// let values = nonempty![3, 1, 4, 1, 5];
    /// assert_eq!(values.nonempty().max(), &5);
    /// assert_eq!(values.nonempty().min(), &1);
    /// ```
    #[must_use]
    #[inline]
    pub fn nonempty(&self) -> Projected<'_, C> {
        Projected { nonempty: self }
    }

    /// Returns the view of the operations that grow the collection without
    /// ever emptying it.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonempty_wrapper::nonempty;
    ///
    /// let mut values = nonempty![2, 3];
    /// values.nonempty_mut().insert(1, 0);
    /// values.nonempty_mut().append(4);
    /// assert_eq!(values.content(), &vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    #[inline]
    pub fn nonempty_mut(&mut self) -> ProjectedMut<'_, C> {
        ProjectedMut { nonempty: self }
    }

    /// Halts if the content is empty after `operation`.
    #[inline]
    #[track_caller]
    pub(crate) fn revalidate(&self, operation: &'static str) {
        if Collection::is_empty(&self.inner) {
            failure::grew_empty(operation, ContentType::of::<C>());
        }
    }
}

impl<C> Nonempty<C>
where
    C: BidirectionalCollection,
{
    /// See [`BidirectionalCollection::index_before`].
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn index_before(&self, index: &C::Index) -> C::Index {
        BidirectionalCollection::index_before(&self.inner, index)
    }
}

impl<C> Nonempty<C> {
    /// Returns the wrapped collection.
    #[must_use]
    #[inline]
    pub const fn content(&self) -> &C {
        &self.inner
    }

    /// Unwraps the collection, giving up the guarantee.
    ///
    /// This is the only way to mutate the content freely:
    ///
    /// ```
    /// use nonempty_wrapper::{nonempty, Nonempty};
    ///
    /// let mut values = nonempty![1, 2, 3].into_content();
    /// values.clear();
    /// assert!(Nonempty::new(values).is_none());
    /// ```
    #[must_use]
    #[inline]
    pub fn into_content(self) -> C {
        self.inner
    }
}

////////////////////////////////////////////////////////////////////////////////
// Formatting
////////////////////////////////////////////////////////////////////////////////

impl<C> fmt::Debug for Nonempty<C>
where
    C: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Cloning
////////////////////////////////////////////////////////////////////////////////

impl<C> Clone for Nonempty<C>
where
    C: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Nonempty {
            inner: self.inner.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.inner.clone_from(&source.inner);
    }
}

impl<C> Copy for Nonempty<C> where C: Copy {}

////////////////////////////////////////////////////////////////////////////////
// `as_*` traits
////////////////////////////////////////////////////////////////////////////////

impl<C> AsRef<C> for Nonempty<C> {
    #[inline]
    fn as_ref(&self) -> &C {
        &self.inner
    }
}

////////////////////////////////////////////////////////////////////////////////
// Iterator traits
////////////////////////////////////////////////////////////////////////////////

impl<'a, C> IntoIterator for &'a Nonempty<C>
where
    C: Collection + 'a,
{
    type Item = C::Element<'a>;
    type IntoIter = C::Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Collection::iter(&self.inner)
    }
}

impl<C> IntoIterator for Nonempty<C>
where
    C: IntoIterator,
{
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Comparison traits
////////////////////////////////////////////////////////////////////////////////

impl<C, D> PartialEq<Nonempty<D>> for Nonempty<C>
where
    C: PartialEq<D>,
{
    #[inline]
    fn eq(&self, other: &Nonempty<D>) -> bool {
        self.inner == other.inner
    }
}

impl<C> Eq for Nonempty<C> where C: Eq {}

impl<C> PartialOrd for Nonempty<C>
where
    C: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        PartialOrd::partial_cmp(&self.inner, &other.inner)
    }
}

impl<C> Ord for Nonempty<C>
where
    C: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(&self.inner, &other.inner)
    }
}

impl<C> Hash for Nonempty<C>
where
    C: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

////////////////////////////////////////////////////////////////////////////////
// `serde` implementations
////////////////////////////////////////////////////////////////////////////////

#[cfg(feature = "serde")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
impl<C> serde::Serialize for Nonempty<C>
where
    C: serde::Serialize,
{
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.inner, serializer)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "serde")))]
impl<'de, C> serde::Deserialize<'de> for Nonempty<C>
where
    C: Collection + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let content: C = serde::Deserialize::deserialize(deserializer)?;
        Nonempty::require(content).map_err(serde::de::Error::custom)
    }
}

////////////////////////////////////////////////////////////////////////////////
// `quickcheck` implementations
////////////////////////////////////////////////////////////////////////////////

#[cfg(all(feature = "quickcheck", feature = "std"))]
#[cfg_attr(doc_cfg, doc(cfg(all(feature = "quickcheck", feature = "std"))))]
impl<T> quickcheck::Arbitrary for Nonempty<Vec<T>>
where
    T: quickcheck::Arbitrary,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut content = Vec::<T>::arbitrary(g);
        if content.is_empty() {
            content.push(T::arbitrary(g));
        }
        Nonempty::new_unchecked(content)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.inner.shrink().filter_map(Nonempty::new))
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::failure::with_handler;

    use std::{
        cell::{Cell, RefCell},
        panic,
        rc::Rc,
    };

    #[test]
    fn reporting_assert_hands_empty_content_to_the_handler() {
        let reports = Rc::new(RefCell::new(Vec::new()));
        let recorded = Rc::clone(&reports);

        let result = with_handler(
            move |content| recorded.borrow_mut().push(content),
            || Nonempty::assert_reporting(Vec::<i32>::new()),
        );

        assert_eq!(result, Err(EmptyCollectionError::of::<Vec<i32>>()));
        assert_eq!(*reports.borrow(), [ContentType::of::<Vec<i32>>()]);
    }

    #[test]
    fn reporting_assert_wraps_nonempty_content_silently() {
        let reports = Rc::new(Cell::new(0));
        let counted = Rc::clone(&reports);

        let result = with_handler(
            move |_| counted.set(counted.get() + 1),
            || Nonempty::assert_reporting(vec![7]),
        );

        assert_eq!(result.map(Nonempty::into_content), Ok(vec![7]));
        assert_eq!(reports.get(), 0);
    }

    #[test]
    fn nested_handlers_restore_the_outer_one() {
        let outer = Rc::new(Cell::new(0));
        let inner = Rc::new(Cell::new(0));
        let (outer_count, inner_count) = (Rc::clone(&outer), Rc::clone(&inner));

        with_handler(
            move |_| outer_count.set(outer_count.get() + 1),
            || {
                with_handler(
                    move |content: ContentType| {
                        assert!(content.is::<String>());
                        inner_count.set(inner_count.get() + 1);
                    },
                    || Nonempty::assert_reporting(String::new()).is_err(),
                );
                let _ = Nonempty::assert_reporting(Vec::<u8>::new());
            },
        );

        assert_eq!((outer.get(), inner.get()), (1, 1));
    }

    #[test]
    #[should_panic(expected = "collection passed was empty")]
    fn unwinding_uninstalls_the_handler() {
        let unwound = panic::catch_unwind(|| with_handler(|_| {}, || panic!("body failed")));
        assert!(unwound.is_err());

        let _ = Nonempty::assert_reporting(Vec::<i32>::new());
    }

    #[test]
    #[should_panic(expected = "the &str collection passed was empty")]
    fn assert_ignores_installed_handlers() {
        with_handler(|_| {}, || Nonempty::assert(""));
    }

    #[test]
    fn unchecked_construction_never_reports() {
        let reports = Rc::new(Cell::new(0));
        let counted = Rc::clone(&reports);

        let wrapped = with_handler(
            move |_| counted.set(counted.get() + 1),
            || Nonempty::new_unchecked(vec!['a']),
        );

        assert_eq!(wrapped.content(), &vec!['a']);
        assert_eq!(reports.get(), 0);
    }

    #[test]
    #[should_panic(expected = "append left the Nonempty")]
    fn revalidation_names_the_operation() {
        let mut wrapped = Nonempty::new_unchecked(vec![1]);
        wrapped.inner.clear();
        wrapped.revalidate("append");
    }
}
