//! Sets and maps, positioned by the ordinal of each element in iteration order.
//!
//! Ordered collections can step both ways over their ordinals. Hashed
//! collections only promise a stable order between mutations, so they stay
//! forward-only.
#![cfg(any(feature = "alloc", feature = "std"))]

use crate::{
    collection::{ordinal_before, ordinal_positions, position_out_of_bounds, Window},
    imports::*,
    BidirectionalCollection, Collection,
};

use core::ops::Range;

#[inline]
#[track_caller]
fn window<I>(iter: I, range: Range<usize>, len: usize) -> Window<I>
where
    I: Iterator,
{
    if range.start > range.end || range.end > len {
        position_out_of_bounds(&range);
    }
    iter.skip(range.start).take(range.end - range.start)
}

////////////////////////////////////////////////////////////////////////////////
// Ordered
////////////////////////////////////////////////////////////////////////////////

impl<T> Collection for BTreeSet<T> {
    type Element<'a> = &'a T where Self: 'a;
    type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a;
    type SubSequence<'a> = Window<btree_set::Iter<'a, T>> where Self: 'a;

    ordinal_positions!();

    #[inline]
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn iter(&self) -> btree_set::Iter<'_, T> {
        BTreeSet::iter(self)
    }

    #[inline]
    fn get_at(&self, index: &usize) -> Option<&T> {
        BTreeSet::iter(self).nth(*index)
    }

    #[inline]
    #[track_caller]
    fn slice(&self, range: Range<usize>) -> Window<btree_set::Iter<'_, T>> {
        window(BTreeSet::iter(self), range, BTreeSet::len(self))
    }
}

impl<T> BidirectionalCollection for BTreeSet<T> {
    #[inline]
    #[track_caller]
    fn index_before(&self, index: &usize) -> usize {
        ordinal_before(*index)
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Element<'a> = (&'a K, &'a V) where Self: 'a;
    type Iter<'a> = btree_map::Iter<'a, K, V> where Self: 'a;
    type SubSequence<'a> = Window<btree_map::Iter<'a, K, V>> where Self: 'a;

    ordinal_positions!();

    #[inline]
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    #[inline]
    fn iter(&self) -> btree_map::Iter<'_, K, V> {
        BTreeMap::iter(self)
    }

    #[inline]
    fn get_at(&self, index: &usize) -> Option<(&K, &V)> {
        BTreeMap::iter(self).nth(*index)
    }

    #[inline]
    #[track_caller]
    fn slice(&self, range: Range<usize>) -> Window<btree_map::Iter<'_, K, V>> {
        window(BTreeMap::iter(self), range, BTreeMap::len(self))
    }
}

impl<K, V> BidirectionalCollection for BTreeMap<K, V> {
    #[inline]
    #[track_caller]
    fn index_before(&self, index: &usize) -> usize {
        ordinal_before(*index)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Hashed
////////////////////////////////////////////////////////////////////////////////

#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
impl<T, S> Collection for HashSet<T, S> {
    type Element<'a> = &'a T where Self: 'a;
    type Iter<'a> = hash_set::Iter<'a, T> where Self: 'a;
    type SubSequence<'a> = Window<hash_set::Iter<'a, T>> where Self: 'a;

    ordinal_positions!();

    #[inline]
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn iter(&self) -> hash_set::Iter<'_, T> {
        HashSet::iter(self)
    }

    #[inline]
    fn get_at(&self, index: &usize) -> Option<&T> {
        HashSet::iter(self).nth(*index)
    }

    #[inline]
    #[track_caller]
    fn slice(&self, range: Range<usize>) -> Window<hash_set::Iter<'_, T>> {
        window(HashSet::iter(self), range, HashSet::len(self))
    }
}

#[cfg(feature = "std")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "std")))]
impl<K, V, S> Collection for HashMap<K, V, S> {
    type Element<'a> = (&'a K, &'a V) where Self: 'a;
    type Iter<'a> = hash_map::Iter<'a, K, V> where Self: 'a;
    type SubSequence<'a> = Window<hash_map::Iter<'a, K, V>> where Self: 'a;

    ordinal_positions!();

    #[inline]
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn iter(&self) -> hash_map::Iter<'_, K, V> {
        HashMap::iter(self)
    }

    #[inline]
    fn get_at(&self, index: &usize) -> Option<(&K, &V)> {
        HashMap::iter(self).nth(*index)
    }

    #[inline]
    #[track_caller]
    fn slice(&self, range: Range<usize>) -> Window<hash_map::Iter<'_, K, V>> {
        window(HashMap::iter(self), range, HashMap::len(self))
    }
}
