#[cfg(any(feature = "alloc", feature = "std"))]
use crate::{imports::*, GrowableCollection};
use crate::{
    collection::{ordinal_before, ordinal_positions, position_out_of_bounds},
    BidirectionalCollection, Collection, RandomAccessCollection,
};

use core::{ops::Range, slice};

////////////////////////////////////////////////////////////////////////////////
// Contiguous sequences
////////////////////////////////////////////////////////////////////////////////

macro_rules! contiguous {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {$(
        impl<$($generics)*> Collection for $ty {
            type Element<'a> = &'a T where Self: 'a;
            type Iter<'a> = slice::Iter<'a, T> where Self: 'a;
            type SubSequence<'a> = &'a [T] where Self: 'a;

            ordinal_positions!();

            #[inline]
            fn is_empty(&self) -> bool {
                <[T]>::is_empty(self)
            }

            #[inline]
            fn len(&self) -> usize {
                <[T]>::len(self)
            }

            #[inline]
            fn iter(&self) -> slice::Iter<'_, T> {
                <[T]>::iter(self)
            }

            #[inline]
            fn get_at(&self, index: &usize) -> Option<&T> {
                <[T]>::get(self, *index)
            }

            #[inline]
            #[track_caller]
            fn slice(&self, range: Range<usize>) -> &[T] {
                let elements: &[T] = self;
                &elements[range]
            }
        }

        impl<$($generics)*> BidirectionalCollection for $ty {
            #[inline]
            #[track_caller]
            fn index_before(&self, index: &usize) -> usize {
                ordinal_before(*index)
            }
        }

        impl<$($generics)*> RandomAccessCollection for $ty {}
    )*};
}

contiguous!([T, const N: usize] [T; N], ['s, T] &'s [T]);

#[cfg(any(feature = "alloc", feature = "std"))]
contiguous!([T] Vec<T>, [T] Box<[T]>);

#[cfg(any(feature = "alloc", feature = "std"))]
#[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
impl<T> GrowableCollection for Vec<T> {
    type Item = T;

    #[inline]
    fn append(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn append_contents<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        Extend::extend(self, items);
    }

    #[inline]
    #[track_caller]
    fn insert(&mut self, item: T, at: usize) {
        Vec::insert(self, at, item);
    }

    #[inline]
    #[track_caller]
    fn insert_contents<I>(&mut self, items: I, at: usize)
    where
        I: IntoIterator<Item = T>,
    {
        // The splice inserts when dropped; the range removes nothing.
        drop(Vec::splice(self, at..at, items));
    }
}

////////////////////////////////////////////////////////////////////////////////
// Ring buffers
////////////////////////////////////////////////////////////////////////////////

#[cfg(any(feature = "alloc", feature = "std"))]
#[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
impl<T> Collection for VecDeque<T> {
    type Element<'a> = &'a T where Self: 'a;
    type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;
    type SubSequence<'a> = vec_deque::Iter<'a, T> where Self: 'a;

    ordinal_positions!();

    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn iter(&self) -> vec_deque::Iter<'_, T> {
        VecDeque::iter(self)
    }

    #[inline]
    fn get_at(&self, index: &usize) -> Option<&T> {
        VecDeque::get(self, *index)
    }

    #[inline]
    #[track_caller]
    fn slice(&self, range: Range<usize>) -> vec_deque::Iter<'_, T> {
        VecDeque::range(self, range)
    }
}

#[cfg(any(feature = "alloc", feature = "std"))]
#[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
impl<T> BidirectionalCollection for VecDeque<T> {
    #[inline]
    #[track_caller]
    fn index_before(&self, index: &usize) -> usize {
        ordinal_before(*index)
    }
}

#[cfg(any(feature = "alloc", feature = "std"))]
#[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
impl<T> RandomAccessCollection for VecDeque<T> {}

#[cfg(any(feature = "alloc", feature = "std"))]
#[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
impl<T> GrowableCollection for VecDeque<T> {
    type Item = T;

    #[inline]
    fn append(&mut self, item: T) {
        VecDeque::push_back(self, item);
    }

    #[inline]
    fn append_contents<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        Extend::extend(self, items);
    }

    #[inline]
    #[track_caller]
    fn insert(&mut self, item: T, at: usize) {
        VecDeque::insert(self, at, item);
    }

    #[track_caller]
    fn insert_contents<I>(&mut self, items: I, at: usize)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tail = VecDeque::split_off(self, at);
        Extend::extend(self, items);
        VecDeque::append(self, &mut tail);
    }
}

////////////////////////////////////////////////////////////////////////////////
// Integer ranges
////////////////////////////////////////////////////////////////////////////////

/// The number of integers in `start..end`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn span(start: i128, end: i128) -> usize {
    if end > start {
        (end - start) as usize
    } else {
        0
    }
}

macro_rules! integer_range {
    ($($int:ty),* $(,)?) => {$(
        #[allow(clippy::cast_lossless)]
        impl Collection for Range<$int> {
            type Element<'a> = $int where Self: 'a;
            type Index = $int;
            type Iter<'a> = Range<$int> where Self: 'a;
            type SubSequence<'a> = Range<$int> where Self: 'a;

            #[inline]
            fn is_empty(&self) -> bool {
                self.start >= self.end
            }

            #[inline]
            fn len(&self) -> usize {
                span(self.start as i128, self.end as i128)
            }

            #[inline]
            fn iter(&self) -> Range<$int> {
                self.clone()
            }

            #[inline]
            fn start_index(&self) -> $int {
                self.start
            }

            #[inline]
            fn end_index(&self) -> $int {
                self.end
            }

            #[inline]
            #[track_caller]
            fn index_after(&self, index: &$int) -> $int {
                if *index < self.start || *index >= self.end {
                    position_out_of_bounds(index);
                }
                index + 1
            }

            #[inline]
            #[track_caller]
            fn index_offset(&self, index: $int, distance: usize) -> $int {
                let target = index as i128 + distance as i128;
                if target > self.end as i128 {
                    position_out_of_bounds(&index);
                }
                <$int>::try_from(target).unwrap_or_else(|_| position_out_of_bounds(&index))
            }

            #[inline]
            #[track_caller]
            fn index_offset_limited(&self, index: $int, distance: usize, limit: &$int) -> Option<$int> {
                let target = index as i128 + distance as i128;
                if index <= *limit && target > *limit as i128 {
                    return None;
                }
                match <$int>::try_from(target) {
                    Ok(target) => Some(target),
                    Err(_) => position_out_of_bounds(&index),
                }
            }

            #[inline]
            #[track_caller]
            fn distance(&self, start: &$int, end: &$int) -> usize {
                if end < start {
                    position_out_of_bounds(end);
                }
                span(*start as i128, *end as i128)
            }

            #[inline]
            fn get_at(&self, index: &$int) -> Option<$int> {
                self.contains(index).then_some(*index)
            }

            #[inline]
            #[track_caller]
            fn slice(&self, range: Range<$int>) -> Range<$int> {
                if range.start > range.end || range.start < self.start || range.end > self.end {
                    position_out_of_bounds(&range);
                }
                range
            }
        }

        impl BidirectionalCollection for Range<$int> {
            #[inline]
            #[track_caller]
            fn index_before(&self, index: &$int) -> $int {
                if *index <= self.start || *index > self.end {
                    position_out_of_bounds(index);
                }
                index - 1
            }
        }

        impl RandomAccessCollection for Range<$int> {}
    )*};
}

integer_range!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
