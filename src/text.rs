//! Text is a collection of `char`s positioned by byte offset.
//!
//! Positions must fall on `char` boundaries, which makes stepping linear in
//! the width of the neighboring character and measuring linear in the length
//! of the text. Text is therefore bidirectional but not random access.

#[cfg(any(feature = "alloc", feature = "std"))]
use crate::{imports::*, GrowableCollection};
use crate::{collection::position_out_of_bounds, BidirectionalCollection, Collection};

use core::{ops::Range, str::Chars};

#[inline]
#[track_caller]
fn char_after(text: &str, index: usize) -> usize {
    match text.get(index..).and_then(|rest| rest.chars().next()) {
        Some(c) => index + c.len_utf8(),
        None => position_out_of_bounds(&index),
    }
}

#[inline]
#[track_caller]
fn char_before(text: &str, index: usize) -> usize {
    match text.get(..index).and_then(|head| head.chars().next_back()) {
        Some(c) => index - c.len_utf8(),
        None => position_out_of_bounds(&index),
    }
}

macro_rules! textual {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {$(
        impl<$($generics)*> Collection for $ty {
            type Element<'a> = char where Self: 'a;
            type Index = usize;
            type Iter<'a> = Chars<'a> where Self: 'a;
            type SubSequence<'a> = &'a str where Self: 'a;

            #[inline]
            fn is_empty(&self) -> bool {
                str::is_empty(self)
            }

            #[inline]
            fn len(&self) -> usize {
                str::chars(self).count()
            }

            #[inline]
            fn iter(&self) -> Chars<'_> {
                str::chars(self)
            }

            #[inline]
            fn start_index(&self) -> usize {
                0
            }

            #[inline]
            fn end_index(&self) -> usize {
                str::len(self)
            }

            #[inline]
            #[track_caller]
            fn index_after(&self, index: &usize) -> usize {
                char_after(self, *index)
            }

            #[track_caller]
            fn distance(&self, start: &usize, end: &usize) -> usize {
                let text: &str = self;
                text[*start..*end].chars().count()
            }

            #[inline]
            fn get_at(&self, index: &usize) -> Option<char> {
                str::get(self, *index..)?.chars().next()
            }

            #[inline]
            #[track_caller]
            fn slice(&self, range: Range<usize>) -> &str {
                let text: &str = self;
                &text[range]
            }
        }

        impl<$($generics)*> BidirectionalCollection for $ty {
            #[inline]
            #[track_caller]
            fn index_before(&self, index: &usize) -> usize {
                char_before(self, *index)
            }
        }
    )*};
}

textual!(['s] &'s str);

#[cfg(any(feature = "alloc", feature = "std"))]
textual!([] String);

#[cfg(any(feature = "alloc", feature = "std"))]
#[cfg_attr(doc_cfg, doc(cfg(any(feature = "alloc", feature = "std"))))]
impl GrowableCollection for String {
    type Item = char;

    #[inline]
    fn append(&mut self, item: char) {
        String::push(self, item);
    }

    #[inline]
    fn append_contents<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = char>,
    {
        Extend::extend(self, items);
    }

    #[inline]
    #[track_caller]
    fn insert(&mut self, item: char, at: usize) {
        String::insert(self, at, item);
    }

    #[track_caller]
    fn insert_contents<I>(&mut self, items: I, at: usize)
    where
        I: IntoIterator<Item = char>,
    {
        let tail = String::split_off(self, at);
        Extend::extend(self, items);
        String::push_str(self, &tail);
    }
}
