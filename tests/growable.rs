use std::{collections::VecDeque, ops::Range, slice};

use nonempty_wrapper::{nonempty, Collection, GrowableCollection, Nonempty};

#[test]
fn vectors_grow() {
    let mut values = nonempty![2];

    values.nonempty_mut().append(4);
    values.nonempty_mut().append_contents([5, 6]);
    values.nonempty_mut().insert(1, 0);
    values.nonempty_mut().insert_contents([3], 2);
    values.nonempty_mut().insert_contents(Vec::new(), 0);

    assert_eq!(values.content(), &vec![1, 2, 3, 4, 5, 6]);
    assert!(!values.is_empty());
}

#[test]
fn queues_grow() {
    let mut queue = Nonempty::assert(VecDeque::from(['b']));
    {
        let mut grow = queue.nonempty_mut();
        grow.insert('a', 0);
        grow.append('e');
        grow.insert_contents(['c', 'd'], 2);
        grow.append_contents("fg".chars());
        assert_eq!(grow.as_projected().last(), &'g');
    }

    assert_eq!(queue.iter().collect::<String>(), "abcdefg");
    assert_eq!(queue.len().get(), 7);
}

#[test]
fn strings_grow_at_char_boundaries() {
    let mut text = Nonempty::assert(String::from("ñb"));

    text.nonempty_mut().insert('a', 0);
    text.nonempty_mut().append('d');
    text.nonempty_mut().insert_contents("c".chars(), 4);
    text.nonempty_mut().append_contents(['e', 'é']);

    assert_eq!(text.content(), "añbcdeé");
    assert_eq!(text.len().get(), 7);
}

#[test]
#[should_panic]
fn strings_reject_positions_inside_a_char() {
    let mut text = Nonempty::assert(String::from("ñ"));
    text.nonempty_mut().insert('x', 1);
}

#[test]
fn exclusive_views_become_shared() {
    let mut values = nonempty![1];
    let mut grow = values.nonempty_mut();
    grow.append(2);
    assert_eq!(grow.content().len().get(), 2);

    let shared = grow.into_projected();
    assert_eq!(shared.last(), &2);
}

/// A sequence that forgets everything whenever it grows.
#[derive(Clone, Debug)]
struct Leaky(Vec<u32>);

/// A sequence that claims to have elements it does not have.
#[derive(Clone, Debug)]
struct Liar(Vec<u32>);

macro_rules! vec_backed {
    ($ty:ident, $is_empty:expr) => {
        impl Collection for $ty {
            type Element<'a> = &'a u32 where Self: 'a;
            type Index = usize;
            type Iter<'a> = slice::Iter<'a, u32> where Self: 'a;
            type SubSequence<'a> = &'a [u32] where Self: 'a;

            fn is_empty(&self) -> bool {
                let is_empty: fn(&Self) -> bool = $is_empty;
                is_empty(self)
            }

            fn len(&self) -> usize {
                self.0.len()
            }

            fn iter(&self) -> slice::Iter<'_, u32> {
                self.0.as_slice().iter()
            }

            fn start_index(&self) -> usize {
                0
            }

            fn end_index(&self) -> usize {
                self.0.len()
            }

            fn index_after(&self, index: &usize) -> usize {
                assert!(*index < self.0.len(), "out of bounds");
                index + 1
            }

            fn get_at(&self, index: &usize) -> Option<&u32> {
                self.0.get(*index)
            }

            fn slice(&self, range: Range<usize>) -> &[u32] {
                &self.0[range]
            }
        }
    };
}

vec_backed!(Leaky, |leaky| leaky.0.is_empty());
vec_backed!(Liar, |_| false);

impl GrowableCollection for Leaky {
    type Item = u32;

    fn append(&mut self, _: u32) {
        self.0.clear();
    }

    fn append_contents<I>(&mut self, _: I)
    where
        I: IntoIterator<Item = u32>,
    {
        self.0.clear();
    }

    fn insert(&mut self, _: u32, _: usize) {
        self.0.clear();
    }

    fn insert_contents<I>(&mut self, _: I, _: usize)
    where
        I: IntoIterator<Item = u32>,
    {
        self.0.clear();
    }
}

#[test]
#[should_panic(expected = "append left the Nonempty")]
fn growth_that_empties_is_caught() {
    let mut leaky = Nonempty::assert(Leaky(vec![1]));
    leaky.nonempty_mut().append(2);
}

#[test]
#[should_panic(expected = "insert_contents left the Nonempty")]
fn bulk_growth_that_empties_is_caught() {
    let mut leaky = Nonempty::assert(Leaky(vec![1, 2]));
    leaky.nonempty_mut().insert_contents([3, 4], 1);
}

#[test]
#[should_panic(expected = "was observed empty")]
fn empty_content_is_never_measured() {
    let liar = Nonempty::assert(Liar(Vec::new()));
    let _ = liar.len();
}

#[test]
#[should_panic(expected = "was observed empty")]
fn empty_content_has_no_first_element() {
    let liar = Nonempty::assert(Liar(Vec::new()));
    let _ = liar.nonempty().first();
}
