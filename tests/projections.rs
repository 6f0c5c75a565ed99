use std::collections::{BTreeMap, VecDeque};

use nonempty_wrapper::{nonempty, Nonempty};

#[test]
fn first_of_every_kind() {
    assert_eq!(nonempty![4, 5].nonempty().first(), &4);
    assert_eq!(Nonempty::assert("ünïcode").nonempty().first(), 'ü');
    assert_eq!(Nonempty::assert(10u8..20).nonempty().first(), 10);

    let map = Nonempty::assert(BTreeMap::from([("b", 2), ("a", 1)]));
    assert_eq!(map.nonempty().first(), (&"a", &1));
}

#[test]
fn last_of_random_access_collections() {
    assert_eq!(nonempty![4, 5].nonempty().last(), &5);
    assert_eq!(Nonempty::assert(-3i64..-1).nonempty().last(), -2);
    assert_eq!(Nonempty::assert(VecDeque::from([1, 2, 3])).nonempty().last(), &3);
    assert_eq!(Nonempty::assert(vec![7].into_boxed_slice()).nonempty().last(), &7);
}

#[test]
fn comparator_extremes_by_length() {
    let words = nonempty!["pear", "fig", "banana", "kiwi"];
    let by_length = |a: &&&str, b: &&&str| a.len().cmp(&b.len());

    assert_eq!(words.nonempty().max_by(by_length), &"banana");
    assert_eq!(words.nonempty().min_by(by_length), &"fig");
}

#[test]
fn ties_resolve_to_the_first_element() {
    let words = nonempty!["bb", "aa", "c", "d", "ee"];

    assert_eq!(words.nonempty().max_by(|a, b| a.len().cmp(&b.len())), &"bb");
    assert_eq!(words.nonempty().min_by(|a, b| a.len().cmp(&b.len())), &"c");
    assert_eq!(words.nonempty().max_by_key(|word| word.len()), &"bb");
    assert_eq!(words.nonempty().min_by_key(|word| word.len()), &"c");

    let pairs = nonempty![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
    assert_eq!(pairs.nonempty().max_by_key(|pair| pair.0), &(1, 'a'));
    assert_eq!(pairs.nonempty().min_by_key(|pair| pair.0), &(0, 'b'));
}

#[test]
fn natural_extremes() {
    let values = nonempty![3, -1, 4, 1, -5, 9, 2, 6];
    assert_eq!(values.nonempty().max(), &9);
    assert_eq!(values.nonempty().min(), &-5);

    let text = Nonempty::assert(String::from("quick"));
    assert_eq!(text.nonempty().max(), 'u');
    assert_eq!(text.nonempty().min(), 'c');
}

#[test]
fn separating_first_with_one_element() {
    let single = nonempty![1];
    let (first, rest) = single.nonempty().separating_first();
    assert_eq!(first, &1);
    assert!(rest.is_empty());
}

#[test]
fn separating_first_with_many_elements() {
    let values = nonempty![1, 2, 3];
    assert_eq!(values.nonempty().separating_first(), (&1, &[2, 3][..]));

    let map = Nonempty::assert(BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]));
    let (first, rest) = map.nonempty().separating_first();
    assert_eq!(first, (&1, &"one"));
    assert_eq!(rest.map(|(key, _)| *key).collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn separating_last_with_one_element() {
    let single = Nonempty::assert(VecDeque::from(['z']));
    let (rest, last) = single.nonempty().separating_last();
    assert_eq!(last, &'z');
    assert_eq!(rest.count(), 0);
}

#[test]
fn separating_last_with_many_elements() {
    let values = nonempty![1, 2, 3];
    assert_eq!(values.nonempty().separating_last(), (&[1, 2][..], &3));

    let range = Nonempty::assert(5u32..8);
    assert_eq!(range.nonempty().separating_last(), (5..7, 7));
}

#[test]
fn map_preserves_length_and_order() {
    let values = nonempty![1, 2, 3];
    let squares = values.nonempty().map(|x| x * x);
    assert_eq!(squares, nonempty![1, 4, 9]);

    let text = Nonempty::assert("añb");
    let codes = text.nonempty().map(u32::from);
    assert_eq!(codes.into_content(), vec![97, 241, 98]);
}

#[test]
fn projections_report_their_wrapper() {
    let values = nonempty![1, 2];
    let projected = values.nonempty();
    assert!(std::ptr::eq(projected.content(), &values));
    assert_eq!(format!("{projected:?}"), "Projected([1, 2])");

    let mut values = values;
    let projected = values.nonempty_mut();
    assert_eq!(format!("{projected:?}"), "ProjectedMut([1, 2])");
}

#[test]
fn five_element_scenario() {
    let values = Nonempty::assert(vec![1, 2, 3, 4, 5]);

    assert!(!values.is_empty());
    assert_eq!(values.len().get(), 5);
    assert_eq!(values.nonempty().first(), &1);
    assert_eq!(values.nonempty().last(), &5);
    assert_eq!(values.nonempty().max(), &5);
    assert_eq!(values.nonempty().min(), &1);
    assert_eq!(values.nonempty().separating_first(), (&1, &[2, 3, 4, 5][..]));
    assert_eq!(values.nonempty().separating_last(), (&[1, 2, 3, 4][..], &5));

    let mapped = values.nonempty().map(|x| x.to_string());
    assert_eq!(mapped.into_content(), ["1", "2", "3", "4", "5"]);
}
