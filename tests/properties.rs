use nonempty_wrapper::Nonempty;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn new_is_some_exactly_when_nonempty(values: Vec<i32>) -> bool {
    Nonempty::new(values.clone()).is_some() == !values.is_empty()
}

#[quickcheck]
fn require_keeps_what_it_was_given(values: Vec<String>) -> bool {
    match Nonempty::require(values.clone()) {
        Ok(wrapped) => wrapped.into_content() == values,
        Err(error) => values.is_empty() && error.content().is::<Vec<String>>(),
    }
}

#[quickcheck]
fn length_matches_the_content(text: String) -> TestResult {
    match Nonempty::new(text.as_str()) {
        Some(wrapped) => TestResult::from_bool(wrapped.len().get() == text.chars().count()),
        None => TestResult::discard(),
    }
}

#[quickcheck]
fn map_preserves_length_and_order(values: Vec<i64>) -> TestResult {
    let Some(wrapped) = Nonempty::new(values.clone()) else {
        return TestResult::discard();
    };

    let mapped = wrapped.nonempty().map(|x| x.wrapping_mul(3));
    let expected: Vec<i64> = values.iter().map(|x| x.wrapping_mul(3)).collect();
    TestResult::from_bool(mapped.into_content() == expected)
}

#[quickcheck]
fn extremes_are_members(values: Vec<u16>) -> TestResult {
    let Some(wrapped) = Nonempty::new(values.clone()) else {
        return TestResult::discard();
    };

    let projected = wrapped.nonempty();
    let max = projected.max();
    let min = projected.min();
    let max_by = projected.max_by(|a, b| a.cmp(b));
    let min_by = projected.min_by(|a, b| a.cmp(b));

    TestResult::from_bool(
        values.contains(max)
            && values.contains(min)
            && values.iter().all(|value| min <= value && value <= max)
            && max_by == max
            && min_by == min,
    )
}

#[quickcheck]
fn extremes_of_a_singleton_are_its_element(value: char) -> bool {
    let wrapped = Nonempty::assert([value]);
    let projected = wrapped.nonempty();

    projected.max() == &value
        && projected.min() == &value
        && projected.first() == &value
        && projected.last() == &value
}

#[quickcheck]
fn ties_keep_the_earliest_element(values: Vec<(u8, u32)>) -> TestResult {
    let Some(wrapped) = Nonempty::new(values.clone()) else {
        return TestResult::discard();
    };

    let max = wrapped.nonempty().max_by(|a, b| a.0.cmp(&b.0));
    let min = wrapped.nonempty().min_by(|a, b| a.0.cmp(&b.0));
    let first_max = values.iter().position(|pair| pair.0 == max.0);
    let first_min = values.iter().position(|pair| pair.0 == min.0);

    TestResult::from_bool(
        first_max.map(|at| &values[at]) == Some(max) && first_min.map(|at| &values[at]) == Some(min),
    )
}

#[quickcheck]
fn separating_splits_everything(values: Vec<u8>) -> TestResult {
    let Some(wrapped) = Nonempty::new(values.clone()) else {
        return TestResult::discard();
    };

    let (first, rest) = wrapped.nonempty().separating_first();
    let (init, last) = wrapped.nonempty().separating_last();

    TestResult::from_bool(
        first == &values[0]
            && rest == &values[1..]
            && last == &values[values.len() - 1]
            && init == &values[..values.len() - 1],
    )
}

#[cfg(feature = "quickcheck")]
mod arbitrary {
    use nonempty_wrapper::Nonempty;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn generated_wrappers_are_nonempty(wrapped: Nonempty<Vec<u8>>) -> bool {
        !wrapped.content().is_empty() && wrapped.len().get() == wrapped.content().len()
    }

    #[quickcheck]
    fn growth_keeps_the_prefix(wrapped: Nonempty<Vec<i32>>, extra: Vec<i32>) -> bool {
        let mut grown = wrapped.clone();
        grown.nonempty_mut().append_contents(extra.iter().copied());
        grown.content().starts_with(wrapped.content()) && grown.content().ends_with(&extra)
    }
}
