use flagsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_tiny_key_domains() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..10 {
        let len = rng.random_range(2000..5000);
        let domain = rng.random_range(1..4);
        let input: Vec<u8> = (0..len).map(|_| rng.random_range(0..domain)).collect();

        let mut expected = input.clone();
        expected.sort();

        let mut actual = input.clone();
        sort(&mut actual);

        if actual != expected {
            // Find first mismatch
            for (i, (a, b)) in actual.iter().zip(expected.iter()).enumerate() {
                if a != b {
                    panic!("Mismatch at index {}: Got {:?}, Expected {:?}", i, a, b);
                }
            }
            panic!(
                "Lengths differ? Actual: {}, Expected: {}",
                actual.len(),
                expected.len()
            );
        }
    }
}

#[test]
fn test_organ_pipe_with_plateaus() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut input: Vec<i32> = Vec::new();
    for value in (0..50).chain((0..50).rev()) {
        let run = rng.random_range(1..40);
        input.extend(std::iter::repeat_n(value, run));
    }

    let mut expected = input.clone();
    expected.sort();

    sort(&mut input);
    assert_eq!(input, expected);
}

#[test]
#[cfg(not(feature = "verify"))]
fn test_inconsistent_comparator_keeps_permutation() {
    // A comparator that answers at random still only drives swaps, so every element survives.
    let mut rng = StdRng::seed_from_u64(1234);
    let answers = std::cell::RefCell::new(StdRng::seed_from_u64(99));
    let input: Vec<u32> = (0..3_000).map(|_| rng.random_range(0..100)).collect();

    let mut actual = input.clone();
    sort_by(&mut actual, |_: &u32, _: &u32| {
        match answers.borrow_mut().random_range(0..3) {
            0 => std::cmp::Ordering::Less,
            1 => std::cmp::Ordering::Equal,
            _ => std::cmp::Ordering::Greater,
        }
    });

    let mut expected = input;
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_panicking_comparator_keeps_permutation() {
    let mut rng = StdRng::seed_from_u64(5);
    let input: Vec<u16> = (0..1_000).map(|_| rng.random()).collect();
    let mut actual = input.clone();
    let calls = std::cell::Cell::new(0);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        sort_by(&mut actual, |a: &u16, b: &u16| {
            calls.set(calls.get() + 1);
            if calls.get() == 2_500 {
                panic!("comparator gave up");
            }
            a.cmp(b)
        });
    }));
    assert!(result.is_err());

    let mut expected = input;
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}
