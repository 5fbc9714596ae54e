//! Property tests for range validation and generation.

use proptest::prelude::*;
use randint::{generate, validate, RangeError};

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

proptest! {
    #[test]
    fn prop_generated_value_in_range(a in any::<i64>(), b in any::<i64>(), seed in proptest::option::of(".{0,16}")) {
        let (min, max) = ordered(a, b);
        let v = generate(validate(min, max).unwrap(), seed.as_deref());
        prop_assert!(min <= v && v <= max);
    }

    #[test]
    fn prop_non_empty_seed_is_deterministic(a in any::<i64>(), b in any::<i64>(), seed in ".{1,32}") {
        let (min, max) = ordered(a, b);
        let range = validate(min, max).unwrap();
        prop_assert_eq!(generate(range, Some(seed.as_str())), generate(range, Some(seed.as_str())));
    }

    #[test]
    fn prop_inverted_range_rejected(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let (lo, hi) = ordered(a, b);
        prop_assert_eq!(validate(hi, lo), Err(RangeError { min: hi, max: lo }));
    }

    #[test]
    fn prop_single_value_range(v in any::<i64>(), seed in proptest::option::of(".*")) {
        prop_assert_eq!(generate(validate(v, v).unwrap(), seed.as_deref()), v);
    }
}

#[test]
fn test_unseeded_values_differ_over_trials() {
    let range = validate(i64::MIN, i64::MAX).unwrap();
    let first = generate(range, None);
    let differs = (0..10).any(|_| generate(range, None) != first);
    assert!(differs, "unseeded generation repeated the same value 11 times");
}

#[test]
fn test_different_seeds_usually_differ() {
    let range = validate(0, i64::MAX).unwrap();
    let values: std::collections::HashSet<i64> = (0..32)
        .map(|i| generate(range, Some(format!("seed-{}", i).as_str())))
        .collect();
    assert!(values.len() > 30);
}
