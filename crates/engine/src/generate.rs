//! Seeded integer generation

use crate::range::IntRange;
use crate::source::{source_for, EntropySource};

/// Generate one integer in `range`.
///
/// A non-empty `seed` makes the result a pure function of `(range, seed)`;
/// otherwise the value comes from OS entropy.
pub fn generate(range: IntRange, seed: Option<&str>) -> i64 {
    let mut source = source_for(seed);
    generate_with(source.as_mut(), range)
}

/// Generate one integer in `range` from an explicit source
pub fn generate_with(source: &mut dyn EntropySource, range: IntRange) -> i64 {
    let span = range.span();
    if span == 0 {
        return range.min();
    }
    range.offset(source.next_offset(span))
}
