//! Range validation
//!
//! [`validate`] is the only way to obtain an [`IntRange`], so everything that
//! takes one can rely on `min <= max`.

use randint_core::RangeError;

/// A non-empty inclusive range of `i64` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntRange {
    min: i64,
    max: i64,
}

impl IntRange {
    /// Lower bound (inclusive)
    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive)
    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Distance from `min` to `max`, i.e. one less than the number of values.
    ///
    /// Computed in `u64` so that the full `i64` domain fits (`u64::MAX`).
    #[inline]
    pub fn span(&self) -> u64 {
        self.max.wrapping_sub(self.min) as u64
    }

    /// Map an offset in `0..=span()` back into the range
    #[inline]
    pub fn offset(&self, offset: u64) -> i64 {
        debug_assert!(offset <= self.span());
        self.min.wrapping_add(offset as i64)
    }
}

/// Check that `[min, max]` is non-empty
///
/// # Errors
///
/// Returns `RangeError` when `max < min`.
pub fn validate(min: i64, max: i64) -> Result<IntRange, RangeError> {
    if max < min {
        return Err(RangeError { min, max });
    }
    Ok(IntRange { min, max })
}
