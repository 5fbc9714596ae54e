//! Entropy sources for integer generation
//!
//! Two strategies sit behind [`EntropySource`]:
//! - [`SeededSource`]: deterministic, initialised from a seed string
//! - [`AmbientSource`]: initialised from OS entropy
//!
//! [`source_for`] is the single place that picks between them.
//!
//! ## Seed folding
//!
//! A seed string is folded into a `u64` with xxh3-64 over its UTF-8 bytes and
//! that value seeds `StdRng`. Identical seed strings therefore always start
//! from identical generator state. Neither strategy is suitable for
//! cryptographic use.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xxhash_rust::xxh3::xxh3_64;

/// A source of uniformly distributed offsets
pub trait EntropySource {
    /// Draw a value uniformly from `0..=span` (inclusive on both ends).
    fn next_offset(&mut self, span: u64) -> u64;
}

/// Deterministic source seeded from a string
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Initialise from a seed string
    pub fn new(seed: &str) -> Self {
        Self {
            rng: StdRng::seed_from_u64(fold_seed(seed)),
        }
    }
}

impl EntropySource for SeededSource {
    fn next_offset(&mut self, span: u64) -> u64 {
        self.rng.gen_range(0..=span)
    }
}

/// Non-deterministic source seeded from OS entropy
#[derive(Debug, Clone)]
pub struct AmbientSource {
    rng: StdRng,
}

impl AmbientSource {
    /// Initialise from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for AmbientSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for AmbientSource {
    fn next_offset(&mut self, span: u64) -> u64 {
        self.rng.gen_range(0..=span)
    }
}

/// Fold a seed string into the numeric seed used by [`SeededSource`]
#[inline]
pub fn fold_seed(seed: &str) -> u64 {
    xxh3_64(seed.as_bytes())
}

/// Pick the entropy strategy for an optional seed.
///
/// A present, non-empty seed selects [`SeededSource`]; an absent or empty
/// seed selects [`AmbientSource`].
pub fn source_for(seed: Option<&str>) -> Box<dyn EntropySource> {
    match seed {
        Some(s) if !s.is_empty() => Box::new(SeededSource::new(s)),
        _ => Box::new(AmbientSource::new()),
    }
}

/// Whether [`source_for`] would produce a deterministic source
#[inline]
pub fn is_seeded(seed: Option<&str>) -> bool {
    matches!(seed, Some(s) if !s.is_empty())
}
