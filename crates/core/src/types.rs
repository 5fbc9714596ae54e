//! Core types for the integer resource
//!
//! This module defines the foundational types:
//! - Keepers: Opaque string map that forces replacement when changed
//! - IntegerRequest: Desired state supplied by the caller
//! - IntegerResource: Persisted state record
//! - Attribute: Names of the replacement-triggering attributes
//! - Plan: Outcome of comparing prior state against desired state

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Arbitrary values that, when changed, trigger recreation of the resource.
///
/// The map is never interpreted; it only takes part in replacement planning.
pub type Keepers = BTreeMap<String, String>;

/// Desired state for an integer resource
///
/// `min` and `max` are required. `seed` distinguishes "not provided" (`None`)
/// from an empty string (`Some("")`); both generate unseeded values but they
/// are echoed back into state as given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegerRequest {
    /// Replacement-triggering passthrough map
    #[serde(default)]
    pub keepers: Option<Keepers>,
    /// Minimum inclusive value of the range
    pub min: i64,
    /// Maximum inclusive value of the range
    pub max: i64,
    /// Custom seed to always produce the same value
    #[serde(default)]
    pub seed: Option<String>,
}

impl IntegerRequest {
    /// Create a request for `[min, max]` with no seed and no keepers
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            keepers: None,
            min,
            max,
            seed: None,
        }
    }

    /// Set the seed
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Set the keepers map
    pub fn with_keepers(mut self, keepers: Keepers) -> Self {
        self.keepers = Some(keepers);
        self
    }
}

/// Persisted state of an integer resource
///
/// Records are immutable values. Fields are private so that `id` can never
/// drift from `result`; construct through [`IntegerResource::new`] or
/// deserialize a previously written record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegerResource {
    id: String,
    keepers: Option<Keepers>,
    min: i64,
    max: i64,
    seed: Option<String>,
    result: i64,
}

impl IntegerResource {
    /// Assemble a record; `id` is derived from `result`
    pub fn new(
        result: i64,
        min: i64,
        max: i64,
        seed: Option<String>,
        keepers: Option<Keepers>,
    ) -> Self {
        Self {
            id: result.to_string(),
            keepers,
            min,
            max,
            seed,
            result,
        }
    }

    /// Assemble a record with an externally supplied identifier.
    ///
    /// Used by import, where `id` is the literal text the caller gave for the
    /// result field (e.g. `"+5"` stays `"+5"`).
    pub fn with_id(
        id: impl Into<String>,
        result: i64,
        min: i64,
        max: i64,
        seed: Option<String>,
        keepers: Option<Keepers>,
    ) -> Self {
        Self {
            id: id.into(),
            keepers,
            min,
            max,
            seed,
            result,
        }
    }

    /// String representation of the result
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The generated (or imported) value
    pub fn result(&self) -> i64 {
        self.result
    }

    /// Minimum inclusive value of the range
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Maximum inclusive value of the range
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Seed, if one was supplied
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// Keepers, if any were supplied
    pub fn keepers(&self) -> Option<&Keepers> {
        self.keepers.as_ref()
    }

    /// Whether `result` lies within `[min, max]`
    pub fn in_range(&self) -> bool {
        self.min <= self.result && self.result <= self.max
    }
}

/// Replacement-triggering attributes, in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// `keepers`
    Keepers,
    /// `min`
    Min,
    /// `max`
    Max,
    /// `seed`
    Seed,
}

impl Attribute {
    /// Attribute name as it appears in state
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Keepers => "keepers",
            Attribute::Min => "min",
            Attribute::Max => "max",
            Attribute::Seed => "seed",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the host has to do to converge prior state onto desired state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Plan {
    /// No prior state: create
    Create,
    /// Nothing replacement-triggering changed
    NoOp,
    /// Destroy the prior record and create a new one
    Replace {
        /// Changed attributes, in schema order
        attributes: Vec<Attribute>,
    },
}

impl Plan {
    /// Whether the plan requires generating a new value
    pub fn requires_generation(&self) -> bool {
        !matches!(self, Plan::NoOp)
    }
}
