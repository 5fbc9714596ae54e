//! Lifecycle controller for the integer resource
//!
//! ## Design Principles
//!
//! 1. **Replace, never mutate**: `keepers`, `min`, `max` and `seed` all force
//!    replacement, so update has nothing to do.
//! 2. **Caller owns state**: every operation takes and returns records by
//!    value; nothing is cached between calls.
//! 3. **All or nothing**: a failed create or import produces no record.
//!
//! ## States
//!
//! `absent -> created -> (read*) -> destroyed`

use crate::config::RandintConfig;
use crate::generate::generate;
use crate::import;
use crate::range::validate;
use crate::source::is_seeded;
use randint_core::{Attribute, IntegerRequest, IntegerResource, Keepers, Plan, Result};

/// Drives create/read/update/delete/import for integer resources
///
/// The controller is stateless apart from its configuration and is
/// `Send + Sync`, so a host can share one across threads.
///
/// ## Example
///
/// ```rust
/// use randint_core::IntegerRequest;
/// use randint_engine::IntegerController;
///
/// let controller = IntegerController::new();
/// let state = controller.create(&IntegerRequest::new(1, 6).with_seed("dice")).unwrap();
/// assert!((1..=6).contains(&state.result()));
///
/// let again = controller.create(&IntegerRequest::new(1, 6).with_seed("dice")).unwrap();
/// assert_eq!(state, again);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntegerController {
    strict_import: bool,
}

impl IntegerController {
    /// Create a controller with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller from loaded configuration
    pub fn with_config(config: &RandintConfig) -> Self {
        Self {
            strict_import: config.strict_import,
        }
    }

    /// Whether imports reject results outside `[min, max]`
    pub fn strict_import(&self) -> bool {
        self.strict_import
    }

    /// Generate a new record from desired state
    ///
    /// # Errors
    ///
    /// Returns `Error::Range` when `max < min`; nothing is generated.
    pub fn create(&self, request: &IntegerRequest) -> Result<IntegerResource> {
        let range = validate(request.min, request.max).map_err(|e| {
            tracing::warn!(
                target: "randint::lifecycle",
                min = request.min,
                max = request.max,
                "Rejected create with inverted range"
            );
            e
        })?;

        let seed = request.seed.as_deref();
        let result = generate(range, seed);

        tracing::debug!(
            target: "randint::lifecycle",
            min = request.min,
            max = request.max,
            seeded = is_seeded(seed),
            result,
            "Created random integer"
        );

        Ok(IntegerResource::new(
            result,
            request.min,
            request.max,
            request.seed.clone(),
            request.keepers.clone(),
        ))
    }

    /// Return persisted state unchanged
    pub fn read(&self, state: IntegerResource) -> IntegerResource {
        state
    }

    /// Return prior state unchanged.
    ///
    /// Every desired-state attribute forces replacement, so a host only calls
    /// update when nothing changed.
    pub fn update(&self, prior: IntegerResource, _desired: &IntegerRequest) -> IntegerResource {
        prior
    }

    /// Consume a record; there is no external resource to release
    pub fn delete(&self, state: IntegerResource) {
        tracing::trace!(target: "randint::lifecycle", id = state.id(), "Deleted random integer");
    }

    /// Reconstruct state from an import identifier
    ///
    /// # Errors
    ///
    /// Returns `Error::Import` for a malformed identifier, or (strict import
    /// only) a result outside `[min, max]`.
    pub fn import(&self, identifier: &str) -> Result<IntegerResource> {
        let state = import::decode(identifier).map_err(|e| {
            tracing::warn!(target: "randint::import", error = %e, "Rejected import identifier");
            e
        })?;

        if self.strict_import {
            import::check_in_range(&state).map_err(|e| {
                tracing::warn!(target: "randint::import", error = %e, "Rejected import identifier");
                e
            })?;
        } else if !state.in_range() {
            tracing::debug!(
                target: "randint::import",
                result = state.result(),
                min = state.min(),
                max = state.max(),
                "Imported result lies outside its range"
            );
        }

        Ok(state)
    }

    /// Decide how prior state converges onto desired state
    pub fn plan(&self, prior: Option<&IntegerResource>, desired: &IntegerRequest) -> Plan {
        let prior = match prior {
            Some(p) => p,
            None => return Plan::Create,
        };

        let mut attributes = Vec::new();
        if !keepers_equal(prior.keepers(), desired.keepers.as_ref()) {
            attributes.push(Attribute::Keepers);
        }
        if prior.min() != desired.min {
            attributes.push(Attribute::Min);
        }
        if prior.max() != desired.max {
            attributes.push(Attribute::Max);
        }
        if prior.seed() != desired.seed.as_deref() {
            attributes.push(Attribute::Seed);
        }

        if attributes.is_empty() {
            Plan::NoOp
        } else {
            Plan::Replace { attributes }
        }
    }
}

/// Absent and empty keepers are the same bag
fn keepers_equal(a: Option<&Keepers>, b: Option<&Keepers>) -> bool {
    let empty = Keepers::new();
    a.unwrap_or(&empty) == b.unwrap_or(&empty)
}
