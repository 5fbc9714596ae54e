//! Core types and errors for the integer resource
//!
//! This crate defines the foundational types used throughout the system:
//! - IntegerRequest: Desired state (min, max, seed, keepers)
//! - IntegerResource: Persisted state record (id, result, echoed inputs)
//! - Keepers: Opaque replacement-triggering map
//! - Attribute / Plan: Replacement planning vocabulary
//! - Error: Error type hierarchy and user-facing diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{
    bad_field_detail, out_of_range_detail, Diagnostic, Error, ImportError, ImportField,
    RangeError, Result, BAD_FORMAT_DETAIL, CREATE_SUMMARY, IMPORT_SUMMARY, RANGE_DETAIL,
};
pub use types::{Attribute, IntegerRequest, IntegerResource, Keepers, Plan};
