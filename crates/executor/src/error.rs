//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: Parse causes are kept as their rendered message

use randint_core::{
    bad_field_detail, out_of_range_detail, Diagnostic, ImportField, BAD_FORMAT_DETAIL,
    CREATE_SUMMARY, IMPORT_SUMMARY, RANGE_DETAIL,
};
use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Create | `InvalidRange` | `max < min` |
/// | Import | `ImportFormat`, `ImportField`, `ImportOutOfRange` | Bad identifier |
/// | Input | `InvalidInput` | Malformed command |
/// | System | `Config`, `Serialization` | Infrastructure errors |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Create ====================
    /// Requested range is empty
    #[error("invalid range: max ({max}) is less than min ({min})")]
    InvalidRange {
        /// Requested minimum
        min: i64,
        /// Requested maximum
        max: i64,
    },

    // ==================== Import ====================
    /// Identifier does not have 3 or 4 fields
    #[error("invalid import identifier: expected 3 or 4 comma-separated fields, got {fields}")]
    ImportFormat {
        /// Number of fields found
        fields: usize,
    },

    /// A numeric identifier field failed to parse
    #[error("invalid {field} field {raw:?}: {reason}")]
    ImportField {
        /// Which field failed
        field: ImportField,
        /// Offending text
        raw: String,
        /// Rendered parse failure
        reason: String,
    },

    /// Strict import rejected an out-of-range result
    #[error("imported result {result} is outside [{min}, {max}]")]
    ImportOutOfRange {
        /// Imported result
        result: i64,
        /// Imported minimum
        min: i64,
        /// Imported maximum
        max: i64,
    },

    // ==================== Input ====================
    /// Command could not be decoded
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Decoder message
        reason: String,
    },

    // ==================== System ====================
    /// Configuration error
    #[error("configuration error: {reason}")]
    Config {
        /// What went wrong
        reason: String,
    },

    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization {
        /// Encoder message
        reason: String,
    },
}

impl Error {
    /// Stable error code for wire responses
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidRange { .. } => "InvalidRange",
            Error::ImportFormat { .. } => "ImportFormat",
            Error::ImportField { .. } => "ImportField",
            Error::ImportOutOfRange { .. } => "ImportOutOfRange",
            Error::InvalidInput { .. } => "InvalidInput",
            Error::Config { .. } => "Config",
            Error::Serialization { .. } => "Serialization",
        }
    }

    /// Render this error for the caller
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Error::InvalidRange { .. } => Diagnostic::new(CREATE_SUMMARY, RANGE_DETAIL),
            Error::ImportFormat { .. } => Diagnostic::new(IMPORT_SUMMARY, BAD_FORMAT_DETAIL),
            Error::ImportField { field, reason, .. } => {
                Diagnostic::new(IMPORT_SUMMARY, bad_field_detail(*field, reason))
            }
            Error::ImportOutOfRange { result, min, max } => {
                Diagnostic::new(IMPORT_SUMMARY, out_of_range_detail(*result, *min, *max))
            }
            Error::InvalidInput { reason } => Diagnostic::new("Invalid Command", reason.clone()),
            Error::Config { reason } => Diagnostic::new("Configuration Error", reason.clone()),
            Error::Serialization { reason } => {
                Diagnostic::new("Serialization Error", reason.clone())
            }
        }
    }
}
