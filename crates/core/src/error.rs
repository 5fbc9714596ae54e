//! Error types for the integer resource
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every error can be rendered as a [`Diagnostic`]: the summary/detail pair a
//! host engine shows to its user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for resource operations
pub type Result<T> = std::result::Result<T, Error>;

/// Summary shown for every create failure
pub const CREATE_SUMMARY: &str = "Create Random Integer Error";

/// Summary shown for every import failure
pub const IMPORT_SUMMARY: &str = "Import Random Integer Error";

/// The requested range is empty (`max < min`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid range: max ({max}) is less than min ({min})")]
pub struct RangeError {
    /// Requested minimum
    pub min: i64,
    /// Requested maximum
    pub max: i64,
}

/// Numeric fields of an import identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportField {
    /// First field
    Result,
    /// Second field
    Min,
    /// Third field
    Max,
}

impl ImportField {
    /// Field name as used in the identifier template
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportField::Result => "result",
            ImportField::Min => "min",
            ImportField::Max => "max",
        }
    }
}

impl fmt::Display for ImportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to decode an import identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Not 3 or 4 comma-separated fields
    #[error("invalid import identifier: expected 3 or 4 comma-separated fields, got {fields}")]
    BadFormat {
        /// Number of fields found
        fields: usize,
    },

    /// A numeric field is not a base-10 `i64`
    #[error("invalid {field} field {raw:?}: {source}")]
    BadField {
        /// Which field failed
        field: ImportField,
        /// Offending text
        raw: String,
        /// Original parse failure
        #[source]
        source: ParseIntError,
    },

    /// Imported result lies outside `[min, max]` (strict import only)
    #[error("imported result {result} is outside [{min}, {max}]")]
    ResultOutOfRange {
        /// Imported result
        result: i64,
        /// Imported minimum
        min: i64,
        /// Imported maximum
        max: i64,
    },
}

/// Error types for resource operations
#[derive(Debug, Error)]
pub enum Error {
    /// Create was asked for an empty range
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Import identifier could not be decoded
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// User-facing error report: a title plus a detail message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Short title
    pub summary: String,
    /// Human-readable explanation
    pub detail: String,
}

impl Diagnostic {
    /// Create a diagnostic
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.summary, self.detail)
    }
}

/// Detail shown for an inverted range
pub const RANGE_DETAIL: &str =
    "The minimum (min) value needs to be smaller than or equal to maximum (max) value.";

/// Detail shown for an identifier with the wrong number of fields
pub const BAD_FORMAT_DETAIL: &str =
    "Invalid import usage: expecting {result},{min},{max} or {result},{min},{max},{seed}";

/// Detail shown for a numeric field that failed to parse
pub fn bad_field_detail(field: ImportField, cause: &dyn fmt::Display) -> String {
    let subject = match field {
        ImportField::Result => "The value",
        ImportField::Min => "The min value",
        ImportField::Max => "The max value",
    };
    format!(
        "{} supplied could not be parsed as an integer.\n\nOriginal Error: {}",
        subject, cause
    )
}

/// Detail shown when strict import rejects a result
pub fn out_of_range_detail(result: i64, min: i64, max: i64) -> String {
    format!(
        "The value supplied ({}) is outside the range [{}, {}].",
        result, min, max
    )
}

impl From<&RangeError> for Diagnostic {
    fn from(_: &RangeError) -> Self {
        Diagnostic::new(CREATE_SUMMARY, RANGE_DETAIL)
    }
}

impl From<&ImportError> for Diagnostic {
    fn from(e: &ImportError) -> Self {
        let detail = match e {
            ImportError::BadFormat { .. } => BAD_FORMAT_DETAIL.to_string(),
            ImportError::BadField { field, source, .. } => bad_field_detail(*field, source),
            ImportError::ResultOutOfRange { result, min, max } => {
                out_of_range_detail(*result, *min, *max)
            }
        };
        Diagnostic::new(IMPORT_SUMMARY, detail)
    }
}

impl Error {
    /// Render this error for the caller
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            Error::Range(e) => e.into(),
            Error::Import(e) => e.into(),
            Error::Config(reason) => Diagnostic::new("Configuration Error", reason.clone()),
        }
    }
}
