//! Error conversion from internal error types.
//!
//! This module provides conversions from `randint_core` errors to the
//! executor's [`Error`] type.

use crate::Error;
use randint_core::{ImportError, RangeError};

impl From<RangeError> for Error {
    fn from(err: RangeError) -> Self {
        Error::InvalidRange {
            min: err.min,
            max: err.max,
        }
    }
}

impl From<ImportError> for Error {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::BadFormat { fields } => Error::ImportFormat { fields },
            ImportError::BadField { field, raw, source } => Error::ImportField {
                field,
                raw,
                reason: source.to_string(),
            },
            ImportError::ResultOutOfRange { result, min, max } => {
                Error::ImportOutOfRange { result, min, max }
            }
        }
    }
}

impl From<randint_core::Error> for Error {
    fn from(err: randint_core::Error) -> Self {
        match err {
            randint_core::Error::Range(e) => e.into(),
            randint_core::Error::Import(e) => e.into(),
            randint_core::Error::Config(reason) => Error::Config { reason },
        }
    }
}

/// Convert a core result into an executor result.
pub(crate) fn convert_result<T>(r: randint_core::Result<T>) -> crate::Result<T> {
    r.map_err(Error::from)
}
