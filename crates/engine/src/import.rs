//! Import identifier codec
//!
//! An import identifier is `result,min,max` or `result,min,max,seed`. The
//! string is split on every comma, so a seed containing a comma cannot be
//! imported. Numeric fields are base-10 `i64` with no whitespace tolerance.
//!
//! Decoding never generates and never validates the range: the imported
//! `result` is trusted as given. Use [`check_in_range`] for strict imports.

use randint_core::{ImportError, ImportField, IntegerResource, Keepers};

/// Delimiter between identifier fields
pub const FIELD_SEPARATOR: char = ',';

/// Decode an import identifier into a state record
///
/// # Errors
///
/// - `ImportError::BadFormat` unless there are exactly 3 or 4 fields
/// - `ImportError::BadField` for the first numeric field that fails to parse
pub fn decode(identifier: &str) -> Result<IntegerResource, ImportError> {
    let parts: Vec<&str> = identifier.split(FIELD_SEPARATOR).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ImportError::BadFormat {
            fields: parts.len(),
        });
    }

    let result = parse_field(ImportField::Result, parts[0])?;
    let min = parse_field(ImportField::Min, parts[1])?;
    let max = parse_field(ImportField::Max, parts[2])?;
    let seed = parts.get(3).map(|s| s.to_string());

    Ok(IntegerResource::with_id(
        parts[0],
        result,
        min,
        max,
        seed,
        Some(Keepers::new()),
    ))
}

/// Reject an imported record whose `result` lies outside `[min, max]`
pub fn check_in_range(resource: &IntegerResource) -> Result<(), ImportError> {
    if resource.in_range() {
        return Ok(());
    }
    Err(ImportError::ResultOutOfRange {
        result: resource.result(),
        min: resource.min(),
        max: resource.max(),
    })
}

fn parse_field(field: ImportField, raw: &str) -> Result<i64, ImportError> {
    raw.parse::<i64>().map_err(|source| ImportError::BadField {
        field,
        raw: raw.to_string(),
        source,
    })
}
