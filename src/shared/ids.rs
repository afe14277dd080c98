//! Wire identifiers
//!
//! Rows are keyed by integer serials, but ids travel as decimal strings so
//! browser clients never deal with 64-bit numbers.

use crate::shared::error::SharedError;

/// Parse a decimal string id into a row key
///
/// Surrounding whitespace is ignored. Empty, non-numeric, zero or negative
/// values are rejected with an error naming `field`.
///
/// # Example
///
/// ```rust
/// use domunity::shared::parse_id;
///
/// assert_eq!(parse_id("building_id", " 7 ").unwrap(), 7);
/// assert!(parse_id("building_id", "seven").is_err());
/// ```
pub fn parse_id(field: &str, raw: &str) -> Result<i32, SharedError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SharedError::missing(field));
    }

    match trimmed.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(SharedError::validation(field, "must be a positive integer")),
    }
}
