//! Parsing of loosely typed numeric input
//!
//! Clients send numbers either as JSON numbers or as (possibly blank)
//! strings. These helpers turn such values into `f64`s.

use serde_json::Value;

use crate::error::{MSG_LOCATION_MALFORMED, MSG_LOCATION_MISSING};
use crate::{AdvisorError, Result};

/// Parse a string into an optional float. Blank input yields `None`.
pub fn parse_optional_float(raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| AdvisorError::invalid_number())
}

/// Parse an optional JSON value that may hold a number or a numeric string.
pub fn parse_maybe_number(value: Option<&Value>) -> Result<Option<f64>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(Some)
            .ok_or_else(AdvisorError::invalid_number),
        Some(Value::String(raw)) => parse_optional_float(raw),
        Some(_) => Err(AdvisorError::invalid_number()),
    }
}

/// Parse a required coordinate.
pub fn parse_coordinate(value: Option<&Value>) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Err(AdvisorError::invalid_coordinate(MSG_LOCATION_MISSING)),
        Some(Value::String(raw)) if raw.is_empty() => {
            Err(AdvisorError::invalid_coordinate(MSG_LOCATION_MISSING))
        }
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| AdvisorError::invalid_coordinate(MSG_LOCATION_MALFORMED)),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| AdvisorError::invalid_coordinate(MSG_LOCATION_MALFORMED)),
        Some(_) => Err(AdvisorError::invalid_coordinate(MSG_LOCATION_MALFORMED)),
    }
}
