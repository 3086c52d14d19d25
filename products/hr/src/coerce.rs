//! Text/JSON to number conversion used at the request boundary.
//!
//! Every helper returns `None` for "no usable number" instead of a sentinel;
//! callers decide whether that means a default, an absent value, or "keep
//! what is already stored".

use serde_json::Value;

use crate::EmployeeId;

/// Parse trimmed text as a finite number. Empty text is not a number.
pub fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Coerce a JSON value into a whole number.
///
/// Accepts integers, floats without a fractional part, and strings holding
/// either. Booleans, null, containers and fractional numbers yield `None`.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(whole_number)),
        Value::String(text) => coerce_number(text).and_then(whole_number),
        _ => None,
    }
}

/// Parse an id taken from a URL path segment.
pub fn parse_employee_id(raw: &str) -> Option<EmployeeId> {
    raw.trim().parse::<EmployeeId>().ok().filter(|id| *id > 0)
}

fn whole_number(value: f64) -> Option<i64> {
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}
