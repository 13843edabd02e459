//! Lenient decoding for decimal fields.
//!
//! The backend serializes amounts inconsistently: Django's DecimalField
//! arrives as a string ("1250.00") while annotated sums arrive as numbers.
//! Aggregation must also survive a single corrupt record, so anything that
//! is not a finite number decodes as zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a number-or-string amount field, coercing malformed values
/// to zero.
pub(crate) fn lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce(&value))
}

/// The numeric value of `value`, or zero when it is not a finite number.
pub(crate) fn coerce(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|number| number.is_finite()).unwrap_or(0.0)
}
