//! Lenient number decoding for backend rows.
//!
//! The database layer serializes numeric columns inconsistently: integers can
//! arrive as `70`, `70.0`, or `null` depending on the column type and the
//! endpoint. These helpers normalize that before it reaches view code.

#[cfg(test)]
#[path = "numbers_test.rs"]
mod numbers_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Decode an integer that may be encoded as a whole float. `null` maps to 0.
pub(crate) fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => number_to_i64(&number).ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Decode an optional integer that may be encoded as a whole float.
pub(crate) fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number_to_i64(&number)
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer-compatible number")),
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Decode a float where `null` means zero.
pub(crate) fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.unwrap_or(0.0))
}

/// Decode an integer where fractional values are rounded. For model output
/// relayed verbatim, which is not held to integer columns.
pub(crate) fn i64_rounded<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            rounded_i64(&number).ok_or_else(|| D::Error::custom("expected finite number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Decode a percentage, rounded and clamped to `0..=100`.
pub(crate) fn percent<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64_rounded(deserializer)?;
    Ok(u8::try_from(value.clamp(0, 100)).unwrap_or(0))
}

/// Decode a string where `null` means empty.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn number_to_i64(number: &serde_json::Number) -> Option<i64> {
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Some(float as i64);
    }
    None
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn rounded_i64(number: &serde_json::Number) -> Option<i64> {
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    let float = number.as_f64()?.round();
    (float.is_finite() && float >= i64::MIN as f64 && float <= i64::MAX as f64).then(|| float as i64)
}
