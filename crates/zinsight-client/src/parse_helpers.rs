//! Lenient number readers shared by the response types.
//!
//! Upstream numbers are usually JSON numbers but have been seen as numeric
//! strings. Both forms are accepted; `null` reads as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional non-negative integer from a number or numeric string.
pub(crate) fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(ref v) => count_from_value(v)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected count, got {v}"))),
    }
}

/// Reads a non-negative count from a JSON value.
///
/// Floats are truncated toward zero. Negative, non-finite, and non-numeric
/// values yield `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn count_from_value(value: &Value) -> Option<u64> {
    let float = match value {
        Value::Number(n) => {
            if let Some(int) = n.as_u64() {
                return Some(int);
            }
            n.as_f64()?
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(int) = trimmed.parse::<u64>() {
                return Some(int);
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };

    (float.is_finite() && float >= 0.0).then(|| float.trunc() as u64)
}

/// Reads a finite float from a JSON number or numeric string.
pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    let float = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    float.is_finite().then_some(float)
}
