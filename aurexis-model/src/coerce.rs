//! Lenient field coercion for remote documents.
//!
//! Remote records are untrusted: any field may be missing, null, or of the
//! wrong type. Each field is coerced on its own so one bad field never
//! rejects the record it belongs to. A value that cannot be coerced is
//! treated exactly like an absent one.

use aurexis_types::{DocumentId, Timestamp};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw field map of a remote document.
pub type Fields = serde_json::Map<String, Value>;

/// Conversion from an arbitrary JSON value, returning `None` when the value
/// cannot reasonably stand for `Self`.
pub trait Coerce: Sized {
    fn coerce(value: &Value) -> Option<Self>;
}

/// `deserialize_with` adapter: reads any JSON value and coerces it,
/// yielding `None` instead of an error on mismatch.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Coerce,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::coerce(&value))
}

/// `deserialize_with` adapter for required fields of nested records: a value
/// that cannot be coerced falls back to the type's default.
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Coerce + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::coerce(&value).unwrap_or_default())
}

/// Decodes a patch-shaped type from a raw field map. Patch types only hold
/// lenient fields, so this cannot fail on field contents.
pub fn from_fields<T: DeserializeOwned + Default>(fields: &Fields) -> T {
    serde_json::from_value(Value::Object(fields.clone())).unwrap_or_default()
}

/// JavaScript-style truthiness, used for boolean flags.
pub fn truthy(value: &Value) -> Option<bool> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(*b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan())),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    }
}

/// Numeric coercion from numbers, numeric strings and booleans.
pub fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    n.is_finite().then_some(n)
}

impl Coerce for String {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl Coerce for bool {
    fn coerce(value: &Value) -> Option<Self> {
        truthy(value)
    }
}

impl Coerce for f64 {
    fn coerce(value: &Value) -> Option<Self> {
        number(value)
    }
}

impl Coerce for i64 {
    fn coerce(value: &Value) -> Option<Self> {
        number(value).map(|n| n.trunc() as i64)
    }
}

impl Coerce for u32 {
    fn coerce(value: &Value) -> Option<Self> {
        number(value)
            .filter(|n| *n >= 0.0)
            .map(|n| n.round().min(f64::from(u32::MAX)) as u32)
    }
}

impl Coerce for DocumentId {
    fn coerce(value: &Value) -> Option<Self> {
        String::coerce(value)
            .filter(|s| !s.is_empty())
            .map(DocumentId::new)
    }
}

impl Coerce for Timestamp {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Timestamp::parse(s).ok(),
            Value::Number(n) => n.as_i64().and_then(Timestamp::from_millis),
            _ => None,
        }
    }
}

impl<T: Coerce> Coerce for Vec<T> {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(items.iter().filter_map(T::coerce).collect()),
            _ => None,
        }
    }
}

/// Implements [`Coerce`] for object-shaped types by delegating to serde.
/// The types' fields are lenient, so only non-objects are dropped.
macro_rules! coerce_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::coerce::Coerce for $ty {
                fn coerce(value: &serde_json::Value) -> Option<Self> {
                    if !value.is_object() {
                        return None;
                    }
                    serde_json::from_value(value.clone()).ok()
                }
            }
        )+
    };
}

/// Implements [`Coerce`] for string-backed enums via their serde names.
macro_rules! coerce_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::coerce::Coerce for $ty {
                fn coerce(value: &serde_json::Value) -> Option<Self> {
                    match value {
                        serde_json::Value::String(_) => serde_json::from_value(value.clone()).ok(),
                        _ => None,
                    }
                }
            }
        )+
    };
}

pub(crate) use {coerce_enum, coerce_object};
