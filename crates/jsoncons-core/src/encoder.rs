//! Serialization -- [`Value`] back into JSON text.
//!
//! Object keys are written in insertion order. Doubles always keep a
//! fractional part (`2.0`, not `2`) so the output parses back to the same
//! kinds. NaN and infinities have no JSON form and are rejected.

use crate::error::{JsonError, Result};
use crate::types::Value;
use serde::ser::{self, Serialize, Serializer};

/// Serialize a document as compact JSON.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if the tree contains a non-finite double.
///
/// ```
/// use jsoncons_core::{to_string, Value};
///
/// let doc = Value::object([("b", Value::double(2.0)), ("a", Value::null())]);
/// assert_eq!(to_string(&doc).unwrap(), r#"{"b":2.0,"a":null}"#);
/// ```
pub fn to_string(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| JsonError::Encode(e.to_string()))
}

/// Serialize a document as indented JSON.
pub fn to_string_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| JsonError::Encode(e.to_string()))
}

/// Convert into a `serde_json::Value`, for interop with serde_json-based code.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if the tree contains a non-finite double.
pub fn to_json_value(value: &Value) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| JsonError::Encode(e.to_string()))
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        to_json_value(value)
    }
}

/// Lossy conversion used for `Display`: non-finite doubles become `null`.
pub(crate) fn to_json_value_lossy(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Double(d) => serde_json::Number::from_f64(*d)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(elements) => {
            serde_json::Value::Array(elements.iter().map(to_json_value_lossy).collect())
        }
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), to_json_value_lossy(child)))
                .collect(),
        ),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Double(d) if d.is_finite() => serializer.serialize_f64(*d),
            Value::Double(d) => Err(ser::Error::custom(format!(
                "double {d} has no JSON representation"
            ))),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(elements) => serializer.collect_seq(elements),
            Value::Object(map) => serializer.collect_map(map),
        }
    }
}
