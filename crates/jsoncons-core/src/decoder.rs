//! Document ingestion -- JSON text into a [`Value`] tree.
//!
//! Lexing is delegated to `serde_json`; this module only decides how JSON
//! tokens map onto the tagged model:
//!
//! - numbers that fit in `i64` become [`Value::Integer`]
//! - every other number (fractional, exponent, or above `i64::MAX`) becomes
//!   [`Value::Double`]
//! - `-0` is the one integer literal that becomes a [`Value::Double`]
//!   (`-0.0`): `serde_json` reports it as a float to keep the sign
//! - objects keep their key order; a repeated key keeps its first position
//!   and takes the last value written
//!
//! `Value` implements [`serde::Deserialize`], so it can also be read from any
//! other serde data format.

use crate::error::Result;
use crate::types::{Map, Value};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Parse raw JSON bytes (UTF-8) into a document.
///
/// # Errors
///
/// Returns [`crate::JsonError::Parse`] with serde_json's line/column
/// diagnostic if the input is not a single valid JSON value.
pub fn parse(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parse JSON text into a document.
///
/// ```
/// use jsoncons_core::{parse_str, Kind};
///
/// let doc = parse_str(r#"{"key": [1.0, 2]}"#).unwrap();
/// let key = doc.get("key").unwrap();
/// assert_eq!(key.get_index(0).unwrap().kind(), Kind::Double);
/// assert_eq!(key.get_index(1).unwrap().kind(), Kind::Integer);
/// ```
pub fn parse_str(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Value, D::Error> {
        Value::deserialize(d)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> std::result::Result<Value, E> {
        Ok(Value::Boolean(b))
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> std::result::Result<Value, E> {
        Ok(Value::Integer(i))
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> std::result::Result<Value, E> {
        Ok(match i64::try_from(u) {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Double(u as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, d: f64) -> std::result::Result<Value, E> {
        Ok(Value::Double(d))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> std::result::Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(Value::Array(elements))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => Value::Object(
                obj.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
