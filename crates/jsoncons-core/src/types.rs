//! The tagged JSON document model.
//!
//! [`Value`] is a closed sum type over the seven JSON kinds. It separates
//! integers from doubles (an `Integer(4)` is never equal to a `Double(4.0)`)
//! and stores objects in an [`IndexMap`] so iteration follows insertion order
//! while equality ignores it.
//!
//! Values own their children outright. There is no API that hands out
//! mutable access to a payload: to change a document, build a new one.

use indexmap::IndexMap;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Object storage: unique string keys in insertion order.
pub type Map = IndexMap<String, Value>;

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Double,
    String,
    Array,
    Object,
}

impl Kind {
    /// Lower-case name used in diagnostics and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a JSON document.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order.
    Object(Map),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn integer(i: i64) -> Self {
        Value::Integer(i)
    }

    pub fn double(d: f64) -> Self {
        Value::Double(d)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Build an array from any sequence of values, preserving order.
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(elements.into_iter().collect())
    }

    /// Build an object from key-value pairs.
    ///
    /// Input order becomes iteration order. When a key repeats, the last
    /// value wins and the key keeps the position of its first occurrence.
    ///
    /// ```
    /// use jsoncons_core::Value;
    ///
    /// let obj = Value::object([("a", Value::integer(1)), ("b", Value::integer(2)), ("a", Value::integer(3))]);
    /// let map = obj.as_object().unwrap();
    /// assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
    /// assert_eq!(map["a"], Value::integer(3));
    /// ```
    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key.into(), value);
        }
        Value::Object(map)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The double payload. Integers are not coerced: `Integer(2).as_f64()`
    /// is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Number of children for arrays and objects, `0` for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(elements) => elements.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entry named `key` when this is an object holding it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// The element at `index` when this is an array long enough to hold it.
    /// Negative positions never match.
    pub fn get_index(&self, index: i64) -> Option<&Value> {
        let position = usize::try_from(index).ok()?;
        self.as_array().and_then(|elements| elements.get(position))
    }

    /// The [`Hash`] of this value as an integer.
    ///
    /// Stable within one process. Arrays and objects hash shallowly (see the
    /// `Hash` impl), so equal hashes never imply equal values.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Double equality that keeps `Eq` lawful: NaN equals NaN.
/// `0.0` and `-0.0` stay equal, as in IEEE comparison.
fn double_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Bit pattern used for hashing doubles, folding together the payloads that
/// [`double_eq`] treats as equal.
fn double_hash_bits(d: f64) -> u64 {
    if d.is_nan() {
        f64::NAN.to_bits()
    } else if d == 0.0 {
        0.0f64.to_bits()
    } else {
        d.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => double_eq(*a, *b),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // IndexMap equality compares key sets and values, not order.
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Scalars hash their payload, so equal scalars hash equal.
///
/// Arrays and objects hash only their kind and length. Two arrays
/// `[1, 2]` and `[3, 4]` produce the same hash while comparing unequal.
/// Hash-based containers stay correct because they fall back to `Eq`, but
/// callers must not treat a matching hash as evidence of equality.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Double(d) => double_hash_bits(*d).hash(state),
            Value::String(s) => s.hash(state),
            Value::Array(elements) => elements.len().hash(state),
            Value::Object(map) => map.len().hash(state),
        }
    }
}

/// Compact JSON text. Non-finite doubles, which have no JSON form, render
/// as `null` here; use [`crate::encoder::to_string`] to reject them instead.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = crate::encoder::to_json_value_lossy(self);
        write!(f, "{json}")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::array(iter)
    }
}
