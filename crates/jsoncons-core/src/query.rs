//! Path query evaluation.
//!
//! A query folds the steps of a [`Path`] over a working set that starts as
//! `[root]`. Each step maps every candidate through its selector:
//!
//! 1. **Member** keeps the named entry of an object.
//! 2. **Index** keeps the element at that position of an array.
//! 3. **Wildcard** expands arrays and objects into all of their children, in
//!    document order.
//!
//! A candidate that cannot take the step (wrong kind, missing key, index
//! out of range or negative) is dropped. An empty working set is a valid
//! outcome, so "no match" is an empty result and never an error. Only a
//! malformed path string fails, and it fails before any evaluation.

use crate::error::Result;
use crate::path::{Path, Step};
use crate::types::Value;

/// Evaluate `path` against `root` and return owned copies of the matches.
///
/// The result is always a sequence, even when exactly one value matches.
///
/// # Errors
///
/// Returns [`crate::JsonError::MalformedPath`] if `path` does not parse.
///
/// # Examples
///
/// ```
/// use jsoncons_core::{parse_str, query, Value};
///
/// let doc = parse_str(r#"{"key":[10,20,30]}"#).unwrap();
/// assert_eq!(query(&doc, "$.key[1]").unwrap(), vec![Value::integer(20)]);
/// assert!(query(&doc, "$.key[99]").unwrap().is_empty());
/// ```
pub fn query(root: &Value, path: &str) -> Result<Vec<Value>> {
    let path = Path::parse(path)?;
    Ok(select(root, &path).into_iter().cloned().collect())
}

/// Evaluate an already-parsed path, borrowing the matches from `root`.
pub fn select<'v>(root: &'v Value, path: &Path) -> Vec<&'v Value> {
    path.steps()
        .iter()
        .fold(vec![root], |working_set, step| apply_step(&working_set, step))
}

/// Map every candidate through one selector, keeping production order.
fn apply_step<'v>(working_set: &[&'v Value], step: &Step) -> Vec<&'v Value> {
    let mut next = Vec::with_capacity(working_set.len());
    for &candidate in working_set {
        match step {
            Step::Member(name) => next.extend(candidate.get(name)),
            Step::Index(index) => next.extend(candidate.get_index(*index)),
            Step::Wildcard => match candidate {
                Value::Array(elements) => next.extend(elements.iter()),
                Value::Object(map) => next.extend(map.values()),
                // Scalars have no children.
                _ => {}
            },
        }
    }
    next
}

impl Value {
    /// Shorthand for [`query`] with `self` as the root.
    pub fn query(&self, path: &str) -> Result<Vec<Value>> {
        query(self, path)
    }

    /// Shorthand for [`select`] with `self` as the root.
    pub fn select(&self, path: &Path) -> Vec<&Value> {
        select(self, path)
    }
}
