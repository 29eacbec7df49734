//! # jsoncons-core
//!
//! A type-tagged, immutable JSON document model and a path-query evaluator.
//!
//! [`Value`] keeps integers and doubles apart, owns its children, and
//! compares objects without regard to key order. [`query`] walks a document
//! with a compact path syntax (`$.key[1]`, `$.items[*].name`) and always
//! returns a list of matches, so "nothing found" is simply an empty list.
//!
//! ## Quick start
//!
//! ```rust
//! use jsoncons_core::{parse_str, query, Value};
//!
//! let doc = parse_str(r#"{"key":[["a"],["b"],["c"]]}"#).unwrap();
//!
//! let hits = query(&doc, "$.key[1]").unwrap();
//! assert_eq!(hits, vec![Value::array([Value::string("b")])]);
//!
//! let hits = query(&doc, "$.key[1][0]").unwrap();
//! assert_eq!(hits[0].as_str(), Some("b"));
//!
//! assert!(query(&doc, "key[1").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`types`] -- `Value`, `Kind` and the object `Map`; equality and shallow hashing
//! - [`path`] -- path grammar (`Path`, `Step`)
//! - [`query`] -- evaluation of a path against a document
//! - [`decoder`] -- JSON text → `Value`
//! - [`encoder`] -- `Value` → JSON text
//! - [`error`] -- Error types for parse, path and encode failures

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod path;
pub mod query;
pub mod types;

pub use decoder::{parse, parse_str};
pub use encoder::{to_json_value, to_string, to_string_pretty};
pub use error::{JsonError, Result};
pub use path::{Path, Step};
pub use query::{query, select};
pub use types::{Kind, Map, Value};
