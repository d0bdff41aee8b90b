//! # Key/Value Documents
//!
//! A dynamic document made of scalars, lists and records, nested to any depth.
//! Records use `im::OrdMap`, so cloning a document shares structure and keys
//! are always visited in sorted order.
//!
//! ## Leaves
//!
//! Lists and records are containers; everything else (including `Null`) is a
//! leaf. [`Value::leaves`] walks the containers depth-first and collects the
//! leaves in visiting order.
//!
//! ```
//! use challenges_common::Value;
//!
//! let doc = Value::from_json(r#"{"a": 1, "b": {"c": 1, "d": [2, null]}}"#).unwrap();
//! let leaves = doc.leaves();
//! assert_eq!(leaves, vec![&Value::Number(1.0), &Value::Number(1.0), &Value::Number(2.0), &Value::Null]);
//! ```

use std::fmt;

use im::OrdMap;
use serde_json::Value as Json;

use crate::error::Result;

/// Ordered mapping from keys to nested values.
pub type Record = OrdMap<String, Value>;

/// A dynamically typed document node.
///
/// Equality is strict: leaves of different variants never compare equal, and
/// numbers follow IEEE rules (`NaN != NaN`).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    /// Parses a JSON document.
    pub fn from_json(input: &str) -> Result<Self> {
        let json: Json = serde_json::from_str(input)?;
        Ok(json.into())
    }

    /// True for every node that is not a list or a record.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Record(_))
    }

    /// Collects every leaf below this node, depth-first.
    ///
    /// A leaf at the top has no entries of its own and yields nothing.
    pub fn leaves(&self) -> Vec<&Value> {
        let mut acc = Vec::new();
        self.collect_leaves(&mut acc);
        acc
    }

    fn collect_leaves<'a>(&'a self, acc: &mut Vec<&'a Value>) {
        match self {
            Value::List(items) => {
                for item in items {
                    item.visit(acc);
                }
            }
            Value::Record(fields) => {
                for (_, field) in fields.iter() {
                    field.visit(acc);
                }
            }
            _ => {}
        }
    }

    fn visit<'a>(&'a self, acc: &mut Vec<&'a Value>) {
        if self.is_leaf() {
            acc.push(self);
        } else {
            self.collect_leaves(acc);
        }
    }

    /// Looks up a record field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(fields) => fields.get(key),
            _ => None,
        }
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            // Without arbitrary precision every JSON number fits an f64.
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => Value::Record(
                fields
                    .into_iter()
                    .map(|(key, field)| (key, Value::from(field)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for Json {
    /// Non-finite numbers have no JSON form and become `null`.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s),
            Value::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Record(fields) => Json::Object(
                fields
                    .into_iter()
                    .map(|(key, field)| (key, Json::from(field)))
                    .collect(),
            ),
        }
    }
}

/// Compact JSON text, matching `serde_json`'s output for the same document.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => match serde_json::Number::from_f64(*n) {
                Some(n) => write!(f, "{n}"),
                None => f.write_str("null"),
            },
            Value::String(s) => write_json_string(f, s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Record(fields) => {
                f.write_str("{")?;
                for (i, (key, field)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json_string(f, key)?;
                    write!(f, ":{field}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
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
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(fields: Record) -> Self {
        Value::Record(fields)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    /// Collects key/value pairs into a record.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Record(
            iter.into_iter()
                .map(|(key, field)| (key.into(), field.into()))
                .collect(),
        )
    }
}
