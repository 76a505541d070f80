//! Front-matter value model.
//!
//! Values coming out of a YAML front-matter block are either scalars or flat
//! lists of scalars; they are modeled as a tagged union once, at the boundary,
//! instead of being re-parsed ad hoc wherever they are consumed.
//!
//! Two derived views matter downstream: *truthiness* (the activation guard
//! reads the marker key as a boolean the way the original plugin did) and
//! *display form* (the string a picker shows and a link segment is built
//! from, with lists comma-joined).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single scalar front-matter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Truthiness matching the original plugin's `!!value` check:
    /// `false`, `0`, and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => *n != 0.0,
            Scalar::Text(s) => !s.is_empty(),
        }
    }

    /// Display form of the scalar.
    ///
    /// Integral numbers render without a decimal point (`3`, not `3.0`).
    pub fn display(&self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Scalar::Text(s) => s.clone(),
        }
    }
}

/// A front-matter value: a scalar or a flat list of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl Value {
    /// Convenience constructor for text values.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Scalar(Scalar::Text(s.into()))
    }

    /// Convenience constructor for boolean values.
    pub fn bool(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }

    /// Convenience constructor for a list of text values.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(|s| Scalar::Text(s.into())).collect())
    }

    /// Truthiness of the value.
    ///
    /// Lists are always truthy, even when empty, matching the JavaScript
    /// semantics of the original plugin where arrays coerce to `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Scalar(s) => s.is_truthy(),
            Value::List(_) => true,
        }
    }

    /// Display form: scalars as-is, lists comma-joined without spaces
    /// (the `Array.prototype.toString` shape the original picker showed).
    pub fn display(&self) -> String {
        match self {
            Value::Scalar(s) => s.display(),
            Value::List(items) => items
                .iter()
                .map(Scalar::display)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// A document's front-matter block: an insertion-ordered key/value mapping.
///
/// Lookup is a linear scan; front-matter blocks are small and the picker
/// needs document order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    fields: Vec<(String, Value)>,
}

impl Frontmatter {
    /// Create an empty front-matter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the body of a YAML front-matter block (without the `---`
    /// fences) into the value model.
    ///
    /// Keys with null values are dropped. Nested mappings and non-scalar
    /// list items are rejected: the copy feature only ever operates on
    /// scalars and flat lists.
    pub fn from_yaml(block: &str) -> Result<Self> {
        let parsed: serde_yaml::Value = serde_yaml::from_str(block)
            .map_err(|e| Error::parse_error(format!("invalid front matter: {e}")))?;

        let mapping = match parsed {
            serde_yaml::Value::Mapping(m) => m,
            serde_yaml::Value::Null => return Ok(Self::new()),
            other => {
                return Err(Error::parse_error(format!(
                    "front matter is not a mapping (got {})",
                    yaml_kind(&other)
                )));
            }
        };

        let mut fields = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let key = match key {
                serde_yaml::Value::String(s) => s,
                other => {
                    return Err(Error::parse_error(format!(
                        "front matter key is not a string (got {})",
                        yaml_kind(&other)
                    )));
                }
            };
            match convert_value(&key, value)? {
                Some(value) => fields.push((key, value)),
                None => continue,
            }
        }
        Ok(Self { fields })
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Insert or replace a key/value pair, preserving first-insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the block holds no entries.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn convert_value(key: &str, value: serde_yaml::Value) -> Result<Option<Value>> {
    match value {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::Bool(b) => Ok(Some(Value::Scalar(Scalar::Bool(b)))),
        serde_yaml::Value::Number(n) => Ok(Some(Value::Scalar(Scalar::Number(
            n.as_f64().unwrap_or(0.0),
        )))),
        serde_yaml::Value::String(s) => Ok(Some(Value::Scalar(Scalar::Text(s)))),
        serde_yaml::Value::Sequence(items) => {
            let mut scalars = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_yaml::Value::Bool(b) => scalars.push(Scalar::Bool(b)),
                    serde_yaml::Value::Number(n) => {
                        scalars.push(Scalar::Number(n.as_f64().unwrap_or(0.0)))
                    }
                    serde_yaml::Value::String(s) => scalars.push(Scalar::Text(s)),
                    other => {
                        return Err(Error::parse_error(format!(
                            "list under key '{key}' holds a non-scalar item ({})",
                            yaml_kind(&other)
                        )));
                    }
                }
            }
            Ok(Some(Value::List(scalars)))
        }
        other => Err(Error::parse_error(format!(
            "unsupported value under key '{key}' ({})",
            yaml_kind(&other)
        ))),
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "bool",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged",
    }
}
