//! Conversions between nodes, primitives, and `serde_json` values.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::error::UtilsResult;

use super::{Mapping, Node, Scalar};

impl Node {
    /// Parse a JSON document into a node tree, keeping key order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UtilsError::Json`] when `text` is not valid JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use vime_utils::Node;
    ///
    /// let node = Node::from_json_str(r#"{"controls": true}"#)?;
    /// assert_eq!(node.get("controls"), Some(&Node::from(true)));
    /// # Ok::<_, vime_utils::UtilsError>(())
    /// ```
    pub fn from_json_str(text: &str) -> UtilsResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(value.into())
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::null(),
            Value::Bool(flag) => Self::Scalar(Scalar::Bool(flag)),
            Value::Number(number) => Self::Scalar(Scalar::Number(number)),
            Value::String(text) => Self::Scalar(Scalar::Text(text)),
            Value::Array(items) => Self::sequence(items.into_iter().map(Self::from)),
            Value::Object(map) => Self::mapping(map.into_iter().collect()),
        }
    }
}

/// Lossy view of a node as JSON: non-enumerable properties are skipped and
/// byte buffers become arrays of numbers.
impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Mapping(mapping) => Self::Object(
                mapping
                    .iter()
                    .map(|(key, value)| (key.to_owned(), Self::from(value)))
                    .collect(),
            ),
            Node::Sequence(items) => Self::Array(items.iter().map(Self::from).collect()),
            Node::Scalar(scalar) => Self::from(scalar),
        }
    }
}

impl From<&Scalar> for Value {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Null => Self::Null,
            Scalar::Bool(flag) => Self::Bool(*flag),
            Scalar::Number(number) => Self::Number(number.clone()),
            Scalar::Text(text) => Self::String(text.clone()),
            Scalar::Bytes(bytes) => Self::Array(bytes.iter().copied().map(Self::from).collect()),
        }
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Self::mapping(mapping)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Sequence(Arc::new(items))
    }
}

impl From<bool> for Node {
    fn from(flag: bool) -> Self {
        Self::Scalar(Scalar::Bool(flag))
    }
}

impl From<i64> for Node {
    fn from(number: i64) -> Self {
        Self::Scalar(Scalar::Number(number.into()))
    }
}

impl From<u64> for Node {
    fn from(number: u64) -> Self {
        Self::Scalar(Scalar::Number(number.into()))
    }
}

/// Non-finite floats have no JSON representation and become `null`.
impl From<f64> for Node {
    fn from(number: f64) -> Self {
        Number::from_f64(number).map_or_else(Self::null, |finite| {
            Self::Scalar(Scalar::Number(finite))
        })
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Scalar(Scalar::Text(text.to_owned()))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Scalar(Scalar::Text(text))
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Mapping(mapping) => serializer.collect_map(mapping.iter()),
            Self::Sequence(items) => serializer.collect_seq(items.iter()),
            Self::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => number.serialize(serializer),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Bytes(bytes) => serializer.collect_seq(bytes.iter()),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Compact JSON rendering, as produced by [`Value`]'s `Display`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::from(self), f)
    }
}
