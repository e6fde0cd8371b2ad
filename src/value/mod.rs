// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

mod codec;
mod conversion;

/// Insertion-ordered, string-keyed mapping used for every object node.
pub type Map = IndexMap<String, Value>;

/// A JSON-like tree node.
///
/// Every node exclusively owns its children, so `Clone` is a full structural
/// copy: a cloned tree shares nothing with its source.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    /// Whole numbers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Object(Map),
}

impl Value {
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_object(&self) -> Option<&Map> {
        if let Value::Object(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        if let Value::Object(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Replaces a non-object node with an empty object and returns its map.
    pub(crate) fn make_object(&mut self) -> &mut Map {
        if !self.is_object() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(items) => items,
            _ => unreachable!("node was just replaced with an object"),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) | Value::Unsigned(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Object(_) => "object",
        }
    }

    /// Decode an external textual value: JSON first, YAML as fallback.
    ///
    /// Unlike document construction this accepts any root kind, so `"123"`
    /// yields an integer and `"a: 1"` an object.
    pub fn parse_text(text: &str) -> Result<Value, crate::MergeError> {
        codec::decode_text(text)
    }
}
