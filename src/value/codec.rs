// Author: Dustin Pilgrim
// License: MIT

use serde::ser::{Serialize, Serializer};

use super::{Map, Value};
use crate::MergeError;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Unsigned(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Object(items) => serializer.collect_map(items),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Unsigned(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Sequence(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl TryFrom<serde_yaml::Value> for Value {
    type Error = MergeError;

    fn try_from(value: serde_yaml::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Unsigned(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(seq) => Value::Sequence(
                seq.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            serde_yaml::Value::Mapping(mapping) => {
                let mut items = Map::with_capacity(mapping.len());
                for (k, v) in mapping {
                    let key = mapping_key(k)?;
                    if items.contains_key(&key) {
                        return Err(MergeError::ParseError {
                            message: format!("duplicate mapping key '{}' after converting keys to strings", key),
                            hint: Some("Keys such as `1` and `'1'` address the same entry; keep only one".into()),
                            code: Some(106),
                        });
                    }
                    items.insert(key, Value::try_from(v)?);
                }
                Value::Object(items)
            }
            // Tags carry no meaning in the tree model; keep the tagged payload.
            serde_yaml::Value::Tagged(tagged) => Value::try_from(tagged.value)?,
        })
    }
}

/// YAML allows scalar keys of any type; the tree only has string keys.
fn mapping_key(key: serde_yaml::Value) -> Result<String, MergeError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok(String::new()),
        serde_yaml::Value::Tagged(tagged) => mapping_key(tagged.value),
        other => Err(MergeError::parse_error(
            format!("unsupported mapping key {:?}", other),
            Some("Only scalar mapping keys can be addressed by a path"),
        )),
    }
}

pub(crate) fn decode_json(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(text).map(Value::from)
}

pub(crate) fn decode_text(text: &str) -> Result<Value, MergeError> {
    let json_err = match decode_json(text) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };
    match serde_yaml::from_str::<serde_yaml::Value>(text) {
        Ok(raw) => Value::try_from(raw),
        Err(yaml_err) => Err(MergeError::ParseError {
            message: format!(
                "input is neither valid JSON ({}) nor valid YAML ({})",
                json_err, yaml_err
            ),
            hint: Some("Pass a path to an existing file, or inline JSON/YAML text".into()),
            code: Some(102),
        }),
    }
}
