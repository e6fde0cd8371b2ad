// Author: Dustin Pilgrim
// License: MIT

use super::{Map, Value};
use crate::MergeError;

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> MergeError {
    MergeError::TypeError {
        message: format!("Expected {}, got {} {:?}", expected, value.type_name(), value),
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = MergeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, "Quote the value in your YAML", 401)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = MergeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Integer(n) => Ok(n as f64),
            Value::Unsigned(n) => Ok(n as f64),
            _ => Err(type_error("number", &value, "Use a numeric value", 402)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = MergeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            Value::Unsigned(n) => Err(MergeError::TypeError {
                message: format!("Number {} out of range for i64", n),
                hint: Some("Read the value as u64".into()),
                code: Some(403),
            }),
            _ => Err(type_error("integer", &value, "Use a whole number", 402)),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = MergeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) if n >= 0 => Ok(n as u64),
            Value::Unsigned(n) => Ok(n),
            Value::Integer(n) => Err(MergeError::TypeError {
                message: format!("Number {} out of range for u64", n),
                hint: Some("Use a non-negative number".into()),
                code: Some(403),
            }),
            _ => Err(type_error("integer", &value, "Use a whole number", 402)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = MergeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(type_error("boolean (true/false)", &value, "Use true or false", 404)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = MergeError>,
{
    type Error = MergeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Sequence(items) => {
                let mut result = Vec::with_capacity(items.len());
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(type_error("sequence", &value, "Use a YAML list", 405)),
        }
    }
}

impl TryFrom<Value> for Map {
    type Error = MergeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(items) => Ok(items),
            _ => Err(type_error("object", &value, "Use a YAML mapping", 406)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Unsigned(n), Value::Integer)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
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
        Value::Sequence(items)
    }
}

impl From<Map> for Value {
    fn from(items: Map) -> Self {
        Value::Object(items)
    }
}
