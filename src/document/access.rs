// Author: Dustin Pilgrim
// License: MIT

use tracing::trace;

use super::*;
use crate::path::Path;

fn not_found(path: &Path, segment: &str) -> MergeError {
    MergeError::PathNotFound {
        path: path.to_string(),
        segment: segment.to_string(),
        hint: Some("Only object keys can be traversed; sequences and scalars end a path".into()),
        code: Some(202),
    }
}

impl Document {
    /// Get a copy of the value at `path`.
    ///
    /// # Examples
    /// ```
    /// # use yaml_merge::{Document, Value};
    /// let doc = Document::from_str("server:\n  port: 8080\n").unwrap();
    /// assert_eq!(doc.get("$.server.port").unwrap(), Value::Integer(8080));
    /// ```
    ///
    /// # Errors
    /// `UnsupportedPath` for paths not anchored at `$.`, `PathNotFound` when a
    /// key is missing or a non-object is reached before the path ends.
    pub fn get(&self, path: &str) -> Result<Value, MergeError> {
        self.get_path(&Path::parse(path)?)
    }

    pub fn get_path(&self, path: &Path) -> Result<Value, MergeError> {
        let Some((first, rest)) = path.segments().split_first() else {
            return Ok(Value::Object(self.root.clone()));
        };

        let mut current = self.root.get(first).ok_or_else(|| not_found(path, first))?;
        for segment in rest {
            current = current
                .as_object()
                .and_then(|items| items.get(segment))
                .ok_or_else(|| not_found(path, segment))?;
        }
        Ok(current.clone())
    }

    /// Get a typed value, e.g. `doc.get_as::<i64>("$.server.port")`.
    pub fn get_as<T>(&self, path: &str) -> Result<T, MergeError>
    where
        T: TryFrom<Value, Error = MergeError>,
    {
        T::try_from(self.get(path)?)
    }

    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    /// Keys of the object at `path`, in document order.
    pub fn keys(&self, path: &str) -> Result<Vec<String>, MergeError> {
        match self.get(path)? {
            Value::Object(items) => Ok(items.into_keys().collect()),
            other => Err(MergeError::TypeError {
                message: format!("Path '{}' is a {}, not an object", path, other.type_name()),
                hint: Some("Only objects have keys".into()),
                code: Some(406),
            }),
        }
    }

    /// Assign `value` at `path`, creating missing intermediate objects.
    ///
    /// Intermediate nodes that exist but are not objects are replaced by
    /// empty objects. The value at the final key is overwritten whatever its
    /// previous type. The value is stored as given; use [`Document::set_text`]
    /// to decode a textual value first.
    ///
    /// # Errors
    /// `InvalidPath` for the root path or an empty final segment. Nothing is
    /// modified when an error is returned.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<(), MergeError> {
        self.set_path(&Path::parse(path)?, value.into())
    }

    pub fn set_path(&mut self, path: &Path, value: Value) -> Result<(), MergeError> {
        let Some((last, parents)) = path.segments().split_last() else {
            return Err(MergeError::InvalidPath {
                path: path.to_string(),
                message: "cannot assign to the root node".into(),
                hint: Some("Name the key to set, e.g. `$.key`".into()),
                code: Some(204),
            });
        };
        if last.is_empty() {
            return Err(MergeError::InvalidPath {
                path: path.to_string(),
                message: "the final segment is empty".into(),
                hint: Some("Remove the trailing dot".into()),
                code: Some(205),
            });
        }

        trace!(path = %path, kind = value.type_name(), "set");
        let mut current = &mut self.root;
        for segment in parents {
            current = current
                .entry(segment.clone())
                .or_insert(Value::Null)
                .make_object();
        }
        current.insert(last.clone(), value);
        Ok(())
    }

    /// Assign a textual value decoded as JSON, falling back to YAML.
    ///
    /// Empty text is stored as an empty string.
    pub fn set_text(&mut self, path: &str, text: &str) -> Result<(), MergeError> {
        let path = Path::parse(path)?;
        let value = if text.is_empty() {
            Value::String(String::new())
        } else {
            Value::parse_text(text)?
        };
        self.set_path(&path, value)
    }
}
