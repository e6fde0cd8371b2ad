// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path as FsPath, PathBuf};

use tracing::debug;

use crate::MergeError;
use crate::value::{Map, Value};

mod access;
mod export;
mod merge;

/// Every shape a document can be built from.
///
/// [`Source::detect`] resolves a raw command-line string in a fixed order:
/// blank text, then an existing file, then inline JSON/YAML text.
#[derive(Debug, Clone)]
pub enum Source<'a> {
    Document(&'a Document),
    Object(&'a Map),
    File(PathBuf),
    Text(&'a str),
}

impl<'a> Source<'a> {
    pub fn detect(input: &'a str) -> Self {
        if input.trim().is_empty() {
            return Source::Text(input);
        }
        let candidate = expand_home(input);
        if candidate.is_file() {
            Source::File(candidate)
        } else {
            Source::Text(input)
        }
    }
}

/// An Object-rooted configuration tree.
///
/// The root is a [`Map`], so the "always an object" invariant is carried by
/// the type. Documents never share structure: every constructor and every
/// read copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Map,
}

impl Document {
    /// An empty document (`{}`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_source(source: Source<'_>) -> Result<Self, MergeError> {
        match source {
            Source::Document(doc) => Ok(doc.clone()),
            Source::Object(items) => Ok(Self { root: items.clone() }),
            Source::File(path) => Self::from_file(path),
            Source::Text(text) => Self::from_str(text),
        }
    }

    /// Resolve a raw input string (file path, JSON or YAML text) and load it.
    pub fn from_input(input: &str) -> Result<Self, MergeError> {
        Self::from_source(Source::detect(input))
    }

    /// Read and decode a YAML file. JSON files load too, JSON being tried first.
    pub fn from_file<P: AsRef<FsPath>>(path: P) -> Result<Self, MergeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MergeError::ParseError {
            message: format!("Failed to read file '{}': {}", path.display(), e),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(103),
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loaded document file");

        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        Self::from_value(Value::parse_text(&content)?)
    }

    /// Decode inline text: blank → empty document, JSON first, YAML as fallback.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, MergeError> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        Self::from_value(Value::parse_text(text)?)
    }

    /// Wrap a decoded tree. Null and an empty sequence (`--- []`) become an
    /// empty document; any other non-object root is rejected.
    pub fn from_value(value: Value) -> Result<Self, MergeError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            Value::Null => Ok(Self::new()),
            Value::Sequence(items) if items.is_empty() => Ok(Self::new()),
            other => Err(MergeError::ParseError {
                message: format!("document root must be a mapping, got {}", other.type_name()),
                hint: Some("Wrap the value in a mapping, or merge it with a target path".into()),
                code: Some(104),
            }),
        }
    }

    pub fn root(&self) -> &Map {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl From<Map> for Document {
    fn from(root: Map) -> Self {
        Self { root }
    }
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
