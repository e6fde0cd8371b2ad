// Author: Dustin Pilgrim
// License: MIT

use tracing::{debug, trace};

use super::*;
use crate::path::Path;

impl Document {
    /// Deep-merge `source` into this document at `target_path`.
    ///
    /// Objects are merged key by key; scalars and sequences from `source`
    /// replace whatever sits at the same path here. Empty source objects add
    /// nothing.
    ///
    /// # Examples
    /// ```
    /// # use yaml_merge::Document;
    /// let mut target = Document::from_str("a: {x: 9, z: 3}").unwrap();
    /// let source = Document::from_str("a: {x: 1, y: 2}").unwrap();
    /// target.merge(&source, "$.").unwrap();
    /// assert_eq!(target.keys("$.a").unwrap(), vec!["x", "z", "y"]);
    /// ```
    pub fn merge(&mut self, source: &Document, target_path: &str) -> Result<(), MergeError> {
        let target = Path::parse(target_path)?;
        self.merge_object_at(&source.root, &target)
    }

    /// Build a document from any [`Source`] and merge it at `target_path`.
    pub fn merge_source(&mut self, source: Source<'_>, target_path: &str) -> Result<(), MergeError> {
        let source = Document::from_source(source)?;
        self.merge(&source, target_path)
    }

    /// Merge an extracted subtree.
    ///
    /// An object is merged like a document. Any other value is a single leaf
    /// assigned at `target_path`, so a string such as `"b: 1"` is stored as
    /// text and never re-parsed. A leaf cannot be merged at the root.
    pub fn merge_value(&mut self, value: &Value, target_path: &str) -> Result<(), MergeError> {
        let target = Path::parse(target_path)?;
        self.merge_at(value, &target)
    }

    /// All-or-nothing: an object merge runs on a staged copy which replaces
    /// this document only once every leaf has been assigned.
    pub fn merge_at(&mut self, value: &Value, target: &Path) -> Result<(), MergeError> {
        match value {
            Value::Object(items) => self.merge_object_at(items, target),
            leaf => {
                debug!(at = %target, kind = leaf.type_name(), "merging single leaf");
                self.set_path(target, leaf.clone())
            }
        }
    }

    fn merge_object_at(&mut self, items: &Map, target: &Path) -> Result<(), MergeError> {
        debug!(at = %target, keys = items.len(), "merging object");
        let mut staged = self.clone();
        merge_leaves(&mut staged, items, target)?;
        *self = staged;
        Ok(())
    }
}

fn merge_leaves(doc: &mut Document, items: &Map, at: &Path) -> Result<(), MergeError> {
    for (key, value) in items {
        let path = at.child(key.as_str());
        match value {
            Value::Object(nested) => merge_leaves(doc, nested, &path)?,
            leaf => {
                trace!(path = %path, "replace leaf");
                doc.set_path(&path, leaf.clone())?;
            }
        }
    }
    Ok(())
}
