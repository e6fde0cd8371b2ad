// Author: Dustin Pilgrim
// License: MIT

//! Root-anchored path syntax.
//!
//! `$` or `$.` addresses the root, `$.a.b` the key `b` inside `a`. Inside a
//! segment `\.` is a literal dot and `\\` a literal backslash; any other
//! backslash is kept as written, so regex-like keys such as
//! `|^https?://([^\.]*[\.])?example[\.]org/|` stay addressable.

use std::fmt;

use crate::MergeError;

const ROOT: char = '$';
const SEPARATOR: char = '.';
const ESCAPE: char = '\\';

/// An ordered sequence of unescaped segment names, starting at the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the textual form.
    ///
    /// # Errors
    /// `UnsupportedPath` when the text does not start at the root node,
    /// `InvalidPath` when it ends in a dangling escape character.
    pub fn parse(text: &str) -> Result<Self, MergeError> {
        let rest = match text.strip_prefix(ROOT) {
            Some("") => return Ok(Self::root()),
            Some(rest) => rest.strip_prefix(SEPARATOR),
            None => None,
        };
        let rest = rest.ok_or_else(|| MergeError::UnsupportedPath {
            path: text.to_string(),
            hint: Some("Start the path with `$.`, e.g. `$.server.port`".into()),
            code: Some(201),
        })?;

        if rest.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = rest.chars();
        while let Some(ch) = chars.next() {
            match ch {
                ESCAPE => match chars.next() {
                    Some(next) if next == SEPARATOR || next == ESCAPE => current.push(next),
                    Some(next) => {
                        current.push(ESCAPE);
                        current.push(next);
                    }
                    None => {
                        return Err(MergeError::InvalidPath {
                            path: text.to_string(),
                            message: "dangling escape character at the end of the path".into(),
                            hint: Some("Write `\\.` for a literal dot or `\\\\` for a backslash".into()),
                            code: Some(203),
                        });
                    }
                },
                SEPARATOR => segments.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        segments.push(current);

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// A new path one level deeper, addressing `key` inside this path.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.into());
        Self { segments }
    }
}

/// Escape a raw key so it survives [`Path::parse`] as a single segment.
pub fn escape(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if ch == SEPARATOR || ch == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "{}{}", ROOT, SEPARATOR);
        }
        write!(f, "{}", ROOT)?;
        for segment in &self.segments {
            write!(f, "{}{}", SEPARATOR, escape(segment))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Path {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

#[cfg(test)]
mod tests;
