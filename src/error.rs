// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// The main error type for loading, addressing, merging and writing documents.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeError {
    /// Input is neither valid JSON nor YAML, or a source file could not be read.
    ParseError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Path text does not start at the root node.
    UnsupportedPath {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Traversal hit a missing key or a non-object before the path was exhausted.
    PathNotFound {
        path: String,
        segment: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Malformed escape sequence, or a path that cannot be assigned to.
    InvalidPath {
        path: String,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a document cannot be written out.
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Command-line arguments violate the `--src` group rules.
    CliUsage {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl MergeError {
    pub fn parse_error(message: impl Into<String>, hint: Option<&str>) -> Self {
        MergeError::ParseError {
            message: message.into(),
            hint: hint.map(String::from),
            code: Some(101),
        }
    }

    pub fn cli_usage(message: impl Into<String>) -> Self {
        MergeError::CliUsage {
            message: message.into(),
            hint: Some("Run with --help to see the accepted arguments".into()),
            code: Some(501),
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            MergeError::ParseError { code, .. }
            | MergeError::UnsupportedPath { code, .. }
            | MergeError::PathNotFound { code, .. }
            | MergeError::InvalidPath { code, .. }
            | MergeError::FileError { code, .. }
            | MergeError::TypeError { code, .. }
            | MergeError::CliUsage { code, .. } => *code,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, MergeError::CliUsage { .. })
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::ParseError { message, hint, code } => {
                write!(f, "[YAML-MERGE] Parse Error: {}{}", message, suffix(hint, code))
            }
            MergeError::UnsupportedPath { path, hint, code } => write!(
                f,
                "[YAML-MERGE] Unsupported Path '{}': only paths beginning at the root node ($.) are supported{}",
                path,
                suffix(hint, code)
            ),
            MergeError::PathNotFound { path, segment, hint, code } => write!(
                f,
                "[YAML-MERGE] No such path '{}' (stopped at '{}'){}",
                path,
                segment,
                suffix(hint, code)
            ),
            MergeError::InvalidPath { path, message, hint, code } => write!(
                f,
                "[YAML-MERGE] Invalid Path '{}': {}{}",
                path,
                message,
                suffix(hint, code)
            ),
            MergeError::FileError { message, path, hint, code } => write!(
                f,
                "[YAML-MERGE] File Error '{}': {}{}",
                path,
                message,
                suffix(hint, code)
            ),
            MergeError::TypeError { message, hint, code } => {
                write!(f, "[YAML-MERGE] Type Error: {}{}", message, suffix(hint, code))
            }
            MergeError::CliUsage { message, hint, code } => {
                write!(f, "[YAML-MERGE] Usage Error: {}{}", message, suffix(hint, code))
            }
        }
    }
}

impl std::error::Error for MergeError {}
