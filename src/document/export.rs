// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use tracing::info;

use super::*;

const DOCUMENT_START: &str = "---";
const DOCUMENT_END: &str = "...";

fn encode_error(format: &str, e: impl fmt::Display) -> MergeError {
    MergeError::ParseError {
        message: format!("Failed to encode document as {}: {}", format, e),
        hint: None,
        code: Some(105),
    }
}

impl Document {
    /// Render canonical YAML: explicit start and end markers, keys in
    /// document order.
    ///
    /// An empty document renders as `--- {}` so the output always decodes
    /// back to an object.
    pub fn to_yaml_string(&self) -> Result<String, MergeError> {
        if self.root.is_empty() {
            return Ok(format!("{} {{}}\n{}\n", DOCUMENT_START, DOCUMENT_END));
        }
        let body = serde_yaml::to_string(&self.root).map_err(|e| encode_error("YAML", e))?;
        Ok(format!("{}\n{}{}\n", DOCUMENT_START, body, DOCUMENT_END))
    }

    /// Pretty-printed JSON with keys in document order.
    pub fn to_json_string(&self) -> Result<String, MergeError> {
        serde_json::to_string_pretty(&self.root).map_err(|e| encode_error("JSON", e))
    }

    /// Write the canonical YAML rendering to `path`, replacing its contents.
    pub fn write_file<P: AsRef<FsPath>>(&self, path: P) -> Result<(), MergeError> {
        let path = path.as_ref();
        let text = self.to_yaml_string()?;
        fs::write(path, &text).map_err(|e| MergeError::FileError {
            message: format!("Failed to write file: {}", e),
            path: path.display().to_string(),
            hint: Some("Check that the directory exists and is writable".into()),
            code: Some(301),
        })?;
        info!(path = %path.display(), bytes = text.len(), "wrote document");
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_yaml_string().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
