//! Source text input.

use std::path::Path;

use crate::error::{LecternError, Result};

/// One loaded source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub file_name: String,
    pub text: String,
}

impl SourceText {
    /// Wrap pasted text (no backing file).
    pub fn from_string(text: impl Into<String>) -> Self {
        Self {
            file_name: String::new(),
            text: text.into(),
        }
    }
}

/// Read a plain-text file fully into memory.
///
/// Only `.txt` files containing valid UTF-8 are accepted; anything else is
/// rejected synchronously with a user-facing notice and no state change.
pub fn read_source(path: &Path) -> Result<SourceText> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    if extension.as_deref() != Some("txt") {
        return Err(LecternError::UnsupportedSource(format!(
            "{}: only .txt files are supported",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        LecternError::UnsupportedSource(format!("{}: file is not UTF-8 text", path.display()))
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(SourceText { file_name, text })
}
