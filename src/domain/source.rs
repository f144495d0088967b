//! Source document supplying lines to the scanner

use crate::error::{Result, SplitError};
use std::fs;
use std::path::{Path, PathBuf};

/// The study guide text, read fully into memory
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: Option<PathBuf>,
    text: String,
}

impl SourceDocument {
    /// Read the document at `path`
    ///
    /// # Errors
    ///
    /// Returns `SplitError::MissingSource` if nothing exists at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SplitError::MissingSource(path.to_path_buf())
            } else {
                SplitError::Io(e)
            }
        })?;

        Ok(SourceDocument {
            path: Some(path.to_path_buf()),
            text,
        })
    }

    /// Wrap in-memory text
    pub fn from_text(text: impl Into<String>) -> Self {
        SourceDocument {
            path: None,
            text: text.into(),
        }
    }

    /// Iterate lines from the start, numbered from 1
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text.lines().enumerate().map(|(idx, line)| (idx + 1, line))
    }
}
