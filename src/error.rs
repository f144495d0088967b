//! Error types for daysplit

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daysplit
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Source file not found: {0}")]
    MissingSource(PathBuf),

    #[error("Unrecognized line {line}: {text}")]
    UnrecognizedLine { line: usize, text: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl SplitError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SplitError::MissingSource(_) => 2,
            SplitError::UnrecognizedLine { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SplitError::MissingSource(path) => {
                format!(
                    "Source file not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the study guide explicitly: daysplit --source guide.md\n\
                    • Set source_path in daysplit.toml\n\
                    • Run daysplit from the directory the source path is relative to",
                    path.display()
                )
            }
            SplitError::UnrecognizedLine { line, text } => {
                format!(
                    "Unrecognized line {}: '{}'\n\n\
                    Strict mode only accepts free text inside a \
                    **Faith (The Word):** section.\n\
                    Suggestions:\n\
                    • Fix or remove the line in the source document\n\
                    • Run without --strict to collect it into the day's faith block",
                    line, text
                )
            }
            SplitError::Config(msg) => {
                if msg.contains("extension") {
                    format!(
                        "{}\n\n\
                        Expected a bare extension such as: md, txt, markdown\n\
                        Example: daysplit --extension txt",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SplitError
pub type Result<T> = std::result::Result<T, SplitError>;
