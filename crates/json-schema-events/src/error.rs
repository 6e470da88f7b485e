//! Error types for the JSON event sources.

use thiserror::Error;

/// Result type alias for json-schema-events operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning JSON text into events.
///
/// Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The text is not well-formed
    #[error("Parse error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// The input held no value at all
    #[error("No JSON document found")]
    Empty,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let text = err.to_string();
        let message = match text.rfind(" at line ") {
            Some(end) => text[..end].to_string(),
            None => text,
        };
        Error::Syntax {
            message,
            line: err.line(),
            column: err.column(),
        }
    }
}
