//! Error type for loading and validating puzzle definitions.
//!
//! The solver itself never fails: an unsolvable puzzle is an empty path.
//! Everything that can go wrong happens before a start configuration exists.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("invalid puzzle definition: {0}")]
    InvalidDefinition(String),
}

impl PuzzleError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        PuzzleError::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PuzzleError::InvalidDefinition(message.into())
    }
}
