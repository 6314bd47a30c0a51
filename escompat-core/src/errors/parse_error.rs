//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while parsing one file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error in {path} at {line}:{column}")]
    Syntax {
        path: PathBuf,
        line: u32,
        column: u32,
    },

    #[error("Hashbang line in {path} (allow_hash_bang is disabled)")]
    HashBang { path: PathBuf },

    #[error("Grammar could not be loaded: {message}")]
    Grammar { message: String },
}

impl ParseError {
    /// Line/column of the failure, 1-based, for the diagnostic.
    pub fn location(&self) -> (u32, u32) {
        match self {
            Self::Syntax { line, column, .. } => (*line, *column),
            Self::HashBang { .. } => (1, 1),
            Self::Grammar { .. } => (0, 0),
        }
    }
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
