//! Job configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors that make a check job structurally invalid.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No target edition and no browser query were provided")]
    MissingTarget,

    #[error("File set is empty after expansion")]
    EmptyFileSet,
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
