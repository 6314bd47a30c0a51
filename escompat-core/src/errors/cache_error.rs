//! File read errors.
//!
//! Clone is required: a read failure is stored in the file cache so a
//! persistently missing file is not re-stat'd on every batch.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, thiserror::Error)]
#[error("Failed to read {path}: {message}")]
pub struct CacheReadError {
    pub path: PathBuf,
    pub message: String,
}

impl CacheReadError {
    pub fn new(path: PathBuf, err: &std::io::Error) -> Self {
        Self {
            path,
            message: err.to_string(),
        }
    }
}

impl ErrorCode for CacheReadError {
    fn error_code(&self) -> &'static str {
        error_code::CACHE_READ_ERROR
    }
}
