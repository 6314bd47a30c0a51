//! Browser query resolution errors.
//!
//! These never cross the resolver boundary: resolution fails safe by
//! returning the minimum edition. The type exists so browser-data
//! collaborators have a structured failure to raise.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("Browser query {query:?} failed: {message}")]
    Provider { query: String, message: String },

    #[error("Unparseable version {version:?} for browser {browser:?}")]
    InvalidVersion { browser: String, version: String },
}

impl ErrorCode for ResolverError {
    fn error_code(&self) -> &'static str {
        error_code::RESOLVER_ERROR
    }
}
