//! Error taxonomy shared across the workspace.
//!
//! One enum per domain. Job-scoped errors (`ConfigError`) abort a run
//! before any file is processed; file-scoped errors (`ParseError`,
//! `CacheReadError`) are collected into the report; `ResolverError` never
//! escapes the resolver boundary — it degrades to the minimum edition.

mod cache_error;
mod config_error;
pub mod error_code;
mod parse_error;
mod resolver_error;

pub use cache_error::CacheReadError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
pub use resolver_error::ResolverError;
