//! escompat-core: Shared types for the escompat compatibility engine
//!
//! This crate provides the non-algorithmic foundation for escompat:
//! - Types: ECMAScript edition ordinals, reports, diagnostics
//! - Config: check job description and validation
//! - Errors: the error taxonomy shared across the workspace
//! - Tracing: logging initialization

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::{CheckFlags, CheckJob, SourceType};
pub use errors::{
    CacheReadError, ConfigError, ErrorCode, ParseError, ResolverError,
};
pub use types::report::{Diagnostic, DiagnosticKind, Report};
pub use types::versions::EsVersion;
