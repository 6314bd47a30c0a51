//! Canonical check report and per-file diagnostics.
//!
//! This is the single output surface of the pipeline. An external
//! presentation layer (CLI, CI annotation, JSON emitter) consumes this
//! struct; escompat itself never formats it for humans.

use serde::{Deserialize, Serialize};

/// Aggregated result of checking a file set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// File-scoped diagnostics, in original file-set order.
    pub diagnostics: Vec<Diagnostic>,
    /// True when no file produced a diagnostic.
    pub success: bool,
}

impl Report {
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let success = diagnostics.is_empty();
        Self { diagnostics, success }
    }
}

/// A single file-scoped finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Path of the file this diagnostic applies to.
    pub file: String,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

/// What went wrong (or was found) in one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// The file failed to parse at the requested grammar.
    ParseError {
        line: u32,
        column: u32,
        message: String,
    },
    /// The file uses cataloged features above the target edition,
    /// net of the ignore list and detected polyfills.
    UnsupportedFeatures { features: Vec<String> },
    /// The file could not be read.
    ReadError { message: String },
}
