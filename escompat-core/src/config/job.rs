//! Check job description — the input contract of the pipeline.
//!
//! A `CheckJob` is built by an external CLI/config layer (argument parsing,
//! config-file merging, and glob expansion all happen upstream), handed to
//! the pipeline for one run, and discarded once the report is emitted.

use std::path::PathBuf;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::versions::EsVersion;

/// How the parser should treat each source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

/// Per-run behavior toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckFlags {
    /// Run feature detection (as opposed to a parse-only check).
    pub check_features: bool,
    /// Suppress features that a detected polyfill supplies at runtime.
    pub check_for_polyfills: bool,
    /// Accept a `#!` line at the top of the file.
    pub allow_hash_bang: bool,
    /// Script vs. module parse mode, forwarded to the parser.
    pub source_type: SourceType,
}

impl Default for CheckFlags {
    fn default() -> Self {
        Self {
            check_features: true,
            check_for_polyfills: false,
            allow_hash_bang: false,
            source_type: SourceType::Script,
        }
    }
}

/// One compatibility-check invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckJob {
    /// Explicit target edition. Takes precedence over `browser_query`.
    pub target_version: Option<EsVersion>,
    /// Browser query to resolve into a target edition when no explicit
    /// target is given (e.g. a browserslist query string).
    pub browser_query: Option<String>,
    /// Files to check, already expanded, in presentation order.
    pub files: Vec<PathBuf>,
    /// Feature names excluded from the unsupported computation.
    #[serde(default)]
    pub ignore: FxHashSet<String>,
    #[serde(default)]
    pub flags: CheckFlags,
    /// 0 means one unconstrained batch; N > 0 bounds per-chunk concurrency.
    #[serde(default)]
    pub batch_size: usize,
    /// Serve repeated reads of the same path from the file cache.
    #[serde(default)]
    pub use_cache: bool,
}

impl CheckJob {
    /// A minimal job checking `files` against an explicit edition.
    pub fn for_target(target: EsVersion, files: Vec<PathBuf>) -> Self {
        Self {
            target_version: Some(target),
            browser_query: None,
            files,
            ignore: FxHashSet::default(),
            flags: CheckFlags::default(),
            batch_size: 0,
            use_cache: false,
        }
    }

    /// Structural validation. Runs before any file is touched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_version.is_none() && self.browser_query.is_none() {
            return Err(ConfigError::MissingTarget);
        }
        if self.files.is_empty() {
            return Err(ConfigError::EmptyFileSet);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_without_target_or_query_is_invalid() {
        let mut job = CheckJob::for_target(6, vec![PathBuf::from("a.js")]);
        job.target_version = None;
        assert!(matches!(job.validate(), Err(ConfigError::MissingTarget)));
    }

    #[test]
    fn job_with_empty_file_set_is_invalid() {
        let job = CheckJob::for_target(6, vec![]);
        assert!(matches!(job.validate(), Err(ConfigError::EmptyFileSet)));
    }

    #[test]
    fn browser_query_satisfies_target_requirement() {
        let mut job = CheckJob::for_target(6, vec![PathBuf::from("a.js")]);
        job.target_version = None;
        job.browser_query = Some("defaults".to_string());
        assert!(job.validate().is_ok());
    }
}
