//! SourceParser trait — the contract of the external parser collaborator.

use std::path::Path;

use escompat_core::config::{CheckFlags, SourceType};
use escompat_core::errors::ParseError;

/// A successfully parsed file.
#[derive(Debug)]
pub struct ParsedSource {
    pub tree: tree_sitter::Tree,
    /// The mode the file was parsed under, as requested by the job.
    pub source_type: SourceType,
}

/// Trait every source parser must implement.
///
/// A parser must raise a structured failure with line/column on invalid
/// syntax, or return a tree whose named children carry the node kinds the
/// catalog signatures target.
pub trait SourceParser: Send + Sync {
    fn parse(
        &self,
        source: &str,
        path: &Path,
        flags: &CheckFlags,
    ) -> Result<ParsedSource, ParseError>;
}
