//! JavaScript parser.

use std::path::Path;

use tree_sitter::{Node, Parser};

use escompat_core::config::CheckFlags;
use escompat_core::errors::ParseError;

use super::traits::{ParsedSource, SourceParser};

pub struct JavaScriptParser;

impl Default for JavaScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaScriptParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for JavaScriptParser {
    fn parse(
        &self,
        source: &str,
        path: &Path,
        flags: &CheckFlags,
    ) -> Result<ParsedSource, ParseError> {
        if !flags.allow_hash_bang && source.starts_with("#!") {
            return Err(ParseError::HashBang {
                path: path.to_path_buf(),
            });
        }

        // tree-sitter parsers are cheap to construct and not Sync, so one
        // is built per call rather than shared across workers.
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .map_err(|e| ParseError::Grammar {
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Grammar {
                message: "parser returned no tree".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error_position(root);
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line,
                column,
            });
        }

        Ok(ParsedSource {
            tree,
            source_type: flags.source_type,
        })
    }
}

/// 1-based line/column of the first ERROR or missing node.
fn first_error_position(root: Node) -> (u32, u32) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let point = node.start_position();
            return (point.row as u32 + 1, point.column as u32 + 1);
        }
        if !node.has_error() {
            continue;
        }
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }
    let point = root.start_position();
    (point.row as u32 + 1, point.column as u32 + 1)
}
