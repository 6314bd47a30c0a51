//! Parser adapter over tree-sitter.

mod javascript;
mod traits;

pub use javascript::JavaScriptParser;
pub use traits::{ParsedSource, SourceParser};
