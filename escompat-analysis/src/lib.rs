//! escompat-analysis: ECMAScript compatibility detection engine
//!
//! This crate provides the algorithmic core of escompat:
//! - Catalog: static registry of versioned feature signatures + node-kind index
//! - Engine: single-pass AST traversal with a generic signature matcher
//! - Polyfill: text-pattern detection of runtime-supplied features
//! - Browsers: browser/version list to target-edition resolution
//! - Parsers: tree-sitter adapter producing structured parse failures
//! - Pipeline: cached, batched, order-preserving per-file orchestration

pub mod browsers;
pub mod catalog;
pub mod engine;
pub mod parsers;
pub mod pipeline;
pub mod polyfill;

// Re-exports for convenience
pub use browsers::{
    floor_search, resolve_browsers, resolve_target, BrowserQuerySource, BrowserSupport,
    BrowserVersion, FAST_EVOLVING_BROWSERS, FAST_EVOLVING_FLOOR,
};
pub use catalog::{Catalog, FeatureDefinition, Marker, Signature};
pub use engine::{detect_features, DetectionInput, DetectionOutcome};
pub use parsers::{JavaScriptParser, ParsedSource, SourceParser};
pub use pipeline::{CacheStats, CheckPipeline, FileCache};
pub use polyfill::{detect_polyfills, TextMatcher};
