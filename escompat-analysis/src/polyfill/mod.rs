//! Polyfill detection — text-pattern scan for runtime-supplied features.
//!
//! Deliberately AST-independent: a side-effecting shim import or an
//! `if (!X) X = ...` assignment is not a structural feature the engine's
//! signatures target, so this scan works on raw source text.

mod detector;
mod patterns;

pub use detector::detect_polyfills;
pub use patterns::{Pattern, Substring, TextMatcher};
