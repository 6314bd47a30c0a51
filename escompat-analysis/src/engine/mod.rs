//! Feature detection engine.

mod matcher;
mod walker;

pub use matcher::node_matches;
pub use walker::{detect_features, DetectionInput, DetectionOutcome};
