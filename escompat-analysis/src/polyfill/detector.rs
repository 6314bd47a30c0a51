//! Two-tier polyfill scan.

use rustc_hash::FxHashSet;

use super::patterns::{gate_matches, PATTERN_TABLE};

/// Scan raw source text and return the catalog feature names that appear
/// to be runtime-supplied by a shim.
///
/// Tier one is a multi-substring pre-check; the common case of no polyfill
/// never pays per-pattern cost.
pub fn detect_polyfills(source: &str) -> FxHashSet<&'static str> {
    let mut polyfilled = FxHashSet::default();
    if !gate_matches(source) {
        return polyfilled;
    }

    for (feature, matchers) in PATTERN_TABLE.iter() {
        if matchers.iter().any(|m| m.matches(source)) {
            polyfilled.insert(*feature);
        }
    }
    polyfilled
}
