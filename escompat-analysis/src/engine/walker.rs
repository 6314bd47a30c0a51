//! Single-pass detection walk.
//!
//! Explicit-stack depth-first traversal (bounds stack depth on adversarial
//! input) over named children. Detection is existence-only, so sibling
//! visitation order is irrelevant. The walk carries one piece of scope
//! state: a function-nesting depth counter, used solely by top-level-only
//! signatures.

use rustc_hash::{FxHashMap, FxHashSet};
use tree_sitter::{Node, Tree};

use escompat_core::types::versions::EsVersion;

use crate::catalog::Catalog;

use super::matcher::node_matches;

/// Per-file detection parameters.
pub struct DetectionInput<'a> {
    pub target: EsVersion,
    /// Feature names excluded from the unsupported computation.
    pub ignore: &'a FxHashSet<String>,
    /// Feature names a polyfill scan found to be runtime-supplied.
    pub polyfilled: &'a FxHashSet<&'static str>,
    pub check_polyfills: bool,
}

/// Per-file detection result.
#[derive(Debug)]
pub struct DetectionOutcome {
    /// Every catalog key, true when detected — ignored features included,
    /// so they stay visible even though they never become unsupported.
    pub found: FxHashMap<&'static str, bool>,
    /// Unsupported feature names in catalog definition order, each at most
    /// once: found, newer than target, not ignored, not polyfilled.
    pub unsupported: Vec<&'static str>,
}

/// Node kinds that open a new function scope.
fn is_function_like(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration"
            | "function_expression"
            | "function"
            | "arrow_function"
            | "method_definition"
            | "generator_function"
            | "generator_function_declaration"
            | "class_static_block"
    )
}

/// Walk an already-parsed tree once and report catalog features.
///
/// Never errors: nodes missing expected fields simply do not match.
pub fn detect_features(
    catalog: &Catalog,
    tree: &Tree,
    source: &[u8],
    input: &DetectionInput,
) -> DetectionOutcome {
    let features = catalog.features();
    let mut found = vec![false; features.len()];

    // Features not yet seen; a match removes its entry, and the walk halts
    // early once nothing is wanted. Optimization only, not correctness.
    let mut wanted: FxHashSet<u16> = (0..features.len() as u16).collect();

    let mut stack: Vec<(Node, u32)> = vec![(tree.root_node(), 0)];
    while let Some((node, depth)) = stack.pop() {
        if wanted.is_empty() {
            break;
        }

        for &idx in catalog.candidates(node.kind()) {
            if !wanted.contains(&idx) {
                continue;
            }
            if node_matches(&features[idx as usize].signature, node, source, depth) {
                found[idx as usize] = true;
                wanted.remove(&idx);
            }
        }

        let child_depth = depth + u32::from(is_function_like(node.kind()));
        for i in 0..node.named_child_count() {
            if let Some(child) = node.named_child(i) {
                stack.push((child, child_depth));
            }
        }
    }

    let mut unsupported = Vec::new();
    for (idx, feature) in features.iter().enumerate() {
        if !found[idx] || feature.min_version <= input.target {
            continue;
        }
        if input.ignore.contains(feature.name) {
            continue;
        }
        if input.check_polyfills && input.polyfilled.contains(feature.name) {
            continue;
        }
        unsupported.push(feature.name);
    }

    let found = features
        .iter()
        .enumerate()
        .map(|(idx, feature)| (feature.name, found[idx]))
        .collect();

    DetectionOutcome { found, unsupported }
}
