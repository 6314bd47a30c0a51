//! Feature catalog — the static registry of versioned AST signatures.
//!
//! Built once per process behind a `Lazy`, read-only afterwards, safe to
//! share across unboundedly many concurrent file analyses.

mod features;
mod index;
mod signature;

pub use features::feature_definitions;
pub use index::NodeKindIndex;
pub use signature::{Marker, Signature};

use once_cell::sync::Lazy;

use escompat_core::types::versions::EsVersion;

/// A named, versioned feature and the AST shape that constitutes it.
#[derive(Debug, Clone)]
pub struct FeatureDefinition {
    /// Unique key, also used by the ignore list and the polyfill table.
    pub name: &'static str,
    /// Lowest edition that supports the feature.
    pub min_version: EsVersion,
    pub signature: Signature,
}

/// The complete catalog plus its derived node-kind index.
pub struct Catalog {
    features: Vec<FeatureDefinition>,
    index: NodeKindIndex,
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::from_definitions(feature_definitions()));

impl Catalog {
    /// The process-wide catalog instance.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn from_definitions(features: Vec<FeatureDefinition>) -> Self {
        let index = NodeKindIndex::build(&features);
        Self { features, index }
    }

    pub fn features(&self) -> &[FeatureDefinition] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Candidate feature indices for one node kind. Turns the per-node
    /// cost from O(catalog) into O(candidates for that kind).
    pub fn candidates(&self, node_kind: &str) -> &[u16] {
        self.index.candidates(node_kind)
    }
}
