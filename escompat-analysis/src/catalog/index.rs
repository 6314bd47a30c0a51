//! Node-kind index — catalog-derived dispatch table.
//!
//! Maps every concrete node kind named by any signature to the list of
//! candidate feature indices, so the engine consults only the features
//! that could possibly match the node at hand.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::FeatureDefinition;

type CandidateList = SmallVec<[u16; 4]>;

#[derive(Debug, Default)]
pub struct NodeKindIndex {
    by_kind: FxHashMap<&'static str, CandidateList>,
}

impl NodeKindIndex {
    pub fn build(features: &[FeatureDefinition]) -> Self {
        let mut by_kind: FxHashMap<&'static str, CandidateList> = FxHashMap::default();
        for (idx, feature) in features.iter().enumerate() {
            for &kind in feature.signature.node_kinds {
                by_kind.entry(kind).or_default().push(idx as u16);
            }
        }
        Self { by_kind }
    }

    pub fn candidates(&self, node_kind: &str) -> &[u16] {
        self.by_kind
            .get(node_kind)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }
}
