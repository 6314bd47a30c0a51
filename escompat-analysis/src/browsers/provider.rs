//! Browser-data collaborator interface.
//!
//! Resolving a query string (browserslist literal, config path, or named
//! environment) to concrete browser/version pairs is external; the engine
//! only consumes the result. Failures raised here are caught at the
//! resolver boundary and degrade to the minimum edition.

use escompat_core::errors::ResolverError;

/// One browser at one version, as reported by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserVersion {
    /// Browser id (browserslist naming: "chrome", "ios_saf", ...).
    pub id: String,
    /// Raw version string ("120", "11.0.3", "4.4-4.4.4").
    pub version: String,
}

impl BrowserVersion {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

/// Trait the external browser-data collaborator implements.
pub trait BrowserQuerySource: Send + Sync {
    fn resolve(&self, query: &str) -> Result<Vec<BrowserVersion>, ResolverError>;
}
