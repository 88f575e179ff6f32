//! Error types for discovery and scanning.

use thiserror::Error;

/// Fatal discovery error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscoveryError {
    /// Two or more resources of one pass resolved to the same key.
    #[error("duplicate resource keys in '{type_name}': [{}]", keys.join(", "))]
    DuplicateKeys {
        /// Type the discovery pass was rooted at.
        type_name: String,
        /// Each colliding key, once, in first-seen order.
        keys: Vec<String>,
    },
}

impl DiscoveryError {
    /// Colliding keys of a [`DuplicateKeys`](Self::DuplicateKeys) error.
    pub fn duplicate_keys(&self) -> &[String] {
        match self {
            Self::DuplicateKeys { keys, .. } => keys,
        }
    }
}

/// A type source could not enumerate its types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load types from '{source_name}': {reason}")]
pub struct SourceError {
    /// Name of the failing source.
    pub source_name: String,
    /// What went wrong.
    pub reason: String,
}

impl SourceError {
    /// Creates a [`SourceError`].
    pub fn new(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
