//! Concurrent record of the members found per type.

use dashmap::DashMap;

/// Maps a type's full name to the member identifiers discovered for it.
///
/// Entries are overwritten on re-scan, the last writer wins. Reads and
/// writes from different threads only contend on the same shard.
#[derive(Debug, Default)]
pub struct DiscoveryCache {
    entries: DashMap<String, Vec<String>>,
}

impl DiscoveryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the member identifiers of `type_name`, replacing any previous entry.
    pub fn record(&self, type_name: impl Into<String>, members: Vec<String>) {
        self.entries.insert(type_name.into(), members);
    }

    /// Member identifiers recorded for `type_name`; empty if never scanned.
    pub fn lookup(&self, type_name: &str) -> Vec<String> {
        self.entries
            .get(type_name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Whether `type_name` has been scanned.
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Number of scanned types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no type has been scanned yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
