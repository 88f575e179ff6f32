//! Engine configuration.

/// Default bound on nested discovery.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Settings of a [`TypeDiscovery`](crate::TypeDiscovery) engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    max_depth: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DiscoveryConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds how deep nested complex members are followed.
    ///
    /// A depth of zero discovers the root type only.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Current depth bound.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
