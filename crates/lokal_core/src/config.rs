//! Environment-driven configuration of a catalog sweep.

use lokal_discovery::{DEFAULT_MAX_DEPTH, DiscoveryConfig};

use crate::error::ConfigError;
use crate::tracing_setup::{TracingFormat, TracingSetup};

/// Log filter directives, e.g. `lokal_discovery=debug`.
pub const LOG_ENV: &str = "LOKAL_LOG";
/// Log format: `pretty`, `compact` or `json`.
pub const LOG_FORMAT_ENV: &str = "LOKAL_LOG_FORMAT";
/// Bound on nested discovery.
pub const MAX_DEPTH_ENV: &str = "LOKAL_MAX_DEPTH";

/// Settings of a catalog sweep, read from the environment.
///
/// # Example
///
/// ```
/// use lokal_core::{CatalogConfig, TracingFormat};
///
/// let config = CatalogConfig::from_lookup(|name| match name {
///     "LOKAL_LOG_FORMAT" => Some("json".to_string()),
///     "LOKAL_MAX_DEPTH" => Some("4".to_string()),
///     _ => None,
/// })
/// .unwrap();
///
/// assert_eq!(config.log_format, TracingFormat::Json);
/// assert_eq!(config.discovery_config().max_depth(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Log filter directives.
    pub log_filter: Option<String>,
    /// Log output format.
    pub log_format: TracingFormat,
    /// Bound on nested discovery.
    pub max_depth: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            log_format: TracingFormat::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CatalogConfig {
    /// Reads [`LOG_ENV`], [`LOG_FORMAT_ENV`] and [`MAX_DEPTH_ENV`].
    ///
    /// Unset or empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable holds an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(filter) = read(LOG_ENV) {
            config.log_filter = Some(filter);
        }
        if let Some(format) = read(LOG_FORMAT_ENV) {
            config.log_format = format.parse()?;
        }
        if let Some(depth) = read(MAX_DEPTH_ENV) {
            config.max_depth = depth
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidMaxDepth {
                    value: depth.clone(),
                    source,
                })?;
        }

        Ok(config)
    }

    /// Tracing subscriber settings.
    pub fn tracing_setup(&self) -> TracingSetup {
        let setup = TracingSetup::new().with_format(self.log_format);
        match &self.log_filter {
            Some(filter) => setup.with_env_filter(filter.clone()),
            None => setup,
        }
    }

    /// Discovery engine settings.
    pub fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig::new().with_max_depth(self.max_depth)
    }
}
