//! Core infrastructure for lokal.
//!
//! This crate provides what a lokal binary needs around the discovery
//! engine itself:
//!
//! - [`TracingSetup`] - Logging and observability via the `tracing` crate
//! - [`CatalogConfig`] - Environment-driven settings of a catalog sweep
//!
//! # Example
//!
//! ```
//! use lokal_core::CatalogConfig;
//! use lokal_discovery::TypeDiscovery;
//!
//! let config = CatalogConfig::from_env().unwrap_or_default();
//! config.tracing_setup().init();
//!
//! let discovery = TypeDiscovery::new().with_config(config.discovery_config());
//! assert!(discovery.cache().is_empty());
//! ```

mod config;
mod error;
mod tracing_setup;

pub use config::{CatalogConfig, LOG_ENV, LOG_FORMAT_ENV, MAX_DEPTH_ENV};
pub use error::ConfigError;
pub use tracing_setup::{TracingFormat, TracingSetup};
