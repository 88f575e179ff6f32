//! # lokal Internal Library
//!
//! Re-exports the core lokal crates for convenience.

/// Static type descriptors and derive macros.
pub use lokal_reflect;

/// Resource discovery and key derivation.
pub use lokal_discovery;

/// Tracing setup and environment configuration.
pub use lokal_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use lokal_core::{CatalogConfig, TracingFormat, TracingSetup};
    pub use lokal_discovery::prelude::*;
    pub use lokal_reflect::prelude::*;
}
