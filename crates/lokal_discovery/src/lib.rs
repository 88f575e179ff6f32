//! Resource discovery and key derivation for lokal.
//!
//! `lokal_discovery` turns described types into the flat catalog of
//! translatable entries they contain:
//!
//! - [`key`] - Composite key construction
//! - [`value`] - Default text resolution
//! - [`engine`] - The recursive discovery walk
//! - [`scanner`] - Locating candidate types across sources
//! - [`cache`] - Concurrent record of discovered members
//!
//! # Example
//!
//! ```
//! use lokal_discovery::{TypeDiscovery, TypeBundle, TypeScanner};
//! use lokal_reflect::{LocalizedModel, Marker};
//!
//! #[derive(Default, LocalizedModel)]
//! #[localized(key_prefix = "Login")]
//! pub struct LoginForm {
//!     #[localized(required, display(name = "User name"))]
//!     pub user_name: String,
//!     #[localized(ignore)]
//!     pub remember_me: bool,
//! }
//!
//! let scanner = TypeScanner::new().with_source(TypeBundle::new("app").with::<LoginForm>());
//! let discovery = TypeDiscovery::new();
//!
//! for model in scanner.types_with_marker(Marker::Model) {
//!     let resources = discovery.discover(model, None, lokal_discovery::ScanMode::Model).unwrap();
//!     let keys: Vec<_> = resources.iter().map(|r| r.key.as_str()).collect();
//!     assert_eq!(keys, ["Login.user_name", "Login.user_name.Required"]);
//! }
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod resource;
pub mod scanner;
pub mod value;

pub use cache::DiscoveryCache;
pub use config::{DEFAULT_MAX_DEPTH, DiscoveryConfig};
pub use engine::{ScanMode, TypeDiscovery};
pub use error::{DiscoveryError, SourceError};
pub use resource::{DiscoveredResource, MemberHandle};
pub use scanner::{TypeBundle, TypePredicate, TypeScanner, TypeSource};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::cache::DiscoveryCache;
    pub use crate::config::DiscoveryConfig;
    pub use crate::engine::{ScanMode, TypeDiscovery};
    pub use crate::error::{DiscoveryError, SourceError};
    pub use crate::resource::DiscoveredResource;
    pub use crate::scanner::{TypeBundle, TypeScanner, TypeSource};
}
