//! Discovery of translatable resources declared on Rust types.
//!
//! `lokal` walks described types (resource containers and view-models),
//! derives a stable hierarchical key and a default text for every
//! translatable entry, and reports key collisions.
//!
//! # Quick Start
//!
//! ```
//! use lokal::prelude::*;
//!
//! #[derive(Default, LocalizedModel)]
//! #[localized(key_prefix = "Login")]
//! pub struct LoginForm {
//!     #[localized(required, display(name = "User name"))]
//!     pub user_name: String,
//! }
//!
//! let resources = TypeDiscovery::new().discover_model::<LoginForm>().unwrap();
//! assert_eq!(resources[0].key, "Login.user_name");
//! assert_eq!(resources[0].value, "User name");
//! assert_eq!(resources[1].key, "Login.user_name.Required");
//! ```
//!
//! # Crates
//!
//! - [`lokal_reflect`] - Static type descriptors and derive macros
//! - [`lokal_discovery`] - The discovery engine, scanner and cache
//! - [`lokal_core`] - Tracing setup and environment configuration

pub use lokal_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use lokal_internal::prelude::*;
}
