//! Static type descriptors for lokal.
//!
//! Rust has no runtime reflection, so every type that takes part in
//! resource discovery carries an explicit, statically built description:
//! its members, its enumeration variants and the localization rules
//! attached to them. Descriptors are created once, on first use, and live
//! for the rest of the process.
//!
//! # Quick Start
//!
//! ```
//! use lokal_reflect::{Describe, LocalizedResource, Marker};
//!
//! #[derive(LocalizedResource)]
//! #[localized(key_prefix = "Common")]
//! pub struct CommonTexts {
//!     pub ok: String,
//!     pub cancel: String,
//! }
//!
//! impl Default for CommonTexts {
//!     fn default() -> Self {
//!         Self {
//!             ok: "OK".into(),
//!             cancel: "Cancel".into(),
//!         }
//!     }
//! }
//!
//! let info = CommonTexts::type_info();
//! assert!(info.has_marker(Marker::Resource));
//! ```
//!
//! # Architecture
//!
//! - [`TypeInfo`] / [`MemberInfo`] — the descriptors
//! - [`TypeRef`] — lazily resolved, copyable descriptor handle
//! - [`Describe`] — trait giving a type its descriptor
//! - [`TypeAttributes`] / [`MemberAttributes`] — declarative rules
//! - [`classify`] — simple-type classification
//! - [`TypeInfoBuilder`] — hand-written descriptors
//!
//! # Derive Attributes
//!
//! Type level, inside `#[localized(...)]`:
//!
//! - `key_prefix = "..."` — explicit key prefix (markers only)
//! - `only_included`, `inherited = false` — model scanning flags
//! - `resource_key(key = "...", value = "...")` — class-level resource
//! - `no_construct` — do not require [`Default`]
//!
//! Field level, inside `#[localized(...)]`:
//!
//! - `ignore`, `include`, `base`
//! - `rename = "..."` — member identifier used in keys
//! - `display(name = "...", description = "...")`, `display_name = "..."`
//! - `resource_key(key = "...", value = "...")`, repeatable
//! - `required`, `string_length(max = ..)`, `range(min = .., max = ..)`,
//!   `regular_expression(pattern = "...")`, `email_address`,
//!   `min_length(length = ..)`, `max_length(length = ..)`,
//!   `validation(name = "...")`; each accepts `message = "..."`

// Self-reference so derive output can use `lokal_reflect::` paths within this crate.
extern crate self as lokal_reflect;

pub mod attributes;
pub mod builder;
pub mod classify;
pub mod describe;
pub mod info;

pub use attributes::{
    Display, Marker, MemberAttributes, ModelMarker, ResourceKey, ResourceMarker, RuleKind,
    TypeAttributes, ValidationRule,
};
pub use builder::TypeInfoBuilder;
pub use describe::{Describe, generic_type_info};
pub use info::{
    Accessor, Constructor, MemberInfo, ScalarKind, StaticTextAccessor, TextAccessor, TypeInfo,
    TypeKind, TypeRef, qualified_name,
};

// Re-export derive macros.
pub use reflect_macros::{Describe, LocalizedModel, LocalizedResource};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::attributes::{Marker, ModelMarker, ResourceKey, ResourceMarker, ValidationRule};
    pub use crate::describe::Describe;
    pub use crate::info::{MemberInfo, TypeInfo, TypeRef};
    pub use reflect_macros::{Describe, LocalizedModel, LocalizedResource};
}
