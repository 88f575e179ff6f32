//! Builder for hand-written [`TypeInfo`] descriptors.
//!
//! The derive macros generate builder calls; the builder is also the way to
//! describe what the macros cannot express, such as static accessors or
//! abstract base types.
//!
//! ```
//! use lokal_reflect::{MemberInfo, ResourceMarker, TypeInfo, TypeRef};
//!
//! let info = TypeInfo::builder("app.resources.Common")
//!     .resource(ResourceMarker::new().with_key_prefix("Common"))
//!     .with_member(
//!         MemberInfo::new("Ok", TypeRef::of::<String>())
//!             .with_static_accessor(|| Some("OK".to_string())),
//!     )
//!     .build();
//!
//! assert_eq!(info.declared_members().len(), 1);
//! ```

use crate::attributes::{ModelMarker, ResourceKey, ResourceMarker, TypeAttributes};
use crate::info::{Constructor, MemberInfo, TypeInfo, TypeKind, TypeRef};

/// Incrementally assembles a [`TypeInfo`].
#[derive(Debug)]
pub struct TypeInfoBuilder {
    info: TypeInfo,
}

impl TypeInfoBuilder {
    pub(crate) fn new(full_name: impl Into<String>) -> Self {
        Self {
            info: TypeInfo::with_kind(full_name, TypeKind::Struct {
                members: Vec::new(),
            }),
        }
    }

    /// Overrides the short name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    /// Adds a member. Turns an enumeration descriptor back into a struct.
    #[must_use]
    pub fn with_member(mut self, member: MemberInfo) -> Self {
        match &mut self.info.kind {
            TypeKind::Struct { members } => members.push(member),
            kind => {
                *kind = TypeKind::Struct {
                    members: vec![member],
                }
            }
        }
        self
    }

    /// Makes the descriptor an enumeration with the given variants.
    #[must_use]
    pub fn with_variants<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.info.kind = TypeKind::Enum {
            variants: variants.into_iter().map(Into::into).collect(),
        };
        self
    }

    /// Attaches the resource-container marker.
    #[must_use]
    pub fn resource(mut self, marker: ResourceMarker) -> Self {
        self.info.attributes.resource = Some(marker);
        self
    }

    /// Attaches the model marker.
    #[must_use]
    pub fn model(mut self, marker: ModelMarker) -> Self {
        self.info.attributes.model = Some(marker);
        self
    }

    /// Adds a class-level key/value declaration.
    #[must_use]
    pub fn with_resource_key(mut self, resource_key: ResourceKey) -> Self {
        self.info.attributes.resource_keys.push(resource_key);
        self
    }

    /// Replaces all type-level rules.
    #[must_use]
    pub fn with_attributes(mut self, attributes: TypeAttributes) -> Self {
        self.info.attributes = attributes;
        self
    }

    /// Sets the base type whose members are inherited.
    #[must_use]
    pub fn extends(mut self, base: TypeRef) -> Self {
        self.info.base = Some(base);
        self
    }

    /// Marks the type as abstract.
    #[must_use]
    pub fn abstract_type(mut self) -> Self {
        self.info.is_abstract = true;
        self
    }

    /// Sets the constructor used by instance accessors.
    #[must_use]
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.info.constructor = Some(constructor);
        self
    }

    /// Finishes the descriptor.
    pub fn build(self) -> TypeInfo {
        self.info
    }

    /// Finishes the descriptor and leaks it for the rest of the process.
    ///
    /// Intended for descriptors built at runtime, e.g. in tests; derived
    /// descriptors live in statics instead.
    pub fn leak(self) -> &'static TypeInfo {
        Box::leak(Box::new(self.info))
    }
}
