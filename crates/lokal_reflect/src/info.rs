//! Type and member descriptors.
//!
//! A [`TypeInfo`] is the static description of one type: its kind, its
//! members, the localization rules attached to it and the hooks needed to
//! read live default texts. Descriptors live for the whole process and are
//! referenced through [`TypeRef`] handles, which resolve lazily so that
//! recursive and mutually recursive types can be described.

use crate::attributes::{Marker, MemberAttributes, ModelMarker, ResourceMarker, TypeAttributes};
use crate::builder::TypeInfoBuilder;
use crate::classify;
use crate::describe::Describe;
use core::any::Any;
use core::fmt;
use serde::{Serialize, Serializer};
use std::sync::LazyLock;

/// Reads the live text of a member from an instance of its declaring type.
pub type TextAccessor = fn(&dyn Any) -> Option<String>;

/// Reads the live text of a member that needs no instance.
pub type StaticTextAccessor = fn() -> Option<String>;

/// Builds a throwaway instance of a type.
pub type Constructor = fn() -> Box<dyn Any>;

/// Builds the dotted full name of a type from its module path.
///
/// `my_app::views::Checkout` becomes `my_app.views.Checkout`.
#[doc(hidden)]
pub fn qualified_name(module_path: &str, ident: &str) -> String {
    format!("{}.{ident}", module_path.replace("::", "."))
}

// ─────────────────────────────────────────────────────────────────────────────
// TypeRef
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum Repr {
    Lazy(fn() -> &'static TypeInfo),
    Static(&'static TypeInfo),
}

/// A copyable handle to a [`TypeInfo`].
///
/// Two handles are equal when they resolve to the same descriptor.
#[derive(Clone, Copy)]
pub struct TypeRef(Repr);

impl TypeRef {
    /// Handle to the descriptor of `T`.
    pub fn of<T: Describe>() -> Self {
        Self(Repr::Lazy(T::type_info))
    }

    /// Handle to an already built descriptor.
    pub const fn from_static(info: &'static TypeInfo) -> Self {
        Self(Repr::Static(info))
    }

    /// Handle to the shared opaque descriptor, used for members whose type
    /// is never inspected.
    pub fn opaque() -> Self {
        Self(Repr::Lazy(opaque_info))
    }

    /// Resolves the descriptor.
    pub fn get(self) -> &'static TypeInfo {
        match self.0 {
            Repr::Lazy(resolve) => resolve(),
            Repr::Static(info) => info,
        }
    }

    /// Full name of the referenced type.
    pub fn full_name(self) -> &'static str {
        self.get().full_name()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.get(), other.get())
    }
}

impl Eq for TypeRef {}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.full_name()).finish()
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.full_name())
    }
}

impl From<&'static TypeInfo> for TypeRef {
    fn from(info: &'static TypeInfo) -> Self {
        Self::from_static(info)
    }
}

fn opaque_info() -> &'static TypeInfo {
    static OPAQUE: LazyLock<TypeInfo> =
        LazyLock::new(|| TypeInfo::with_kind("opaque", TypeKind::Opaque));
    &OPAQUE
}

// ─────────────────────────────────────────────────────────────────────────────
// Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Terminal value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Text.
    Text,
    /// A single character.
    Char,
    /// Boolean.
    Boolean,
    /// Signed or unsigned integer.
    Integer,
    /// Floating point number.
    Float,
    /// Point in time.
    DateTime,
    /// Time span.
    Duration,
}

/// Structural shape of a described type.
#[derive(Debug)]
pub enum TypeKind {
    /// Terminal value.
    Scalar(ScalarKind),
    /// Fieldless enumeration.
    Enum {
        /// Variant identifiers in declaration order.
        variants: Vec<String>,
    },
    /// Composite with named members.
    Struct {
        /// Declared members in declaration order.
        members: Vec<MemberInfo>,
    },
    /// Ordered or unordered collection.
    Sequence {
        /// Element type.
        element: TypeRef,
    },
    /// Associative collection.
    Map {
        /// Key type.
        key: TypeRef,
        /// Value type.
        value: TypeRef,
    },
    /// Nothing is known about the type.
    Opaque,
}

// ─────────────────────────────────────────────────────────────────────────────
// MemberInfo
// ─────────────────────────────────────────────────────────────────────────────

/// How the live text of a member is read.
#[derive(Debug, Clone, Copy)]
pub enum Accessor {
    /// Needs an instance of the declaring type.
    Instance(TextAccessor),
    /// Needs no instance.
    Static(StaticTextAccessor),
}

/// A structural member (field or property) of a type.
#[derive(Debug)]
pub struct MemberInfo {
    name: String,
    return_type: TypeRef,
    public: bool,
    accessor: Option<Accessor>,
    attributes: MemberAttributes,
}

impl MemberInfo {
    /// Creates a public member without accessor or rules.
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            public: true,
            accessor: None,
            attributes: MemberAttributes::default(),
        }
    }

    /// Member identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type the member evaluates to.
    pub fn return_type(&self) -> TypeRef {
        self.return_type
    }

    /// Whether the member is visible to scanning.
    pub fn is_public(&self) -> bool {
        self.public
    }

    /// Whether the member's text is read without an instance.
    pub fn is_static(&self) -> bool {
        matches!(self.accessor, Some(Accessor::Static(_)))
    }

    /// Live text accessor, if any.
    pub fn accessor(&self) -> Option<Accessor> {
        self.accessor
    }

    /// Localization rules of the member.
    pub fn attributes(&self) -> &MemberAttributes {
        &self.attributes
    }

    /// Marks the member as public or private.
    #[must_use]
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    /// Sets an instance accessor.
    #[must_use]
    pub fn with_accessor(mut self, accessor: TextAccessor) -> Self {
        self.accessor = Some(Accessor::Instance(accessor));
        self
    }

    /// Sets a static accessor.
    #[must_use]
    pub fn with_static_accessor(mut self, accessor: StaticTextAccessor) -> Self {
        self.accessor = Some(Accessor::Static(accessor));
        self
    }

    /// Replaces the member's rules.
    #[must_use]
    pub fn with_attributes(mut self, attributes: MemberAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Mutable access to the member's rules while building.
    pub fn attributes_mut(&mut self) -> &mut MemberAttributes {
        &mut self.attributes
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TypeInfo
// ─────────────────────────────────────────────────────────────────────────────

/// Static description of a type.
pub struct TypeInfo {
    pub(crate) name: String,
    pub(crate) full_name: String,
    pub(crate) kind: TypeKind,
    pub(crate) attributes: TypeAttributes,
    pub(crate) base: Option<TypeRef>,
    pub(crate) is_abstract: bool,
    pub(crate) constructor: Option<Constructor>,
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("full_name", &self.full_name)
            .field("kind", &self.kind)
            .field("attributes", &self.attributes)
            .field("base", &self.base)
            .field("is_abstract", &self.is_abstract)
            .finish_non_exhaustive()
    }
}

impl TypeInfo {
    /// Starts building a struct descriptor.
    ///
    /// The short name defaults to the last dot-separated segment of
    /// `full_name`.
    pub fn builder(full_name: impl Into<String>) -> TypeInfoBuilder {
        TypeInfoBuilder::new(full_name)
    }

    /// Descriptor of a terminal type.
    pub fn scalar(full_name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::with_kind(full_name, TypeKind::Scalar(kind))
    }

    /// Descriptor of a collection.
    pub fn sequence(full_name: impl Into<String>, element: TypeRef) -> Self {
        Self::with_kind(full_name, TypeKind::Sequence { element })
    }

    /// Descriptor of an associative collection.
    pub fn map(full_name: impl Into<String>, key: TypeRef, value: TypeRef) -> Self {
        Self::with_kind(full_name, TypeKind::Map { key, value })
    }

    pub(crate) fn with_kind(full_name: impl Into<String>, kind: TypeKind) -> Self {
        let full_name = full_name.into();
        Self {
            name: short_name(&full_name).to_string(),
            full_name,
            kind,
            attributes: TypeAttributes::default(),
            base: None,
            is_abstract: false,
            constructor: None,
        }
    }

    /// Short type identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dotted, fully-qualified type name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Structural shape.
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Localization rules of the type.
    pub fn attributes(&self) -> &TypeAttributes {
        &self.attributes
    }

    /// Returns whether the type carries the given marker.
    pub fn has_marker(&self, marker: Marker) -> bool {
        self.attributes.has_marker(marker)
    }

    /// Resource-container marker, if present.
    pub fn resource_marker(&self) -> Option<&ResourceMarker> {
        self.attributes.resource.as_ref()
    }

    /// Model marker, if present.
    pub fn model_marker(&self) -> Option<&ModelMarker> {
        self.attributes.model.as_ref()
    }

    /// Direct base type.
    pub fn base(&self) -> Option<TypeRef> {
        self.base
    }

    /// Whether the type only serves as a base and is never scanned on its own.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Constructor used to read live default texts.
    pub fn constructor(&self) -> Option<Constructor> {
        self.constructor
    }

    /// Whether the type is an enumeration.
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum { .. })
    }

    /// Whether the type is terminal. See [`classify::is_simple`].
    pub fn is_simple(&self) -> bool {
        classify::is_simple(self)
    }

    /// Enumeration variants; empty for other kinds.
    pub fn variants(&self) -> &[String] {
        match &self.kind {
            TypeKind::Enum { variants } => variants,
            _ => &[],
        }
    }

    /// Members declared directly on this type; empty for non-struct kinds.
    pub fn declared_members(&self) -> &[MemberInfo] {
        match &self.kind {
            TypeKind::Struct { members } => members,
            _ => &[],
        }
    }

    /// Iterates the base chain, nearest base first.
    ///
    /// Stops early if the chain loops back onto a type already visited.
    pub fn base_chain(&self) -> impl Iterator<Item = &'static TypeInfo> + '_ {
        let mut seen: Vec<*const TypeInfo> = vec![core::ptr::from_ref(self)];
        let mut next = self.base;
        core::iter::from_fn(move || {
            let current = next?.get();
            let ptr = core::ptr::from_ref(current);
            if seen.contains(&ptr) {
                next = None;
                return None;
            }
            seen.push(ptr);
            next = current.base;
            Some(current)
        })
    }

    /// Whether `base` appears in this type's base chain.
    pub fn extends(&self, base: &TypeInfo) -> bool {
        self.base_chain().any(|ancestor| core::ptr::eq(ancestor, base))
    }
}

fn short_name(full_name: &str) -> &str {
    full_name.rsplit('.').next().unwrap_or(full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_uses_dots() {
        assert_eq!(
            qualified_name("my_app::views", "Checkout"),
            "my_app.views.Checkout"
        );
    }

    #[test]
    fn short_name_is_last_segment() {
        let info = TypeInfo::scalar("std.string.String", ScalarKind::Text);
        assert_eq!(info.name(), "String");
        assert_eq!(info.full_name(), "std.string.String");
    }

    #[test]
    fn type_refs_compare_by_descriptor() {
        assert_eq!(TypeRef::of::<String>(), TypeRef::of::<String>());
        assert_ne!(TypeRef::of::<String>(), TypeRef::of::<u32>());
        assert_eq!(TypeRef::opaque(), TypeRef::opaque());
    }

    #[test]
    fn type_ref_serializes_as_full_name() {
        let info = TypeInfo::builder("app.views.Checkout").leak();
        let json = serde_json::to_value(TypeRef::from_static(info)).unwrap();
        assert_eq!(json, serde_json::json!("app.views.Checkout"));
        assert_eq!(
            serde_json::to_string(&TypeRef::of::<String>()).unwrap(),
            "\"String\""
        );
    }

    #[test]
    fn base_chain_walks_to_the_root() {
        let root = TypeInfo::builder("app.Root").leak();
        let middle = TypeInfo::builder("app.Middle")
            .extends(TypeRef::from_static(root))
            .leak();
        let leaf = TypeInfo::builder("app.Leaf")
            .extends(TypeRef::from_static(middle))
            .leak();

        let chain: Vec<_> = leaf.base_chain().map(TypeInfo::full_name).collect();
        assert_eq!(chain, ["app.Middle", "app.Root"]);
        assert!(leaf.extends(root));
        assert!(!root.extends(leaf));
    }
}
