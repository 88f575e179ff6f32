//! Discovered resource records.

use lokal_reflect::{MemberInfo, TypeRef};
use serde::Serialize;

/// Opaque reference back to the member a resource originates from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberHandle {
    declaring_type: TypeRef,
    name: String,
}

impl MemberHandle {
    pub(crate) fn new(declaring_type: TypeRef, member: &MemberInfo) -> Self {
        Self {
            declaring_type,
            name: member.name().to_string(),
        }
    }

    /// Type declaring the member.
    pub fn declaring_type(&self) -> TypeRef {
        self.declaring_type
    }

    /// Member identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks the member up on its declaring type.
    pub fn resolve(&self) -> Option<&'static MemberInfo> {
        self.declaring_type
            .get()
            .declared_members()
            .iter()
            .find(|member| member.name() == self.name)
    }
}

/// One translatable entry produced by discovery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveredResource {
    /// Originating member; absent for class-level declarations and enum variants.
    #[serde(skip)]
    pub member: Option<MemberHandle>,
    /// Composite key, unique within one discovery pass.
    pub key: String,
    /// Default text.
    pub value: String,
    /// Member identifier; absent for class-level and explicit-override resources.
    pub property_name: Option<String>,
    /// Type owning the member.
    pub declaring_type: TypeRef,
    /// Type the member evaluates to.
    pub return_type: TypeRef,
    /// Whether `return_type` is terminal.
    pub is_simple_type: bool,
}
