//! The recursive discovery engine.
//!
//! [`TypeDiscovery`] walks a type descriptor and produces the flat list of
//! translatable resources it contains. Two scanning modes share the walk:
//!
//! - [`ScanMode::ResourceContainer`] flattens a bag of texts and always
//!   descends into complex members.
//! - [`ScanMode::Model`] follows a view-model's structure and only descends
//!   into members whose type is itself marked as a localized model.
//!
//! Keys are unique within one pass. A collision is a fatal
//! [`DiscoveryError::DuplicateKeys`].

use std::collections::HashSet;
use std::sync::Arc;

use lokal_reflect::{Describe, Marker, MemberInfo, TypeInfo, TypeKind, TypeRef, classify};
use serde::Serialize;

use crate::cache::DiscoveryCache;
use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;
use crate::key::{DESCRIPTION_SUFFIX, build_key, build_key_with, last_segment};
use crate::resource::{DiscoveredResource, MemberHandle};
use crate::value::resolve_value;

/// How a type is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScanMode {
    /// Flat resource container; every complex member is followed.
    ResourceContainer,
    /// View-model; only nested localized models are followed.
    Model,
}

impl ScanMode {
    /// Whether complex members are followed unconditionally.
    pub fn is_context_aware(self) -> bool {
        matches!(self, Self::ResourceContainer)
    }
}

/// Discovers the localizable resources of described types.
///
/// Every successful call records the member identifiers it found in the shared
/// [`DiscoveryCache`].
///
/// # Example
///
/// ```
/// use lokal_discovery::TypeDiscovery;
/// use lokal_reflect::LocalizedResource;
///
/// #[derive(Default, LocalizedResource)]
/// #[localized(key_prefix = "Common")]
/// pub struct CommonTexts {
///     pub ok: String,
/// }
///
/// let discovery = TypeDiscovery::new();
/// let resources = discovery.discover_resources::<CommonTexts>().unwrap();
/// assert_eq!(resources[0].key, "Common.ok");
/// ```
#[derive(Debug, Default, Clone)]
pub struct TypeDiscovery {
    config: DiscoveryConfig,
    cache: Arc<DiscoveryCache>,
}

/// State of one top-level discovery call.
#[derive(Default)]
struct Pass {
    /// Types on the current recursion path, outermost first.
    chain: Vec<&'static str>,
    /// Cache entries of every walk, committed only when the pass succeeds.
    records: Vec<(&'static str, Vec<String>)>,
}

impl TypeDiscovery {
    /// Creates an engine with the default configuration and a private cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    /// Shares `cache` with this engine.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<DiscoveryCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Engine configuration.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Cache written by this engine.
    pub fn cache(&self) -> &Arc<DiscoveryCache> {
        &self.cache
    }

    /// Discovers the resources of a resource container.
    pub fn discover_resources<T: Describe>(&self) -> Result<Vec<DiscoveredResource>, DiscoveryError> {
        self.discover(TypeRef::of::<T>(), None, ScanMode::ResourceContainer)
    }

    /// Discovers the resources of a localized model.
    pub fn discover_model<T: Describe>(&self) -> Result<Vec<DiscoveredResource>, DiscoveryError> {
        self.discover(TypeRef::of::<T>(), None, ScanMode::Model)
    }

    /// Discovers every type in `types`, concatenating the results.
    ///
    /// Each type is its own pass; keys are only checked for uniqueness
    /// within a pass. The first failing type aborts the sweep.
    pub fn discover_all(
        &self,
        types: impl IntoIterator<Item = TypeRef>,
        mode: ScanMode,
    ) -> Result<Vec<DiscoveredResource>, DiscoveryError> {
        let mut resources = Vec::new();
        for root in types {
            resources.extend(self.discover(root, None, mode)?);
        }
        Ok(resources)
    }

    /// Discovers the resources of `root`.
    ///
    /// `key_prefix` roots the keys unless the type declares its own prefix.
    /// In resource-container mode the type's full name is used when neither
    /// is given.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::DuplicateKeys`] when two resources of the
    /// pass share a key. A failed pass leaves the cache untouched.
    pub fn discover(
        &self,
        root: TypeRef,
        key_prefix: Option<&str>,
        mode: ScanMode,
    ) -> Result<Vec<DiscoveredResource>, DiscoveryError> {
        let info = root.get();
        let span = tracing::debug_span!("discover", type_name = info.full_name(), mode = ?mode);
        let _guard = span.enter();

        let mut pass = Pass::default();
        let resources = self.discover_type(info, key_prefix, mode, &mut pass, 0)?;
        ensure_unique(info, &resources)?;

        for (type_name, property_names) in pass.records {
            self.cache.record(type_name, property_names);
        }

        tracing::debug!(count = resources.len(), "Discovery finished");
        Ok(resources)
    }

    fn discover_type(
        &self,
        info: &'static TypeInfo,
        key_prefix: Option<&str>,
        mode: ScanMode,
        pass: &mut Pass,
        depth: usize,
    ) -> Result<Vec<DiscoveredResource>, DiscoveryError> {
        pass.chain.push(info.full_name());
        let result = self.walk(info, key_prefix, mode, pass, depth);
        pass.chain.pop();
        result
    }

    fn walk(
        &self,
        info: &'static TypeInfo,
        key_prefix: Option<&str>,
        mode: ScanMode,
        pass: &mut Pass,
        depth: usize,
    ) -> Result<Vec<DiscoveredResource>, DiscoveryError> {
        let root = TypeRef::from_static(info);
        let (prefix, explicit) = resolve_prefix(info, key_prefix, mode);
        let mut properties = Vec::new();

        if mode == ScanMode::Model {
            for declaration in &info.attributes().resource_keys {
                properties.push(emitted(DiscoveredResource {
                    member: None,
                    key: build_key_with(&prefix, &declaration.key, ""),
                    value: declaration.value.clone().unwrap_or_default(),
                    property_name: None,
                    declaring_type: root,
                    return_type: TypeRef::of::<String>(),
                    is_simple_type: true,
                }));
            }
        }

        match info.kind() {
            TypeKind::Enum { variants } => {
                for variant in variants {
                    properties.push(emitted(DiscoveredResource {
                        member: None,
                        key: build_key(&prefix, variant),
                        value: variant.clone(),
                        property_name: Some(variant.clone()),
                        declaring_type: root,
                        return_type: root,
                        is_simple_type: true,
                    }));
                }
            }
            TypeKind::Struct { .. } => {
                for (owner, member) in scanned_members(info) {
                    properties.extend(discover_member(owner, member, &prefix, explicit));
                }
            }
            _ => {}
        }

        ensure_unique(info, &properties)?;

        let mut results: Vec<DiscoveredResource> = properties
            .iter()
            .filter(|resource| {
                resource.is_simple_type
                    || resource
                        .member
                        .as_ref()
                        .and_then(MemberHandle::resolve)
                        .is_none_or(|member| member.attributes().include)
            })
            .cloned()
            .collect();

        // Nested members and validation rules hang off each member's first resource.
        let mut seen_members = HashSet::new();
        for resource in &properties {
            let Some(handle) = &resource.member else {
                continue;
            };
            if !seen_members.insert((handle.declaring_type().full_name(), handle.name())) {
                continue;
            }

            if !resource.is_simple_type {
                let nested = resource.return_type.get();
                if mode.is_context_aware() || nested.has_marker(Marker::Model) {
                    results.extend(self.descend(nested, &resource.key, mode, pass, depth)?);
                }
            }

            if let Some(member) = handle.resolve() {
                results.extend(validation_resources(resource, member));
            }
        }

        let property_names = results
            .iter()
            .filter_map(|resource| resource.property_name.clone())
            .filter(|name| !name.is_empty())
            .collect();
        pass.records.push((info.full_name(), property_names));

        Ok(results)
    }

    fn descend(
        &self,
        nested: &'static TypeInfo,
        key_prefix: &str,
        mode: ScanMode,
        pass: &mut Pass,
        depth: usize,
    ) -> Result<Vec<DiscoveredResource>, DiscoveryError> {
        if pass.chain.contains(&nested.full_name()) {
            tracing::debug!(
                type_name = nested.full_name(),
                key = key_prefix,
                "Type already on the discovery path, not descending"
            );
            return Ok(Vec::new());
        }
        if depth >= self.config.max_depth() {
            tracing::warn!(
                type_name = nested.full_name(),
                key = key_prefix,
                max_depth = self.config.max_depth(),
                "Maximum discovery depth reached, not descending"
            );
            return Ok(Vec::new());
        }
        self.discover_type(nested, Some(key_prefix), mode, pass, depth + 1)
    }
}

/// Resolves the key prefix of a pass and whether the type declared it.
fn resolve_prefix(info: &TypeInfo, key_prefix: Option<&str>, mode: ScanMode) -> (String, bool) {
    let declared = match mode {
        ScanMode::ResourceContainer => info
            .resource_marker()
            .and_then(|marker| marker.key_prefix.as_deref()),
        ScanMode::Model => info
            .model_marker()
            .and_then(|marker| marker.key_prefix.as_deref()),
    };

    match declared.filter(|prefix| !prefix.is_empty()) {
        Some(prefix) => (prefix.to_string(), true),
        None => {
            let prefix = key_prefix
                .filter(|prefix| !prefix.is_empty())
                .unwrap_or(info.full_name());
            (prefix.to_string(), false)
        }
    }
}

/// Public members to scan, paired with the type declaring them.
fn scanned_members(
    info: &'static TypeInfo,
) -> impl Iterator<Item = (&'static TypeInfo, &'static MemberInfo)> {
    let marker = info.model_marker();
    let inherited = marker.is_none_or(|marker| marker.inherited);
    let only_included = marker.is_some_and(|marker| marker.only_included);

    let owners = core::iter::once(info).chain(info.base_chain().filter(move |_| inherited));
    owners
        .flat_map(|owner| owner.declared_members().iter().map(move |member| (owner, member)))
        .filter(move |(_, member)| {
            let attributes = member.attributes();
            member.is_public() && !attributes.ignore && (!only_included || attributes.include)
        })
}

/// Resources of one member: its primary key and description, or its overrides.
fn discover_member(
    owner: &'static TypeInfo,
    member: &'static MemberInfo,
    prefix: &str,
    explicit_prefix: bool,
) -> Vec<DiscoveredResource> {
    let declaring_type = TypeRef::from_static(owner);
    let return_type = member.return_type();
    let is_simple_type = classify::is_simple(return_type.get());
    let translation = resolve_value(owner, member);
    let attributes = member.attributes();
    let mut resources = Vec::new();

    if attributes.resource_keys.is_empty() {
        let key = build_key(prefix, member.name());
        let description = attributes.description().map(|description| DiscoveredResource {
            member: Some(MemberHandle::new(declaring_type, member)),
            key: format!("{key}{DESCRIPTION_SUFFIX}"),
            value: description.to_string(),
            property_name: Some(format!("{}{DESCRIPTION_SUFFIX}", member.name())),
            declaring_type,
            return_type,
            is_simple_type,
        });
        resources.push(DiscoveredResource {
            member: Some(MemberHandle::new(declaring_type, member)),
            key,
            value: translation,
            property_name: Some(member.name().to_string()),
            declaring_type,
            return_type,
            is_simple_type,
        });
        resources.extend(description);
    } else {
        let root = if explicit_prefix { prefix } else { "" };
        for declaration in &attributes.resource_keys {
            let value = declaration
                .value
                .as_deref()
                .filter(|value| !value.is_empty())
                .map_or_else(|| translation.clone(), str::to_string);
            resources.push(DiscoveredResource {
                member: Some(MemberHandle::new(declaring_type, member)),
                key: build_key_with(root, &declaration.key, ""),
                value,
                property_name: None,
                declaring_type,
                return_type,
                is_simple_type: true,
            });
        }
    }

    resources.into_iter().map(emitted).collect()
}

/// One resource per validation rule of `member`, below its first resource.
fn validation_resources(resource: &DiscoveredResource, member: &MemberInfo) -> Vec<DiscoveredResource> {
    let bare_name = last_segment(&resource.key);
    let is_simple_type = classify::is_simple(resource.return_type.get());

    member
        .attributes()
        .validations
        .iter()
        .map(|rule| {
            let value = rule
                .message()
                .filter(|message| !message.is_empty())
                .unwrap_or(bare_name);
            emitted(DiscoveredResource {
                member: resource.member.clone(),
                key: build_key(&resource.key, rule.identifier()),
                value: value.to_string(),
                property_name: Some(bare_name.to_string()),
                declaring_type: resource.declaring_type,
                return_type: resource.return_type,
                is_simple_type,
            })
        })
        .collect()
}

fn emitted(resource: DiscoveredResource) -> DiscoveredResource {
    tracing::trace!(key = %resource.key, value = %resource.value, "Discovered resource");
    resource
}

/// Fails with every key used more than once, in first-seen order.
fn ensure_unique(info: &TypeInfo, resources: &[DiscoveredResource]) -> Result<(), DiscoveryError> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for resource in resources {
        if !seen.insert(resource.key.as_str()) && !duplicates.contains(&resource.key) {
            duplicates.push(resource.key.clone());
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(DiscoveryError::DuplicateKeys {
            type_name: info.full_name().to_string(),
            keys: duplicates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lokal_reflect::{
        Display, MemberAttributes, ModelMarker, ResourceKey, ResourceMarker, ValidationRule,
    };

    fn text(name: &str) -> MemberInfo {
        MemberInfo::new(name, TypeRef::of::<String>())
    }

    fn keys(resources: &[DiscoveredResource]) -> Vec<&str> {
        resources.iter().map(|resource| resource.key.as_str()).collect()
    }

    #[test]
    fn resource_prefix_precedence() {
        let marked = TypeInfo::builder("app.Texts")
            .resource(ResourceMarker::new().with_key_prefix("Declared"))
            .build();
        let plain = TypeInfo::builder("app.Plain").build();

        assert_eq!(
            resolve_prefix(&marked, Some("Caller"), ScanMode::ResourceContainer),
            ("Declared".to_string(), true)
        );
        assert_eq!(
            resolve_prefix(&plain, Some("Caller"), ScanMode::ResourceContainer),
            ("Caller".to_string(), false)
        );
        assert_eq!(
            resolve_prefix(&plain, None, ScanMode::ResourceContainer),
            ("app.Plain".to_string(), false)
        );
    }

    #[test]
    fn model_prefix_ignores_resource_marker() {
        let info = TypeInfo::builder("app.View")
            .resource(ResourceMarker::new().with_key_prefix("Resource"))
            .model(ModelMarker::new().with_key_prefix("Model"))
            .build();

        assert_eq!(
            resolve_prefix(&info, None, ScanMode::Model),
            ("Model".to_string(), true)
        );
    }

    #[test]
    fn member_with_description() {
        let owner = TypeInfo::builder("app.Form")
            .with_member(text("Email").with_attributes(MemberAttributes {
                display: Some(Display {
                    name: Some("E-mail".to_string()),
                    description: Some("Where we reach you".to_string()),
                }),
                ..Default::default()
            }))
            .leak();
        let member = &owner.declared_members()[0];

        let resources = discover_member(owner, member, "Form", false);
        assert_eq!(keys(&resources), ["Form.Email", "Form.Email-Description"]);
        assert_eq!(resources[0].value, "E-mail");
        assert_eq!(resources[1].value, "Where we reach you");
    }

    #[test]
    fn overrides_replace_primary_resource() {
        let owner = TypeInfo::builder("app.Form")
            .with_member(MemberInfo::new("Count", TypeRef::of::<u32>()).with_attributes(
                MemberAttributes {
                    resource_keys: vec![
                        ResourceKey::new("/count/label").with_value("Count"),
                        ResourceKey::new("/count/hint"),
                    ],
                    ..Default::default()
                },
            ))
            .leak();
        let member = &owner.declared_members()[0];

        let absolute = discover_member(owner, member, "Form", false);
        assert_eq!(keys(&absolute), ["/count/label", "/count/hint"]);
        assert_eq!(absolute[1].value, "Count");
        assert!(absolute.iter().all(|resource| resource.is_simple_type));
        assert!(absolute.iter().all(|resource| resource.property_name.is_none()));

        let rooted = discover_member(owner, member, "Form", true);
        assert_eq!(keys(&rooted), ["Form/count/label", "Form/count/hint"]);
    }

    #[test]
    fn validation_keys_follow_member_key() {
        let owner = TypeInfo::builder("app.Form")
            .with_member(text("UserName").with_attributes(MemberAttributes {
                validations: vec![
                    ValidationRule::required(),
                    ValidationRule::string_length(20).with_message("Too long"),
                ],
                ..Default::default()
            }))
            .leak();
        let member = &owner.declared_members()[0];
        let primary = discover_member(owner, member, "Form", false).remove(0);

        let rules = validation_resources(&primary, member);
        assert_eq!(keys(&rules), ["Form.UserName.Required", "Form.UserName.StringLength"]);
        assert_eq!(rules[0].value, "UserName");
        assert_eq!(rules[1].value, "Too long");
        assert_eq!(rules[0].property_name.as_deref(), Some("UserName"));
    }

    #[test]
    fn duplicates_listed_once_in_order() {
        let info = TypeInfo::builder("app.Form").build();
        let resource = |key: &str| DiscoveredResource {
            member: None,
            key: key.to_string(),
            value: String::new(),
            property_name: None,
            declaring_type: TypeRef::of::<String>(),
            return_type: TypeRef::of::<String>(),
            is_simple_type: true,
        };
        let resources = [
            resource("b"),
            resource("a"),
            resource("b"),
            resource("a"),
            resource("b"),
            resource("c"),
        ];

        let error = ensure_unique(&info, &resources).unwrap_err();
        assert_eq!(error.duplicate_keys(), ["b", "a"]);
    }
}
