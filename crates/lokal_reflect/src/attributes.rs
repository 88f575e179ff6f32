//! Declarative localization rules attached to types and members.
//!
//! These are the Rust counterparts of annotation metadata: they are built
//! once together with a [`TypeInfo`](crate::TypeInfo) and never mutated
//! afterwards. The discovery engine only reads them.

use serde::Serialize;

/// Container markers a type may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Marker {
    /// The type is a resource container: its members are the texts to
    /// localize.
    Resource,
    /// The type is a localized model: its structure drives the keys of
    /// labels and validation messages.
    Model,
}

/// Settings of the resource-container marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceMarker {
    /// Explicit key prefix replacing the type's full name.
    pub key_prefix: Option<String>,
}

impl ResourceMarker {
    /// Creates a marker without a key prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit key prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

/// Settings of the model marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMarker {
    /// Explicit key prefix for the model's members.
    pub key_prefix: Option<String>,
    /// Only members flagged `include` are scanned.
    pub only_included: bool,
    /// Members inherited through the base chain are scanned.
    pub inherited: bool,
}

impl Default for ModelMarker {
    fn default() -> Self {
        Self {
            key_prefix: None,
            only_included: false,
            inherited: true,
        }
    }
}

impl ModelMarker {
    /// Creates a marker with default settings (inherited members scanned).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit key prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Sets whether only members flagged `include` are scanned.
    #[must_use]
    pub fn with_only_included(mut self, only_included: bool) -> Self {
        self.only_included = only_included;
        self
    }

    /// Sets whether inherited members are scanned.
    #[must_use]
    pub fn with_inherited(mut self, inherited: bool) -> Self {
        self.inherited = inherited;
        self
    }
}

/// An explicit key/value declaration on a type or a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceKey {
    /// The key, used verbatim (optionally below the type's explicit prefix).
    pub key: String,
    /// Default text; when absent the member's resolved value is used.
    pub value: Option<String>,
}

impl ResourceKey {
    /// Creates a declaration without a value.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Sets the default text.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Display metadata of a member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    /// Human-readable label.
    pub name: Option<String>,
    /// Long description, emitted as a separate `-Description` resource.
    pub description: Option<String>,
}

/// The kind of a validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    /// The value must be present.
    Required,
    /// Text length bounds.
    StringLength {
        /// Maximum length.
        max: usize,
        /// Minimum length.
        min: usize,
    },
    /// Numeric range.
    Range {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// The text must match a pattern.
    RegularExpression {
        /// The pattern.
        pattern: String,
    },
    /// The text must look like an e-mail address.
    EmailAddress,
    /// Minimum collection or text length.
    MinLength(usize),
    /// Maximum collection or text length.
    MaxLength(usize),
    /// A named application-specific rule.
    Custom(String),
}

/// A validation rule contributing its own failure-message resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    kind: RuleKind,
    message: Option<String>,
}

impl ValidationRule {
    /// Creates a rule of the given kind without a custom message.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// `Required` rule.
    pub fn required() -> Self {
        Self::new(RuleKind::Required)
    }

    /// `StringLength` rule with a maximum and no minimum.
    pub fn string_length(max: usize) -> Self {
        Self::new(RuleKind::StringLength { max, min: 0 })
    }

    /// `Range` rule.
    pub fn range(min: f64, max: f64) -> Self {
        Self::new(RuleKind::Range { min, max })
    }

    /// Named custom rule.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(RuleKind::Custom(name.into()))
    }

    /// Sets the custom failure message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the rule kind.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Returns the custom failure message, if one was declared.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Identifier used as the last key segment of the rule's resource.
    pub fn identifier(&self) -> &str {
        match &self.kind {
            RuleKind::Required => "Required",
            RuleKind::StringLength { .. } => "StringLength",
            RuleKind::Range { .. } => "Range",
            RuleKind::RegularExpression { .. } => "RegularExpression",
            RuleKind::EmailAddress => "EmailAddress",
            RuleKind::MinLength(_) => "MinLength",
            RuleKind::MaxLength(_) => "MaxLength",
            RuleKind::Custom(name) => name,
        }
    }
}

/// Rules attached to a type.
#[derive(Debug, Clone, Default)]
pub struct TypeAttributes {
    /// Resource-container marker.
    pub resource: Option<ResourceMarker>,
    /// Model marker.
    pub model: Option<ModelMarker>,
    /// Class-level key/value declarations (read in model scanning only).
    pub resource_keys: Vec<ResourceKey>,
}

impl TypeAttributes {
    /// Returns whether the given marker is present.
    pub fn has_marker(&self, marker: Marker) -> bool {
        match marker {
            Marker::Resource => self.resource.is_some(),
            Marker::Model => self.model.is_some(),
        }
    }
}

/// Rules attached to a member.
#[derive(Debug, Clone, Default)]
pub struct MemberAttributes {
    /// The member is never scanned.
    pub ignore: bool,
    /// The member is scanned even when excluded otherwise.
    pub include: bool,
    /// Explicit key/value overrides.
    pub resource_keys: Vec<ResourceKey>,
    /// Display metadata.
    pub display: Option<Display>,
    /// Display name metadata.
    pub display_name: Option<String>,
    /// Validation rules.
    pub validations: Vec<ValidationRule>,
}

impl MemberAttributes {
    /// Non-empty display label, if any.
    pub fn display_label(&self) -> Option<&str> {
        self.display
            .as_ref()
            .and_then(|display| display.name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Non-empty long description, if any.
    pub fn description(&self) -> Option<&str> {
        self.display
            .as_ref()
            .and_then(|display| display.description.as_deref())
            .filter(|description| !description.is_empty())
    }
}
