//! Integration tests for the descriptor derives.
//!
//! Tests covering what `#[derive(Describe)]`, `#[derive(LocalizedResource)]`
//! and `#[derive(LocalizedModel)]` record: names, members, markers, rules
//! and the hooks used to read live default texts.

#![allow(dead_code, reason = "some fixtures are only described, never constructed")]

use lokal_reflect::{
    Accessor, Describe, Display, LocalizedModel, LocalizedResource, Marker, ModelMarker,
    ResourceKey, RuleKind, TypeKind, TypeRef, qualified_name,
};

// ═══════════════════════════════════════════════════════════════════════════════
// FIXTURES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(LocalizedResource)]
#[localized(key_prefix = "Greeting")]
pub struct GreetingTexts {
    pub hello: String,
    #[localized(rename = "Farewell")]
    pub goodbye: String,
    pub nickname: Option<String>,
    internal: String,
}

impl Default for GreetingTexts {
    fn default() -> Self {
        Self {
            hello: "Hello".to_string(),
            goodbye: "Goodbye".to_string(),
            nickname: None,
            internal: "internal".to_string(),
        }
    }
}

#[derive(Default, Describe)]
pub struct PersonFields {
    pub first_name: String,
}

#[derive(Default, LocalizedModel)]
#[localized(
    key_prefix = "Person",
    only_included,
    inherited = false,
    resource_key(key = ".Title", value = "Person"),
    resource_key(key = ".Hint")
)]
pub struct PersonForm {
    #[localized(base)]
    pub fields: PersonFields,
    #[localized(
        include,
        display(name = "Age", description = "Age in years"),
        range(min = 0, max = 130, message = "Out of range")
    )]
    pub age: u32,
    #[localized(
        display_name = "E-mail",
        required,
        email_address(message = "Invalid e-mail"),
        string_length(max = 64, min = 3)
    )]
    pub email: String,
    #[localized(
        resource_key(key = "/person/code", value = "Code"),
        regular_expression(pattern = "^[A-Z]+$"),
        min_length(length = 2),
        max_length(length = 8),
        validation(name = "Checksum", message = "Bad checksum")
    )]
    pub code: String,
    #[localized(ignore)]
    pub session: Vec<u8>,
}

#[derive(LocalizedResource)]
#[localized(no_construct)]
pub struct ExternalTexts {
    pub caption: String,
}

#[derive(Describe)]
pub enum Priority {
    Low,
    High,
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAMES AND MARKERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Verifies that the descriptor is named after the type and its module.
#[test]
fn descriptor_names_follow_module_path() {
    let info = GreetingTexts::type_info();

    assert_eq!(info.name(), "GreetingTexts");
    assert_eq!(info.full_name(), qualified_name(module_path!(), "GreetingTexts"));
    assert!(!info.full_name().contains("::"));
}

/// Verifies that each derive records its marker and settings.
#[test]
fn derives_record_their_markers() {
    let resource = GreetingTexts::type_info();
    assert!(resource.has_marker(Marker::Resource));
    assert!(!resource.has_marker(Marker::Model));
    assert_eq!(
        resource
            .resource_marker()
            .and_then(|marker| marker.key_prefix.as_deref()),
        Some("Greeting")
    );

    let model = PersonForm::type_info();
    assert_eq!(
        model.model_marker(),
        Some(&ModelMarker {
            key_prefix: Some("Person".to_string()),
            only_included: true,
            inherited: false,
        })
    );

    let plain = PersonFields::type_info();
    assert!(!plain.has_marker(Marker::Resource));
    assert!(!plain.has_marker(Marker::Model));
}

/// Verifies that class-level resource keys are kept in declaration order.
#[test]
fn class_level_keys_are_recorded() {
    assert_eq!(
        PersonForm::type_info().attributes().resource_keys,
        [
            ResourceKey::new(".Title").with_value("Person"),
            ResourceKey::new(".Hint"),
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// MEMBERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Verifies that named fields become members in declaration order.
#[test]
fn fields_become_members_in_order() {
    let info = GreetingTexts::type_info();
    let names: Vec<&str> = info.declared_members().iter().map(|m| m.name()).collect();

    assert_eq!(names, ["hello", "Farewell", "nickname", "internal"]);
    assert!(info.declared_members()[0].is_public());
    assert!(!info.declared_members()[3].is_public());
}

/// Verifies that optional members are described by their inner type.
#[test]
fn option_is_transparent() {
    let nickname = &GreetingTexts::type_info().declared_members()[2];
    assert_eq!(nickname.return_type(), TypeRef::of::<String>());
}

/// Verifies that a `base` field becomes the base type instead of a member.
#[test]
fn base_field_extends() {
    let info = PersonForm::type_info();

    assert_eq!(info.base(), Some(TypeRef::of::<PersonFields>()));
    assert!(info.extends(PersonFields::type_info()));
    assert!(info.declared_members().iter().all(|m| m.name() != "fields"));
}

/// Verifies that ignored members keep their flag and an opaque type.
#[test]
fn ignored_member_is_opaque() {
    let session = PersonForm::type_info()
        .declared_members()
        .iter()
        .find(|m| m.name() == "session")
        .expect("session member");

    assert!(session.attributes().ignore);
    assert!(matches!(session.return_type().get().kind(), TypeKind::Opaque));
    assert!(session.accessor().is_none());
}

/// Verifies that enum variants are listed in declaration order.
#[test]
fn enum_variants_are_listed() {
    let info = Priority::type_info();
    assert!(info.is_enum());
    assert_eq!(info.variants(), ["Low", "High"]);
}

// ═══════════════════════════════════════════════════════════════════════════════
// RULES
// ═══════════════════════════════════════════════════════════════════════════════

/// Verifies that display metadata and validation rules are carried over.
#[test]
fn member_rules_are_recorded() {
    let members = PersonForm::type_info().declared_members();

    let age = members[0].attributes();
    assert!(age.include);
    assert_eq!(
        age.display,
        Some(Display {
            name: Some("Age".to_string()),
            description: Some("Age in years".to_string()),
        })
    );
    assert_eq!(age.validations.len(), 1);
    assert_eq!(
        age.validations[0].kind(),
        &RuleKind::Range { min: 0.0, max: 130.0 }
    );
    assert_eq!(age.validations[0].message(), Some("Out of range"));

    let email = members[1].attributes();
    assert_eq!(email.display_name.as_deref(), Some("E-mail"));
    let identifiers: Vec<&str> = email.validations.iter().map(|rule| rule.identifier()).collect();
    assert_eq!(identifiers, ["Required", "StringLength", "EmailAddress"]);
    assert_eq!(
        email.validations[1].kind(),
        &RuleKind::StringLength { max: 64, min: 3 }
    );
    assert_eq!(email.validations[0].message(), None);
    assert_eq!(email.validations[2].message(), Some("Invalid e-mail"));
}

/// Verifies that overrides and custom rules are recorded on the member.
#[test]
fn overrides_and_custom_rules_are_recorded() {
    let code = PersonForm::type_info().declared_members()[2].attributes();

    assert_eq!(
        code.resource_keys,
        [ResourceKey::new("/person/code").with_value("Code")]
    );
    let identifiers: Vec<&str> = code.validations.iter().map(|rule| rule.identifier()).collect();
    assert_eq!(
        identifiers,
        ["RegularExpression", "MinLength", "MaxLength", "Checksum"]
    );
    assert_eq!(code.validations[3].message(), Some("Bad checksum"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// LIVE VALUES
// ═══════════════════════════════════════════════════════════════════════════════

/// Verifies that member accessors read text from a constructed instance.
#[test]
fn accessors_read_default_instance() {
    let info = GreetingTexts::type_info();
    let construct = info.constructor().expect("derived types construct via Default");
    let instance = construct();

    let read = |index: usize| match info.declared_members()[index].accessor() {
        Some(Accessor::Instance(accessor)) => accessor(&*instance),
        other => panic!("unexpected accessor {other:?}"),
    };

    assert_eq!(read(0).as_deref(), Some("Hello"));
    assert_eq!(read(1).as_deref(), Some("Goodbye"));
    assert_eq!(read(2), None);
    assert_eq!(read(3).as_deref(), Some("internal"));
}

/// Verifies that non-text members read no live text.
#[test]
fn non_text_accessor_reads_nothing() {
    let info = PersonForm::type_info();
    let instance = info.constructor().expect("constructor")();

    match info.declared_members()[0].accessor() {
        Some(Accessor::Instance(accessor)) => assert_eq!(accessor(&*instance), None),
        other => panic!("unexpected accessor {other:?}"),
    }
}

/// Verifies that `no_construct` leaves the descriptor without a constructor.
#[test]
fn no_construct_has_no_constructor() {
    assert!(ExternalTexts::type_info().constructor().is_none());
    assert!(GreetingTexts::type_info().constructor().is_some());
}
