//! Integration tests for the type scanner feeding the discovery engine.


use fixtures::*;
use lokal_discovery::{
    DiscoveredResource, ScanMode, SourceError, TypeBundle, TypeDiscovery, TypeScanner, TypeSource,
};
use lokal_reflect::{Describe, Marker, TypeInfo, TypeRef};

struct UnloadableSource;

impl TypeSource for UnloadableSource {
    fn name(&self) -> &str {
        "unloadable"
    }

    fn types(&self) -> Result<Vec<TypeRef>, SourceError> {
        Err(SourceError::new(self.name(), "dependency missing"))
    }
}

fn app_scanner() -> TypeScanner {
    TypeScanner::new()
        .with_source(
            TypeBundle::new("app")
                .with::<CommonTexts>()
                .with::<ShellTexts>()
                .with::<CheckoutForm>()
                .with::<AddressModel>(),
        )
        .with_source(UnloadableSource)
        .with_source(
            TypeBundle::new("account")
                .with::<SignupForm>()
                .with::<ProfileForm>()
                .with::<CompactForm>()
                .with::<BaseForm>(),
        )
}

/// Verifies that a failing source in the middle does not hide later sources.
#[test]
fn failing_source_does_not_abort_scan() {
    let models = app_scanner().types_with_marker(Marker::Model);
    let names: Vec<_> = models.iter().map(|ty| ty.get().name()).collect();

    assert_eq!(
        names,
        ["CheckoutForm", "AddressModel", "SignupForm", "ProfileForm", "CompactForm"]
    );
}

/// Verifies that a single pass yields one set per predicate.
#[test]
fn resources_and_models_in_one_pass() {
    let is_resource = |info: &TypeInfo| info.has_marker(Marker::Resource);
    let is_model = |info: &TypeInfo| info.has_marker(Marker::Model);
    let sets = app_scanner().scan(&[&is_resource, &is_model]);

    assert_eq!(sets.len(), 2);
    assert_eq!(
        sets[0],
        [TypeRef::of::<CommonTexts>(), TypeRef::of::<ShellTexts>()]
    );
    assert_eq!(sets[1].len(), 5);
}

/// Verifies that derived types are found through their base field.
#[test]
fn types_extending_base() {
    let derived = app_scanner().types_extending(TypeRef::of::<BaseForm>());

    assert_eq!(
        derived,
        [TypeRef::of::<ProfileForm>(), TypeRef::of::<CompactForm>()]
    );
}

/// Verifies that the source filter hides whole sources.
#[test]
fn source_filter_hides_sources() {
    let scanner = app_scanner().with_source_filter(|source| source.name() == "account");
    let models = scanner.types_with_marker(Marker::Model);

    assert_eq!(models.len(), 3);
    assert!(models.iter().all(|ty| ty.get().has_marker(Marker::Model)));
    assert!(!models.contains(&TypeRef::of::<CheckoutForm>()));
}

/// Verifies the full sweep: scan, discover, serialize.
#[test]
fn scanned_catalog_serializes() {
    let scanner = app_scanner();
    let discovery = TypeDiscovery::new();

    let resources: Vec<DiscoveredResource> = discovery
        .discover_all(
            scanner.types_with_marker(Marker::Resource),
            ScanMode::ResourceContainer,
        )
        .expect("resource discovery should succeed");
    let json = serde_json::to_value(&resources).expect("catalog should serialize");

    let first = &json[0];
    assert_eq!(first["key"], "Common.ok");
    assert_eq!(first["value"], "OK");
    assert_eq!(first["property_name"], "ok");
    assert_eq!(first["declaring_type"], CommonTexts::type_info().full_name());
    assert_eq!(first["return_type"], "String");
    assert_eq!(first["is_simple_type"], true);
    assert!(discovery.cache().contains(MenuTexts::type_info().full_name()));
}
