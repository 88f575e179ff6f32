//! Example catalog sweep built with lokal.
//!
//! This example describes the texts and view-models of a small shop, scans
//! them through a [`TypeScanner`] and collects every translatable entry into
//! one [`Catalog`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌───────────────┐   ┌─────────┐
//! │ TypeBundles  │──▶│ TypeScanner │──▶│ TypeDiscovery │──▶│ Catalog │
//! └──────────────┘   └─────────────┘   └───────────────┘   └─────────┘
//!   texts, forms      by marker          per type            JSON
//! ```

pub mod forms;
pub mod texts;

use lokal_discovery::{
    DiscoveredResource, DiscoveryError, ScanMode, TypeBundle, TypeDiscovery, TypeScanner,
};
use lokal_reflect::{Marker, TypeInfo};
use serde::Serialize;

/// Every translatable entry of the application.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    /// Entries of resource containers.
    pub resources: Vec<DiscoveredResource>,
    /// Entries of localized models.
    pub models: Vec<DiscoveredResource>,
}

impl Catalog {
    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.resources.len() + self.models.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.models.is_empty()
    }

    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<&DiscoveredResource> {
        self.resources
            .iter()
            .chain(&self.models)
            .find(|resource| resource.key == key)
    }
}

/// Scanner over the application's type sources.
pub fn app_scanner() -> TypeScanner {
    TypeScanner::new()
        .with_source(
            TypeBundle::new("texts")
                .with::<texts::CommonTexts>()
                .with::<texts::NavigationTexts>()
                .with::<texts::OrderStatus>()
                .with::<texts::BrandTexts>(),
        )
        .with_source(
            TypeBundle::new("forms")
                .with::<forms::AddressFields>()
                .with::<forms::ShippingAddress>()
                .with::<forms::PaymentDetails>()
                .with::<forms::CheckoutForm>()
                .with::<forms::AuditTrail>(),
        )
}

/// Scans once and discovers every resource container and model.
///
/// # Errors
///
/// Returns [`DiscoveryError`] when a type produces colliding keys.
pub fn build_catalog(
    scanner: &TypeScanner,
    discovery: &TypeDiscovery,
) -> Result<Catalog, DiscoveryError> {
    let is_resource = |info: &TypeInfo| info.has_marker(Marker::Resource);
    let is_model = |info: &TypeInfo| info.has_marker(Marker::Model);

    let mut sets = scanner.scan(&[&is_resource, &is_model]).into_iter();
    let resource_types = sets.next().unwrap_or_default();
    let model_types = sets.next().unwrap_or_default();
    tracing::info!(
        resource_types = resource_types.len(),
        model_types = model_types.len(),
        "Scanned type sources"
    );

    Ok(Catalog {
        resources: discovery.discover_all(resource_types, ScanMode::ResourceContainer)?,
        models: discovery.discover_all(model_types, ScanMode::Model)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        build_catalog(&app_scanner(), &TypeDiscovery::new()).expect("catalog should build")
    }

    #[test]
    fn resource_containers_are_flattened() {
        let catalog = catalog();

        assert_eq!(catalog.get("Common.ok").map(|r| r.value.as_str()), Some("OK"));
        assert_eq!(
            catalog.get("Common.navigation.orders-Description").map(|r| r.value.as_str()),
            Some("Orders placed in the last year")
        );
        assert!(catalog.get("OrderStatus.Shipped").is_some());
        assert_eq!(
            catalog.get("Brand.ProductName").map(|r| r.value.as_str()),
            Some("Lokal Shop")
        );
    }

    #[test]
    fn models_follow_nested_models_only() {
        let catalog = catalog();

        assert_eq!(
            catalog.get("Checkout.Title").map(|r| r.value.as_str()),
            Some("Checkout")
        );
        assert_eq!(
            catalog.get("Checkout.Accept").map(|r| r.value.as_str()),
            Some("I accept the terms")
        );
        assert_eq!(
            catalog.get("Checkout.shipping.street").map(|r| r.value.as_str()),
            Some("Street and number")
        );
        assert!(catalog.get("Checkout.shipping.city.Required").is_some());
        assert!(catalog.get("Checkout.payment.card_number.StringLength").is_some());
        assert!(catalog.get("Checkout.payment.token").is_none());
        assert!(catalog.get("Checkout.audit").is_none());
        assert!(catalog.get("Checkout.session_id").is_none());
        assert_eq!(
            catalog.get("Checkout.email.EmailAddress").map(|r| r.value.as_str()),
            Some("Enter a valid e-mail address")
        );
    }

    #[test]
    fn catalog_serializes() {
        let json = serde_json::to_value(catalog()).expect("catalog should serialize");
        assert!(json["resources"].as_array().is_some_and(|entries| !entries.is_empty()));
        assert!(json["models"].as_array().is_some_and(|entries| !entries.is_empty()));
    }
}
