//! View-models of the checkout flow.

#![expect(missing_docs, reason = "demo fields are named after their labels")]

use lokal_reflect::{Describe, LocalizedModel};

/// Fields every address form shares.
#[derive(Default, Describe)]
pub struct AddressFields {
    #[localized(required, display(name = "Street and number"))]
    pub street: String,
    #[localized(required, display_name = "City")]
    pub city: String,
    #[localized(
        regular_expression(pattern = "^[0-9]{5}$", message = "Enter a five-digit postal code")
    )]
    pub postal_code: String,
}

#[derive(Default, LocalizedModel)]
pub struct ShippingAddress {
    #[localized(base)]
    pub fields: AddressFields,
    #[localized(display(name = "Recipient", description = "Name printed on the parcel"))]
    pub recipient: String,
}

/// Card details; only the flagged members carry labels.
#[derive(Default, LocalizedModel)]
#[localized(only_included)]
pub struct PaymentDetails {
    #[localized(include, display(name = "Card holder"))]
    pub holder: String,
    #[localized(include, required, string_length(max = 19, min = 12))]
    pub card_number: String,
    pub token: String,
}

#[derive(Default, LocalizedModel)]
#[localized(
    key_prefix = "Checkout",
    resource_key(key = ".Title", value = "Checkout"),
    resource_key(key = ".Summary", value = "Review your order")
)]
pub struct CheckoutForm {
    #[localized(required, email_address(message = "Enter a valid e-mail address"))]
    pub email: String,
    #[localized(range(min = 1, max = 99), display_name = "Quantity")]
    pub quantity: u32,
    pub shipping: ShippingAddress,
    pub payment: PaymentDetails,
    #[localized(resource_key(key = ".Accept", value = "I accept the terms"))]
    pub accept_terms: bool,
    #[localized(ignore)]
    pub session_id: String,
    pub audit: AuditTrail,
}

/// Bookkeeping attached to the form; not a localized model.
#[derive(Default, Describe)]
pub struct AuditTrail {
    pub created_by: String,
    pub revision: u64,
}
