//! Procedural macros for `lokal_reflect`.
//!
//! Provides `#[derive(Describe)]`, `#[derive(LocalizedResource)]` and
//! `#[derive(LocalizedModel)]`, which generate the static type descriptor
//! of a struct with named fields or of a fieldless enum.

mod describe;

use describe::DeriveKind;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro for the `Describe` trait without a container marker.
///
/// Used for nested types and enumerations that are reached from models or
/// resource containers but are not scan roots themselves.
///
/// # Example
///
/// ```
/// use lokal_reflect::Describe;
///
/// #[derive(Default, Describe)]
/// pub struct Address {
///     pub street: String,
///     pub city: String,
/// }
///
/// let info = Address::type_info();
/// assert_eq!(info.name(), "Address");
/// assert_eq!(info.declared_members().len(), 2);
/// ```
#[proc_macro_derive(Describe, attributes(localized))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    expand(input, DeriveKind::Plain)
}

/// Derive macro marking a type as a resource container.
///
/// Every member of a resource container is a text to localize; discovery
/// flattens nested types exhaustively.
///
/// # Attributes
///
/// - `key_prefix` (optional): replaces the type's full name as key prefix.
///
/// # Example
///
/// ```
/// use lokal_reflect::{Describe, LocalizedResource};
///
/// #[derive(Default, LocalizedResource)]
/// #[localized(key_prefix = "Errors")]
/// pub struct ErrorTexts {
///     pub not_found: String,
/// }
///
/// let marker = ErrorTexts::type_info().resource_marker().unwrap();
/// assert_eq!(marker.key_prefix.as_deref(), Some("Errors"));
/// ```
#[proc_macro_derive(LocalizedResource, attributes(localized))]
pub fn derive_localized_resource(input: TokenStream) -> TokenStream {
    expand(input, DeriveKind::Resource)
}

/// Derive macro marking a type as a localized model.
///
/// # Attributes
///
/// - `key_prefix` (optional): explicit key prefix.
/// - `only_included` (optional): scan only members flagged `include`.
/// - `inherited` (optional): scan members of the `base` field. Defaults to `true`.
///
/// # Example
///
/// ```
/// use lokal_reflect::{Describe, LocalizedModel};
///
/// #[derive(Default, LocalizedModel)]
/// #[localized(key_prefix = "SignUp", resource_key(key = "SignUp.Title", value = "Create account"))]
/// pub struct SignUpForm {
///     #[localized(display(name = "E-mail"), required, email_address)]
///     pub email: String,
/// }
///
/// let info = SignUpForm::type_info();
/// assert_eq!(info.attributes().resource_keys.len(), 1);
/// assert_eq!(info.declared_members()[0].attributes().validations.len(), 2);
/// ```
#[proc_macro_derive(LocalizedModel, attributes(localized))]
pub fn derive_localized_model(input: TokenStream) -> TokenStream {
    expand(input, DeriveKind::Model)
}

fn expand(input: TokenStream, kind: DeriveKind) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    describe::derive(&input, kind)
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}
