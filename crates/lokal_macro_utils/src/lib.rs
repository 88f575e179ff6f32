//! Shared utilities for lokal procedural macro crates.
//!
//! Provides crate-path resolution so that generated descriptors emit correct
//! fully-qualified paths regardless of whether the consumer depends on
//! `lokal_reflect` directly or on the `lokal` umbrella re-export.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// A lokal crate that macro-generated code may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LokalCrate {
    /// `lokal_reflect`
    Reflect,
}

impl LokalCrate {
    /// Returns the `Cargo.toml` package name for this crate.
    fn as_str(self) -> &'static str {
        match self {
            Self::Reflect => "lokal_reflect",
        }
    }
}

/// Returns a [`TokenStream`] path for the given lokal crate.
///
/// Resolution order:
/// 1. Direct dependency (possibly renamed in `Cargo.toml`).
/// 2. Indirect access via the `lokal` umbrella crate (`lokal::<name>`).
/// 3. Fallback to the literal crate name (compile error will point the user
///    to the missing dependency).
pub fn resolve_crate_path(krate: LokalCrate) -> TokenStream {
    let name = krate.as_str();

    match crate_name(name) {
        Ok(FoundCrate::Itself) => {
            let ident = format_ident!("{}", name);
            quote!(#ident)
        }
        Ok(FoundCrate::Name(found)) => {
            let ident = format_ident!("{}", found);
            quote!(::#ident)
        }
        Err(_) => match crate_name("lokal") {
            Ok(FoundCrate::Name(found)) => {
                let lokal = format_ident!("{}", found);
                let ident = format_ident!("{}", name);
                quote!(::#lokal::#ident)
            }
            // Doctests and integration tests of the umbrella crate itself.
            Ok(FoundCrate::Itself) => {
                let ident = format_ident!("{}", name);
                quote!(::lokal::#ident)
            }
            Err(_) => {
                let ident = format_ident!("{}", name);
                quote!(::#ident)
            }
        },
    }
}
