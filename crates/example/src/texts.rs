//! Resource containers of the shop front-end.

#![expect(missing_docs, reason = "demo fields are named after their labels")]

use std::sync::OnceLock;

use lokal_reflect::{
    Describe, LocalizedResource, MemberInfo, ResourceMarker, TypeInfo, TypeRef, qualified_name,
};

/// Buttons and labels shared by every page.
#[derive(LocalizedResource)]
#[localized(key_prefix = "Common")]
pub struct CommonTexts {
    pub ok: String,
    pub cancel: String,
    pub back: String,
    pub navigation: NavigationTexts,
}

impl Default for CommonTexts {
    fn default() -> Self {
        Self {
            ok: "OK".into(),
            cancel: "Cancel".into(),
            back: "Back".into(),
            navigation: NavigationTexts::default(),
        }
    }
}

/// Main menu entries, nested below [`CommonTexts`].
#[derive(Describe)]
pub struct NavigationTexts {
    pub home: String,
    pub cart: String,
    #[localized(display(description = "Orders placed in the last year"))]
    pub orders: String,
}

impl Default for NavigationTexts {
    fn default() -> Self {
        Self {
            home: "Home".into(),
            cart: "Cart".into(),
            orders: "My orders".into(),
        }
    }
}

/// Lifecycle of an order, localized per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, LocalizedResource)]
#[localized(key_prefix = "OrderStatus")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

/// Texts served from constants, described by hand.
pub struct BrandTexts;

impl BrandTexts {
    pub const PRODUCT_NAME: &'static str = "Lokal Shop";
    pub const TAGLINE: &'static str = "Shop in any language";
}

impl Describe for BrandTexts {
    fn type_info() -> &'static TypeInfo {
        static INFO: OnceLock<TypeInfo> = OnceLock::new();
        INFO.get_or_init(|| {
            TypeInfo::builder(qualified_name(module_path!(), "BrandTexts"))
                .resource(ResourceMarker::new().with_key_prefix("Brand"))
                .with_member(
                    MemberInfo::new("ProductName", TypeRef::of::<&'static str>())
                        .with_static_accessor(|| Some(BrandTexts::PRODUCT_NAME.to_string())),
                )
                .with_member(
                    MemberInfo::new("Tagline", TypeRef::of::<&'static str>())
                        .with_static_accessor(|| Some(BrandTexts::TAGLINE.to_string())),
                )
                .build()
        })
    }
}
