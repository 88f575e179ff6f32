//! Descriptor generation shared by all three derives.

use darling::util::{Flag, Override};
use darling::{FromDeriveInput, FromField, FromMeta, FromVariant, ast};
use lokal_macro_utils::{LokalCrate, resolve_crate_path};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Expr, Ident, Type, Visibility};

/// Which derive is being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeriveKind {
    /// `#[derive(Describe)]`
    Plain,
    /// `#[derive(LocalizedResource)]`
    Resource,
    /// `#[derive(LocalizedModel)]`
    Model,
}

impl DeriveKind {
    fn derive_name(self) -> &'static str {
        match self {
            Self::Plain => "Describe",
            Self::Resource => "LocalizedResource",
            Self::Model => "LocalizedModel",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsed attributes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(FromDeriveInput)]
#[darling(
    attributes(localized),
    supports(struct_named, struct_unit, enum_unit)
)]
struct TypeArgs {
    ident: Ident,
    generics: syn::Generics,
    data: ast::Data<VariantArgs, FieldArgs>,

    key_prefix: Option<String>,
    only_included: Flag,
    inherited: Option<bool>,
    #[darling(multiple)]
    resource_key: Vec<ResourceKeyArgs>,
    /// Skip the `Default`-based constructor.
    no_construct: Flag,
}

#[derive(FromVariant)]
#[darling(attributes(localized))]
struct VariantArgs {
    ident: Ident,
}

#[derive(FromField)]
#[darling(attributes(localized))]
struct FieldArgs {
    ident: Option<Ident>,
    ty: Type,
    vis: Visibility,

    ignore: Flag,
    include: Flag,
    base: Flag,
    rename: Option<String>,
    display_name: Option<String>,
    display: Option<DisplayArgs>,
    #[darling(multiple)]
    resource_key: Vec<ResourceKeyArgs>,

    required: Option<Override<MessageArgs>>,
    string_length: Option<StringLengthArgs>,
    range: Option<RangeArgs>,
    regular_expression: Option<RegexArgs>,
    email_address: Option<Override<MessageArgs>>,
    min_length: Option<LengthArgs>,
    max_length: Option<LengthArgs>,
    #[darling(multiple)]
    validation: Vec<CustomRuleArgs>,
}

#[derive(FromMeta)]
struct ResourceKeyArgs {
    key: String,
    value: Option<String>,
}

#[derive(FromMeta)]
struct DisplayArgs {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Default, FromMeta)]
struct MessageArgs {
    message: Option<String>,
}

#[derive(FromMeta)]
struct StringLengthArgs {
    max: usize,
    #[darling(default)]
    min: usize,
    message: Option<String>,
}

#[derive(FromMeta)]
struct RangeArgs {
    min: Expr,
    max: Expr,
    message: Option<String>,
}

#[derive(FromMeta)]
struct RegexArgs {
    pattern: String,
    message: Option<String>,
}

#[derive(FromMeta)]
struct LengthArgs {
    length: usize,
    message: Option<String>,
}

#[derive(FromMeta)]
struct CustomRuleArgs {
    name: String,
    message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Expansion
// ─────────────────────────────────────────────────────────────────────────────

/// Expands one of the derives into an `impl Describe` block.
pub(crate) fn derive(input: &DeriveInput, kind: DeriveKind) -> darling::Result<TokenStream> {
    let args = TypeArgs::from_derive_input(input)?;
    validate(&args, kind)?;

    let rt = resolve_crate_path(LokalCrate::Reflect);
    let ident = &args.ident;
    let type_name = ident.unraw().to_string();

    let marker = generate_marker(&args, kind, &rt);
    let resource_keys = args
        .resource_key
        .iter()
        .map(|resource_key| {
            let resource_key = generate_resource_key(resource_key, &rt);
            quote! { .with_resource_key(#resource_key) }
        })
        .collect::<Vec<_>>();

    let body = match &args.data {
        ast::Data::Enum(variants) => {
            let names = variants.iter().map(|variant| variant.ident.unraw().to_string());
            quote! { .with_variants::<_, &'static str>([#(#names),*]) }
        }
        ast::Data::Struct(fields) => generate_struct_body(&args, &fields.fields, &rt),
    };

    Ok(quote! {
        impl #rt::Describe for #ident {
            fn type_info() -> &'static #rt::TypeInfo {
                static INFO: ::std::sync::OnceLock<#rt::TypeInfo> = ::std::sync::OnceLock::new();
                INFO.get_or_init(|| {
                    #rt::TypeInfo::builder(#rt::qualified_name(::core::module_path!(), #type_name))
                        #marker
                        #(#resource_keys)*
                        #body
                        .build()
                })
            }
        }
    })
}

/// Rejects attribute combinations the descriptor cannot express.
fn validate(args: &TypeArgs, kind: DeriveKind) -> darling::Result<()> {
    let mut errors = darling::Error::accumulator();
    let derive_name = kind.derive_name();

    if !args.generics.params.is_empty() {
        errors.push(
            darling::Error::custom(format!(
                "#[derive({derive_name})] does not support generic parameters"
            ))
            .with_span(&args.generics),
        );
    }

    if kind == DeriveKind::Plain && args.key_prefix.is_some() {
        errors.push(
            darling::Error::custom(
                "`key_prefix` requires #[derive(LocalizedResource)] or #[derive(LocalizedModel)]",
            )
            .with_span(&args.ident),
        );
    }

    if kind != DeriveKind::Model {
        if args.only_included.is_present() {
            errors.push(
                darling::Error::custom("`only_included` requires #[derive(LocalizedModel)]")
                    .with_span(&args.ident),
            );
        }
        if args.inherited.is_some() {
            errors.push(
                darling::Error::custom("`inherited` requires #[derive(LocalizedModel)]")
                    .with_span(&args.ident),
            );
        }
    }

    if let ast::Data::Struct(fields) = &args.data {
        let mut base_seen = false;
        for field in fields.iter().filter(|field| field.base.is_present()) {
            if base_seen {
                errors.push(
                    darling::Error::custom("only one field may be marked `base`")
                        .with_span(&field.ty),
                );
            }
            base_seen = true;
        }
    }

    errors.finish()
}

fn generate_marker(args: &TypeArgs, kind: DeriveKind, rt: &TokenStream) -> TokenStream {
    let key_prefix = optional_text(args.key_prefix.as_ref());
    match kind {
        DeriveKind::Plain => quote! {},
        DeriveKind::Resource => quote! {
            .resource(#rt::ResourceMarker { key_prefix: #key_prefix })
        },
        DeriveKind::Model => {
            let only_included = args.only_included.is_present();
            let inherited = args.inherited.unwrap_or(true);
            quote! {
                .model(#rt::ModelMarker {
                    key_prefix: #key_prefix,
                    only_included: #only_included,
                    inherited: #inherited,
                })
            }
        }
    }
}

fn generate_struct_body(args: &TypeArgs, fields: &[FieldArgs], rt: &TokenStream) -> TokenStream {
    let ident = &args.ident;

    let constructor = if args.no_construct.is_present() {
        quote! {}
    } else {
        quote! {
            .with_constructor(|| {
                ::std::boxed::Box::new(<#ident as ::core::default::Default>::default())
                    as ::std::boxed::Box<dyn ::core::any::Any>
            })
        }
    };

    let base = fields
        .iter()
        .find(|field| field.base.is_present())
        .map(|field| {
            let ty = &field.ty;
            quote! { .extends(#rt::TypeRef::of::<#ty>()) }
        });

    let members = fields
        .iter()
        .filter(|field| !field.base.is_present())
        .filter_map(|field| generate_member(ident, field, rt))
        .collect::<Vec<_>>();

    quote! {
        #constructor
        #base
        #(.with_member(#members))*
    }
}

fn generate_member(owner: &Ident, field: &FieldArgs, rt: &TokenStream) -> Option<TokenStream> {
    let field_ident = field.ident.as_ref()?;
    let name = field
        .rename
        .clone()
        .unwrap_or_else(|| field_ident.unraw().to_string());
    let public = !matches!(field.vis, Visibility::Inherited);
    let ignore = field.ignore.is_present();
    let include = field.include.is_present();

    // Ignored members are never inspected, so their type need not be described.
    let (return_type, accessor) = if ignore {
        (quote! { #rt::TypeRef::opaque() }, quote! {})
    } else {
        let ty = &field.ty;
        (
            quote! { #rt::TypeRef::of::<#ty>() },
            quote! {
                .with_accessor(|instance: &dyn ::core::any::Any| {
                    instance
                        .downcast_ref::<#owner>()
                        .and_then(|this| #rt::Describe::as_text(&this.#field_ident))
                })
            },
        )
    };

    let resource_keys = field
        .resource_key
        .iter()
        .map(|resource_key| generate_resource_key(resource_key, rt));
    let display = match &field.display {
        Some(display) => {
            let display_name = optional_text(display.name.as_ref());
            let description = optional_text(display.description.as_ref());
            quote! {
                ::core::option::Option::Some(#rt::Display {
                    name: #display_name,
                    description: #description,
                })
            }
        }
        None => quote! { ::core::option::Option::None },
    };
    let display_name = optional_text(field.display_name.as_ref());
    let validations = generate_validations(field, rt);

    Some(quote! {
        #rt::MemberInfo::new(#name, #return_type)
            .with_public(#public)
            #accessor
            .with_attributes(#rt::MemberAttributes {
                ignore: #ignore,
                include: #include,
                resource_keys: ::std::vec![#(#resource_keys),*],
                display: #display,
                display_name: #display_name,
                validations: ::std::vec![#(#validations),*],
            })
    })
}

fn generate_validations(field: &FieldArgs, rt: &TokenStream) -> Vec<TokenStream> {
    let mut rules = Vec::new();
    let mut push = |kind: TokenStream, message: Option<&String>| {
        let rule = quote! { #rt::ValidationRule::new(#rt::RuleKind::#kind) };
        rules.push(match message {
            Some(message) => quote! { #rule.with_message(#message) },
            None => rule,
        });
    };

    if let Some(required) = &field.required {
        push(quote! { Required }, override_message(required));
    }
    if let Some(args) = &field.string_length {
        let (max, min) = (args.max, args.min);
        push(
            quote! { StringLength { max: #max, min: #min } },
            args.message.as_ref(),
        );
    }
    if let Some(args) = &field.range {
        let (min, max) = (&args.min, &args.max);
        push(
            quote! { Range { min: (#min) as f64, max: (#max) as f64 } },
            args.message.as_ref(),
        );
    }
    if let Some(args) = &field.regular_expression {
        let pattern = &args.pattern;
        push(
            quote! { RegularExpression { pattern: ::std::string::String::from(#pattern) } },
            args.message.as_ref(),
        );
    }
    if let Some(email) = &field.email_address {
        push(quote! { EmailAddress }, override_message(email));
    }
    if let Some(args) = &field.min_length {
        let length = args.length;
        push(quote! { MinLength(#length) }, args.message.as_ref());
    }
    if let Some(args) = &field.max_length {
        let length = args.length;
        push(quote! { MaxLength(#length) }, args.message.as_ref());
    }
    for args in &field.validation {
        let name = &args.name;
        push(
            quote! { Custom(::std::string::String::from(#name)) },
            args.message.as_ref(),
        );
    }

    rules
}

fn generate_resource_key(args: &ResourceKeyArgs, rt: &TokenStream) -> TokenStream {
    let key = &args.key;
    let value = optional_text(args.value.as_ref());
    quote! {
        #rt::ResourceKey {
            key: ::std::string::String::from(#key),
            value: #value,
        }
    }
}

fn override_message(value: &Override<MessageArgs>) -> Option<&String> {
    match value {
        Override::Inherit => None,
        Override::Explicit(args) => args.message.as_ref(),
    }
}

fn optional_text(value: Option<&String>) -> TokenStream {
    match value {
        Some(text) => quote! {
            ::core::option::Option::Some(::std::string::String::from(#text))
        },
        None => quote! { ::core::option::Option::None },
    }
}
