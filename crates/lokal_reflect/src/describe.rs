//! The [`Describe`] trait and its implementations for standard types.

use crate::info::{ScalarKind, TypeInfo};
use core::any::TypeId;
use core::time::Duration;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::{LazyLock, OnceLock};
use std::time::SystemTime;

/// A type with a static descriptor.
///
/// Usually derived with `#[derive(Describe)]`, `#[derive(LocalizedResource)]`
/// or `#[derive(LocalizedModel)]`:
///
/// ```
/// use lokal_reflect::{Describe, LocalizedModel};
///
/// #[derive(Default, LocalizedModel)]
/// #[localized(key_prefix = "Profile")]
/// pub struct ProfileView {
///     #[localized(display_name = "Full name")]
///     pub name: String,
///     pub age: u32,
/// }
///
/// let info = ProfileView::type_info();
/// assert_eq!(info.name(), "ProfileView");
/// assert_eq!(info.declared_members().len(), 2);
/// ```
pub trait Describe: 'static {
    /// Returns the descriptor of this type.
    fn type_info() -> &'static TypeInfo;

    /// Returns the live text held by a value, `None` for non-text types.
    fn as_text(&self) -> Option<String> {
        None
    }
}

/// Returns the descriptor of `T`, building it on first use.
///
/// A `static` inside a generic function is shared by every instantiation,
/// so generic containers keep their descriptors here keyed by [`TypeId`].
pub fn generic_type_info<T: 'static>(init: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
    static REGISTRY: LazyLock<RwLock<HashMap<TypeId, &'static TypeInfo>>> =
        LazyLock::new(|| RwLock::new(HashMap::new()));

    let id = TypeId::of::<T>();
    if let Some(info) = REGISTRY.read().get(&id).copied() {
        return info;
    }

    *REGISTRY
        .write()
        .entry(id)
        .or_insert_with(|| &*Box::leak(Box::new(init())))
}

macro_rules! impl_scalar {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn type_info() -> &'static TypeInfo {
                    static INFO: OnceLock<TypeInfo> = OnceLock::new();
                    INFO.get_or_init(|| TypeInfo::scalar(stringify!($ty), ScalarKind::$kind))
                }
            }
        )+
    };
}

impl_scalar!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar!(Float => f32, f64);
impl_scalar!(Boolean => bool);
impl_scalar!(Char => char);
impl_scalar!(DateTime => SystemTime);
impl_scalar!(Duration => Duration);

impl Describe for String {
    fn type_info() -> &'static TypeInfo {
        static INFO: OnceLock<TypeInfo> = OnceLock::new();
        INFO.get_or_init(|| TypeInfo::scalar("String", ScalarKind::Text))
    }

    fn as_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl Describe for &'static str {
    fn type_info() -> &'static TypeInfo {
        String::type_info()
    }

    fn as_text(&self) -> Option<String> {
        Some((*self).to_string())
    }
}

impl Describe for Cow<'static, str> {
    fn type_info() -> &'static TypeInfo {
        String::type_info()
    }

    fn as_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: Describe> Describe for Option<T> {
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }

    fn as_text(&self) -> Option<String> {
        self.as_ref().and_then(Describe::as_text)
    }
}

impl<T: Describe> Describe for Box<T> {
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }

    fn as_text(&self) -> Option<String> {
        T::as_text(self)
    }
}

macro_rules! impl_sequence {
    ($($container:ident),+ $(,)?) => {
        $(
            impl<T: Describe> Describe for $container<T> {
                fn type_info() -> &'static TypeInfo {
                    generic_type_info::<Self>(|| {
                        TypeInfo::sequence(core::any::type_name::<Self>(), crate::TypeRef::of::<T>())
                    })
                }
            }
        )+
    };
}

impl_sequence!(Vec, VecDeque, HashSet, BTreeSet);

macro_rules! impl_map {
    ($($container:ident),+ $(,)?) => {
        $(
            impl<K: Describe, V: Describe> Describe for $container<K, V> {
                fn type_info() -> &'static TypeInfo {
                    generic_type_info::<Self>(|| {
                        TypeInfo::map(
                            core::any::type_name::<Self>(),
                            crate::TypeRef::of::<K>(),
                            crate::TypeRef::of::<V>(),
                        )
                    })
                }
            }
        )+
    };
}

impl_map!(HashMap, BTreeMap);
