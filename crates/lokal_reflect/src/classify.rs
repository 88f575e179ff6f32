//! Simple-type classification.
//!
//! A simple type is terminal: discovery never recurses into it. Anything the
//! classifier is unsure about counts as complex, since the engine's
//! inclusion rules can always suppress an unnecessary recursion while a
//! missed nested resource cannot be recovered.

use crate::info::{ScalarKind, TypeInfo, TypeKind};

/// Returns whether `info` describes a terminal type.
///
/// Scalars and fieldless enumerations are simple. Structs, sequences, maps
/// and opaque types are not.
pub fn is_simple(info: &TypeInfo) -> bool {
    match info.kind() {
        TypeKind::Scalar(_) | TypeKind::Enum { .. } => true,
        TypeKind::Struct { .. }
        | TypeKind::Sequence { .. }
        | TypeKind::Map { .. }
        | TypeKind::Opaque => false,
    }
}

/// Returns whether `info` describes text, i.e. whether a member of this type
/// can supply its own default value.
pub fn is_text(info: &TypeInfo) -> bool {
    matches!(info.kind(), TypeKind::Scalar(ScalarKind::Text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::TypeRef;
    use std::collections::HashMap;
    use std::time::{Duration, SystemTime};

    #[test]
    fn scalars_are_simple() {
        assert!(is_simple(TypeRef::of::<String>().get()));
        assert!(is_simple(TypeRef::of::<&'static str>().get()));
        assert!(is_simple(TypeRef::of::<i64>().get()));
        assert!(is_simple(TypeRef::of::<f32>().get()));
        assert!(is_simple(TypeRef::of::<bool>().get()));
        assert!(is_simple(TypeRef::of::<char>().get()));
        assert!(is_simple(TypeRef::of::<SystemTime>().get()));
        assert!(is_simple(TypeRef::of::<Duration>().get()));
    }

    #[test]
    fn optional_scalars_are_simple() {
        assert!(is_simple(TypeRef::of::<Option<u32>>().get()));
        assert!(is_text(TypeRef::of::<Option<String>>().get()));
    }

    #[test]
    fn collections_are_complex() {
        assert!(!is_simple(TypeRef::of::<Vec<String>>().get()));
        assert!(!is_simple(TypeRef::of::<HashMap<String, u32>>().get()));
    }

    #[test]
    fn structs_and_opaque_are_complex() {
        let info = TypeInfo::builder("app.Address").build();
        assert!(!is_simple(&info));
        assert!(!is_simple(TypeRef::opaque().get()));
    }

    #[test]
    fn enums_are_simple() {
        let info = TypeInfo::builder("app.Color")
            .with_variants(["Red"])
            .build();
        assert!(is_simple(&info));
    }

    #[test]
    fn only_text_is_text() {
        assert!(is_text(TypeRef::of::<String>().get()));
        assert!(!is_text(TypeRef::of::<char>().get()));
        assert!(!is_text(TypeRef::of::<u8>().get()));
    }
}
