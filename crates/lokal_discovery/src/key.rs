//! Resource key composition.

/// Separator between key segments.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Suffix of the companion resource holding a member's long description.
pub const DESCRIPTION_SUFFIX: &str = "-Description";

/// Joins `prefix` and `fragment` with [`DEFAULT_SEPARATOR`].
///
/// ```
/// use lokal_discovery::key::build_key;
///
/// assert_eq!(build_key("Checkout", "Email"), "Checkout.Email");
/// assert_eq!(build_key("", "Email"), "Email");
/// ```
pub fn build_key(prefix: &str, fragment: &str) -> String {
    build_key_with(prefix, fragment, DEFAULT_SEPARATOR)
}

/// Joins `prefix` and `fragment` with an explicit separator.
///
/// An empty separator glues the two verbatim, which is how fully overridden
/// keys are formed. Empty parts are never joined.
pub fn build_key_with(prefix: &str, fragment: &str, separator: &str) -> String {
    match (prefix.is_empty(), fragment.is_empty()) {
        (true, _) => fragment.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}{separator}{fragment}"),
    }
}

/// Returns the text after the last separator.
pub fn last_segment(key: &str) -> &str {
    key.rsplit(DEFAULT_SEPARATOR).next().unwrap_or(key)
}
