//! Locating candidate types across registered sources.
//!
//! A [`TypeSource`] is a named group of described types, the equivalent of
//! a loaded module. [`TypeScanner`] walks every eligible source once and
//! sorts its types into one result set per predicate.

use std::fmt;
use std::sync::Arc;

use lokal_reflect::{Describe, Marker, TypeInfo, TypeRef};

use crate::error::SourceError;

/// A named group of described types.
pub trait TypeSource: Send + Sync {
    /// Name used in logs and by source filters.
    fn name(&self) -> &str;

    /// Every type of the source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the source cannot enumerate its types.
    fn types(&self) -> Result<Vec<TypeRef>, SourceError>;
}

/// A fixed list of types.
///
/// # Example
///
/// ```
/// use lokal_discovery::{TypeBundle, TypeSource};
///
/// let bundle = TypeBundle::new("builtins").with::<String>().with::<u32>();
/// assert_eq!(bundle.types().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TypeBundle {
    name: String,
    types: Vec<TypeRef>,
}

impl TypeBundle {
    /// Creates an empty bundle.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Adds `T` to the bundle.
    #[must_use]
    pub fn with<T: Describe>(self) -> Self {
        self.with_type(TypeRef::of::<T>())
    }

    /// Adds a type by handle.
    #[must_use]
    pub fn with_type(mut self, ty: TypeRef) -> Self {
        self.types.push(ty);
        self
    }
}

impl TypeSource for TypeBundle {
    fn name(&self) -> &str {
        &self.name
    }

    fn types(&self) -> Result<Vec<TypeRef>, SourceError> {
        Ok(self.types.clone())
    }
}

/// Predicate selecting types in [`TypeScanner::scan`].
pub type TypePredicate<'a> = &'a dyn Fn(&TypeInfo) -> bool;

type SourceFilter = Arc<dyn Fn(&dyn TypeSource) -> bool + Send + Sync>;

/// Scans registered type sources.
#[derive(Default, Clone)]
pub struct TypeScanner {
    sources: Vec<Arc<dyn TypeSource>>,
    filter: Option<SourceFilter>,
}

impl fmt::Debug for TypeScanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeScanner")
            .field(
                "sources",
                &self.sources.iter().map(|source| source.name()).collect::<Vec<_>>(),
            )
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

impl TypeScanner {
    /// Creates a scanner without sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a source.
    #[must_use]
    pub fn with_source(mut self, source: impl TypeSource + 'static) -> Self {
        self.add_source(source);
        self
    }

    /// Registers a source in place.
    pub fn add_source(&mut self, source: impl TypeSource + 'static) {
        self.sources.push(Arc::new(source));
    }

    /// Restricts scanning to the sources accepted by `filter`.
    #[must_use]
    pub fn with_source_filter(
        mut self,
        filter: impl Fn(&dyn TypeSource) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Number of registered sources, filtered or not.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Sorts the types of every eligible source into one set per predicate.
    ///
    /// Sources are visited once, in registration order. A source that fails
    /// to enumerate its types is logged and skipped. A type listed by
    /// several sources appears once per set.
    pub fn scan(&self, predicates: &[TypePredicate<'_>]) -> Vec<Vec<TypeRef>> {
        let mut results: Vec<Vec<TypeRef>> = vec![Vec::new(); predicates.len()];

        for source in self.eligible_sources() {
            let types = match source.types() {
                Ok(types) => types,
                Err(error) => {
                    tracing::warn!(
                        source = source.name(),
                        error = %error,
                        "Skipping type source that failed to load"
                    );
                    continue;
                }
            };
            tracing::debug!(source = source.name(), count = types.len(), "Scanning type source");

            for ty in types {
                let info = ty.get();
                for (predicate, matches) in predicates.iter().zip(results.iter_mut()) {
                    if predicate(info) && !matches.contains(&ty) {
                        matches.push(ty);
                    }
                }
            }
        }

        results
    }

    /// Types carrying `marker`.
    pub fn types_with_marker(&self, marker: Marker) -> Vec<TypeRef> {
        let has_marker = |info: &TypeInfo| info.has_marker(marker);
        self.scan(&[&has_marker]).pop().unwrap_or_default()
    }

    /// Concrete types whose base chain contains `base`.
    pub fn types_extending(&self, base: TypeRef) -> Vec<TypeRef> {
        let base = base.get();
        let extends = |info: &TypeInfo| !info.is_abstract() && info.extends(base);
        self.scan(&[&extends]).pop().unwrap_or_default()
    }

    fn eligible_sources(&self) -> impl Iterator<Item = &Arc<dyn TypeSource>> {
        self.sources.iter().filter(|source| self.is_eligible(source))
    }

    fn is_eligible(&self, source: &Arc<dyn TypeSource>) -> bool {
        let Some(filter) = &self.filter else {
            return true;
        };
        let eligible = filter(&**source);
        if !eligible {
            tracing::trace!(source = source.name(), "Type source filtered out");
        }
        eligible
    }
}
