//! Name → type descriptor lookup.
//!
//! The registry is populated at construction; there is no runtime scanning.
//! [`TypeRegistry::builtin`] registers every domain model shipped in
//! `forma-core`, and [`TypeRegistry::register`] adds more.

use std::collections::HashMap;

use forma_core::descriptor::{DescribeStruct, StructDescriptor};
use forma_core::models::{
    Cascade, Offer, PurchaseProduct, RequirementCondition, Reward, Skin, Step, StepGroup, Tile,
    TileWeight,
};

use crate::error::SchemaError;

/// Static mapping from type name to a descriptor factory.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<&'static str, fn() -> StructDescriptor>,
}

/// Register each listed type under its descriptor name.
macro_rules! register {
    ($registry:expr, $($ty:ty),+ $(,)?) => {
        $( $registry.register::<$ty>(); )+
    };
}

impl TypeRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding all built-in domain models.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        register!(
            registry,
            Skin,
            PurchaseProduct,
            Offer,
            Cascade,
            Tile,
            TileWeight,
            Step,
            StepGroup,
            Reward,
            RequirementCondition,
        );
        registry
    }

    /// Add `T` under its descriptor name, replacing any previous entry.
    pub fn register<T: DescribeStruct>(&mut self) -> &mut Self {
        self.types.insert(T::NAME, T::descriptor);
        self
    }

    /// Look up a type by exact name.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::TypeResolution` if no type has that name.
    pub fn resolve(&self, type_name: &str) -> Result<StructDescriptor, SchemaError> {
        self.types
            .get(type_name)
            .map(|describe| describe())
            .ok_or_else(|| SchemaError::TypeResolution {
                type_name: type_name.to_string(),
            })
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Registered type names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.types.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_all_models() {
        let registry = TypeRegistry::builtin();
        assert_eq!(registry.len(), 10);
        for name in ["Skin", "PurchaseProduct", "Offer", "Cascade", "Tile"] {
            assert!(registry.contains(name), "missing {name}");
        }
    }

    #[test]
    fn names_are_sorted() {
        let names = TypeRegistry::builtin().names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"Cascade"));
    }

    #[test]
    fn resolve_is_exact_and_case_sensitive() {
        let registry = TypeRegistry::builtin();
        assert_eq!(registry.resolve("Skin").unwrap().name, "Skin");
        let err = registry.resolve("skin").unwrap_err();
        assert!(matches!(err, SchemaError::TypeResolution { type_name } if type_name == "skin"));
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("Skin").is_err());
    }
}
