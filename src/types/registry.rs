//! Attribute type registry.
//!
//! The `TypeRegistry` maps type names to attribute types and owns the
//! default-value strategy list. A registry is built up mutably, then shared
//! as `Arc<TypeRegistry>`; once shared, neither the types nor their options
//! and bounds can change.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::descriptor::AttributeType;
use super::hash::HashType;
use super::numeric::NumericType;
use super::object::ObjectType;
use super::options::TypeArg;
use crate::core::TypeName;
use crate::defaults::DefaultStrategies;
use crate::error::{AttrError, DeclarationError};

static STANDARD: Lazy<Arc<TypeRegistry>> = Lazy::new(|| Arc::new(TypeRegistry::with_builtins()));

/// Registry of attribute types.
///
/// ## Example
///
/// ```
/// use attrkit::coercion::CoercionMethod;
/// use attrkit::core::{Primitive, TypeName};
/// use attrkit::types::{AttributeType, Descriptor, NumericType, TypeArg, TypeRegistry};
///
/// let mut registry = TypeRegistry::with_builtins();
/// // "Integer" is already taken
/// assert!(registry.register(NumericType::integer().with_min(0)).is_err());
///
/// let age = NumericType::new(
///     Descriptor::new("Age")
///         .with_primitive(Primitive::Integer)
///         .with_coercion_method(CoercionMethod::ToInteger),
/// )
/// .with_min(0);
/// registry.register(age).unwrap();
///
/// let found = registry.determine(&TypeArg::from("Age")).unwrap();
/// assert_eq!(found.name(), &TypeName::new("Age"));
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: FxHashMap<TypeName, Arc<dyn AttributeType>>,
    strategies: DefaultStrategies,
}

impl TypeRegistry {
    /// Create an empty registry with the standard default strategies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in type.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let builtins: [Arc<dyn AttributeType>; 9] = [
            Arc::new(ObjectType::object()),
            Arc::new(NumericType::numeric()),
            Arc::new(NumericType::integer()),
            Arc::new(NumericType::float()),
            Arc::new(ObjectType::string()),
            Arc::new(ObjectType::symbol()),
            Arc::new(ObjectType::boolean()),
            Arc::new(ObjectType::array()),
            Arc::new(HashType::new()),
        ];
        for ty in builtins {
            registry.types.insert(ty.name().clone(), ty);
        }
        registry
    }

    /// The shared registry of built-in types.
    #[must_use]
    pub fn standard() -> Arc<TypeRegistry> {
        Arc::clone(&STANDARD)
    }

    /// Register a type under its descriptor name.
    pub fn register<T: AttributeType + 'static>(&mut self, ty: T) -> Result<(), DeclarationError> {
        self.register_shared(Arc::new(ty))
    }

    /// Register an already shared type under its descriptor name.
    pub fn register_shared(&mut self, ty: Arc<dyn AttributeType>) -> Result<(), DeclarationError> {
        let name = ty.name().clone();
        if self.types.contains_key(&name) {
            return Err(DeclarationError::DuplicateType(name));
        }
        debug!(type_name = %name, primitive = %ty.descriptor().primitive(), "registered attribute type");
        self.types.insert(name, ty);
        Ok(())
    }

    /// Get a type by name.
    #[must_use]
    pub fn get(&self, name: &TypeName) -> Option<&Arc<dyn AttributeType>> {
        self.types.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &TypeName) -> bool {
        self.types.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over registered type names (unordered).
    pub fn names(&self) -> impl Iterator<Item = &TypeName> {
        self.types.keys()
    }

    /// Resolve a declaration's type argument to an attribute type.
    ///
    /// Key/value pairings always resolve to `Hash`.
    pub fn determine(&self, type_arg: &TypeArg) -> Result<Arc<dyn AttributeType>, AttrError> {
        match type_arg {
            TypeArg::Type(name) => self.lookup(name),
            TypeArg::Pairs(_) => self.lookup(&TypeName::HASH),
        }
    }

    /// Get a type by name, failing if it is not registered.
    pub fn lookup(&self, name: &TypeName) -> Result<Arc<dyn AttributeType>, AttrError> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| AttrError::UnknownType(name.clone()))
    }

    /// The ordered default-value strategies.
    #[must_use]
    pub fn strategies(&self) -> &DefaultStrategies {
        &self.strategies
    }

    /// Mutable access to the strategies, while the registry is still owned.
    pub fn strategies_mut(&mut self) -> &mut DefaultStrategies {
        &mut self.strategies
    }
}
