//! Plain attribute types.
//!
//! `ObjectType` wraps a descriptor and keeps the base behavior. The built-in
//! scalar and collection types that need no extra configuration are all
//! `ObjectType`s with different descriptors.

use im::Vector;

use super::descriptor::{AttributeType, Descriptor};
use crate::coercion::CoercionMethod;
use crate::core::{Primitive, TypeName, Value};

/// An attribute type with base behavior only.
#[derive(Clone, Debug)]
pub struct ObjectType {
    descriptor: Descriptor,
}

impl ObjectType {
    /// Create a type from a descriptor.
    #[must_use]
    pub fn new(descriptor: Descriptor) -> Self {
        Self { descriptor }
    }

    /// Any value, no coercion, nil default.
    #[must_use]
    pub fn object() -> Self {
        Self::new(Descriptor::new(TypeName::OBJECT))
    }

    #[must_use]
    pub fn string() -> Self {
        Self::new(
            Descriptor::new(TypeName::STRING)
                .with_primitive(Primitive::String)
                .with_coercion_method(CoercionMethod::ToString),
        )
    }

    #[must_use]
    pub fn symbol() -> Self {
        Self::new(
            Descriptor::new(TypeName::SYMBOL)
                .with_primitive(Primitive::Symbol)
                .with_coercion_method(CoercionMethod::ToSymbol),
        )
    }

    #[must_use]
    pub fn boolean() -> Self {
        Self::new(
            Descriptor::new(TypeName::BOOLEAN)
                .with_primitive(Primitive::Boolean)
                .with_coercion_method(CoercionMethod::ToBoolean),
        )
    }

    /// Lists, defaulting to a fresh empty list.
    #[must_use]
    pub fn array() -> Self {
        Self::new(
            Descriptor::new(TypeName::ARRAY)
                .with_primitive(Primitive::Array)
                .with_coercion_method(CoercionMethod::ToArray)
                .with_default(Value::List(Vector::new())),
        )
    }
}

impl AttributeType for ObjectType {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_descriptors() {
        let string = ObjectType::string();
        assert_eq!(string.name(), &TypeName::STRING);
        assert_eq!(string.descriptor().coercion_method(), CoercionMethod::ToString);

        let array = ObjectType::array();
        assert_eq!(array.descriptor().primitive(), Primitive::Array);
        assert_eq!(array.descriptor().default().as_value(), Some(&Value::list(Vec::<Value>::new())));
    }

    #[test]
    fn test_object_is_not_numeric() {
        assert!(ObjectType::object().as_numeric().is_none());
    }
}
