//! Numeric attribute types.
//!
//! Numeric types carry optional `min`/`max` bounds. Bounds belong to the
//! type, not to an instance: every value ever written to an attribute of
//! the type is checked against the same bounds. This crate stores and
//! exposes them; enforcing them is left to the host's validation layer.
//!
//! ```
//! use attrkit::core::Number;
//! use attrkit::types::NumericType;
//!
//! let age = NumericType::integer().with_min(0).with_max(150);
//! assert_eq!(age.min(), Some(Number::Int(0)));
//! assert_eq!(age.max(), Some(Number::Int(150)));
//! assert_eq!(NumericType::float().min(), None);
//! ```

use super::descriptor::{AttributeType, Descriptor};
use crate::coercion::CoercionMethod;
use crate::core::{Number, Primitive, TypeName};

/// An attribute type for numbers, with optional bounds.
#[derive(Clone, Debug)]
pub struct NumericType {
    descriptor: Descriptor,
    min: Option<Number>,
    max: Option<Number>,
}

impl NumericType {
    /// Create a numeric type from a descriptor, with no bounds.
    #[must_use]
    pub fn new(descriptor: Descriptor) -> Self {
        Self {
            descriptor,
            min: None,
            max: None,
        }
    }

    /// Integers or floats.
    #[must_use]
    pub fn numeric() -> Self {
        Self::new(
            Descriptor::new(TypeName::NUMERIC)
                .with_primitive(Primitive::Numeric)
                .with_coercion_method(CoercionMethod::ToNumeric),
        )
    }

    #[must_use]
    pub fn integer() -> Self {
        Self::new(
            Descriptor::new(TypeName::INTEGER)
                .with_primitive(Primitive::Integer)
                .with_coercion_method(CoercionMethod::ToInteger),
        )
    }

    #[must_use]
    pub fn float() -> Self {
        Self::new(
            Descriptor::new(TypeName::FLOAT)
                .with_primitive(Primitive::Float)
                .with_coercion_method(CoercionMethod::ToFloat),
        )
    }

    /// Set the lower bound (builder pattern).
    #[must_use]
    pub fn with_min(mut self, min: impl Into<Number>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the upper bound (builder pattern).
    #[must_use]
    pub fn with_max(mut self, max: impl Into<Number>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Lower bound, `None` when unconstrained.
    #[must_use]
    pub fn min(&self) -> Option<Number> {
        self.min
    }

    /// Upper bound, `None` when unconstrained.
    #[must_use]
    pub fn max(&self) -> Option<Number> {
        self.max
    }
}

impl AttributeType for NumericType {
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn as_numeric(&self) -> Option<&NumericType> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_unset_by_default() {
        let numeric = NumericType::numeric();
        assert_eq!(numeric.min(), None);
        assert_eq!(numeric.max(), None);
    }

    #[test]
    fn test_bounds_chain() {
        let price = NumericType::float().with_min(0.0).with_max(99.5);
        assert_eq!(price.min(), Some(Number::Float(0.0)));
        assert_eq!(price.max(), Some(Number::Float(99.5)));
        assert_eq!(price.descriptor().coercion_method(), CoercionMethod::ToFloat);
    }

    #[test]
    fn test_downcast() {
        let ty: Box<dyn AttributeType> = Box::new(NumericType::integer().with_min(1));
        let numeric = ty.as_numeric().unwrap();
        assert_eq!(numeric.min(), Some(Number::Int(1)));
    }
}
