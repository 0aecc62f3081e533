//! Primitive types and attribute type names.
//!
//! A `Primitive` is the nominal type an attribute's values are expected to
//! have. A `TypeName` identifies a registered attribute type; several type
//! names can share a primitive.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Nominal type of an attribute's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    /// Any value.
    Object,
    /// Integers and floats.
    Numeric,
    Integer,
    Float,
    String,
    Symbol,
    Boolean,
    Array,
    Hash,
}

impl Primitive {
    /// Check if a value is of this nominal type.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Primitive::Object => true,
            Primitive::Numeric => matches!(value, Value::Int(_) | Value::Float(_)),
            Primitive::Integer => matches!(value, Value::Int(_)),
            Primitive::Float => matches!(value, Value::Float(_)),
            Primitive::String => matches!(value, Value::Str(_)),
            Primitive::Symbol => matches!(value, Value::Symbol(_)),
            Primitive::Boolean => matches!(value, Value::Bool(_)),
            Primitive::Array => matches!(value, Value::List(_)),
            Primitive::Hash => matches!(value, Value::Map(_)),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Name of a registered attribute type.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeName(pub Cow<'static, str>);

impl TypeName {
    pub const OBJECT: TypeName = TypeName::from_static("Object");
    pub const NUMERIC: TypeName = TypeName::from_static("Numeric");
    pub const INTEGER: TypeName = TypeName::from_static("Integer");
    pub const FLOAT: TypeName = TypeName::from_static("Float");
    pub const STRING: TypeName = TypeName::from_static("String");
    pub const SYMBOL: TypeName = TypeName::from_static("Symbol");
    pub const BOOLEAN: TypeName = TypeName::from_static("Boolean");
    pub const ARRAY: TypeName = TypeName::from_static("Array");
    pub const HASH: TypeName = TypeName::from_static("Hash");

    /// Create a type name from a static string.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a type name from any string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
