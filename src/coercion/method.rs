//! Coercion method names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The conversion operation an attribute type asks the coercer for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionMethod {
    /// Identity conversion.
    ToObject,
    ToNumeric,
    ToInteger,
    ToFloat,
    ToString,
    ToSymbol,
    ToBoolean,
    ToArray,
    ToHash,
}

impl CoercionMethod {
    /// The method's name as declared on attribute types.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CoercionMethod::ToObject => "to_object",
            CoercionMethod::ToNumeric => "to_numeric",
            CoercionMethod::ToInteger => "to_integer",
            CoercionMethod::ToFloat => "to_float",
            CoercionMethod::ToString => "to_string",
            CoercionMethod::ToSymbol => "to_symbol",
            CoercionMethod::ToBoolean => "to_boolean",
            CoercionMethod::ToArray => "to_array",
            CoercionMethod::ToHash => "to_hash",
        }
    }
}

impl fmt::Display for CoercionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
